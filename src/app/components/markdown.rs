use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to HTML with the extensions the editor supports.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Prose block rendering a post body.
#[component]
pub fn MarkdownView(source: String) -> Element {
    let html_content = render_markdown(&source);
    rsx! {
        div {
            class: "c-prose",
            dangerous_inner_html: "{html_content}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("# Title\n\nA *styled* paragraph.");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>styled</em>"));
    }

    #[test]
    fn renders_tables_and_strikethrough() {
        let html = render_markdown("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }
}
