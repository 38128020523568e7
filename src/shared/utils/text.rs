use once_cell::sync::Lazy;
use regex::Regex;

/// Derive a URL slug from a post title: lowercase, strip punctuation,
/// collapse separators to single hyphens.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // Other punctuation is dropped entirely.
    }
    slug
}

/// Truncate on a character boundary, appending `…` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}

static MARKDOWN_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static MARKDOWN_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{1,2}([^*]*)\*{1,2}").unwrap());
static MARKDOWN_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]*)`").unwrap());
static MARKDOWN_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static MARKDOWN_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());

/// Strip markdown markup and collapse the result into a one-line excerpt.
pub fn extract_excerpt(content: &str, max_chars: usize) -> String {
    let text = MARKDOWN_IMAGE.replace_all(content, "");
    let text = MARKDOWN_LINK.replace_all(&text, "$1");
    let text = MARKDOWN_HEADING.replace_all(&text, "");
    let text = MARKDOWN_EMPHASIS.replace_all(&text, "$1");
    let text = MARKDOWN_CODE.replace_all(&text, "$1");

    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    truncate_text(&collapsed, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
        assert_eq!(generate_slug("  Rust_and  SSE  "), "rust-and-sse");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(generate_slug("What's new, in 2025?!"), "whats-new-in-2025");
    }

    #[test]
    fn slug_of_punctuation_only_is_empty() {
        assert_eq!(generate_slug("???"), "");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("中文内容测试", 3), "中文内…");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn excerpt_strips_markdown() {
        // Heading markers go, heading text stays.
        let md = "# Title\n\nSome **bold** text with a [link](https://example.com) and `code`.\n\n![alt](img.png)";
        assert_eq!(
            extract_excerpt(md, 200),
            "Title Some bold text with a link and code."
        );
    }

    #[test]
    fn excerpt_collapses_newlines() {
        assert_eq!(extract_excerpt("one\ntwo\n\nthree", 200), "one two three");
    }

    #[test]
    fn excerpt_is_truncated() {
        let long = "word ".repeat(100);
        let excerpt = extract_excerpt(&long, 20);
        assert_eq!(excerpt.chars().count(), 21); // 20 chars + ellipsis
        assert!(excerpt.ends_with('…'));
    }
}
