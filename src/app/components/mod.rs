pub mod ai_dialog;
pub mod button;
pub mod common;
pub mod markdown;
pub mod pagination;
pub mod post_card;
pub mod search_form;
pub mod theme_toggle;

// Cover image upload rides on the browser file APIs
#[cfg(target_arch = "wasm32")]
pub mod image_upload;

pub use ai_dialog::AiDialog;
pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use markdown::{render_markdown, MarkdownView};
pub use pagination::Pagination;
pub use post_card::PostCard;
pub use search_form::SearchForm;
pub use theme_toggle::ThemeToggle;

#[cfg(target_arch = "wasm32")]
pub use image_upload::CoverImageUpload;
