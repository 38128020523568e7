// Custom Dioxus hooks
pub mod use_ai_assistant;
pub mod use_auth;
pub mod use_posts;
pub mod use_theme;

pub use use_ai_assistant::{use_ai_assistant, AiAssistantState};
pub use use_auth::{use_auth, AuthState};
pub use use_posts::{use_posts, PostsState};
pub use use_theme::{save_theme, use_theme, Theme};
