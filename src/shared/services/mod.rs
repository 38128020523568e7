// Shared services
// REST client + AI streaming client

// The REST client rides on the browser fetch API and is only meaningful in
// the WASM build; server-side rendering goes through the loading states.
#[cfg(target_arch = "wasm32")]
pub mod api_service;

#[cfg(target_arch = "wasm32")]
pub use api_service::ApiService;

pub mod ai_service;
pub mod backend;
