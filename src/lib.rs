// Public API exports (shared between client and server)
pub mod domain;
pub mod shared;

// App is always available in fullstack mode
pub mod app;

// Server-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
