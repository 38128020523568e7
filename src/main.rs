//! blog-air web client - main entry point
//!
//! Serves the Dioxus application and proxies `/api` + `/ai` traffic to the
//! blog backend. Uses dioxus::serve() pattern for dx serve compatibility.

use blog_air_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{routing::any, Extension};

    // Set panic hook to print full backtrace
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting blog-air web client...");

    use blog_air_web::handlers::{backend_proxy_handler, ProxyConfig};
    use blog_air_web::shared::logging;

    // NO #[tokio::main] - dioxus::serve creates its own runtime
    dioxus::serve(|| {
        async move {
            let proxy = match ProxyConfig::from_env() {
                Ok(proxy) => proxy,
                Err(e) => {
                    tracing::error!("invalid proxy configuration: {e}, using default");
                    ProxyConfig::new("http://localhost:8080".to_string())
                }
            };
            logging::log_startup(&proxy.backend_url);

            let router = dioxus::server::router(App)
                // Everything under /api and /ai belongs to the blog backend
                .route("/api/{*path}", any(backend_proxy_handler))
                .route("/ai/{*path}", any(backend_proxy_handler))
                .layer(Extension(proxy))
                .layer(tower_http::trace::TraceLayer::new_for_http());

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] blog-air web client initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
