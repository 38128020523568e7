pub mod proxy;

pub use proxy::{backend_proxy_handler, ProxyConfig};
