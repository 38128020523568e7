use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const AUTH_STORAGE_KEY: &str = "admin_authenticated";

/// Back-office authentication state.
///
/// The backend validates a single admin password and the flag lives in
/// sessionStorage, so a reload inside one tab keeps the session while a new
/// tab asks again.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    pub verifying: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl AuthState {
    /// Verify the password against the backend and remember the outcome.
    pub fn login(&mut self, password: String) {
        let mut state = *self;
        state.verifying.set(true);
        state.error.set(None);

        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let api = crate::shared::services::ApiService::new();
                match api.admin_login(&password).await {
                    Ok(true) => {
                        persist_flag(true);
                        state.is_authenticated.set(true);
                    }
                    Ok(false) => {
                        state.error.set(Some("Wrong password".to_string()));
                    }
                    Err(e) => {
                        tracing::error!("admin login failed: {e}");
                        state
                            .error
                            .set(Some("Could not reach the server".to_string()));
                    }
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = password;
            }
            state.verifying.set(false);
        });
    }

    pub fn logout(&mut self) {
        persist_flag(false);
        self.is_authenticated.set(false);
    }
}

#[cfg(target_arch = "wasm32")]
fn persist_flag(authenticated: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if authenticated {
                let _ = storage.set_item(AUTH_STORAGE_KEY, "1");
            } else {
                let _ = storage.remove_item(AUTH_STORAGE_KEY);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_flag(_authenticated: bool) {
    // No-op on server
}

#[cfg(target_arch = "wasm32")]
fn restore_flag() -> bool {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|s| s.get_item(AUTH_STORAGE_KEY).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn restore_flag() -> bool {
    false
}

/// Hook managing the admin session flag.
pub fn use_auth() -> AuthState {
    let is_authenticated = use_signal(restore_flag);
    let verifying = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    AuthState {
        is_authenticated,
        verifying,
        error,
    }
}
