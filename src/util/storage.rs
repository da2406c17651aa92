//! Durable client-side key/value storage.
//!
//! In the browser this is `localStorage`. On native targets (unit tests,
//! plain `cargo build`) it is a thread-local map with the same interface,
//! so the session persistence side effects remain observable off-browser.
//!
//! Writers: the session transitions in [`crate::state::session`]. Readers:
//! session restore at startup and the bearer-header attachment in
//! [`crate::net::api`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the API access token.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Key holding the API refresh token.
pub const REFRESH_TOKEN: &str = "refreshToken";

/// Key holding the serialized session snapshot (the signed-in profile).
pub const SESSION_SNAPSHOT: &str = "cyberhunter_session";

#[cfg(not(feature = "csr"))]
thread_local! {
    static NATIVE_STORE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Read a value, or `None` if absent or storage is unavailable.
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| store.borrow().get(key).cloned())
    }
}

/// Write a value. Storage failures (quota, disabled storage) are ignored;
/// the in-memory session remains authoritative for the current page load.
pub fn set(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Delete a value if present.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        NATIVE_STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
