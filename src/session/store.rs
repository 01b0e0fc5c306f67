//! Credential storage behind an explicit capability trait.
//!
//! DESIGN
//! ======
//! The browser's `localStorage` is an implicit global; routing all access
//! through [`SessionStore`] lets the API client and bootstrap take the
//! store as a value, and lets tests substitute [`MemorySessionStore`].
//! The trait has a single [`SessionStore::clear`] and no per-key removal:
//! token and cached user record always leave storage together.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auralis_token";

/// Storage key holding the cached user record.
pub const USER_KEY: &str = "auralis_user";

/// Cached user record mirrored next to the token.
///
/// The store itself treats the record as an opaque string; this is the
/// shape the client writes and reads at the edges. Unknown fields from
/// older revisions are ignored on read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Display name.
    pub name: String,
    /// Account email, when known at save time.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL, when the account has one.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Persistent credential storage for the current browser session.
pub trait SessionStore: Clone + 'static {
    /// Stored bearer token, if any. Presence means "possibly
    /// authenticated"; only the server can say whether it is still valid.
    fn token(&self) -> Option<String>;

    /// Persist the bearer token.
    fn set_token(&self, token: &str);

    /// Raw cached user record, if any.
    fn user_record(&self) -> Option<String>;

    /// Persist the raw cached user record.
    fn set_user_record(&self, raw: &str);

    /// Remove the token and the user record together.
    fn clear(&self);

    /// Decoded cached user record; `None` when absent or unreadable.
    fn stored_user(&self) -> Option<StoredUser> {
        self.user_record()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Replace only the cached user record, leaving the token in place.
    /// Used after profile edits.
    fn save_user(&self, user: &StoredUser) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.set_user_record(&raw);
        }
    }

    /// Persist a fresh token and user record as one logical session.
    fn save_session(&self, token: &str, user: &StoredUser) {
        self.set_token(token);
        self.save_user(user);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// [`SessionStore`] backed by the browser's `localStorage`.
///
/// Outside the browser (server-rendered and native test builds) every read
/// answers `None` and writes are no-ops, keeping rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn user_record(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(USER_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_user_record(&self, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(USER_KEY, raw);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// In-memory [`SessionStore`] for unit tests and non-browser contexts.
///
/// Clones share the same underlying map, so a store handed to an
/// `ApiClient` observes the same state as the one held by the test.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.values.borrow().get(TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) {
        self.values
            .borrow_mut()
            .insert(TOKEN_KEY.to_owned(), token.to_owned());
    }

    fn user_record(&self) -> Option<String> {
        self.values.borrow().get(USER_KEY).cloned()
    }

    fn set_user_record(&self, raw: &str) {
        self.values
            .borrow_mut()
            .insert(USER_KEY.to_owned(), raw.to_owned());
    }

    fn clear(&self) {
        let mut values = self.values.borrow_mut();
        values.remove(TOKEN_KEY);
        values.remove(USER_KEY);
    }
}
