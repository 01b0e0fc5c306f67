//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal` context from the app root. The bootstrap
//! check fills it in from the cached session record; the top bar and
//! pages read it for identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::store::StoredUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Cached identity of the signed-in user, when one is known.
    pub user: Option<StoredUser>,
    /// True until the bootstrap check has run for this page load.
    pub loading: bool,
}

impl AuthState {
    /// State for a page that has not finished its bootstrap check yet.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Settled state carrying whatever the session store knew.
    #[must_use]
    pub fn settled(user: Option<StoredUser>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Display name of the signed-in user, if known.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
