//! Page navigation behind an explicit capability trait.
//!
//! DESIGN
//! ======
//! Auth redirects are full-page navigations (`window.location`), not
//! router transitions: they cross the auth boundary and should reload the
//! shell. Hiding them behind [`Navigator`] makes redirect behavior
//! assertable in tests via [`RecordingNavigator`].

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Current location and full-page redirect capability.
pub trait Navigator: Clone + 'static {
    /// Path component of the current URL (e.g. `/auth/login`).
    fn current_path(&self) -> String;

    /// Navigate the browser to `path`, replacing the current page.
    fn redirect(&self, path: &str);
}

/// [`Navigator`] backed by `window.location`.
///
/// Outside the browser the current path reads as `/` and redirects are
/// no-ops, matching the store's non-browser stubs.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// [`Navigator`] that records redirects instead of performing them.
///
/// Clones share state, so the instance handed to an `ApiClient` and the
/// one asserted against in a test see the same history.
#[derive(Clone, Debug)]
pub struct RecordingNavigator {
    current: Rc<RefCell<String>>,
    redirects: Rc<RefCell<Vec<String>>>,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self {
            current: Rc::new(RefCell::new("/".to_owned())),
            redirects: Rc::default(),
        }
    }
}

impl RecordingNavigator {
    /// Navigator positioned at `/` with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator positioned at `path`.
    #[must_use]
    pub fn at(path: &str) -> Self {
        let nav = Self::default();
        *nav.current.borrow_mut() = path.to_owned();
        nav
    }

    /// Every redirect issued so far, oldest first.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    /// The most recent redirect, if any.
    #[must_use]
    pub fn last_redirect(&self) -> Option<String> {
        self.redirects.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
        *self.current.borrow_mut() = path.to_owned();
    }
}
