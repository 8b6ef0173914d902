//! Browser-backed session flag.
//!
//! The flag lives in `localStorage` under [`SESSION_FLAG_KEY`] with the literal
//! value [`SESSION_FLAG_VALUE`]; any other stored value reads as logged out.

use crate::models::SessionState;
use gloo_storage::{LocalStorage, Storage};
use shared::SessionStore;
use shared::models::StoreError;
use std::fmt;
use yewdux::Dispatch;

pub const SESSION_FLAG_KEY: &str = "loggedIn";
pub const SESSION_FLAG_VALUE: &str = "true";

/// Whether a raw storage value means "logged in".
pub fn flag_from_raw(raw: Option<&str>) -> bool {
    raw == Some(SESSION_FLAG_VALUE)
}

/// Read the persisted flag. Unreadable storage counts as logged out.
pub fn read_flag() -> bool {
    match LocalStorage::raw().get_item(SESSION_FLAG_KEY) {
        Ok(value) => flag_from_raw(value.as_deref()),
        Err(err) => {
            log::warn!("unable to read session flag: {err:?}");
            false
        }
    }
}

/// Session flag persisted in `localStorage` and mirrored into the
/// [`SessionState`] store so views re-render when it changes.
#[derive(Clone)]
pub struct BrowserSessionStore {
    dispatch: Dispatch<SessionState>,
}

impl BrowserSessionStore {
    pub fn new(dispatch: Dispatch<SessionState>) -> Self {
        Self { dispatch }
    }

    fn set_state(&self, logged_in: bool) {
        self.dispatch.reduce_mut(|state| state.logged_in = logged_in);
    }
}

impl SessionStore for BrowserSessionStore {
    fn is_logged_in(&self) -> bool {
        self.dispatch.get().logged_in
    }

    fn mark_logged_in(&self) -> Result<(), StoreError> {
        let persisted = LocalStorage::raw()
            .set_item(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)
            .map_err(|err| StoreError::WriteFailed {
                reason: format!("{err:?}"),
            });
        self.set_state(true);
        persisted
    }

    fn clear(&self) -> Result<(), StoreError> {
        let removed = LocalStorage::raw()
            .remove_item(SESSION_FLAG_KEY)
            .map_err(|err| StoreError::Unavailable {
                reason: format!("{err:?}"),
            });
        self.set_state(false);
        removed
    }
}

impl fmt::Debug for BrowserSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserSessionStore")
            .field("logged_in", &self.dispatch.get().logged_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_literal_true_counts() {
        assert!(flag_from_raw(Some("true")));
        assert!(!flag_from_raw(None));
        assert!(!flag_from_raw(Some("false")));
        assert!(!flag_from_raw(Some("TRUE")));
        assert!(!flag_from_raw(Some("1")));
        assert!(!flag_from_raw(Some("")));
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(SESSION_FLAG_KEY, "loggedIn");
        assert_eq!(SESSION_FLAG_VALUE, "true");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn store() -> BrowserSessionStore {
        LocalStorage::delete(SESSION_FLAG_KEY);
        let cx = yewdux::Context::new();
        BrowserSessionStore::new(Dispatch::<SessionState>::new(&cx))
    }

    #[wasm_bindgen_test]
    fn test_mark_logged_in_persists_literal_true() {
        let store = store();
        assert!(!store.is_logged_in());

        store.mark_logged_in().unwrap();

        assert!(store.is_logged_in());
        assert_eq!(
            LocalStorage::raw().get_item(SESSION_FLAG_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert!(read_flag());
    }

    #[wasm_bindgen_test]
    fn test_clear_removes_flag() {
        let store = store();
        store.mark_logged_in().unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(!store.is_logged_in());
        assert_eq!(LocalStorage::raw().get_item(SESSION_FLAG_KEY).unwrap(), None);
        assert!(!read_flag());
    }

    #[wasm_bindgen_test]
    fn test_foreign_value_reads_as_logged_out() {
        LocalStorage::raw()
            .set_item(SESSION_FLAG_KEY, "yes")
            .unwrap();
        assert!(!read_flag());
        LocalStorage::delete(SESSION_FLAG_KEY);
    }
}
