use crate::session_store;
use yewdux::{Context, Store};

/// Session context shared by every view.
///
/// Seeded from the persisted flag on startup; afterwards only
/// [`crate::session_store::BrowserSessionStore`] mutates it, together with
/// browser storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
}

impl Store for SessionState {
    fn new(_cx: &Context) -> Self {
        Self {
            logged_in: session_store::read_flag(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
