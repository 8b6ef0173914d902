use crate::identity::FirebaseIdentityProvider;
use crate::models::SessionState;
use crate::session_store::BrowserSessionStore;
use shared::AuthGate;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

/// The gate as wired in the browser.
pub type WebAuthGate = AuthGate<FirebaseIdentityProvider, BrowserSessionStore>;

/// Gate bound to the session context, kept for the component's lifetime so
/// its in-flight guard spans re-renders.
#[hook]
pub fn use_auth_gate() -> Rc<WebAuthGate> {
    let dispatch = use_dispatch::<SessionState>();
    use_memo((), move |_| {
        AuthGate::new(
            FirebaseIdentityProvider::shared(),
            BrowserSessionStore::new(dispatch),
        )
    })
}

/// Show a blocking notice in the browser.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && let Err(err) = window.alert_with_message(message)
    {
        log::error!("unable to show alert: {err:?}");
    }
}
