use crate::{auth::alert, auth::use_auth_gate, routes::MainRoute};
use i18nrs::yew::use_translation;
use shared::{AuthOutcome, Credentials};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

/// Combined sign-in / registration form.
#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let gate = use_auth_gate();
    // The gate holds the in-flight guard; `loading` only drives re-renders.
    let is_busy = *loading || gate.is_busy();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials =
                Credentials::new((*email_handle).clone(), (*password_handle).clone());
            loading_handle.set(true);
            error_handle.set(None);
            let gate = gate.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match gate.attempt_login(&credentials).await {
                    AuthOutcome::Authenticated { redirect, .. } => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::from(redirect));
                        }
                    }
                    AuthOutcome::Rejected(notice) => {
                        let message = notice.to_string();
                        alert(&message);
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    html! {
        <form class="space-y-4" onsubmit={onsubmit}>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            <div class="flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-6 h-6 text-warning" />
                <input
                    id="email"
                    class="input input-bordered w-full"
                    type="email"
                    placeholder={i18n.t("login.email")}
                    value={(*email).clone()}
                    oninput={on_email_change}
                />
            </div>
            <div class="flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineLockClosed} class="w-6 h-6 text-warning" />
                <input
                    id="password"
                    class="input input-bordered w-full"
                    type="password"
                    placeholder={i18n.t("login.password")}
                    value={(*password).clone()}
                    oninput={on_password_change}
                />
            </div>
            <button class="btn btn-warning w-full" type="submit" disabled={is_busy}>
                {if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") }}
            </button>
        </form>
    }
}
