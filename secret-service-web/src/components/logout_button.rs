use crate::{auth::use_auth_gate, routes::MainRoute};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let gate = use_auth_gate();

    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        let gate = gate.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            let destination = gate.logout().await;
            if let Some(nav) = navigator {
                nav.push(&MainRoute::from(destination));
            }
        });
    });

    html! {
        <button class="btn btn-warning w-full" {onclick}>{ i18n.t("home.logout") }</button>
    }
}
