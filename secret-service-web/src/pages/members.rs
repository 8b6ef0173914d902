use crate::models::SessionState;
use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Members-only page. Checks the session flag itself instead of relying on a
/// router guard.
#[function_component(MembersPage)]
pub fn members_page() -> Html {
    let (i18n, _) = use_translation();
    let logged_in = use_selector(|state: &SessionState| state.logged_in);

    html! {
        <div class="p-4 space-y-6">
            <h2 class="text-3xl text-warning">{ i18n.t("members.title") }</h2>
            if *logged_in {
                <p>{ i18n.t("members.welcome") }</p>
                <SubmissionForm />
            } else {
                <p>{ i18n.t("members.sign_in_required") }</p>
            }
        </div>
    }
}

/// Free-text box for members. The text is kept in component state only;
/// nothing is sent anywhere.
#[function_component(SubmissionForm)]
fn submission_form() -> Html {
    let (i18n, _) = use_translation();
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            log::debug!("member submission not sent ({} chars)", draft.chars().count());
        })
    };

    html! {
        <form class="space-y-4" {onsubmit}>
            <input
                class="input input-bordered w-full"
                placeholder={i18n.t("members.placeholder")}
                value={(*draft).clone()}
                oninput={on_input}
            />
            <button class="btn btn-warning" type="submit">{ i18n.t("members.submit") }</button>
        </form>
    }
}
