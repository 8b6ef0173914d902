use crate::components::{LoginForm, LogoutButton};
use crate::config::FrontendConfig;
use crate::models::SessionState;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Landing page: sign-in card, donation card, and links to the other pages.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, _) = use_translation();
    let logged_in = use_selector(|state: &SessionState| state.logged_in);
    let config = FrontendConfig::new();
    let donation_url = config.donation_url().to_string();

    html! {
        <div class="space-y-10">
            <h1 class="text-5xl font-bold text-warning text-center">{ i18n.t("app.title") }</h1>
            <p class="text-lg max-w-2xl mx-auto text-center">{ i18n.t("app.tagline") }</p>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                <div class="card bg-base-200 border border-warning">
                    <div class="card-body">
                        <h2 class="card-title text-2xl text-warning">
                            if *logged_in {
                                { i18n.t("home.welcome_back") }
                            } else {
                                { i18n.t("home.join") }
                            }
                        </h2>
                        if *logged_in {
                            <LogoutButton />
                        } else {
                            <LoginForm />
                        }
                    </div>
                </div>

                <div class="card bg-base-200 border border-warning">
                    <div class="card-body">
                        <h2 class="card-title text-2xl text-warning">
                            <Icon icon_id={IconId::HeroiconsOutlineHeart} class="w-6 h-6" />
                            { i18n.t("home.support.title") }
                        </h2>
                        <p>{ i18n.t("home.support.description") }</p>
                        <div class="card-actions">
                            <a href={donation_url} target="_blank" rel="noopener noreferrer" class="btn btn-warning w-full">
                                { i18n.t("home.support.action") }
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="text-center space-x-4">
                <Link<MainRoute> to={MainRoute::Blog} classes="link link-warning text-sm">
                    { i18n.t("nav.blog") }
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Store} classes="link link-warning text-sm">
                    { i18n.t("nav.store") }
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Members} classes="link link-warning text-sm">
                    { i18n.t("nav.members") }
                </Link<MainRoute>>
            </div>
        </div>
    }
}
