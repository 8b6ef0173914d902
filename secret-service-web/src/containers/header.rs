use crate::{components::header_nav_item::HeaderNavItem, routes::MainRoute};
use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let current_route = use_route::<MainRoute>();

    let render_routes = || -> Html {
        html! {
            { for MainRoute::iter().filter(|route| route.is_navigable()).map(|route| html! {
                <HeaderNavItem {route} {current_route} />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg text-warning">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes() }
            </ul>
        </nav>
    }
}
