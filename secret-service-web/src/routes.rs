use crate::pages::{BlogPage, HomePage, MembersPage, StorePage};
use shared::Destination;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The site routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/store")]
    Store,
    #[at("/members")]
    Members,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Translation key prefix for this route's navigation entry.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Blog => "nav.blog",
            Self::Store => "nav.store",
            Self::Members => "nav.members",
            Self::NotFound => "nav.not_found",
        }
    }

    /// Whether the route shows up in the navigation bar: only the routes a
    /// [`Destination`] can point at.
    pub fn is_navigable(self) -> bool {
        Destination::ALL
            .into_iter()
            .any(|destination| Self::from(destination) == self)
    }
}

impl From<Destination> for MainRoute {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Self::Home,
            Destination::Blog => Self::Blog,
            Destination::Store => Self::Store,
            Destination::Members => Self::Members,
        }
    }
}

/// Switch function for the site routes. Unmatched paths render nothing.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route: {route:?}");
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Blog => html! { <BlogPage /> },
        MainRoute::Store => html! { <StorePage /> },
        MainRoute::Members => html! { <MembersPage /> },
        MainRoute::NotFound => html! {},
    }
}
