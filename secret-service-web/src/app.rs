use crate::containers::layout::Layout;
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<MainRoute> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}
