use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

const ITEMS: [&str; 2] = ["store.items.stickers", "store.items.zine"];

/// `StorePage` page component. Purchasing is not wired up.
#[function_component(StorePage)]
pub fn store_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h2 class="text-3xl text-warning">{ i18n.t("store.title") }</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for ITEMS.iter().map(|item| html! {
                    <div class="card bg-base-200 border border-warning">
                        <div class="card-body">
                            <h3 class="card-title text-warning">{ i18n.t(&format!("{item}.name")) }</h3>
                            <p>{ i18n.t(&format!("{item}.description")) }</p>
                            <button class="btn btn-warning w-full mt-2" type="button">
                                { i18n.t("store.buy") }
                            </button>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
