use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

const POSTS: [&str; 3] = [
    "blog.posts.talent_hunt",
    "blog.posts.ghost",
    "blog.posts.pu_hots",
];

/// `BlogPage` page component
#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h2 class="text-3xl text-warning">{ i18n.t("blog.title") }</h2>
            <ul class="space-y-4">
                { for POSTS.iter().map(|key| html! {
                    <li class="border-b border-warning pb-2">{ i18n.t(key) }</li>
                }) }
            </ul>
        </div>
    }
}
