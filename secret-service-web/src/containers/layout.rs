use crate::containers::header::Header;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "black")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <Header />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "px-6",
                "py-10",
                "font-sans"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("app.footer")}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
