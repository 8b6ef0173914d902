use std::collections::HashMap;

/// Language shown when the browser preference is not available.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Get a map of supported language codes to their translation files
pub fn supported_languages() -> HashMap<&'static str, &'static str> {
    HashMap::from([(DEFAULT_LANGUAGE, include_str!("../translations/en.json"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;

    /// Keys looked up by the views, outside the navigation table
    const VIEW_KEYS: &[&str] = &[
        "app.title",
        "app.tagline",
        "app.footer",
        "home.join",
        "home.welcome_back",
        "home.logout",
        "home.support.title",
        "home.support.description",
        "home.support.action",
        "login.email",
        "login.password",
        "login.submit",
        "login.submitting",
        "blog.title",
        "blog.posts.talent_hunt",
        "blog.posts.ghost",
        "blog.posts.pu_hots",
        "store.title",
        "store.buy",
        "store.items.stickers.name",
        "store.items.stickers.description",
        "store.items.zine.name",
        "store.items.zine.description",
        "members.title",
        "members.sign_in_required",
        "members.welcome",
        "members.placeholder",
        "members.submit",
    ];

    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a str> {
        key.split('.')
            .try_fold(root, |node, segment| node.get(segment))
            .and_then(serde_json::Value::as_str)
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(supported_languages().contains_key(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_translations_are_valid_json() {
        for (code, translation) in supported_languages() {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(translation);
            assert!(parsed.is_ok(), "translation for {code} is not valid JSON");
        }
    }

    #[test]
    fn test_every_used_key_is_translated() {
        for (code, translation) in supported_languages() {
            let root: serde_json::Value = serde_json::from_str(translation).unwrap();
            let route_keys = MainRoute::iter().map(MainRoute::i18n_key);
            for key in VIEW_KEYS.iter().copied().chain(route_keys) {
                let value = lookup(&root, key);
                assert!(
                    value.is_some_and(|text| !text.is_empty()),
                    "missing '{key}' in {code} translation"
                );
            }
        }
    }

    #[test]
    fn test_members_gate_message() {
        let root: serde_json::Value =
            serde_json::from_str(supported_languages()[DEFAULT_LANGUAGE]).unwrap();
        assert_eq!(
            lookup(&root, "members.sign_in_required"),
            Some("You must sign in to view this content.")
        );
    }
}
