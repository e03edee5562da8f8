use serde_json::Value;

/// Language shown when nothing has been saved yet.
pub const DEFAULT_LANG: &str = "ar";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
    },
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ar", include_str!("../../i18n/ar.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

/// Parse the bundle for `lang`, or `None` when the language is not shipped.
pub fn load_translations(lang: &str) -> Option<Value> {
    LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .and_then(|data| serde_json::from_str(data).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_parseable_bundle() {
        for meta in locales() {
            let bundle = load_translations(meta.code)
                .unwrap_or_else(|| panic!("bundle for {} should parse", meta.code));
            assert!(bundle.get("cart").is_some(), "{} lacks cart keys", meta.code);
        }
    }

    #[test]
    fn arabic_is_rtl_and_default() {
        assert!(is_rtl_lang(DEFAULT_LANG));
        assert!(!is_rtl_lang("en"));
        assert!(!is_supported("fr"));
        assert!(load_translations("fr").is_none());
    }
}
