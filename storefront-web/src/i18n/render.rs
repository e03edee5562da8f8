use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn fallback_plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| fallback_plural_category(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        fallback_plural_category(count).to_string()
    }
}

fn pick_plural(map: &serde_json::Map<String, Value>, lang: &str, count: Option<&str>) -> Option<String> {
    let by_count = count
        .and_then(|raw| raw.parse::<f64>().ok())
        .and_then(|n| map.get(&plural_category(lang, n)))
        .or_else(|| count.and_then(|_| map.get("other")));
    by_count
        .or_else(|| map.get("_"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            pick_plural(map, lang, args.and_then(|m| m.get("count")).copied())?
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Build the argument map for [`tr`] from name/value pairs.
#[must_use]
pub fn vars<'a>(pairs: &[(&'a str, &'a str)]) -> BTreeMap<&'a str, &'a str> {
    pairs.iter().copied().collect()
}

/// Translate a key to the current language.
///
/// Falls back to the Arabic bundle, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` / `{{name}}` placeholders.
///
/// When the entry is an object of plural forms, the `count` argument selects the form.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;

    #[test]
    fn plural_selection_defaults() {
        let value = serde_json::json!({ "one": "one file", "other": "{count} files" });
        let one = render_value(&value, "en", Some(&vars(&[("count", "1")]))).unwrap();
        assert_eq!(one, "one file");
        let many = render_value(&value, "en", Some(&vars(&[("count", "3")]))).unwrap();
        assert_eq!(many, "3 files");
    }

    #[test]
    fn plural_without_count_uses_default_form() {
        let value = serde_json::json!({ "_": "items", "other": "{count} items" });
        assert_eq!(render_value(&value, "en", None).as_deref(), Some("items"));
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let resolved = render_value(&value, "en", Some(&vars(&[("name", "Tester")]))).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn missing_key_echoes_key() {
        set_lang("ar");
        assert_eq!(t("no.such.key"), "no.such.key");
        assert_eq!(t("product.add"), "أضف للسلة");
    }
}
