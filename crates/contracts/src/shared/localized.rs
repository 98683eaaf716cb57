//! Bilingual (English / Arabic) text fields and their display resolution.
//!
//! API payloads carry translatable fields either as a plain string or as an
//! `{ "en": ..., "ar": ... }` record. Both shapes deserialize into
//! [`LocalizedText`]; anything else degrades to an empty record instead of
//! failing the whole payload.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Locale code used when a translation for the requested locale is missing.
pub const FALLBACK_LOCALE: &str = "en";

/// Supported site locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// The other locale of the pair, used by the language switcher.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

/// A field that may hold one plain string or independent EN/AR values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizedText {
    Plain(String),
    Translations { en: Option<String>, ar: Option<String> },
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Translations { en: None, ar: None }
    }
}

impl LocalizedText {
    pub fn plain(value: impl Into<String>) -> Self {
        LocalizedText::Plain(value.into())
    }

    pub fn pair(en: impl Into<String>, ar: impl Into<String>) -> Self {
        LocalizedText::Translations {
            en: non_empty(en.into()),
            ar: non_empty(ar.into()),
        }
    }

    /// Build from two form inputs; blank inputs become absent translations.
    pub fn from_inputs(en: &str, ar: &str) -> Self {
        Self::pair(en.trim(), ar.trim())
    }

    /// Display string for `locale`, see [`resolve`].
    pub fn resolve(&self, locale: &str) -> String {
        match self {
            LocalizedText::Plain(value) => value.clone(),
            LocalizedText::Translations { en, ar } => {
                let translation = |l: Locale| match l {
                    Locale::En => en.as_deref(),
                    Locale::Ar => ar.as_deref(),
                };
                let fallback = Locale::from_code(FALLBACK_LOCALE).unwrap_or_default();
                Locale::from_code(locale)
                    .into_iter()
                    .chain([fallback])
                    .chain(Locale::ALL)
                    .filter_map(translation)
                    .find(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_default()
            }
        }
    }

    /// Raw value for one locale without fallback, for pre-filling edit forms.
    pub fn get(&self, locale: Locale) -> String {
        match (self, locale) {
            (LocalizedText::Plain(value), Locale::En) => value.clone(),
            (LocalizedText::Plain(_), Locale::Ar) => String::new(),
            (LocalizedText::Translations { en, .. }, Locale::En) => en.clone().unwrap_or_default(),
            (LocalizedText::Translations { ar, .. }, Locale::Ar) => ar.clone().unwrap_or_default(),
        }
    }

    /// `true` when no locale yields a non-blank string.
    pub fn is_blank(&self) -> bool {
        match self {
            LocalizedText::Plain(value) => value.trim().is_empty(),
            LocalizedText::Translations { en, ar } => [en, ar]
                .into_iter()
                .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty())),
        }
    }

    /// Lenient conversion from an arbitrary JSON value. Never fails.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => LocalizedText::Plain(s.clone()),
            Value::Object(map) => LocalizedText::Translations {
                en: map.get("en").and_then(Value::as_str).map(str::to_string),
                ar: map.get("ar").and_then(Value::as_str).map(str::to_string),
            },
            _ => LocalizedText::default(),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText::Plain(value.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(value: String) -> Self {
        LocalizedText::Plain(value)
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LocalizedText::Plain(value) => serializer.serialize_str(value),
            LocalizedText::Translations { en, ar } => {
                let len = en.is_some() as usize + ar.is_some() as usize;
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(en) = en {
                    map.serialize_entry("en", en)?;
                }
                if let Some(ar) = ar {
                    map.serialize_entry("ar", ar)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(LocalizedText::from_json(&value))
    }
}

/// Resolve an optional bilingual field for display.
///
/// Absent values and empty strings yield `""`; plain strings are returned
/// unchanged; records prefer `locale`, then English, then Arabic.
pub fn resolve(value: Option<&LocalizedText>, locale: &str) -> String {
    match value {
        None => String::new(),
        Some(text) => text.resolve(locale),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_codes_are_case_insensitive_and_unknown_falls_back() {
        let text = LocalizedText::pair("Library", "المكتبة");
        assert_eq!(text.resolve("AR"), "المكتبة");
        assert_eq!(text.resolve("fr"), "Library");
        assert_eq!(text.resolve(""), "Library");
    }

    #[test]
    fn test_absent_and_empty_values_resolve_to_empty() {
        assert_eq!(resolve(None, "en"), "");
        assert_eq!(resolve(Some(&LocalizedText::plain("")), "ar"), "");
        assert_eq!(resolve(Some(&LocalizedText::default()), "en"), "");
    }

    #[test]
    fn test_plain_string_is_returned_unchanged() {
        let text = LocalizedText::plain("Materials Lab");
        assert_eq!(resolve(Some(&text), "en"), "Materials Lab");
        assert_eq!(resolve(Some(&text), "ar"), "Materials Lab");
        assert_eq!(resolve(Some(&text), "zz"), "Materials Lab");
    }

    #[test]
    fn test_bilingual_scenario() {
        let text = LocalizedText::pair("Overview", "نظرة عامة");
        assert_eq!(text.resolve("ar"), "نظرة عامة");
        assert_eq!(text.resolve("en"), "Overview");
        assert_eq!(text.resolve("fr"), "Overview");
    }

    #[test]
    fn test_falls_back_to_english_then_arabic() {
        let only_en = LocalizedText::Translations { en: Some("Library".into()), ar: None };
        assert_eq!(only_en.resolve("ar"), "Library");

        let only_ar = LocalizedText::Translations { en: None, ar: Some("المكتبة".into()) };
        assert_eq!(only_ar.resolve("en"), "المكتبة");
        assert_eq!(only_ar.resolve("fr"), "المكتبة");

        let empty_ar = LocalizedText::Translations { en: Some("Journal".into()), ar: Some(String::new()) };
        assert_eq!(empty_ar.resolve("ar"), "Journal");
    }

    #[test]
    fn test_deserialize_accepts_both_shapes() {
        let plain: LocalizedText = serde_json::from_value(json!("Events")).unwrap();
        assert_eq!(plain, LocalizedText::plain("Events"));

        let record: LocalizedText = serde_json::from_value(json!({"en": "News", "ar": "الأخبار"})).unwrap();
        assert_eq!(record.resolve("ar"), "الأخبار");
    }

    #[test]
    fn test_malformed_values_degrade_to_empty() {
        for value in [json!(null), json!(42), json!([1, 2]), json!({"en": 7, "ar": false}), json!({})] {
            let text: LocalizedText = serde_json::from_value(value).unwrap();
            assert_eq!(text.resolve("en"), "");
            assert!(text.is_blank());
        }
    }

    #[test]
    fn test_serialize_skips_missing_translations() {
        let text = LocalizedText::from_inputs("  About ", "");
        assert_eq!(serde_json::to_value(&text).unwrap(), json!({"en": "About"}));
        assert_eq!(serde_json::to_value(LocalizedText::plain("x")).unwrap(), json!("x"));
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("AR"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.toggled(), Locale::Ar);
    }

    #[test]
    fn test_get_has_no_fallback() {
        let text = LocalizedText::Translations { en: Some("Staff".into()), ar: None };
        assert_eq!(text.get(Locale::En), "Staff");
        assert_eq!(text.get(Locale::Ar), "");
    }
}
