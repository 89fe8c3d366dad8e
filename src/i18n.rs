use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ka,
    Ru,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language: {0}")]
pub struct LocaleParseError(pub String);

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ka, Locale::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ka => "ka",
            Locale::Ru => "ru",
        }
    }

    fn content_source(&self) -> &'static str {
        match self {
            Locale::En => include_str!("../content/en.json"),
            Locale::Ka => include_str!("../content/ka.json"),
            Locale::Ru => include_str!("../content/ru.json"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        // Browser tags like "ru-RU" resolve to their primary language
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == primary)
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

static CONTENT: Lazy<HashMap<Locale, Value>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| {
            let value = serde_json::from_str(locale.content_source()).unwrap_or_else(|e| {
                warn!("Content for {} is not valid JSON: {}", locale, e);
                Value::Null
            });
            (locale, value)
        })
        .collect()
});

/// Reads translated text for one language, falling back to English and then to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Translated string for a dotted key path such as `contact.error`.
    pub fn text(&self, key: &str) -> String {
        lookup_text(self.locale, key)
            .or_else(|| self.fallback().and_then(|en| lookup_text(en, key)))
            .unwrap_or_else(|| key.to_string())
    }

    /// Structured section data (lists of services, packages, ...) for a dotted key path.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        lookup_section(self.locale, key)
            .or_else(|| self.fallback().and_then(|en| lookup_section(en, key)))
    }

    fn fallback(&self) -> Option<Locale> {
        (self.locale != Locale::default()).then(Locale::default)
    }
}

fn lookup_text(locale: Locale, key: &str) -> Option<String> {
    let value = rust_i18n::t!(key, locale = locale.code());
    let missing = value == key || value == format!("{}.{}", locale.code(), key) || value.is_empty();
    (!missing).then(|| value.into_owned())
}

fn lookup_section<T: DeserializeOwned>(locale: Locale, key: &str) -> Option<T> {
    let pointer = format!("/{}", key.replace('.', "/"));
    let value = CONTENT.get(&locale)?.pointer(&pointer)?;
    let empty = match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if empty {
        return None;
    }
    T::deserialize(value)
        .map_err(|e| warn!("Section {} in {} does not match its shape: {}", key, locale, e))
        .ok()
}

#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

#[hook]
pub fn use_localizer() -> Localizer {
    use_context::<LocaleContext>()
        .map(|ctx| Localizer::new(ctx.locale))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Service {
        title: String,
    }

    #[test]
    fn parses_codes_and_browser_tags() {
        assert_eq!("ka".parse::<Locale>(), Ok(Locale::Ka));
        assert_eq!("ru-RU".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Ka).unwrap(), "\"ka\"");
    }

    #[test]
    fn text_is_translated_per_locale() {
        let en = Localizer::new(Locale::En).text("contact.submit");
        let ru = Localizer::new(Locale::Ru).text("contact.submit");
        assert_ne!(en, "contact.submit");
        assert_ne!(en, ru);
    }

    #[test]
    fn missing_text_falls_back_to_english() {
        // The Georgian file has no cookie policy entry
        let ka = Localizer::new(Locale::Ka).text("policy.cookies");
        let en = Localizer::new(Locale::En).text("policy.cookies");
        assert_eq!(ka, en);
        assert_ne!(en, "policy.cookies");
    }

    #[test]
    fn social_proof_is_translated_everywhere() {
        for locale in Locale::ALL {
            let t = Localizer::new(locale);
            assert_ne!(t.text("social_proof.heading"), "social_proof.heading");
            assert_ne!(t.text("social_proof.description"), "social_proof.description");
        }
        assert_ne!(
            Localizer::new(Locale::Ka).text("social_proof.heading"),
            Localizer::new(Locale::En).text("social_proof.heading")
        );
    }

    #[test]
    fn unknown_text_key_returns_the_key() {
        assert_eq!(Localizer::new(Locale::Ru).text("nowhere.to.be.found"), "nowhere.to.be.found");
    }

    #[test]
    fn sections_resolve_in_the_active_locale() {
        let en: Vec<Service> = Localizer::new(Locale::En).section("servicesSection.services").unwrap();
        let ru: Vec<Service> = Localizer::new(Locale::Ru).section("servicesSection.services").unwrap();
        assert_eq!(en.len(), ru.len());
        assert_ne!(en[0].title, ru[0].title);
    }

    #[test]
    fn missing_section_falls_back_to_english() {
        // Georgian content ships without testimonials
        let ka: Option<Vec<serde_json::Value>> =
            Localizer::new(Locale::Ka).section("testimonials.items");
        let en: Option<Vec<serde_json::Value>> =
            Localizer::new(Locale::En).section("testimonials.items");
        assert!(en.is_some());
        assert_eq!(ka, en);
    }

    #[test]
    fn unknown_section_is_none() {
        let section: Option<Vec<Service>> = Localizer::new(Locale::En).section("nothing.here");
        assert!(section.is_none());
    }
}
