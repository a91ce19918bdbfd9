//! Localization catalogs for user-facing strings.
//!
//! The wizard core only ever produces translation keys; this module resolves
//! them against embedded JSON catalogs. Lookup walks dot-separated paths
//! (`errors.amountPositive`); an unresolved key is returned verbatim so a
//! missing translation degrades to something debuggable instead of panicking.

use serde_json::Value;

use crate::errors::Result;

const SK: &str = include_str!("../locales/sk.json");
const EN: &str = include_str!("../locales/en.json");

/// Locale used when an unknown tag is requested.
pub const FALLBACK_LOCALE: &str = "sk";

#[derive(Debug, Clone)]
pub struct Catalog {
    locale: &'static str,
    messages: Value,
}

impl Catalog {
    /// Load the catalog for `tag`; unknown tags fall back to Slovak.
    pub fn for_locale(tag: &str) -> Result<Catalog> {
        let (locale, raw) = match tag {
            "en" => ("en", EN),
            _ => (FALLBACK_LOCALE, SK),
        };
        let messages: Value = serde_json::from_str(raw)?;
        Ok(Catalog { locale, messages })
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Resolve a dot-separated key to its display string.
    pub fn translate(&self, key: &str) -> String {
        let mut node = &self.messages;
        for part in key.split('.') {
            match node.get(part) {
                Some(next) => node = next,
                None => return key.to_string(),
            }
        }
        match node.as_str() {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }
}
