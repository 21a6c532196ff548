//! Locale type: the closed set of languages the site is served in.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported locale.
///
/// Every locale appears as the first segment of public URLs
/// (`/{locale}/{path...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Parse a locale from its code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Locale> {
        LocaleRegistry::get().get_by_code(code).map(|cfg| cfg.locale)
    }

    /// Parse a locale from its code, degrading to the default locale when the
    /// code is not supported.
    pub fn from_code_or_default(code: &str) -> Locale {
        Self::from_code(code).unwrap_or_else(Locale::default_locale)
    }

    /// Locale that unprefixed URLs are redirected to.
    pub fn default_locale() -> Locale {
        LocaleRegistry::get().default_locale().locale
    }

    /// Locale consulted when a translation is missing.
    pub fn fallback() -> Locale {
        LocaleRegistry::get().fallback_locale().locale
    }

    /// The URL prefix / message directory name (e.g. "en").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the registry has no entry for this locale, which would mean
    /// `Locale::ALL` and the registry are out of sync.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .config(*self)
            .expect("every Locale variant is registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
