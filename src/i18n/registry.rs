//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is a lazily initialised singleton (`OnceLock`) holding the
//! metadata of every locale the site is served in. Exactly one locale is the
//! default (used for unprefixed URLs) and exactly one is the fallback (used
//! when a translation is missing).

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// English name of the language (e.g., "English", "Turkish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Türkçe")
    pub native_name: &'static str,

    /// Whether unprefixed URLs are redirected to this locale (only one should be true)
    pub is_default: bool,

    /// Whether missing translations are looked up in this locale (only one should be true)
    pub is_fallback: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|cfg| cfg.locale.code() == code)
    }

    /// Get the configuration of a locale.
    pub fn config(&self, locale: Locale) -> Option<&LocaleConfig> {
        self.locales.iter().find(|cfg| cfg.locale == locale)
    }

    /// Get all locale configurations, in URL-prefix order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several default locales are defined (this indicates
    /// a configuration error in `default_locales`).
    pub fn default_locale(&self) -> &LocaleConfig {
        self.single(|cfg| cfg.is_default, "default")
    }

    /// Get the fallback locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several fallback locales are defined.
    pub fn fallback_locale(&self) -> &LocaleConfig {
        self.single(|cfg| cfg.is_fallback, "fallback")
    }

    /// Check if a code names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    fn single(&self, pred: impl Fn(&LocaleConfig) -> bool, what: &str) -> &LocaleConfig {
        let matching: Vec<_> = self.locales.iter().filter(|&cfg| pred(cfg)).collect();

        match matching.len() {
            0 => panic!("No {} locale found in registry", what),
            1 => matching[0],
            _ => panic!("Multiple {} locales found in registry", what),
        }
    }
}

/// The site is published in Turkish first; English backs missing strings.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::En,
            name: "English",
            native_name: "English",
            is_default: false,
            is_fallback: true,
        },
        LocaleConfig {
            locale: Locale::Tr,
            name: "Turkish",
            native_name: "Türkçe",
            is_default: true,
            is_fallback: false,
        },
    ]
}
