//! Message files compiled into the binary.
//!
//! These are the `messages/{locale}/{namespace}.json` files of the
//! repository. They are used when no `MESSAGES_DIR` is configured, so the
//! server always has a complete catalog to start from.

use crate::i18n::Locale;

macro_rules! bundled_namespaces {
    ($($ns:literal),* $(,)?) => {
        /// Namespaces shipped with the site, one per functional area.
        pub const NAMESPACES: &[&str] = &[$($ns),*];

        /// All bundled message sources as `(locale, namespace, json)` triples.
        pub fn sources() -> Vec<(Locale, &'static str, &'static str)> {
            vec![
                $((
                    Locale::En,
                    $ns,
                    include_str!(concat!("../../messages/en/", $ns, ".json")),
                ),)*
                $((
                    Locale::Tr,
                    $ns,
                    include_str!(concat!("../../messages/tr/", $ns, ".json")),
                ),)*
            ]
        }
    };
}

bundled_namespaces!["common", "home", "hosting", "ssl", "domains", "support", "auth", "dashboard"];
