//! Internationalization (i18n) module.
//!
//! All locale handling and translation infrastructure lives here.
//!
//! # Architecture
//!
//! - `locale`: the closed `Locale` enum used in URLs
//! - `registry`: locale metadata (names, default and fallback flags)
//! - `catalog`: per-locale, per-namespace JSON trees and key-path lookup
//! - `interpolate`: `{{param}}` substitution
//! - `bundled`: message files compiled into the binary
//! - `validator`: completeness checks against the fallback locale
//! - `metrics`: lookup hit/fallback/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use hosting_storefront::i18n::{Catalog, Locale};
//!
//! let catalog = Catalog::bundled()?;
//! let t = catalog.translator(Locale::Tr, "dashboard");
//! let greeting = t.t_with("greeting", &[("name", "Deniz")]);
//! ```

pub mod bundled;
mod catalog;
mod interpolate;
mod locale;
mod metrics;
mod registry;
mod validator;

pub use catalog::{Catalog, CatalogError, Lookup, Translation, Translator};
pub use interpolate::{interpolate, placeholders};
pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{CatalogValidator, ValidationReport};
