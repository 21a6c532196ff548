//! Translation catalog: per-locale, per-namespace JSON trees and the
//! key-path lookup over them.
//!
//! A catalog is loaded once at process start (from a directory or from the
//! bundled message files) and shared read-only afterwards.
//!
//! # Lookup
//!
//! A key such as `plans.pro.name` is split on `.` and walked through the
//! namespace tree of the requested locale. If any segment is missing, the
//! walk restarts in the fallback locale (English). If that misses too, the
//! key itself is returned. String results get `{{param}}` interpolation;
//! arrays and objects come back unmodified.

use crate::i18n::interpolate::interpolate;
use crate::i18n::{bundled, Locale, LookupMetrics};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("namespace '{namespace}' for locale '{locale}' is not a JSON object")]
    NotAnObject { locale: Locale, namespace: String },

    #[error("fallback locale '{0}' has no messages")]
    MissingFallback(Locale),
}

/// Result of a translation lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    /// A string leaf (after interpolation), or the key itself on a miss
    Text(String),

    /// Any non-string leaf (array, object, number, ...), unmodified
    Structured(Value),
}

impl Translation {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translation::Text(text) => Some(text),
            Translation::Structured(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Translation::Text(text) => Value::String(text),
            Translation::Structured(value) => value,
        }
    }
}

/// Non-string results render as compact JSON.
impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Text(text) => f.write_str(text),
            Translation::Structured(value) => write!(f, "{}", value),
        }
    }
}

/// Where a lookup found its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// In the requested locale
    Found(&'a Value),
    /// Only in the fallback locale
    Fallback(&'a Value),
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Lookup::Found(v) | Lookup::Fallback(v) => Some(v),
            Lookup::Missing => None,
        }
    }
}

/// Walk a dotted key path through a JSON tree.
///
/// Object members are addressed by name and array elements by index.
fn walk<'v>(root: &'v Value, key: &str) -> Option<&'v Value> {
    key.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Deep-merge `overlay` onto `base`: objects merge key by key, anything else
/// is taken from `overlay`.
fn merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = Map::new();
            for (key, base_value) in base_map {
                let value = match overlay_map.get(key) {
                    Some(overlay_value) => merge(base_value, overlay_value),
                    None => base_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            for (key, overlay_value) in overlay_map {
                if !base_map.contains_key(key) {
                    merged.insert(key.clone(), overlay_value.clone());
                }
            }
            Value::Object(merged)
        }
        _ => overlay.clone(),
    }
}

/// All translation tables of the site.
#[derive(Debug, Default)]
pub struct Catalog {
    messages: HashMap<Locale, BTreeMap<String, Value>>,
    metrics: LookupMetrics,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the message files compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_sources(bundled::sources())?;
        info!(
            "Loaded bundled messages ({} namespaces per locale)",
            bundled::NAMESPACES.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from `(locale, namespace, json)` triples.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Locale, &'a str, &'a str)>,
    {
        let mut catalog = Self::new();
        for (locale, namespace, json) in sources {
            let tree = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: format!("{}/{}", locale, namespace),
                source,
            })?;
            catalog.insert_namespace(locale, namespace, tree)?;
        }
        catalog.ensure_fallback()?;
        Ok(catalog)
    }

    /// Load a catalog from a directory laid out as
    /// `{dir}/{locale}/{namespace}.json`.
    ///
    /// Locale directories that do not exist are skipped with a warning; the
    /// fallback locale is required. Files without a `.json` extension are
    /// ignored.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for locale in Locale::ALL {
            let locale_dir = dir.join(locale.code());
            if !locale_dir.is_dir() {
                warn!(
                    "No message directory for locale '{}' at {}",
                    locale,
                    locale_dir.display()
                );
                continue;
            }

            let entries = std::fs::read_dir(&locale_dir).map_err(|source| CatalogError::Io {
                path: locale_dir.clone(),
                source,
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|source| CatalogError::Io {
                        path: locale_dir.clone(),
                        source,
                    })?
                    .path();

                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    continue;
                }
                let Some(namespace) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };

                let content = std::fs::read_to_string(&path).map_err(|source| {
                    CatalogError::Io {
                        path: path.clone(),
                        source,
                    }
                })?;
                let tree = serde_json::from_str(&content).map_err(|source| {
                    CatalogError::Parse {
                        origin: path.display().to_string(),
                        source,
                    }
                })?;

                catalog.insert_namespace(locale, namespace, tree)?;
                debug!("Loaded {}/{} from {}", locale, namespace, path.display());
            }
        }

        catalog.ensure_fallback()?;
        info!(
            "Loaded messages from {} ({} locales)",
            dir.display(),
            catalog.locales().len()
        );
        Ok(catalog)
    }

    /// Add (or replace) one namespace tree. The root must be a JSON object.
    pub fn insert_namespace(
        &mut self,
        locale: Locale,
        namespace: &str,
        tree: Value,
    ) -> Result<(), CatalogError> {
        if !tree.is_object() {
            return Err(CatalogError::NotAnObject {
                locale,
                namespace: namespace.to_string(),
            });
        }
        self.messages
            .entry(locale)
            .or_default()
            .insert(namespace.to_string(), tree);
        Ok(())
    }

    fn ensure_fallback(&self) -> Result<(), CatalogError> {
        let fallback = Locale::fallback();
        if self.messages.get(&fallback).map_or(true, |ns| ns.is_empty()) {
            return Err(CatalogError::MissingFallback(fallback));
        }
        Ok(())
    }

    /// Locales that have at least one namespace, sorted.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<_> = self
            .messages
            .iter()
            .filter(|(_, namespaces)| !namespaces.is_empty())
            .map(|(locale, _)| *locale)
            .collect();
        locales.sort();
        locales
    }

    /// Namespace names available in a locale, sorted.
    pub fn namespaces(&self, locale: Locale) -> Vec<&str> {
        self.messages
            .get(&locale)
            .map(|namespaces| namespaces.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether any locale defines the namespace.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.messages
            .values()
            .any(|namespaces| namespaces.contains_key(namespace))
    }

    /// The raw tree of one namespace in one locale, without fallback.
    pub fn tree(&self, locale: Locale, namespace: &str) -> Option<&Value> {
        self.messages.get(&locale)?.get(namespace)
    }

    /// Resolve a key in exactly one locale, without fallback or metrics.
    pub fn resolve(&self, locale: Locale, namespace: &str, key: &str) -> Option<&Value> {
        walk(self.tree(locale, namespace)?, key)
    }

    /// Resolve a key with fallback to the fallback locale, recording the
    /// outcome in the catalog metrics.
    pub fn lookup(&self, locale: Locale, namespace: &str, key: &str) -> Lookup<'_> {
        if let Some(value) = self.resolve(locale, namespace, key) {
            self.metrics.record_hit();
            return Lookup::Found(value);
        }

        let fallback = Locale::fallback();
        if locale != fallback {
            if let Some(value) = self.resolve(fallback, namespace, key) {
                debug!(
                    "Translation {}:{} missing in '{}', using '{}'",
                    namespace, key, locale, fallback
                );
                self.metrics.record_fallback();
                return Lookup::Fallback(value);
            }
        }

        warn!(
            "Translation {}:{} missing in '{}' and fallback",
            namespace, key, locale
        );
        self.metrics.record_miss();
        Lookup::Missing
    }

    /// Translate a key, interpolating `{{param}}` placeholders in string
    /// results. A miss yields the key itself.
    pub fn translate<K, V>(
        &self,
        locale: Locale,
        namespace: &str,
        key: &str,
        params: &[(K, V)],
    ) -> Translation
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match self.lookup(locale, namespace, key).value() {
            Some(Value::String(text)) => Translation::Text(interpolate(text, params)),
            Some(other) => Translation::Structured(other.clone()),
            None => Translation::Text(key.to_string()),
        }
    }

    /// A whole namespace for a locale, deep-merged over the fallback locale
    /// so that every fallback key is present.
    ///
    /// Returns `None` when neither locale defines the namespace.
    pub fn namespace(&self, locale: Locale, namespace: &str) -> Option<Value> {
        let own = self.tree(locale, namespace);
        let fallback = self.tree(Locale::fallback(), namespace);

        match (fallback, own) {
            (Some(base), Some(overlay)) => Some(merge(base, overlay)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }

    /// A translator bound to one locale and namespace.
    pub fn translator<'a>(&'a self, locale: Locale, namespace: &'a str) -> Translator<'a> {
        Translator {
            catalog: self,
            locale,
            namespace,
        }
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

/// Translation helper scoped to a locale and namespace.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
    namespace: &'a str,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a key to text.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[] as &[(&str, &str)])
    }

    /// Translate a key to text with interpolation parameters.
    pub fn t_with<K, V>(&self, key: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.raw(key, params).to_string()
    }

    /// Translate a key, keeping structured results as JSON.
    pub fn raw<K, V>(&self, key: &str, params: &[(K, V)]) -> Translation
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.catalog
            .translate(self.locale, self.namespace, key, params)
    }
}
