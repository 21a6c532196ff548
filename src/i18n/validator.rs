//! Catalog completeness validation.
//!
//! Every locale is compared against the fallback locale (English), which is
//! the reference for which keys exist. Gaps are not fatal at runtime since
//! lookups fall back, but they mean visitors see English text, so they are
//! reported at startup and by the `audit` binary.

use crate::i18n::interpolate::placeholders;
use crate::i18n::{Catalog, Locale};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural problems (missing namespaces, type mismatches)
    pub errors: Vec<String>,

    /// Gaps that degrade to the fallback locale or unused extras
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every non-fallback locale of the catalog.
    ///
    /// Checks that:
    /// - every fallback namespace exists in the locale (error)
    /// - every fallback key exists in the locale (warning)
    /// - shared keys have the same JSON kind (error)
    /// - shared string keys use the same `{{placeholders}}` (warning)
    /// - the locale has no keys or namespaces unknown to the fallback (warning)
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let fallback = Locale::fallback();

        for locale in Locale::ALL.into_iter().filter(|l| *l != fallback) {
            for namespace in catalog.namespaces(fallback) {
                let Some(reference) = catalog.tree(fallback, namespace) else {
                    continue;
                };
                match catalog.tree(locale, namespace) {
                    Some(tree) => {
                        Self::compare(locale, namespace, reference, tree, &mut report)
                    }
                    None => report.errors.push(format!(
                        "[{}] namespace '{}' is missing",
                        locale, namespace
                    )),
                }
            }

            for namespace in catalog.namespaces(locale) {
                if catalog.tree(fallback, namespace).is_none() {
                    report.warnings.push(format!(
                        "[{}] namespace '{}' does not exist in '{}'",
                        locale, namespace, fallback
                    ));
                }
            }
        }

        report
    }

    fn compare(
        locale: Locale,
        namespace: &str,
        reference: &Value,
        tree: &Value,
        report: &mut ValidationReport,
    ) {
        let reference_leaves = Self::leaves(reference);
        let leaves = Self::leaves(tree);

        for (key, expected) in &reference_leaves {
            let Some(actual) = leaves.get(key) else {
                // A leaf may be shadowed by a differently-shaped value higher up.
                if let Some(prefix) = Self::leaf_ancestor(key, &leaves) {
                    report.errors.push(format!(
                        "[{}] {}:{} is a {} but '{}' expects an object",
                        locale,
                        namespace,
                        prefix,
                        kind(leaves[prefix]),
                        Locale::fallback()
                    ));
                } else {
                    report.warnings.push(format!(
                        "[{}] {}:{} is untranslated",
                        locale, namespace, key
                    ));
                }
                continue;
            };

            if kind(expected) != kind(actual) {
                report.errors.push(format!(
                    "[{}] {}:{} is a {} but '{}' has a {}",
                    locale,
                    namespace,
                    key,
                    kind(actual),
                    Locale::fallback(),
                    kind(expected)
                ));
                continue;
            }

            if let (Value::String(expected), Value::String(actual)) = (expected, actual) {
                let expected_params = placeholders(expected);
                let actual_params = placeholders(actual);
                if expected_params != actual_params {
                    report.warnings.push(format!(
                        "[{}] {}:{} placeholder mismatch: expected {:?}, found {:?}",
                        locale, namespace, key, expected_params, actual_params
                    ));
                }
            }
        }

        for key in leaves.keys() {
            let nested = format!("{}.", key);
            let shadows_reference = reference_leaves.keys().any(|k| k.starts_with(&nested));
            if !reference_leaves.contains_key(key)
                && !shadows_reference
                && Self::leaf_ancestor(key, &reference_leaves).is_none()
            {
                report.warnings.push(format!(
                    "[{}] {}:{} does not exist in '{}'",
                    locale,
                    namespace,
                    key,
                    Locale::fallback()
                ));
            }
        }
    }

    /// Flatten a tree to `dotted.path -> leaf`. Arrays count as leaves.
    fn leaves(tree: &Value) -> BTreeMap<String, &Value> {
        fn collect<'v>(prefix: &str, node: &'v Value, out: &mut BTreeMap<String, &'v Value>) {
            match node {
                Value::Object(map) if !map.is_empty() => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{}.{}", prefix, key)
                        };
                        collect(&path, child, out);
                    }
                }
                _ if prefix.is_empty() => {}
                _ => {
                    out.insert(prefix.to_string(), node);
                }
            }
        }

        let mut out = BTreeMap::new();
        collect("", tree, &mut out);
        out
    }

    /// The first proper prefix of `key` that is itself a leaf in `leaves`.
    fn leaf_ancestor<'k>(key: &'k str, leaves: &BTreeMap<String, &Value>) -> Option<&'k str> {
        key.match_indices('.')
            .map(|(i, _)| &key[..i])
            .find(|prefix| leaves.contains_key(*prefix))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
