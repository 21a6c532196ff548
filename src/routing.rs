//! Locale resolution for request paths.
//!
//! Public URLs have the shape `/{locale}/{path...}`. A path whose first
//! segment is a supported locale passes through; any other path is
//! redirected to the same path under the default locale (`/about` ->
//! `/tr/about`, `/fr/x` -> `/tr/fr/x`). API routes and static assets are
//! never prefixed.

use crate::i18n::Locale;

/// First path segments that are served without a locale prefix.
pub const EXCLUDED_PREFIXES: &[&str] = &["api", "static", "_next"];

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Already locale-prefixed
    Localized(Locale),

    /// API route or static asset, served as-is
    Excluded,

    /// Redirect to this location (path plus original query string)
    Redirect(String),
}

/// Whether a path is exempt from locale prefixing: API routes, static
/// asset directories, and any path whose last segment has a file extension.
pub fn is_excluded(path: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    let first = trimmed.split('/').next().unwrap_or_default();
    if EXCLUDED_PREFIXES.contains(&first) {
        return true;
    }

    trimmed
        .rsplit('/')
        .next()
        .is_some_and(|last| last.contains('.'))
}

/// The supported locale named by the first segment of `path`, if any.
pub fn locale_of(path: &str) -> Option<Locale> {
    let first = path.trim_start_matches('/').split('/').next()?;
    Locale::from_code(first)
}

/// Resolve a request path (and optional raw query string).
pub fn resolve(path: &str, query: Option<&str>) -> Resolution {
    if is_excluded(path) {
        return Resolution::Excluded;
    }

    if let Some(locale) = locale_of(path) {
        return Resolution::Localized(locale);
    }

    let mut location = localized_path(Locale::default_locale(), path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }
    Resolution::Redirect(location)
}

/// Prefix a site path with a locale: `("/hosting", tr)` -> `/tr/hosting`.
pub fn localized_path(locale: Locale, path: &str) -> String {
    let rest = path.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{}", locale)
    } else {
        format!("/{}/{}", locale, rest)
    }
}

/// Rewrite the locale of a path, for language switcher links.
///
/// `/tr/dashboard/billing` switched to `en` becomes `/en/dashboard/billing`;
/// a path without a locale prefix just gains one.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = match locale_of(path) {
        Some(_) => trimmed.split_once('/').map_or("", |(_, rest)| rest),
        None => trimmed,
    };
    localized_path(target, rest)
}
