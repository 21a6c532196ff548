//! Localized marketing site and customer dashboard for a domain and hosting
//! reseller.
//!
//! Every public URL is prefixed with a locale (`/en/...`, `/tr/...`); pages
//! are served as localized JSON page models built from per-namespace
//! translation files.

pub mod billing;
pub mod config;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod routing;
pub mod server;
