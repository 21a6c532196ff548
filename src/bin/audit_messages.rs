//! Audit binary - checks message files for untranslated or mismatched keys
//!
//! Usage:
//!   cargo run --bin audit                 # Audit the bundled messages
//!   cargo run --bin audit -- messages/    # Audit a messages directory
//!
//! The directory must be laid out as `{locale}/{namespace}.json`.
//! Exits with status 1 when the audit finds errors.

use anyhow::{Context, Result};
use hosting_storefront::i18n::{Catalog, CatalogValidator, Locale};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hosting_storefront=info".parse()?),
        )
        .init();

    let catalog = match std::env::args().nth(1) {
        Some(dir) => {
            info!("Auditing messages in {}", dir);
            Catalog::load_dir(&dir).context(format!("Failed to load messages from {}", dir))?
        }
        None => {
            info!("Auditing bundled messages");
            Catalog::bundled().context("Bundled messages are invalid")?
        }
    };

    for locale in catalog.locales() {
        println!(
            "{} ({}): {}",
            locale,
            locale.native_name(),
            catalog.namespaces(locale).join(", ")
        );
    }
    println!("Reference locale: {}", Locale::fallback());
    println!();

    let report = CatalogValidator::validate(&catalog);

    if report.is_clean() {
        println!("✓ No issues found");
        return Ok(());
    }

    if report.has_errors() {
        println!("Errors ({}):", report.errors.len());
        for error in &report.errors {
            println!("  ✗ {}", error);
        }
    }
    if report.has_warnings() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
