//! Translation lookup metrics.
//!
//! Counts how lookups were satisfied: directly in the requested locale,
//! through the fallback locale, or not at all (the key was returned).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `Catalog`.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups satisfied by the requested locale
    hits: AtomicUsize,

    /// Lookups satisfied only by the fallback locale
    fallbacks: AtomicUsize,

    /// Lookups that found nothing and returned the key
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let total = hits + fallbacks + misses;

        let rate = |n: usize| {
            if total > 0 {
                (n as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };

        MetricsReport {
            lookups: total,
            hits,
            fallbacks,
            misses,
            hit_rate: rate(hits),
            fallback_rate: rate(fallbacks),
            miss_rate: rate(misses),
        }
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    pub hits: usize,
    pub fallbacks: usize,
    pub misses: usize,

    /// Percentages (0-100) of all lookups
    pub hit_rate: f64,
    pub fallback_rate: f64,
    pub miss_rate: f64,
}
