//! Detection metrics and observability.
//!
//! Tracks how often each detection method wins and how often independent
//! signals corroborate each other. Counters are lock-free atomics, so
//! recording from the detection hot path costs nothing measurable.

use crate::detect::DetectionMethod;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global detection metrics singleton.
pub struct DetectionMetrics {
    /// Detections won by the browser signal
    browser: AtomicUsize,

    /// Detections won by the geographic signal
    geographic: AtomicUsize,

    /// Detections won by a stored preference
    stored: AtomicUsize,

    /// Detections that fell through to the default language
    default_fallbacks: AtomicUsize,

    /// Detections where browser and geographic signals agreed
    corroborated: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<DetectionMetrics> = OnceLock::new();

impl DetectionMetrics {
    fn new() -> Self {
        Self {
            browser: AtomicUsize::new(0),
            geographic: AtomicUsize::new(0),
            stored: AtomicUsize::new(0),
            default_fallbacks: AtomicUsize::new(0),
            corroborated: AtomicUsize::new(0),
        }
    }

    /// Get the global detection metrics instance.
    pub fn global() -> &'static DetectionMetrics {
        METRICS.get_or_init(Self::new)
    }

    /// Record a completed detection by its winning method.
    pub fn record_detection(&self, method: DetectionMethod) {
        let counter = match method {
            DetectionMethod::Browser => &self.browser,
            DetectionMethod::Geographic => &self.geographic,
            DetectionMethod::Stored => &self.stored,
            DetectionMethod::Default => &self.default_fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an agreement between browser and geographic signals.
    pub fn record_corroboration(&self) {
        self.corroborated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn browser_detections(&self) -> usize {
        self.browser.load(Ordering::Relaxed)
    }

    pub fn geographic_detections(&self) -> usize {
        self.geographic.load(Ordering::Relaxed)
    }

    pub fn stored_detections(&self) -> usize {
        self.stored.load(Ordering::Relaxed)
    }

    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    pub fn corroborated_detections(&self) -> usize {
        self.corroborated.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let browser = self.browser_detections();
        let geographic = self.geographic_detections();
        let stored = self.stored_detections();
        let defaults = self.default_fallbacks();
        let total = browser + geographic + stored + defaults;

        let default_rate = if total > 0 {
            (defaults as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let corroborated = self.corroborated_detections();
        let corroboration_rate = if total > 0 {
            (corroborated as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_detections: total,
            browser_detections: browser,
            geographic_detections: geographic,
            stored_detections: stored,
            default_fallbacks: defaults,
            default_rate,
            corroborated_detections: corroborated,
            corroboration_rate,
        }
    }
}

/// Metrics report containing current detection statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total detections performed
    pub total_detections: usize,

    /// Detections won by the browser signal
    pub browser_detections: usize,

    /// Detections won by the geographic signal
    pub geographic_detections: usize,

    /// Detections won by a stored preference
    pub stored_detections: usize,

    /// Detections that fell through to the default language
    pub default_fallbacks: usize,

    /// Share of detections that fell through, as a percentage (0-100)
    pub default_rate: f64,

    /// Detections where independent signals agreed
    pub corroborated_detections: usize,

    /// Share of corroborated detections, as a percentage (0-100)
    pub corroboration_rate: f64,
}
