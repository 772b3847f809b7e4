//! Counters for import/export activity.
//!
//! Tracks how much data moves through the codec and how often uploads need
//! the lossy fallback path, so degraded input shows up without failing calls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared import/export counters. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct TransferMetrics {
    exports_total: Arc<AtomicU64>,
    contacts_exported_total: Arc<AtomicU64>,
    imports_total: Arc<AtomicU64>,
    imports_failed_total: Arc<AtomicU64>,
    contacts_imported_total: Arc<AtomicU64>,
    degraded_cells_total: Arc<AtomicU64>,
    dropped_segments_total: Arc<AtomicU64>,
}

impl TransferMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a completed export.
    pub fn track_export(&self, format: &str, contact_count: usize, duration_ms: u128) {
        self.exports_total.fetch_add(1, Ordering::Relaxed);
        self.contacts_exported_total
            .fetch_add(contact_count as u64, Ordering::Relaxed);

        tracing::debug!(
            format = %format,
            contact_count = contact_count,
            duration_ms = duration_ms,
            "Export completed"
        );
    }

    /// Track a committed import.
    pub fn track_import(&self, format: &str, contact_count: usize, duration_ms: u128) {
        self.imports_total.fetch_add(1, Ordering::Relaxed);
        self.contacts_imported_total
            .fetch_add(contact_count as u64, Ordering::Relaxed);

        tracing::debug!(
            format = %format,
            contact_count = contact_count,
            duration_ms = duration_ms,
            "Import completed"
        );
    }

    /// Track an import that was rejected or rolled back.
    pub fn track_import_failure(&self, format: &str) {
        self.imports_total.fetch_add(1, Ordering::Relaxed);
        self.imports_failed_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(format = %format, "Import failure recorded");
    }

    /// Track grammar anomalies absorbed while decoding CSV cells.
    pub fn track_cell_anomalies(&self, degraded: usize, dropped: usize) {
        self.degraded_cells_total
            .fetch_add(degraded as u64, Ordering::Relaxed);
        self.dropped_segments_total
            .fetch_add(dropped as u64, Ordering::Relaxed);
    }

    pub fn exports_total(&self) -> u64 {
        self.exports_total.load(Ordering::Relaxed)
    }

    pub fn contacts_exported_total(&self) -> u64 {
        self.contacts_exported_total.load(Ordering::Relaxed)
    }

    pub fn imports_total(&self) -> u64 {
        self.imports_total.load(Ordering::Relaxed)
    }

    pub fn imports_failed_total(&self) -> u64 {
        self.imports_failed_total.load(Ordering::Relaxed)
    }

    pub fn contacts_imported_total(&self) -> u64 {
        self.contacts_imported_total.load(Ordering::Relaxed)
    }

    pub fn degraded_cells_total(&self) -> u64 {
        self.degraded_cells_total.load(Ordering::Relaxed)
    }

    pub fn dropped_segments_total(&self) -> u64 {
        self.dropped_segments_total.load(Ordering::Relaxed)
    }

    /// Get the import failure rate (0.0 to 1.0).
    pub fn import_failure_rate(&self) -> f64 {
        let failed = self.imports_failed_total() as f64;
        let total = self.imports_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failed / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Exports: {} ({} contacts)\n\
             Imports: {} ({} contacts)\n\
             Failed Imports: {} ({:.2}% failure rate)\n\
             Degraded Cells: {}\n\
             Dropped Segments: {}",
            self.exports_total(),
            self.contacts_exported_total(),
            self.imports_total(),
            self.contacts_imported_total(),
            self.imports_failed_total(),
            self.import_failure_rate() * 100.0,
            self.degraded_cells_total(),
            self.dropped_segments_total(),
        )
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = TransferMetrics::new();
        assert_eq!(metrics.exports_total(), 0);
        assert_eq!(metrics.imports_total(), 0);
        assert_eq!(metrics.degraded_cells_total(), 0);
    }

    #[test]
    fn test_track_export_and_import() {
        let metrics = TransferMetrics::new();

        metrics.track_export("csv", 3, 5);
        metrics.track_import("json", 2, 7);
        metrics.track_import("json", 4, 7);

        assert_eq!(metrics.exports_total(), 1);
        assert_eq!(metrics.contacts_exported_total(), 3);
        assert_eq!(metrics.imports_total(), 2);
        assert_eq!(metrics.contacts_imported_total(), 6);
    }

    #[test]
    fn test_import_failure_rate() {
        let metrics = TransferMetrics::new();
        assert_eq!(metrics.import_failure_rate(), 0.0);

        metrics.track_import("csv", 1, 1);
        metrics.track_import("csv", 1, 1);
        metrics.track_import_failure("csv");

        assert!((metrics.import_failure_rate() - 0.3333).abs() < 0.001);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = TransferMetrics::new();
        let clone = metrics.clone();
        clone.track_cell_anomalies(2, 1);

        assert_eq!(metrics.degraded_cells_total(), 2);
        assert_eq!(metrics.dropped_segments_total(), 1);
    }

    #[test]
    fn test_summary() {
        let metrics = TransferMetrics::new();
        metrics.track_export("json", 4, 1);
        metrics.track_cell_anomalies(1, 0);

        let summary = metrics.summary();
        assert!(summary.contains("Exports: 1 (4 contacts)"));
        assert!(summary.contains("Degraded Cells: 1"));
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(timer.finish() >= 10);
    }
}
