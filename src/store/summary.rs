//! Per-level counts over the persisted collection: the cheap health check a
//! support view renders before anyone reaches for the full export.

use crate::entry::LogEntry;
use crate::level::Level;

/// Counts per severity plus the total, all zero for an empty or disabled store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub debug: usize,
}

impl LogSummary {
    /// Folds a collection into its counts.
    #[must_use]
    pub fn of(entries: &[LogEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            summary.record(entry.level);
        }
        summary
    }

    fn record(&mut self, level: Level) {
        self.total += 1;
        match level {
            Level::Debug => self.debug += 1,
            Level::Info => self.info += 1,
            Level::Warn => self.warnings += 1,
            Level::Error => self.errors += 1,
        }
    }
}
