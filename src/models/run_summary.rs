// src/models/run_summary.rs
use crate::models::FileOutcome;

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidates processed, including ones that failed.
    pub scanned: u64,
    /// Files written, or that would have been written under dry-run.
    pub updated: u64,
    /// Read/write failures and traversal errors.
    pub errors: u64,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scanned: 0,
            updated: 0,
            errors: 0,
        }
    }

    #[inline]
    pub const fn record(&mut self, outcome: FileOutcome) {
        self.scanned = self.scanned.saturating_add(1);
        if outcome.is_change() {
            self.updated = self.updated.saturating_add(1);
        }
    }

    #[inline]
    pub const fn record_file_error(&mut self) {
        self.scanned = self.scanned.saturating_add(1);
        self.errors = self.errors.saturating_add(1);
    }

    #[inline]
    pub const fn record_walk_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }
}
