// src/models/walk_summary.rs
use crate::models::RenameOutcome;

/// Per-kind counts over the outcomes of one walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub renamed: u64,
    pub unchanged: u64,
    pub failed: u64,
}

impl WalkSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            renamed: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_outcomes(outcomes: &[RenameOutcome]) -> Self {
        let mut summary = Self::new();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    #[inline]
    pub fn record(&mut self, outcome: &RenameOutcome) {
        let counter = match outcome {
            RenameOutcome::Renamed { .. } => &mut self.renamed,
            RenameOutcome::Unchanged { .. } => &mut self.unchanged,
            RenameOutcome::Failed { .. } => &mut self.failed,
        };
        *counter = counter.saturating_add(1);
    }

    /// Number of files the walk looked at.
    #[inline]
    #[must_use]
    pub const fn total_files(&self) -> u64 {
        self.renamed
            .saturating_add(self.unchanged)
            .saturating_add(self.failed)
    }

    #[inline]
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
