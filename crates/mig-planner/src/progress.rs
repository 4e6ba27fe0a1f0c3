//! Migration progress summary

use crate::graph::DependencyGraph;
use mig_inventory::MigrationStatus;
use serde::{Deserialize, Serialize};

/// Status counts plus the current ready / blocked sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationProgress {
    /// Components in the graph
    pub total: usize,
    /// Not started
    pub not_started: usize,
    /// In progress
    pub in_progress: usize,
    /// Done
    pub done: usize,
    /// Marked blocked by the execution layer
    pub failed: usize,
    /// Skipped
    pub skipped: usize,
    /// Ids that can be started now
    pub ready: Vec<String>,
    /// Pending ids waiting on unfinished required dependencies
    pub blocked: Vec<String>,
}

impl MigrationProgress {
    /// Count of components with `status`
    #[must_use]
    pub fn count(&self, status: MigrationStatus) -> usize {
        match status {
            MigrationStatus::NotStarted => self.not_started,
            MigrationStatus::InProgress => self.in_progress,
            MigrationStatus::Done => self.done,
            MigrationStatus::Blocked => self.failed,
            MigrationStatus::Skipped => self.skipped,
        }
    }

    /// Share of components that are done or skipped, in percent
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.done + self.skipped) as f64 * 100.0 / self.total as f64
    }

    /// Nothing left to do
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.done + self.skipped == self.total
    }
}

impl DependencyGraph<'_> {
    /// Summarize statuses and readiness
    #[must_use]
    pub fn progress(&self) -> MigrationProgress {
        let mut progress = MigrationProgress::default();
        for component in self.components() {
            progress.total += 1;
            match component.status {
                MigrationStatus::NotStarted => progress.not_started += 1,
                MigrationStatus::InProgress => progress.in_progress += 1,
                MigrationStatus::Done => progress.done += 1,
                MigrationStatus::Blocked => progress.failed += 1,
                MigrationStatus::Skipped => progress.skipped += 1,
            }
        }
        progress.ready = self.ready_to_migrate().iter().map(|c| c.id.clone()).collect();
        progress.blocked = self.blocked().iter().map(|c| c.id.clone()).collect();
        progress
    }
}
