use crate::history::ExecutionId;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub id: ExecutionId,
    pub message: Option<String>,
}

/// What the server reported for one bulk-delete call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub requested: usize,
    pub deleted: u64,
    pub all_successful: bool,
    pub failures: Vec<DeletionFailure>,
}

impl DeletionOutcome {
    pub fn complete(requested: usize) -> Self {
        Self {
            requested,
            deleted: requested as u64,
            all_successful: true,
            failures: Vec::new(),
        }
    }

    /// Distinct failure messages, sorted.
    pub fn failure_messages(&self) -> BTreeSet<&str> {
        self.failures
            .iter()
            .filter_map(|f| f.message.as_deref())
            .collect()
    }
}

/// Running tally for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    pub project: Arc<str>,
    pub total: u64,
    pub planned: u64,
    pub deleted: u64,
    pub chunks_processed: u64,
    pub partial_failures: u64,
    pub dry_run: bool,
}

impl PurgeReport {
    pub fn new(project: Arc<str>, total: u64, planned: u64, dry_run: bool) -> Self {
        Self {
            project,
            total,
            planned,
            deleted: 0,
            chunks_processed: 0,
            partial_failures: 0,
            dry_run,
        }
    }

    pub fn record(&mut self, outcome: &DeletionOutcome) {
        self.chunks_processed += 1;
        self.deleted += outcome.deleted;
        if !outcome.all_successful {
            self.partial_failures += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.chunks_processed += 1;
    }
}
