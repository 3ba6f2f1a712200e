use serde::{Deserialize, Serialize};

use crate::history::HistoryScope;
use crate::purge::PurgeRequest;

/// Retention policy applied to every purged project.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Restrict the run to a single project; all projects when unset.
    pub project: Option<String>,

    pub job_filter: Option<String>,

    pub keep: u64,

    /// Deletion cap per project. Unbounded when unset.
    pub max_delete: Option<u64>,

    pub chunk_size: u64,

    pub dry_run: bool,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            project: None,
            job_filter: None,
            keep: 20,
            max_delete: None,
            chunk_size: 20,
            dry_run: false,
        }
    }
}

impl PurgeConfig {
    pub fn request_for(&self, project: &str) -> PurgeRequest {
        PurgeRequest {
            scope: HistoryScope::new(project, self.job_filter.as_deref()),
            keep: self.keep,
            chunk_size: self.chunk_size,
            max_delete: self.max_delete,
            dry_run: self.dry_run,
        }
    }
}
