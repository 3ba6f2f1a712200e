use crate::errors::DomainError;
use crate::history::HistoryScope;

/// What to purge and how hard.
#[derive(Debug, Clone)]
pub struct PurgeRequest {
    pub scope: HistoryScope,
    /// Number of most recent executions that are never deleted.
    pub keep: u64,
    pub chunk_size: u64,
    /// Upper bound on deletions for this run. `None` means unbounded.
    pub max_delete: Option<u64>,
    pub dry_run: bool,
}

/// A single history fetch: `limit` executions starting at `offset`
/// (offset 0 is the most recent execution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkWindow {
    pub offset: u64,
    pub limit: u64,
}

/// Deletion arithmetic derived from one `total` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgePlan {
    pub total: u64,
    pub keep_count: u64,
    pub deletions: u64,
    pub chunk_size: u64,
    pub chunk_count: u64,
    pub remainder: u64,
}

impl PurgePlan {
    pub fn new(
        total: u64,
        keep: u64,
        max_delete: Option<u64>,
        chunk_size: u64,
    ) -> Result<Self, DomainError> {
        if chunk_size == 0 {
            return Err(DomainError::InvalidPurgePlan(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let keep_count = total.min(keep);
        let eligible = total - keep_count;
        let deletions = max_delete.map_or(eligible, |cap| cap.min(eligible));

        Ok(Self {
            total,
            keep_count,
            deletions,
            chunk_size,
            chunk_count: deletions / chunk_size,
            remainder: deletions % chunk_size,
        })
    }

    pub fn for_request(total: u64, request: &PurgeRequest) -> Result<Self, DomainError> {
        Self::new(total, request.keep, request.max_delete, request.chunk_size)
    }

    pub fn is_empty(&self) -> bool {
        self.deletions == 0
    }

    /// Fetch windows in processing order.
    ///
    /// Full chunks come first, starting with the oldest block of history and
    /// moving towards the most recent deletable execution, followed by the
    /// remainder window. Deleting from the old end first leaves the offsets of
    /// every later window valid against the original snapshot.
    ///
    /// Paging is not snapshot-isolated: executions recorded while the purge
    /// runs shift older ones to higher offsets.
    pub fn windows(&self) -> impl Iterator<Item = ChunkWindow> + '_ {
        let full = (0..self.chunk_count).map(move |i| ChunkWindow {
            offset: self.total - self.chunk_size * (i + 1),
            limit: self.chunk_size,
        });

        let remainder = (self.remainder > 0).then(|| ChunkWindow {
            offset: self.total - self.deletions,
            limit: self.remainder,
        });

        full.chain(remainder)
    }

    pub fn window_count(&self) -> u64 {
        self.chunk_count + u64::from(self.remainder > 0)
    }
}
