use std::fmt;
use std::sync::Arc;

/// Server-assigned identifier of one execution record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExecutionId(Arc<str>);

impl ExecutionId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExecutionId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// The (project, job filter) pair every history query is issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryScope {
    pub project: Arc<str>,
    pub job_filter: Option<Arc<str>>,
}

impl HistoryScope {
    pub fn new(project: &str, job_filter: Option<&str>) -> Self {
        Self {
            project: Arc::from(project),
            job_filter: job_filter.map(Arc::from),
        }
    }
}

impl fmt::Display for HistoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.job_filter {
            Some(filter) => write!(f, "{} (jobFilter={})", self.project, filter),
            None => f.write_str(&self.project),
        }
    }
}

/// One window of history, most recent execution first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryPage {
    pub total: u64,
    pub execution_ids: Vec<ExecutionId>,
}

impl HistoryPage {
    pub fn new(total: u64, execution_ids: Vec<ExecutionId>) -> Self {
        Self {
            total,
            execution_ids,
        }
    }

    /// The last `limit` ids of the page, in page order.
    pub fn tail(&self, limit: usize) -> &[ExecutionId] {
        let start = self.execution_ids.len().saturating_sub(limit);
        &self.execution_ids[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.execution_ids.is_empty()
    }
}
