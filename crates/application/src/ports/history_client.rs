use async_trait::async_trait;
use rdpurge_domain::{DeletionOutcome, DomainError, ExecutionId, HistoryPage, HistoryScope};

#[async_trait]
pub trait HistoryClient: Send + Sync {
    /// Names of every project visible to the access token
    async fn list_projects(&self) -> Result<Vec<String>, DomainError>;

    /// Current total for the scope plus up to `limit` execution ids starting
    /// at `offset`, most recent first
    async fn search_history(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u64,
    ) -> Result<HistoryPage, DomainError>;

    /// Delete a batch of executions.
    ///
    /// A server that accepts the call but refuses some ids is not an error;
    /// the refusal is reported through the returned outcome.
    async fn delete_executions(&self, ids: &[ExecutionId])
        -> Result<DeletionOutcome, DomainError>;
}
