use crate::ports::HistoryClient;
use rdpurge_domain::{DomainError, ExecutionId, PurgePlan, PurgeReport, PurgeRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Pause between consecutive chunk deletions.
const DEFAULT_CHUNK_PAUSE: Duration = Duration::from_millis(100);

/// Use case: delete old executions of one project, keeping the most recent ones.
pub struct PurgeHistoryUseCase {
    client: Arc<dyn HistoryClient>,
    chunk_pause: Duration,
}

impl PurgeHistoryUseCase {
    pub fn new(client: Arc<dyn HistoryClient>) -> Self {
        Self {
            client,
            chunk_pause: DEFAULT_CHUNK_PAUSE,
        }
    }

    pub fn with_chunk_pause(mut self, pause: Duration) -> Self {
        self.chunk_pause = pause;
        self
    }

    pub async fn execute(&self, request: &PurgeRequest) -> Result<PurgeReport, DomainError> {
        let scope = &request.scope;
        let total = self.client.search_history(scope, 0, 1).await?.total;
        let plan = PurgePlan::for_request(total, request)?;

        info!(
            scope = %scope,
            deletions = plan.deletions,
            total = plan.total,
            keep = plan.keep_count,
            chunks = plan.window_count(),
            dry_run = request.dry_run,
            "{}/{} executions are going to be deleted",
            plan.deletions,
            plan.total
        );

        let mut report = PurgeReport::new(
            scope.project.clone(),
            total,
            plan.deletions,
            request.dry_run,
        );

        for (index, window) in plan.windows().enumerate() {
            if index > 0 && !self.chunk_pause.is_zero() {
                tokio::time::sleep(self.chunk_pause).await;
            }

            let page = self
                .client
                .search_history(scope, window.offset, window.limit)
                .await?;
            let ids = page.tail(usize::try_from(window.limit).unwrap_or(usize::MAX));

            if ids.is_empty() {
                warn!(
                    scope = %scope,
                    offset = window.offset,
                    limit = window.limit,
                    "No executions returned for chunk, skipping"
                );
                report.record_skipped();
                continue;
            }

            info!(
                scope = %scope,
                offset = window.offset,
                count = ids.len(),
                ids = ?id_list(ids),
                "Purging executions"
            );

            if request.dry_run {
                debug!(scope = %scope, "Dry run, deletion skipped");
                report.record_skipped();
                continue;
            }

            let outcome = self.client.delete_executions(ids).await?;
            if !outcome.all_successful {
                error!(
                    scope = %scope,
                    requested = outcome.requested,
                    deleted = outcome.deleted,
                    messages = ?outcome.failure_messages(),
                    "Some executions could not be deleted"
                );
            }
            report.record(&outcome);
        }

        Ok(report)
    }
}

fn id_list(ids: &[ExecutionId]) -> Vec<&str> {
    ids.iter().map(ExecutionId::as_str).collect()
}
