use super::PurgeHistoryUseCase;
use crate::ports::HistoryClient;
use rdpurge_domain::{DomainError, PurgeConfig, PurgeReport};
use std::sync::Arc;
use tracing::info;

/// Use case: apply the retention policy to every selected project in turn.
///
/// Projects are purged one after another; the first error aborts the run.
pub struct PurgeProjectsUseCase {
    client: Arc<dyn HistoryClient>,
    purge_history: Arc<PurgeHistoryUseCase>,
}

impl PurgeProjectsUseCase {
    pub fn new(client: Arc<dyn HistoryClient>, purge_history: Arc<PurgeHistoryUseCase>) -> Self {
        Self {
            client,
            purge_history,
        }
    }

    pub async fn execute(&self, settings: &PurgeConfig) -> Result<Vec<PurgeReport>, DomainError> {
        let projects = match &settings.project {
            Some(project) => vec![project.clone()],
            None => self.client.list_projects().await?,
        };

        info!(projects = projects.len(), "Purging execution history");

        let mut reports = Vec::with_capacity(projects.len());
        for project in &projects {
            let report = self
                .purge_history
                .execute(&settings.request_for(project))
                .await?;
            info!(
                project = %project,
                deleted = report.deleted,
                "Total deleted: {}",
                report.deleted
            );
            reports.push(report);
        }

        Ok(reports)
    }
}
