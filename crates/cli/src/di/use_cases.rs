use super::Clients;
use rdpurge_application::use_cases::{PurgeHistoryUseCase, PurgeProjectsUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub purge_projects: Arc<PurgeProjectsUseCase>,
}

impl UseCases {
    pub fn new(clients: &Clients) -> Self {
        let purge_history = Arc::new(PurgeHistoryUseCase::new(clients.history.clone()));

        Self {
            purge_projects: Arc::new(PurgeProjectsUseCase::new(
                clients.history.clone(),
                purge_history,
            )),
        }
    }
}
