use rdpurge_domain::ServerConfig;
use rdpurge_infrastructure::rundeck::RundeckHistoryClient;
use std::sync::Arc;
use tracing::info;

pub struct Clients {
    pub history: Arc<RundeckHistoryClient>,
}

impl Clients {
    pub fn new(server: &ServerConfig) -> anyhow::Result<Self> {
        let history = RundeckHistoryClient::from_config(server)?;
        info!(api_root = history.api_root(), "Rundeck client ready");

        Ok(Self {
            history: Arc::new(history),
        })
    }
}
