use super::xml;
use async_trait::async_trait;
use rdpurge_application::ports::HistoryClient;
use rdpurge_domain::{
    DeletionOutcome, DomainError, ExecutionId, HistoryPage, HistoryScope, ServerConfig,
};
use std::time::Duration;
use tracing::debug;

const AUTH_TOKEN_HEADER: &str = "X-Rundeck-Auth-Token";

const XML_CONTENT_TYPE: &str = "application/xml";

/// `HistoryClient` backed by the Rundeck REST API.
pub struct RundeckHistoryClient {
    http: reqwest::Client,
    api_root: String,
    access_token: String,
}

impl RundeckHistoryClient {
    pub fn new(
        base_url: &str,
        api_version: u32,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_root: format!("{}/api/{}", base_url.trim_end_matches('/'), api_version),
            access_token: access_token.to_string(),
        })
    }

    pub fn from_config(server: &ServerConfig) -> Result<Self, DomainError> {
        let token = server
            .access_token
            .as_deref()
            .ok_or_else(|| DomainError::ConfigError("An access token is required".to_string()))?;

        Self::new(
            &server.base_url(),
            server.api_version,
            token,
            Duration::from_secs(server.timeout_secs),
        )
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path)
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(String, String), DomainError> {
        let url = self.url(path);
        debug!(url = %url, ?query, "GET");

        let response = self
            .http
            .get(&url)
            .header(AUTH_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, XML_CONTENT_TYPE)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let body = read_body(&url, response).await?;
        Ok((url, body))
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<(String, String), DomainError> {
        let url = self.url(path);
        debug!(url = %url, fields = form.len(), "POST");

        let response = self
            .http
            .post(&url)
            .header(AUTH_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, XML_CONTENT_TYPE)
            .form(form)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let body = read_body(&url, response).await?;
        Ok((url, body))
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<String, DomainError> {
    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| transport_error(url, e))
}

fn transport_error(url: &str, e: reqwest::Error) -> DomainError {
    DomainError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    }
}

fn invalid_response(url: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidResponse {
        url: url.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl HistoryClient for RundeckHistoryClient {
    async fn list_projects(&self) -> Result<Vec<String>, DomainError> {
        let (url, body) = self.get("projects", &[]).await?;
        xml::parse_projects(&body).map_err(|e| invalid_response(&url, e))
    }

    async fn search_history(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u64,
    ) -> Result<HistoryPage, DomainError> {
        let mut query = vec![
            ("project", scope.project.to_string()),
            ("offset", offset.to_string()),
            ("max", limit.to_string()),
        ];
        if let Some(filter) = &scope.job_filter {
            query.push(("jobFilter", filter.to_string()));
        }

        let (url, body) = self.get("history", &query).await?;
        let page = xml::parse_history_page(&body).map_err(|e| invalid_response(&url, e))?;

        debug!(
            scope = %scope,
            offset,
            limit,
            total = page.total,
            returned = page.execution_ids.len(),
            "History page fetched"
        );
        Ok(page)
    }

    async fn delete_executions(
        &self,
        ids: &[ExecutionId],
    ) -> Result<DeletionOutcome, DomainError> {
        if ids.is_empty() {
            return Ok(DeletionOutcome::complete(0));
        }

        let form: Vec<(&str, &str)> = ids.iter().map(|id| ("ids", id.as_str())).collect();
        let (url, body) = self.post_form("executions/delete", &form).await?;
        xml::parse_deletion_outcome(&body, ids.len()).map_err(|e| invalid_response(&url, e))
    }
}
