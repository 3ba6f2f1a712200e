#![allow(dead_code)]

use async_trait::async_trait;
use rdpurge_application::ports::HistoryClient;
use rdpurge_domain::{
    DeletionFailure, DeletionOutcome, DomainError, ExecutionId, HistoryPage, HistoryScope,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory history server. Each project holds its executions most recent
/// first; deleting removes them, just like the real server.
pub struct MockHistoryClient {
    projects: Arc<RwLock<BTreeMap<String, Vec<ExecutionId>>>>,
    refused: Arc<RwLock<HashMap<ExecutionId, String>>>,
    searches: Arc<RwLock<Vec<(String, Option<String>, u64, u64)>>>,
    deletions: Arc<RwLock<Vec<Vec<ExecutionId>>>>,
    list_calls: Arc<AtomicU64>,
    fail_deletes: Arc<RwLock<bool>>,
    fail_searches_for: Arc<RwLock<Option<String>>>,
}

impl MockHistoryClient {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(BTreeMap::new())),
            refused: Arc::new(RwLock::new(HashMap::new())),
            searches: Arc::new(RwLock::new(Vec::new())),
            deletions: Arc::new(RwLock::new(Vec::new())),
            list_calls: Arc::new(AtomicU64::new(0)),
            fail_deletes: Arc::new(RwLock::new(false)),
            fail_searches_for: Arc::new(RwLock::new(None)),
        }
    }

    /// Project with executions `1..=count`; the highest id is the most recent.
    pub async fn add_project(&self, name: &str, count: u32) {
        let ids = (1..=count)
            .rev()
            .map(|i| ExecutionId::from(i.to_string()))
            .collect();
        self.projects.write().await.insert(name.to_string(), ids);
    }

    pub async fn refuse(&self, id: &str, message: &str) {
        self.refused
            .write()
            .await
            .insert(ExecutionId::from(id), message.to_string());
    }

    pub async fn set_fail_deletes(&self, fail: bool) {
        *self.fail_deletes.write().await = fail;
    }

    pub async fn set_fail_searches_for(&self, project: &str) {
        *self.fail_searches_for.write().await = Some(project.to_string());
    }

    pub async fn remaining(&self, project: &str) -> Vec<String> {
        self.projects
            .read()
            .await
            .get(project)
            .map(|ids| ids.iter().map(|id| id.to_string()).collect())
            .unwrap_or_default()
    }

    pub async fn remaining_count(&self, project: &str) -> usize {
        self.remaining(project).await.len()
    }

    /// `(project, job_filter, offset, limit)` of every search, in order.
    pub async fn searches(&self) -> Vec<(String, Option<String>, u64, u64)> {
        self.searches.read().await.clone()
    }

    pub async fn search_offsets(&self) -> Vec<u64> {
        self.searches
            .read()
            .await
            .iter()
            .map(|(_, _, offset, _)| *offset)
            .collect()
    }

    pub async fn delete_calls(&self) -> Vec<Vec<String>> {
        self.deletions
            .read()
            .await
            .iter()
            .map(|batch| batch.iter().map(|id| id.to_string()).collect())
            .collect()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HistoryClient for MockHistoryClient {
    async fn list_projects(&self) -> Result<Vec<String>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.projects.read().await.keys().cloned().collect())
    }

    async fn search_history(
        &self,
        scope: &HistoryScope,
        offset: u64,
        limit: u64,
    ) -> Result<HistoryPage, DomainError> {
        self.searches.write().await.push((
            scope.project.to_string(),
            scope.job_filter.as_deref().map(str::to_string),
            offset,
            limit,
        ));

        if self.fail_searches_for.read().await.as_deref() == Some(&*scope.project) {
            return Err(DomainError::HttpStatus {
                url: "http://mock/api/18/history".to_string(),
                status: 401,
            });
        }

        let projects = self.projects.read().await;
        let ids = projects.get(&*scope.project).cloned().unwrap_or_default();
        let page = ids
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(HistoryPage::new(ids.len() as u64, page))
    }

    async fn delete_executions(
        &self,
        ids: &[ExecutionId],
    ) -> Result<DeletionOutcome, DomainError> {
        if *self.fail_deletes.read().await {
            return Err(DomainError::Transport {
                url: "http://mock/api/18/executions/delete".to_string(),
                message: "connection reset".to_string(),
            });
        }

        self.deletions.write().await.push(ids.to_vec());

        let refused = self.refused.read().await;
        let failures: Vec<DeletionFailure> = ids
            .iter()
            .filter_map(|id| {
                refused.get(id).map(|message| DeletionFailure {
                    id: id.clone(),
                    message: Some(message.clone()),
                })
            })
            .collect();

        let mut projects = self.projects.write().await;
        for history in projects.values_mut() {
            history.retain(|id| !ids.contains(id) || refused.contains_key(id));
        }

        Ok(DeletionOutcome {
            requested: ids.len(),
            deleted: (ids.len() - failures.len()) as u64,
            all_successful: failures.is_empty(),
            failures,
        })
    }
}
