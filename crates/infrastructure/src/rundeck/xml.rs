//! XML documents returned by the Rundeck API.
//!
//! ```text
//! GET  projects           <projects><project><name>ops</name></project></projects>
//! GET  history            <events total="55"><event><execution id="42"/></event></events>
//! POST executions/delete  <deleteExecutions allsuccessful="false">
//!                           <successful count="18"/>
//!                           <failed count="2"><execution id="7" message="…"/></failed>
//!                         </deleteExecutions>
//! ```

use quick_xml::de::DeError;
use rdpurge_domain::{DeletionFailure, DeletionOutcome, ExecutionId, HistoryPage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProjectsXml {
    #[serde(rename = "project", default)]
    projects: Vec<ProjectXml>,
}

#[derive(Debug, Deserialize)]
struct ProjectXml {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EventsXml {
    #[serde(rename = "@total")]
    total: u64,
    #[serde(rename = "event", default)]
    events: Vec<EventXml>,
}

#[derive(Debug, Deserialize)]
struct EventXml {
    execution: Option<ExecutionRefXml>,
}

#[derive(Debug, Deserialize)]
struct ExecutionRefXml {
    #[serde(rename = "@id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct DeleteExecutionsXml {
    #[serde(rename = "@allsuccessful")]
    all_successful: bool,
    successful: Option<CountXml>,
    failed: Option<FailedXml>,
}

#[derive(Debug, Deserialize)]
struct CountXml {
    #[serde(rename = "@count", default)]
    count: u64,
}

#[derive(Debug, Deserialize)]
struct FailedXml {
    #[serde(rename = "execution", default)]
    executions: Vec<FailedExecutionXml>,
}

#[derive(Debug, Deserialize)]
struct FailedExecutionXml {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@message")]
    message: Option<String>,
}

pub fn parse_projects(body: &str) -> Result<Vec<String>, DeError> {
    let doc: ProjectsXml = quick_xml::de::from_str(body)?;
    Ok(doc.projects.into_iter().map(|p| p.name).collect())
}

pub fn parse_history_page(body: &str) -> Result<HistoryPage, DeError> {
    let doc: EventsXml = quick_xml::de::from_str(body)?;
    let ids = doc
        .events
        .into_iter()
        .filter_map(|event| event.execution)
        .map(|execution| ExecutionId::from(execution.id))
        .collect();
    Ok(HistoryPage::new(doc.total, ids))
}

/// `requested` is the number of ids sent; the document only carries counts
/// of what happened to them.
pub fn parse_deletion_outcome(body: &str, requested: usize) -> Result<DeletionOutcome, DeError> {
    let doc: DeleteExecutionsXml = quick_xml::de::from_str(body)?;
    let failures = doc
        .failed
        .map(|failed| {
            failed
                .executions
                .into_iter()
                .map(|execution| DeletionFailure {
                    id: ExecutionId::from(execution.id),
                    message: execution.message,
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(DeletionOutcome {
        requested,
        deleted: doc.successful.map_or(0, |s| s.count),
        all_successful: doc.all_successful,
        failures,
    })
}
