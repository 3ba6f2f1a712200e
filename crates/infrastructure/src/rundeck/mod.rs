//! Rundeck REST API adapter.
//!
//! Talks to the versioned API (`{base}/api/{version}/…`) with the
//! `X-Rundeck-Auth-Token` header and decodes the XML response documents.

pub mod client;
pub mod xml;

pub use client::RundeckHistoryClient;
