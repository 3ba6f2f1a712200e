//! rdpurge Domain Layer
pub mod config;
pub mod deletion;
pub mod errors;
pub mod history;
pub mod purge;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, PurgeConfig, ServerConfig};
pub use deletion::{DeletionFailure, DeletionOutcome, PurgeReport};
pub use errors::DomainError;
pub use history::{ExecutionId, HistoryPage, HistoryScope};
pub use purge::{ChunkWindow, PurgePlan, PurgeRequest};
