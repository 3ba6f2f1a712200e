pub mod purge_history;
pub mod purge_projects;

pub use purge_history::PurgeHistoryUseCase;
pub use purge_projects::PurgeProjectsUseCase;
