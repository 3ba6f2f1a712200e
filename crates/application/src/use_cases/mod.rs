pub mod history;

pub use history::{PurgeHistoryUseCase, PurgeProjectsUseCase};
