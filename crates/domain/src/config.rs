pub mod errors;
pub mod logging;
pub mod purge;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use purge::PurgeConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
