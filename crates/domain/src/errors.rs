use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Transport error talking to {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Server {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    #[error("Invalid purge plan: {0}")]
    InvalidPurgePlan(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Transport and status failures abort the whole run.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. } | DomainError::HttpStatus { .. }
        )
    }
}
