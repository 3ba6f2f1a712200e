use serde::{Deserialize, Serialize};

/// Connection settings for the Rundeck server.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    pub api_version: u32,

    pub access_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost".to_string(),
            port: 4440,
            api_version: 18,
            access_token: None,
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// `{host}:{port}`, unless the host already names a port. Any path on
    /// the host is kept after the port.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let (scheme, rest) = match host.split_once("://") {
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, host),
        };
        let (authority, path) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };
        let has_port = authority
            .rsplit_once(':')
            .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()));

        if has_port {
            return host.to_string();
        }

        match scheme {
            Some(scheme) => format!("{}://{}:{}{}", scheme, authority, self.port, path),
            None => format!("{}:{}{}", authority, self.port, path),
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_version", &self.api_version)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
