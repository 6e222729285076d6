use log::warn;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Where contact submissions go and the key they are signed with.
#[derive(Clone)]
pub struct ContactConfig {
    pub api_url: String,
    pub hmac_secret: String,
}

impl ContactConfig {
    pub fn new(api_url: impl Into<String>, hmac_secret: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            hmac_secret: hmac_secret.into(),
        }
    }

    /// Load from `API_URL` and `HMAC_SECRET`.
    ///
    /// A missing secret is accepted; requests are then signed with an empty key.
    pub fn from_env() -> Self {
        let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let hmac_secret = std::env::var("HMAC_SECRET").unwrap_or_default();

        if hmac_secret.is_empty() {
            warn!("HMAC_SECRET is not set, contact requests will be signed with an empty key");
        }

        Self::new(api_url, hmac_secret)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("api_url", &self.api_url)
            .field("hmac_secret", &"<redacted>")
            .finish()
    }
}

/// Bind address of the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value,
            })?,
            Err(_) => 8080,
        };

        Ok(Self { host, port })
    }
}
