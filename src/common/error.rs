use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status associated with the failure, if the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            CatalogError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error payload carried by a failure action.
///
/// `CatalogError` wraps non-cloneable sources, so the store receives this
/// flattened copy instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub message: String,
    pub status: Option<u16>,
}

impl From<&CatalogError> for FailureReport {
    fn from(err: &CatalogError) -> Self {
        FailureReport {
            message: err.to_string(),
            status: err.status(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
