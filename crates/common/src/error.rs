//! Error types for testboard

use thiserror::Error;

/// Result type alias using the dashboard error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client error types
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dashboard URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Dashboard rejected action {action}: HTTP {status}")]
    ActionRejected { action: String, status: u16 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),
}
