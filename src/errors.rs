//! Error types for pvwa-login

use thiserror::Error;

/// Main error type for pvwa-login
#[derive(Error, Debug)]
pub enum PvwaError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<fantoccini::error::NewSessionError> for PvwaError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        PvwaError::Browser(format!("WebDriver session error: {}", err))
    }
}

impl From<fantoccini::error::CmdError> for PvwaError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        PvwaError::Browser(format!("WebDriver command error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PvwaError>;
