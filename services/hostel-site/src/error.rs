//! Error types for the hostel site

use hostel_content::contact::ContactError;

/// Errors that can occur while serving the site
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content store error: {0}")]
    Content(String),

    #[error("Contact form error: {0}")]
    Contact(#[from] ContactError),
}

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;
