//! Error types for figex

use thiserror::Error;

/// Main error type for figex operations
#[derive(Error, Debug)]
pub enum FigexError {
    /// The API answered with an error-shaped body (`err` or `error` field)
    #[error("Figma API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A download was requested for a record the server never rendered
    #[error("no render url for component {id}")]
    MissingUrl { id: String },
}

pub type Result<T> = std::result::Result<T, FigexError>;
