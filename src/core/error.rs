use thiserror::Error;

/// Centralized error types for the application
///
/// Uses `thiserror` for conversion and display formatting. Catalog
/// errors are fatal at startup: the bot refuses to serve traffic over a
/// missing, malformed or empty dataset.
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    CatalogRead {
        path: String,
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the expected record shape
    #[error("failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: String,
        source: serde_json::Error,
    },

    /// Catalog parsed fine but contains no records
    #[error("catalog file {0} contains no program records")]
    CatalogEmpty(String),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
