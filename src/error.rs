use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scraping a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// No site configuration exists for the resolved site key
    #[error("No configuration for site '{site_key}': expected {}", path.display())]
    ConfigNotFound { site_key: String, path: PathBuf },

    /// Failed to fetch the print view
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The recipe URL has no host to derive a site key from
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// A configured selector was rejected by the HTML query engine
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Malformed site configuration or settings
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
