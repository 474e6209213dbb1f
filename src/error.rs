//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image file not found at: {}", .0.display())]
    ImageNotFound(std::path::PathBuf),

    #[error("Image file is too large ({size} bytes). Limit ~{limit} bytes.")]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("Chat API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;
