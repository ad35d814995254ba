//! Error types for everything outside the request path
//!
//! Request failures never surface here; they become status-0 results.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Could not find home directory")]
    HomeDirNotFound,

    #[error("Failed to initialise logging: {0}")]
    LoggingInit(String),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
