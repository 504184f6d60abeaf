//! Error types for calink.

use thiserror::Error;

/// Errors that can occur while configuring or driving the link generator.
///
/// Link generation itself is total and never produces one of these; they come
/// from configuration, time zone lookup and user input parsing.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown time zone: {0}")]
    TimeZone(String),

    #[error("Invalid date/time: {0}")]
    DateTime(String),

    #[error("Unknown provider '{0}'. Expected one of: google, outlook, yahoo")]
    UnknownProvider(String),

    #[error("Unknown event field '{0}'")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calink operations.
pub type LinkResult<T> = Result<T, LinkError>;
