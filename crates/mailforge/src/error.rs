//! Error types for sending email.

use thiserror::Error;

/// Errors that can occur while attaching files or delivering a message.
#[derive(Debug, Error)]
pub enum Error {
    /// SMTP transport failure (connection, authentication, or rejection).
    #[error("SMTP error: {0}")]
    Smtp(#[from] mailforge_smtp::Error),

    /// I/O error (e.g. reading an attachment from disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
