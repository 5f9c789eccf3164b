//! Error types for receipt parsing and fetching

use thiserror::Error;

/// Errors that can occur while extracting a total from a message
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode a body part payload
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// The total marker cannot be used for matching
    #[error("Invalid total marker: {0:?}")]
    InvalidMarker(String),
}

/// Errors raised by the mailbox layer around the parser
#[derive(Error, Debug)]
pub enum FetchError {
    /// Missing or malformed configuration value
    #[error("Invalid configuration for {key}: {details}")]
    Config { key: String, details: String },

    /// Network failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS handshake or connector setup failed
    #[error("TLS error: {0}")]
    Tls(#[from] tokio_native_tls::native_tls::Error),

    /// IMAP protocol failure
    #[error("IMAP error: {0}")]
    Imap(#[from] async_imap::error::Error),

    /// Server rejected the credentials
    #[error("Login failed: {0}")]
    Login(String),

    /// The mailbox has no message at the requested position
    #[error("Mailbox {mailbox} holds {exists} messages, cannot step back {offset}")]
    NoMessage {
        mailbox: String,
        exists: u32,
        offset: u32,
    },

    /// The server answered the fetch without a message body
    #[error("Message {0} has no body")]
    EmptyBody(u32),

    /// The fetched message could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
