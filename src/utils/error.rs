//! Custom error types for ssl-alert
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of a check run: probing a domain, loading
//! configuration, and delivering an alert.

use thiserror::Error;

/// Top-level error type for the ssl-alert application
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mail delivery error: {0}")]
    Mail(#[from] MailError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while retrieving a certificate from a domain.
///
/// These never leave the inspector: they are folded into an absent
/// certificate status.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to resolve {domain}: {message}")]
    Resolve { domain: String, message: String },

    #[error("Connection to {address} failed: {message}")]
    Connect { address: String, message: String },

    #[error("Connection to {address} timed out")]
    Timeout { address: String },

    #[error("TLS handshake with {domain} failed: {message}")]
    Handshake { domain: String, message: String },

    #[error("Invalid server name: {domain}")]
    InvalidServerName { domain: String },

    #[error("No certificate presented by {domain}")]
    NoPeerCertificate { domain: String },

    #[error("Failed to parse certificate: {message}")]
    Parse { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },
}

/// Alert delivery errors
#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address {address}: {message}")]
    Address { address: String, message: String },

    #[error("Failed to build email: {message}")]
    Build { message: String },

    #[error("SMTP delivery failed: {message}")]
    Transport { message: String },
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Build {
            message: err.to_string(),
        }
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
