//! Centralized error types and handling

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("CIDR arithmetic error: {0}")]
    Cidr(#[from] CidrError),

    #[error("Resource fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Route management error: {0}")]
    Route(#[from] RouteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the CIDR arithmetic engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    #[error("Invalid IPv4 address: {text}")]
    InvalidAddress { text: String },

    #[error("Invalid CIDR block: {text}")]
    InvalidCidr { text: String },

    #[error("Prefix length out of range: {prefix}")]
    InvalidPrefix { prefix: u8 },

    #[error("Range start {start} exceeds end {end}")]
    InvertedRange { start: String, end: String },

    #[error("No successor address after 255.255.255.255")]
    AddressOverflow,
}

/// Remote resource listing errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to request resource list: {0}")]
    RequestFailed(String),

    #[error("Resource service returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to decode resource list: {0}")]
    InvalidResponse(String),
}

/// Route command errors
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Failed to run route command: {0}")]
    CommandFailed(String),

    #[error("Failed to read block list {path}: {reason}")]
    BlockListUnreadable { path: String, reason: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Missing required configuration: {field}")]
    MissingRequired { field: String },
}
