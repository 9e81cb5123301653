//! Error types for asset loading and bootstrap.
//!
//! Resolution itself has no error type: unknown locale tags silently
//! normalize to the default. Errors only exist where the original frontend
//! silently ignored failure, per the redesign of the fetch path.

use thiserror::Error;

/// Errors that occur while retrieving locale assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request failed before a response arrived.
    #[error("request for '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("'{url}' returned HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not a JSON object of string pairs.
    #[error("failed to decode string table from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// An error that occurred during locale bootstrap.
///
/// Identifies which of the two concurrent loads failed.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The string table fetch failed.
    #[error("failed to load string table for '{tag}': {source}")]
    Strings {
        tag: String,
        #[source]
        source: AssetError,
    },

    /// The framework locale bundle fetch failed.
    #[error("failed to load framework locale bundle '{code}': {source}")]
    FrameworkBundle {
        code: String,
        #[source]
        source: AssetError,
    },
}
