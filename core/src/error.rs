//! Error types for a REST call.
//!
//! # Design
//! One variant per pipeline stage, so a caller can tell "never left the
//! process" (`Construction`) from "sent but no answer" (`Transport`) from
//! "answered but the body could not be read" (`Read`). Each variant keeps the
//! underlying cause reachable through `source()`.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `RestClient::call` and the individual stages.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request could not be turned into a transport request. Nothing was sent.
    #[error("failed to build request: {0}")]
    Construction(#[source] BoxError),

    /// The round trip failed before a status line and headers arrived.
    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    /// Status and headers arrived but the body could not be drained.
    #[error("failed to read response body: {0}")]
    Read(#[source] std::io::Error),
}

impl RestError {
    pub fn construction(err: impl Into<BoxError>) -> Self {
        RestError::Construction(err.into())
    }

    pub fn transport(err: impl Into<BoxError>) -> Self {
        RestError::Transport(err.into())
    }
}
