//! Error types and advisory classification for the football data crate.
//!
//! This module provides:
//! - [`FootballDataError`]: The main error enum for all fetch operations
//! - [`TransportError`]: Raw failures reported by an HTTP transport
//! - [`AdvisoryLevel`]: Classification for how a failure is surfaced to users

mod advisory;

pub use advisory::AdvisoryLevel;

use thiserror::Error;

/// Failures reported by a [`FootballTransport`](crate::provider::FootballTransport).
///
/// These are deliberately close to the wire: a status code, a timeout, a
/// connection problem, or a body that was not JSON. Classification into
/// domain errors happens in [`FootballDataError::from_transport`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The upstream answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS, connection refused, TLS and similar failures.
    #[error("connection failed: {0}")]
    Network(String),

    /// The upstream answered 2xx but the body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Errors that can occur while fetching or interpreting football data.
///
/// Fetch operations never return these to callers directly. They are
/// converted into empty results at the operation boundary, and the ones with
/// an [`advisory_level`](Self::advisory_level) are recorded as user-facing
/// advisories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FootballDataError {
    /// The upstream rejected the request with HTTP 429.
    #[error("Request limit exceeded. Wait a minute before trying again.")]
    RateLimitExceeded,

    /// The upstream rejected the API key with HTTP 403.
    #[error("API key is invalid or not configured.")]
    AuthenticationFailed,

    /// The requested resource does not exist (HTTP 404).
    /// Not an error from the user's point of view, e.g. an unsupported season.
    #[error("Not found: {endpoint}")]
    NotFound {
        /// Endpoint that returned 404
        endpoint: String,
    },

    /// Timeout, DNS, connection refused or any other transport failure.
    #[error("Connection error: {message}")]
    TransportError {
        /// Underlying cause
        message: String,
    },

    /// A single upstream record could not be interpreted.
    /// Only the affected record is skipped or degraded.
    #[error("Malformed record in {context}: {message}")]
    MalformedRecord {
        /// Where the record came from (e.g. "matches[3]")
        context: String,
        /// What was wrong with it
        message: String,
    },

    /// A caller-supplied parameter failed validation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl FootballDataError {
    /// Returns how this error should be surfaced to the user-facing layer.
    ///
    /// - [`AdvisoryLevel::Warning`]: transient, the user can simply wait
    /// - [`AdvisoryLevel::Error`]: needs attention (bad key, network down)
    /// - `None`: silent, the empty result speaks for itself
    ///
    /// # Examples
    ///
    /// ```
    /// use matchday_football_data::errors::{AdvisoryLevel, FootballDataError};
    ///
    /// let error = FootballDataError::RateLimitExceeded;
    /// assert_eq!(error.advisory_level(), Some(AdvisoryLevel::Warning));
    ///
    /// let error = FootballDataError::NotFound { endpoint: "teams/1".to_string() };
    /// assert_eq!(error.advisory_level(), None);
    /// ```
    pub fn advisory_level(&self) -> Option<AdvisoryLevel> {
        match self {
            Self::RateLimitExceeded | Self::MalformedRecord { .. } => Some(AdvisoryLevel::Warning),

            Self::AuthenticationFailed
            | Self::TransportError { .. }
            | Self::InvalidParameter(_) => Some(AdvisoryLevel::Error),

            Self::NotFound { .. } => None,
        }
    }

    /// Classify a transport failure for the given endpoint.
    pub fn from_transport(err: TransportError, endpoint: &str) -> Self {
        match err {
            TransportError::Status { status: 429, .. } => Self::RateLimitExceeded,
            TransportError::Status { status: 403, .. } => Self::AuthenticationFailed,
            TransportError::Status { status: 404, .. } => Self::NotFound {
                endpoint: endpoint.to_string(),
            },
            other => Self::TransportError {
                message: other.to_string(),
            },
        }
    }
}
