//! Transport trait definitions.
//!
//! The fetch layer never talks to the network directly. It asks a
//! `FootballTransport` for an endpoint and gets JSON or a classified failure
//! back, which keeps rate limiting, caching and filtering testable without
//! sockets.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;

/// Capability to fetch one endpoint of the football-data.org v4 API.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use matchday_football_data::provider::FootballTransport;
///
/// struct CannedTransport(serde_json::Value);
///
/// #[async_trait]
/// impl FootballTransport for CannedTransport {
///     fn id(&self) -> &'static str {
///         "CANNED"
///     }
///
///     async fn fetch(&self, _endpoint: &str, _timeout: Duration) -> Result<Value, TransportError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait FootballTransport: Send + Sync {
    /// Identifier used in log lines.
    fn id(&self) -> &'static str;

    /// Fetch an endpoint relative to the API root.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path and query, e.g. `teams/57/matches?season=2023&limit=30`
    /// * `timeout` - Upper bound for the whole request
    ///
    /// # Returns
    ///
    /// The parsed JSON body on a 2xx response, otherwise a [`TransportError`]
    /// carrying the status code or the underlying cause.
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> Result<Value, TransportError>;
}
