use serde::Serialize;

/// Severity of a user-facing advisory.
///
/// Fetch operations swallow their failures and return empty results, so the
/// presentation layer needs a side channel to explain why a list is empty.
///
/// | Level | Typical cause | Suggested display |
/// |-------|---------------|-------------------|
/// | `Warning` | HTTP 429, skipped record | yellow banner |
/// | `Error` | HTTP 403, timeout, network | red banner |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    /// Transient condition, retrying later will likely succeed.
    Warning,

    /// Condition the user has to act on.
    Error,
}
