//! User-facing advisories attached to fetch results.
//!
//! Fetch operations never fail outright; on error they hand back the empty
//! value together with an [`Advisory`] explaining why. The advisory travels
//! inside the [`Fetched`] result, so concurrent callers only ever see the
//! advisories of their own requests.

use serde::Serialize;

use crate::errors::{AdvisoryLevel, FootballDataError};

/// User-facing message explaining why a fetch came back empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: String,
}

impl Advisory {
    /// Build the advisory for an error, `None` for silent errors.
    pub fn from_error(error: &FootballDataError) -> Option<Self> {
        error.advisory_level().map(|level| Self {
            level,
            message: error.to_string(),
        })
    }
}

/// Result of a fetch operation: the value (empty on failure) and the
/// advisory produced by this call, if any.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fetched<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

impl<T> Fetched<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            advisory: None,
        }
    }

    /// Empty-or-default value plus the advisory for `error`.
    pub fn failed(value: T, error: &FootballDataError) -> Self {
        Self {
            value,
            advisory: Advisory::from_error(error),
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: f(self.value),
            advisory: self.advisory,
        }
    }
}
