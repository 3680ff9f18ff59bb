//! Scenario outcomes and the assertion helpers that produce them

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::Response;
use crate::common::truncate_body;

/// Longest body excerpt quoted in a failure reason
const BODY_EXCERPT_CHARS: usize = 200;

/// Result of one assertion: `Err` carries the failure reason
pub type Check<T = ()> = std::result::Result<T, String>;

/// Three-valued result of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Every assertion held
    Pass,
    /// The service broke its contract, or the request never completed
    Fail { reason: String },
    /// A precondition produced by an earlier scenario was missing
    Skipped { reason: String },
}

/// Outcome without its reason, for comparing runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Pass,
    Fail,
    Skipped,
}

impl ScenarioOutcome {
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Pass => OutcomeKind::Pass,
            Self::Fail { .. } => OutcomeKind::Fail,
            Self::Skipped { .. } => OutcomeKind::Skipped,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail { reason } | Self::Skipped { reason } => Some(reason),
        }
    }
}

impl<T> From<Check<T>> for ScenarioOutcome {
    fn from(check: Check<T>) -> Self {
        match check {
            Ok(_) => Self::Pass,
            Err(reason) => Self::Fail { reason },
        }
    }
}

/// Exact status match
pub fn status_is(response: &Response, expected: StatusCode) -> Check {
    if response.status == expected {
        Ok(())
    } else {
        Err(format!(
            "Expected status {}, got {} (body: {})",
            expected.as_u16(),
            response.status.as_u16(),
            truncate_body(&response.body, BODY_EXCERPT_CHARS)
        ))
    }
}

/// Substring match against the raw body
pub fn body_contains(response: &Response, needle: &str) -> Check {
    if response.body.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "Expected body to contain '{}', got: {}",
            needle,
            truncate_body(&response.body, BODY_EXCERPT_CHARS)
        ))
    }
}

/// Parse the body as JSON, failing the check if it is not
pub fn parse_body<T: DeserializeOwned>(response: &Response) -> Check<T> {
    response.json().map_err(|e| {
        format!(
            "Response body is not the expected JSON ({}): {}",
            e,
            truncate_body(&response.body, BODY_EXCERPT_CHARS)
        )
    })
}
