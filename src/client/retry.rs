//! Retry state machine for request dispatch.
//!
//! Each attempt produces an [`AttemptOutcome`]. [`next_state`] maps that
//! outcome, the attempt index and the attempt budget to the next
//! [`DispatchState`]. The function is pure so the policy can be tested
//! without a server.
//!
//! Policy:
//!
//! | Outcome | Budget left | Budget spent |
//! |---|---|---|
//! | 2xx | success | success |
//! | 401, 429, 400 | fail now | fail now |
//! | other 4xx / 1xx / 3xx | fail now | fail now |
//! | 5xx | retry | [`Error::Server`] |
//! | timeout | retry | [`Error::Timeout`] |
//! | network fault | retry | [`Error::Network`] |
//!
//! Retries are immediate; there is no backoff delay.
//!
//! [`body_read`] decides whether an attempt reads the response body at all.

use crate::Error;

/// What a single request attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttemptOutcome {
    /// The server answered. `body` is empty when [`body_read`] skipped it.
    Response {
        status: u16,
        body: String,
        retry_after_secs: Option<u64>,
    },
    /// The attempt exceeded the configured timeout.
    Timeout,
    /// Any other transport fault, with its description.
    Network(String),
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptOutcome::Response { status, .. } => write!(f, "status {status}"),
            AttemptOutcome::Timeout => f.write_str("timeout"),
            AttemptOutcome::Network(fault) => write!(f, "network fault: {fault}"),
        }
    }
}

/// How the body of a response with a given status is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyRead {
    /// The status decides the outcome; the body is not read.
    Skip,
    /// The body is the payload; failing to read it is a transport fault.
    Required,
    /// The body only feeds an error message; a failed read leaves it empty.
    BestEffort,
}

/// Body handling for a response status.
pub(crate) fn body_read(status: u16) -> BodyRead {
    match status {
        200..=299 => BodyRead::Required,
        401 | 429 | 500.. => BodyRead::Skip,
        _ => BodyRead::BestEffort,
    }
}

/// State of a dispatch after an attempt.
#[derive(Debug)]
pub(crate) enum DispatchState {
    /// Send attempt `next` because of `cause`.
    Attempting { next: u32, cause: AttemptOutcome },
    /// The attempt succeeded; holds the raw response body.
    Success(String),
    /// The request failed for good.
    Failed(Error),
}

/// Compute the next state from the outcome of attempt `attempt`
/// (zero-based) out of `max_attempts`.
pub(crate) fn next_state(
    outcome: AttemptOutcome,
    attempt: u32,
    max_attempts: u32,
) -> DispatchState {
    let has_budget = attempt + 1 < max_attempts;
    let retryable = match &outcome {
        AttemptOutcome::Response { status, .. } => *status >= 500,
        AttemptOutcome::Timeout | AttemptOutcome::Network(_) => true,
    };
    if retryable && has_budget {
        return DispatchState::Attempting {
            next: attempt + 1,
            cause: outcome,
        };
    }

    let err = match outcome {
        AttemptOutcome::Response {
            status,
            body,
            retry_after_secs,
        } => match status {
            200..=299 => return DispatchState::Success(body),
            401 => Error::Authentication("Invalid API key".to_string()),
            429 => Error::RateLimited { retry_after_secs },
            400 => Error::from_validation_body(&body),
            500.. => Error::Server { status },
            _ => status_error(status, body),
        },
        AttemptOutcome::Timeout => Error::Timeout,
        AttemptOutcome::Network(fault) => Error::Network(fault),
    };
    DispatchState::Failed(err)
}

fn status_error(status: u16, body: String) -> Error {
    let message = if body.trim().is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unexpected status")
            .to_string()
    } else {
        body
    };
    Error::Status { status, message }
}
