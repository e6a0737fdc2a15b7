//! Turns a webhook reply into a [`SubmissionOutcome`].

use p2h_domain::constants::{OK_FALSE_MESSAGE, SUCCESS_MESSAGE};
use p2h_domain::outcome::{FailureKind, SubmissionOutcome};
use serde::Deserialize;

/// Optional JSON reply of the webhook. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: Option<bool>,
    error: Option<String>,
}

/// Interprets a received response.
///
/// Non-2xx is a rejection carrying the status and trimmed body. A 2xx body that
/// is not the JSON envelope counts as success; only an explicit `ok:false` fails.
#[must_use]
pub fn interpret(status: u16, body: &str) -> SubmissionOutcome {
    if !(200..300).contains(&status) {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("Failed to submit (status {status})")
        } else {
            format!("Failed to submit (status {status}): {body}")
        };
        return SubmissionOutcome::failure(FailureKind::ServerRejection, message);
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(Envelope { ok: Some(false), error }) => {
            let message = error.filter(|e| !e.is_empty()).unwrap_or_else(|| OK_FALSE_MESSAGE.to_owned());
            SubmissionOutcome::failure(FailureKind::ServerRejection, message)
        },
        _ => SubmissionOutcome::success(SUCCESS_MESSAGE),
    }
}
