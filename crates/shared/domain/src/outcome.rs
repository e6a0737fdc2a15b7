//! Per-attempt submission results and the session state machine.

use serde::{Deserialize, Serialize};

/// Why a submit attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// A local rule rejected the form; nothing was sent.
    Validation,
    /// The request could not be sent or no response arrived.
    Transport,
    /// Non-2xx status or an explicit `ok:false` envelope.
    ServerRejection,
    /// The endpoint did not answer a connectivity probe; nothing was sent.
    ConnectivityDegraded,
}

/// Result of one submit attempt. Drives the status banner and the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Pending,
    Success { message: String },
    Failure { kind: FailureKind, message: String },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success { message: message.into() }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure { kind, message: message.into() }
    }

    /// Banner text; `None` while pending.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Success { message } | Self::Failure { message, .. } => Some(message.as_str()),
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Submission lifecycle of a form instance.
///
/// `Idle -> Pending -> Idle` on failure, `Idle -> Pending -> Navigating -> Idle` on success.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// Succeeded; waiting out the redirect delay before showing the confirmation view.
    Navigating,
}

impl SubmissionPhase {
    /// Whether a new submit attempt would be ignored.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Pending | Self::Navigating)
    }
}

/// Result of the latest reachability probe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    #[default]
    Unknown,
    Online,
    Offline,
}
