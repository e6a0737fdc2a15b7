//! The submission workflow and the per-form session state around it.

use crate::payload::{LeadPayload, default_client_id};
use crate::response::interpret;
use crate::transport::LeadTransport;
use crate::validator::validate;
use chrono::{DateTime, Utc};
use p2h_domain::attribution::AttributionContext;
use p2h_domain::constants::{OFFLINE_MESSAGE, THANKS_PATH, TRANSPORT_FAILURE_MESSAGE};
use p2h_domain::form::{FieldUpdate, RegistrationForm};
use p2h_domain::outcome::{Connectivity, FailureKind, SubmissionOutcome, SubmissionPhase};
use p2h_kernel::router::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(700);

/// Everything the page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub form: RegistrationForm,
    pub phase: SubmissionPhase,
    /// Result of the latest attempt. `None` until the first one.
    pub outcome: Option<SubmissionOutcome>,
    pub connectivity: Connectivity,
}

impl SessionSnapshot {
    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.phase.is_busy() && self.connectivity != Connectivity::Offline
    }
}

/// Result of [`Registration::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Finished(SubmissionOutcome),
    /// Another attempt was pending or navigating. Nothing happened.
    AlreadyPending,
}

impl Submission {
    #[must_use]
    pub const fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            Self::AlreadyPending => None,
        }
    }
}

struct Inner<T> {
    transport: T,
    router: Router,
    attribution: AttributionContext,
    client_id: String,
    redirect_delay: Duration,
    state: watch::Sender<SessionSnapshot>,
}

/// One registration form and its submission lifecycle.
///
/// Clones share the same session. State changes are published on a watch
/// channel, see [`Registration::subscribe`].
pub struct Registration<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> std::fmt::Debug for Registration<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("phase", &self.inner.state.borrow().phase)
            .field("redirect_delay", &self.inner.redirect_delay)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct RegistrationBuilder<T> {
    transport: T,
    router: Option<Router>,
    attribution: AttributionContext,
    client_id: Option<String>,
    redirect_delay: Duration,
    form: RegistrationForm,
}

impl<T: LeadTransport> RegistrationBuilder<T> {
    /// Router switched to the confirmation view after a success. A fresh one
    /// starting at `/` is used when unset.
    #[must_use]
    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    #[must_use]
    pub fn attribution(mut self, attribution: AttributionContext) -> Self {
        self.attribution = attribution;
        self
    }

    /// Value of the `userAgent` field. Defaults to [`default_client_id`].
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    #[must_use]
    pub const fn redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Initial field values. Defaults to [`RegistrationForm::default`].
    #[must_use]
    pub fn form(mut self, form: RegistrationForm) -> Self {
        self.form = form;
        self
    }

    pub fn build(self) -> Registration<T> {
        let snapshot = SessionSnapshot { form: self.form, ..SessionSnapshot::default() };
        Registration {
            inner: Arc::new(Inner {
                transport: self.transport,
                router: self.router.unwrap_or_default(),
                attribution: self.attribution,
                client_id: self.client_id.unwrap_or_else(default_client_id),
                redirect_delay: self.redirect_delay,
                state: watch::Sender::new(snapshot),
            }),
        }
    }
}

enum Admission {
    Busy,
    Rejected(SubmissionOutcome),
    /// `recheck` is set when the last probe failed and must be repeated first.
    Accepted { form: RegistrationForm, recheck: bool },
}

impl<T: LeadTransport> Registration<T> {
    pub fn builder(transport: T) -> RegistrationBuilder<T> {
        RegistrationBuilder {
            transport,
            router: None,
            attribution: AttributionContext::default(),
            client_id: None,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            form: RegistrationForm::default(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.inner.router
    }

    #[must_use]
    pub fn attribution(&self) -> &AttributionContext {
        &self.inner.attribution
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.inner.state.borrow().can_submit()
    }

    /// Applies a field edit. Accepted in every phase.
    pub fn update(&self, update: FieldUpdate) {
        self.inner.state.send_if_modified(|state| {
            let before = state.form.clone();
            state.form.apply(update);
            state.form != before
        });
    }

    /// Checks that the endpoint answers at all and records the result.
    pub async fn probe(&self) -> Connectivity {
        let connectivity = match self.inner.transport.probe().await {
            Ok(response) => {
                info!(status = response.status, "Webhook reachable");
                Connectivity::Online
            },
            Err(e) => {
                warn!(error = %e, "Webhook unreachable");
                Connectivity::Offline
            },
        };
        self.inner.state.send_modify(|state| state.connectivity = connectivity);
        connectivity
    }

    /// Probes once, then again every `interval` for as long as the endpoint
    /// stays unreachable. Returns once a probe gets an answer.
    pub async fn probe_until_online(&self, interval: Duration) {
        while self.probe().await == Connectivity::Offline {
            debug!(?interval, "Retrying connectivity probe");
            tokio::time::sleep(interval).await;
        }
    }

    /// Runs one submit attempt.
    ///
    /// Busy sessions return [`Submission::AlreadyPending`] untouched. Invalid
    /// forms fail without a request. An offline session probes again first and
    /// fails without a request if the endpoint still does not answer. Otherwise
    /// the form is posted once; on success `goals` is cleared and, after the
    /// redirect delay, the router moves to the confirmation view.
    pub async fn submit(&self) -> Submission {
        let (form, recheck) = match self.admit() {
            Admission::Busy => {
                debug!("Submit ignored, another attempt is in progress");
                return Submission::AlreadyPending;
            },
            Admission::Rejected(outcome) => return Submission::Finished(outcome),
            Admission::Accepted { form, recheck } => (form, recheck),
        };

        let mut in_flight = InFlight::new(&self.inner.state);
        if recheck && self.probe().await == Connectivity::Offline {
            let outcome = SubmissionOutcome::failure(FailureKind::ConnectivityDegraded, OFFLINE_MESSAGE);
            in_flight.finish(|state| {
                state.phase = SubmissionPhase::Idle;
                state.outcome = Some(outcome.clone());
            });
            return Submission::Finished(outcome);
        }

        info!(course = %form.course, experience = %form.experience, "Submitting registration");
        let payload =
            LeadPayload::assemble(&form, &self.inner.attribution, Utc::now(), &self.inner.client_id);
        let outcome = deliver(&self.inner.transport, &payload).await;

        if !outcome.is_success() {
            in_flight.finish(|state| {
                state.phase = SubmissionPhase::Idle;
                state.outcome = Some(outcome.clone());
            });
            return Submission::Finished(outcome);
        }

        info!("Registration accepted");
        self.inner.state.send_modify(|state| {
            state.form.goals.clear();
            state.phase = SubmissionPhase::Navigating;
            state.outcome = Some(outcome.clone());
        });
        tokio::time::sleep(self.inner.redirect_delay).await;
        self.inner.router.navigate(THANKS_PATH);
        in_flight.finish(|state| state.phase = SubmissionPhase::Idle);
        Submission::Finished(outcome)
    }

    /// Check-and-set of the phase, so two callers can never both get `Accepted`.
    fn admit(&self) -> Admission {
        let mut admission = Admission::Busy;
        self.inner.state.send_if_modified(|state| {
            if state.phase.is_busy() {
                return false;
            }
            admission = if let Err(e) = validate(&state.form) {
                debug!(rule = ?e, "Registration form rejected");
                Admission::Rejected(SubmissionOutcome::failure(FailureKind::Validation, e.to_string()))
            } else {
                state.phase = SubmissionPhase::Pending;
                Admission::Accepted {
                    form: state.form.clone(),
                    recheck: state.connectivity == Connectivity::Offline,
                }
            };
            state.outcome = Some(match &admission {
                Admission::Rejected(outcome) => outcome.clone(),
                _ => SubmissionOutcome::Pending,
            });
            true
        });
        admission
    }
}

/// Resets a busy phase if the submit future is dropped before it finishes.
struct InFlight<'a> {
    state: &'a watch::Sender<SessionSnapshot>,
    done: bool,
}

impl<'a> InFlight<'a> {
    const fn new(state: &'a watch::Sender<SessionSnapshot>) -> Self {
        Self { state, done: false }
    }

    fn finish(&mut self, apply: impl FnOnce(&mut SessionSnapshot)) {
        self.state.send_modify(apply);
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            warn!("Submission abandoned before completion");
            self.state.send_modify(|state| {
                state.phase = SubmissionPhase::Idle;
                if state.outcome.as_ref().is_some_and(SubmissionOutcome::is_pending) {
                    state.outcome = None;
                }
            });
        }
    }
}

/// Posts an encoded payload once and interprets whatever comes back.
pub async fn deliver<T: LeadTransport>(transport: &T, payload: &LeadPayload) -> SubmissionOutcome {
    match transport.post_form(payload.encode()).await {
        Ok(response) => {
            let outcome = interpret(response.status, &response.body);
            if let Some(kind) = outcome.failure_kind() {
                warn!(status = response.status, ?kind, "Webhook rejected registration");
            }
            outcome
        },
        Err(e) => {
            warn!(error = %e, "Registration request failed");
            SubmissionOutcome::failure(FailureKind::Transport, TRANSPORT_FAILURE_MESSAGE)
        },
    }
}

/// Stateless form of the workflow: validate, assemble, post, interpret.
///
/// Performs no request when validation fails.
pub async fn submit_form<T: LeadTransport>(
    transport: &T,
    form: &RegistrationForm,
    attribution: &AttributionContext,
    submitted_at: DateTime<Utc>,
    client_id: &str,
) -> SubmissionOutcome {
    if let Err(e) = validate(form) {
        return SubmissionOutcome::failure(FailureKind::Validation, e.to_string());
    }
    let payload = LeadPayload::assemble(form, attribution, submitted_at, client_id);
    deliver(transport, &payload).await
}
