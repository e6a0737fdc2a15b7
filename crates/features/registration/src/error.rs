use std::borrow::Cow;

/// Failures below the submission workflow. The workflow turns all of them into
/// a `SubmissionOutcome::Failure`; they never reach the UI as errors.
#[p2h_derive::p2h_error]
pub enum RegistrationError {
    /// The request could not be sent or its response could not be read.
    #[error("Webhook request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The configured endpoint or page location is not an absolute URL.
    #[error("Invalid endpoint URL{}: {source}", format_context(.context))]
    Endpoint { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
