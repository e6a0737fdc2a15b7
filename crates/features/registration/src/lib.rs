//! # Registration
//!
//! Lead capture for the landing page: local validation, payload assembly,
//! the webhook `POST`, response interpretation and the session state machine
//! that keeps at most one submission in flight.
//!
//! ## Example
//!
//! ```rust,no_run
//! use p2h_registration::{HttpTransport, Registration, Submission};
//! use p2h_registration::domain::form::FieldUpdate;
//!
//! # async fn run() -> Result<(), p2h_registration::RegistrationError> {
//! let transport = HttpTransport::new("https://hooks.example.com/exec", "p2h/0.1")?;
//! let registration = Registration::builder(transport).build();
//!
//! registration.update(FieldUpdate::FullName("Jane Doe".to_owned()));
//! registration.update(FieldUpdate::Email("jane@x.com".to_owned()));
//! registration.update(FieldUpdate::Phone("+1-555-0100".to_owned()));
//!
//! if let Submission::Finished(outcome) = registration.submit().await {
//!     println!("{:?}", outcome.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod attribution;
mod error;
pub mod payload;
pub mod response;
pub mod session;
pub mod transport;
pub mod validator;

pub use crate::attribution::{AttributionCell, PageLocation, capture_attribution};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::payload::LeadPayload;
pub use crate::session::{Registration, RegistrationBuilder, SessionSnapshot, Submission};
pub use crate::transport::{HttpTransport, LeadTransport, WebhookResponse};
pub use crate::validator::{ValidationError, validate};
pub use p2h_domain as domain;
