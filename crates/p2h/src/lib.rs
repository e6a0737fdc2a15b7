//! Facade crate for Prep2Hire features and shared modules.
//! Re-exports domain/kernel primitives and wires the registration slice from config.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use p2h_domain as domain;
pub use p2h_kernel as kernel;
pub use p2h_registration as registration;

use p2h_domain::attribution::AttributionContext;
use p2h_domain::config::LandingConfig;
use p2h_kernel::router::Router;
use p2h_registration::payload::default_client_id;
use p2h_registration::{HttpTransport, Registration, RegistrationError};
use std::time::Duration;

/// Builds the registration session described by `config`.
///
/// `config.registration.client_id` replaces the default client identifier in
/// both the payload and the `User-Agent` header.
///
/// # Errors
/// Returns an error if the endpoint is not an absolute URL or the HTTP client
/// cannot be created.
pub fn init(
    config: &LandingConfig,
    attribution: AttributionContext,
    router: Router,
) -> Result<Registration<HttpTransport>, RegistrationError> {
    let settings = &config.registration;
    let client_id = settings.client_id.clone().unwrap_or_else(default_client_id);
    let transport = HttpTransport::new(&settings.endpoint, &client_id)?;

    Ok(Registration::builder(transport)
        .router(router)
        .attribution(attribution)
        .client_id(client_id)
        .redirect_delay(Duration::from_millis(settings.redirect_delay_ms))
        .build())
}
