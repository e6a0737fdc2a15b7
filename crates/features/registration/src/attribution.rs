//! Campaign attribution read from the page location.

use crate::error::{RegistrationError, RegistrationErrorExt};
use p2h_domain::attribution::AttributionContext;
use p2h_domain::constants::UTM_KEYS;
use std::sync::OnceLock;
use url::Url;

/// Where the page was opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub url: Url,
    pub referrer: String,
}

impl PageLocation {
    /// # Errors
    /// Returns [`RegistrationError::Endpoint`] when `url` is not absolute.
    pub fn parse(url: &str, referrer: impl Into<String>) -> Result<Self, RegistrationError> {
        let url = Url::parse(url).context("Parsing page location")?;
        Ok(Self { url, referrer: referrer.into() })
    }
}

/// Reads the `utm_*` query parameters and the referrer.
///
/// The first occurrence of a key wins. Absent keys stay empty.
#[must_use]
pub fn capture_attribution(location: &PageLocation) -> AttributionContext {
    let mut context =
        AttributionContext { referrer: location.referrer.clone(), ..AttributionContext::default() };
    for key in UTM_KEYS {
        let value = location
            .url
            .query_pairs()
            .find_map(|(k, v)| (k == key).then(|| v.into_owned()))
            .unwrap_or_default();
        context.set_utm(key, value);
    }
    context
}

/// Session-wide memo of the first capture.
#[derive(Debug, Default)]
pub struct AttributionCell {
    captured: OnceLock<AttributionContext>,
}

impl AttributionCell {
    #[must_use]
    pub const fn new() -> Self {
        Self { captured: OnceLock::new() }
    }

    /// Captures from `location` on the first call. Later calls return the stored
    /// context and ignore their argument.
    pub fn capture(&self, location: &PageLocation) -> &AttributionContext {
        self.captured.get_or_init(|| {
            let context = capture_attribution(location);
            tracing::debug!(
                source = %context.utm_source,
                medium = %context.utm_medium,
                campaign = %context.utm_campaign,
                "Attribution captured"
            );
            context
        })
    }

    #[must_use]
    pub fn get(&self) -> Option<&AttributionContext> {
        self.captured.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utm_keys_and_referrer() {
        let location = PageLocation::parse(
            "https://prep2hire.com/?utm_source=google&utm_medium=cpc&utm_campaign=fall%20launch&utm_term=java+course&utm_content=ad1&gclid=x",
            "https://search.example/",
        )
        .unwrap();
        let context = capture_attribution(&location);
        assert_eq!(context.utm_source, "google");
        assert_eq!(context.utm_medium, "cpc");
        assert_eq!(context.utm_campaign, "fall launch");
        assert_eq!(context.utm_term, "java course");
        assert_eq!(context.utm_content, "ad1");
        assert_eq!(context.referrer, "https://search.example/");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let location = PageLocation::parse("https://prep2hire.com/thanks", "").unwrap();
        assert_eq!(capture_attribution(&location), AttributionContext::default());
    }

    #[test]
    fn first_occurrence_wins() {
        let location =
            PageLocation::parse("https://prep2hire.com/?utm_source=a&utm_source=b&utm_term=&utm_term=c", "")
                .unwrap();
        let context = capture_attribution(&location);
        assert_eq!(context.utm_source, "a");
        assert_eq!(context.utm_term, "");
    }

    #[test]
    fn relative_location_is_rejected() {
        let err = PageLocation::parse("/?utm_source=x", "").unwrap_err();
        assert!(matches!(err, RegistrationError::Endpoint { .. }));
        assert!(err.to_string().contains("Parsing page location"));
    }
}
