//! Flat key/value lead record sent to the webhook.

use chrono::{DateTime, SecondsFormat, Utc};
use p2h_domain::attribution::AttributionContext;
use p2h_domain::form::RegistrationForm;
use url::form_urlencoded;

/// Content type of [`LeadPayload::encode`].
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One lead, as ordered key/value pairs.
///
/// Order is fixed: form fields, attribution, `submittedAt`, `userAgent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadPayload {
    fields: Vec<(&'static str, String)>,
}

impl LeadPayload {
    /// Flattens a form snapshot and the session attribution.
    #[must_use]
    pub fn assemble(
        form: &RegistrationForm,
        attribution: &AttributionContext,
        submitted_at: DateTime<Utc>,
        client_id: &str,
    ) -> Self {
        let mut fields = vec![
            ("fullName", form.full_name.clone()),
            ("email", form.email.clone()),
            ("phone", form.phone.clone()),
            ("experience", form.experience.label().to_owned()),
            ("course", form.course.label().to_owned()),
            ("batch", form.batch.label().to_owned()),
            ("goals", form.goals.clone()),
            ("consent", form.consent.to_string()),
        ];
        fields.extend(attribution.pairs().into_iter().map(|(key, value)| (key, value.to_owned())));
        fields.push(("submittedAt", format_timestamp(submitted_at)));
        fields.push(("userAgent", client_id.to_owned()));
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// `application/x-www-form-urlencoded` body, spaces as `+`.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.fields).finish()
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-09-01T10:00:00.000Z`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Identifies this client in the `userAgent` field and the HTTP `User-Agent` header.
#[must_use]
pub fn default_client_id() -> String {
    format!(
        "{}/{} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use p2h_domain::form::{Course, Experience, FieldUpdate};

    fn sample() -> LeadPayload {
        let form = RegistrationForm::default()
            .with(FieldUpdate::FullName("Jane Doe".to_owned()))
            .with(FieldUpdate::Email("jane@x.com".to_owned()))
            .with(FieldUpdate::Phone("+1-555-0100".to_owned()))
            .with(FieldUpdate::Experience(Experience::OneToThreeYears))
            .with(FieldUpdate::Course(Course::DataEngineering))
            .with(FieldUpdate::Goals("Get a backend role & grow".to_owned()));
        let attribution = AttributionContext {
            utm_source: "google".to_owned(),
            utm_campaign: "fall launch".to_owned(),
            ..AttributionContext::default()
        };
        let at = Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).single().unwrap();
        LeadPayload::assemble(&form, &attribution, at, "p2h-test/0.1")
    }

    #[test]
    fn keys_are_in_wire_order() {
        let keys: Vec<_> = sample().fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            [
                "fullName",
                "email",
                "phone",
                "experience",
                "course",
                "batch",
                "goals",
                "consent",
                "utm_source",
                "utm_medium",
                "utm_campaign",
                "utm_term",
                "utm_content",
                "referrer",
                "submittedAt",
                "userAgent",
            ]
        );
    }

    #[test]
    fn values_use_labels_and_defaults() {
        let payload = sample();
        assert_eq!(payload.get("experience"), Some("1–3 years"));
        assert_eq!(payload.get("course"), Some("Data Engineering (Java + Spark + SQL)"));
        assert_eq!(payload.get("batch"), Some("Weekend (Sat–Sun)"));
        assert_eq!(payload.get("consent"), Some("true"));
        assert_eq!(payload.get("utm_medium"), Some(""));
        assert_eq!(payload.get("submittedAt"), Some("2025-09-01T10:00:00.000Z"));
        assert_eq!(payload.get("userAgent"), Some("p2h-test/0.1"));
        assert_eq!(payload.get("missing"), None);
    }

    #[test]
    fn encodes_as_form_body() {
        let body = sample().encode();
        assert!(body.starts_with("fullName=Jane+Doe&email=jane%40x.com&phone=%2B1-555-0100&"));
        assert!(body.contains("&goals=Get+a+backend+role+%26+grow&consent=true&"));
        assert!(body.contains("&utm_campaign=fall+launch&"));
        assert!(body.contains("&submittedAt=2025-09-01T10%3A00%3A00.000Z&"));
    }

    #[test]
    fn client_id_names_the_crate() {
        assert!(default_client_id().starts_with("p2h-registration/"));
    }
}
