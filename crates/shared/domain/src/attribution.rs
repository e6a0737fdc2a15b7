use serde::{Deserialize, Serialize};

/// Marketing attribution captured once per page load.
///
/// Every field is an empty string when the source did not provide it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionContext {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
    pub referrer: String,
}

impl AttributionContext {
    /// Key/value view in payload order (`utm_*` first, then `referrer`).
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("utm_source", &self.utm_source),
            ("utm_medium", &self.utm_medium),
            ("utm_campaign", &self.utm_campaign),
            ("utm_term", &self.utm_term),
            ("utm_content", &self.utm_content),
            ("referrer", &self.referrer),
        ]
    }

    /// Stores `value` under the matching `utm_*` key. Unknown keys are ignored.
    pub fn set_utm(&mut self, key: &str, value: impl Into<String>) {
        let slot = match key {
            "utm_source" => &mut self.utm_source,
            "utm_medium" => &mut self.utm_medium,
            "utm_campaign" => &mut self.utm_campaign,
            "utm_term" => &mut self.utm_term,
            "utm_content" => &mut self.utm_content,
            _ => return,
        };
        *slot = value.into();
    }
}
