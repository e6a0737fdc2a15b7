use p2h::domain::config::ContactConfig;
use url::Url;

const CHAT_BASE: &str = "https://wa.me/";

/// Chat deep link with a prefilled message, `https://wa.me/<number>?text=<message>`.
///
/// Non-digit characters are dropped from `number`.
///
/// # Errors
/// Returns an error if the resulting URL cannot be built.
pub fn chat_link(number: &str, message: &str) -> Result<Url, url::ParseError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let mut link = Url::parse(CHAT_BASE)?.join(&digits)?;
    link.query_pairs_mut().append_pair("text", message);
    Ok(link)
}

/// `href` for the chat anchors. Falls back to the bare chat site.
#[must_use]
pub fn chat_href(contact: &ContactConfig) -> String {
    chat_link(&contact.whatsapp_number, &contact.whatsapp_message).map_or_else(
        |e| {
            tracing::warn!(error = %e, "Invalid chat link, using fallback");
            CHAT_BASE.to_owned()
        },
        String::from,
    )
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_prefilled_link() {
        let link = chat_link("7738652507", "Hi Prep2Hire, I want to join the Java course").unwrap();
        assert_eq!(
            link.as_str(),
            "https://wa.me/7738652507?text=Hi+Prep2Hire%2C+I+want+to+join+the+Java+course"
        );
    }

    #[test]
    fn strips_formatting_from_number() {
        let link = chat_link("+91 (773) 865-2507", "hi").unwrap();
        assert_eq!(link.path(), "/917738652507");
    }

    #[test]
    fn default_contact_has_a_link() {
        let href = chat_href(&ContactConfig::default());
        assert!(href.starts_with("https://wa.me/7738652507?text="));
    }
}
