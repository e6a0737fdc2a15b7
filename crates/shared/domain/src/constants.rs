/// Path of the landing page.
pub const HOME_PATH: &str = "/";
/// Path of the post-registration confirmation view.
pub const THANKS_PATH: &str = "/thanks";

/// Query keys read for campaign attribution, in payload order.
pub const UTM_KEYS: [&str; 5] = ["utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content"];

pub const SUCCESS_MESSAGE: &str = "Registered! Check your email for next steps.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong.";
pub const OK_FALSE_MESSAGE: &str = "Server returned ok=false";
pub const OFFLINE_MESSAGE: &str =
    "Registration is temporarily unavailable. Please try again later.";
