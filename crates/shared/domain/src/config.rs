use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the landing shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LandingConfigInner {
    pub registration: RegistrationConfig,
    pub contact: ContactConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct LandingConfig {
    #[serde(flatten, default)]
    inner: Arc<LandingConfigInner>,
}

impl Deref for LandingConfig {
    type Target = LandingConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for LandingConfig {
    fn deref_mut(&mut self) -> &mut LandingConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Lead webhook settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Spreadsheet-backed webhook receiving `application/x-www-form-urlencoded` posts.
    pub endpoint: String,
    /// Pause between the success banner and the confirmation view.
    pub redirect_delay_ms: u64,
    /// Issue a reachability `GET` against the endpoint at startup.
    pub probe_on_start: bool,
    /// Pause between probes while the endpoint is unreachable.
    pub probe_retry_ms: u64,
    /// Overrides the client identifier sent as `userAgent`.
    pub client_id: Option<String>,
}

/// Contact details rendered in the footer and the chat deep link.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    /// Digits only, country code included, as `wa.me` expects.
    pub whatsapp_number: String,
    pub whatsapp_message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Explicit filter directives; `RUST_LOG` applies when unset.
    pub filter: Option<String>,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://script.google.com/macros/s/PASTE_YOUR_DEPLOYMENT_ID/exec".to_owned(),
            redirect_delay_ms: 700,
            probe_on_start: true,
            probe_retry_ms: 5000,
            client_id: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@prep2hire.com".to_owned(),
            whatsapp_number: "7738652507".to_owned(),
            whatsapp_message: "Hi Prep2Hire, I want to join the Java course".to_owned(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Prep2Hire".to_owned(), width: 1200.0, height: 860.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
