use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use p2h::domain::config::{LandingConfig, LoggingConfig, WindowConfig};
use p2h::registration::{HttpTransport, PageLocation, Registration, RegistrationError};
use p2h_logger::{LevelFilter, Logger, LoggerBuilder};

pub mod components;
pub mod content;
pub mod links;
pub mod views;

/// Location used when the shell is not opened from a campaign link.
pub const DEFAULT_PAGE_URL: &str = "https://prep2hire.com/";

const STYLESHEET: &str = include_str!("../assets/landing.css");

/// Shared with every component through the Dioxus context.
#[derive(Debug, Clone)]
pub struct LandingContext {
    pub config: LandingConfig,
    pub registration: Registration<HttpTransport>,
}

#[derive(Debug)]
pub struct LandingApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for LandingApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl LandingApp {
    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, context: LandingContext) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLESHEET}</style>"#
        ));

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(context.clone()))
            .launch(views::App);
    }
}

/// Page location from the first command-line argument when it is an absolute
/// URL (a campaign deep link), else [`DEFAULT_PAGE_URL`]. There is no referrer.
///
/// # Errors
/// Only if [`DEFAULT_PAGE_URL`] itself fails to parse.
pub fn page_location(arg: Option<String>) -> Result<PageLocation, RegistrationError> {
    match arg.as_deref().map(|url| PageLocation::parse(url, "")) {
        Some(Ok(location)) => Ok(location),
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Ignoring non-URL argument");
            PageLocation::parse(DEFAULT_PAGE_URL, "")
        },
        None => PageLocation::parse(DEFAULT_PAGE_URL, ""),
    }
}

/// Logger settings from the `[logging]` section.
///
/// # Errors
/// Returns an error if `level` is not a valid level name.
pub fn logger(name: &str, config: &LoggingConfig) -> anyhow::Result<LoggerBuilder> {
    let level: LevelFilter = config.level.parse()?;
    let mut builder = Logger::builder(name).level(level).json(config.json);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(directory) = &config.directory {
        builder = builder.directory(directory);
    }
    Ok(builder)
}
