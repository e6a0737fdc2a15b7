use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/landing";
/// Prefix of environment overrides (`P2H__REGISTRATION__ENDPOINT` -> `registration.endpoint`).
pub const ENV_PREFIX: &str = "P2H";

#[p2h_derive::p2h_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional file overlaid with environment overrides.
///
/// 1. **Base File**: `path` (or [`DEFAULT_CONFIG_PATH`]). Without an extension every
///    supported format is tried (`landing.toml`, `landing.json`, ...). A missing file
///    is not an error, so `T` should default every field.
/// 2. **Environment Overrides**: variables prefixed `P2H__`, nested with `__`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is malformed or the merged values
/// do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use p2h_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
