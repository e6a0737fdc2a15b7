#![windows_subsystem = "windows"]

use anyhow::Context;
use p2h::domain::config::LandingConfig;
use p2h::kernel::config::load_config;
use p2h::kernel::router::Router;
use p2h::registration::AttributionCell;
use p2h_landing::{LandingApp, LandingContext};

static ATTRIBUTION: AttributionCell = AttributionCell::new();

fn main() -> anyhow::Result<()> {
    let config: LandingConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _logger = p2h_landing::logger(env!("CARGO_PKG_NAME"), &config.logging)?.init()?;

    let location = p2h_landing::page_location(std::env::args().nth(1))?;
    let attribution = ATTRIBUTION.capture(&location).clone();
    let router = Router::new(location.url.path());

    let registration = p2h::init(&config, attribution, router)
        .context("Critical: Registration endpoint is invalid")?;

    LandingApp::from_config(&config.window).launch(LandingContext { config, registration });

    Ok(())
}
