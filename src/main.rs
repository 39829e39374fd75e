//! Console front for hazewatch: loads a saved PSI snapshot file and renders
//! the presentation output to stdout.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hazewatch::config::LoggingConfig;
use hazewatch::{
    AirQuality, HazewatchConfig, MapPresenter, MapPsiIndexItem, OutdoorActivityAdvise,
    PsiResponse, PsiView,
};

/// Renders presenter output as plain text
struct ConsoleView;

impl PsiView for ConsoleView {
    fn show_index(&mut self, items: Vec<MapPsiIndexItem>) {
        for item in items {
            println!(
                "  {:<8} PSI {:>3}  PM2.5 {:>3}  ({:.5}, {:.5})",
                item.name,
                item.psi_twenty_four_hourly,
                item.pm25_hourly,
                item.latitude,
                item.longitude
            );
        }
    }

    fn show_refresh_time(&mut self, text: String) {
        println!("Updated {text}");
    }

    fn show_air_quality_summary(&mut self, air_quality: AirQuality, advise: OutdoorActivityAdvise) {
        println!("Air quality: {air_quality} - {advise}");
    }

    fn show_error(&mut self) {
        eprintln!("Could not load air-quality data. Please try again later.");
    }

    fn start_loading(&mut self) {
        println!("Loading air-quality snapshot...");
    }

    fn stop_loading(&mut self) {}
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_snapshot(path: &str) -> Result<PsiResponse> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read snapshot file: {path}"))?;
    let response = PsiResponse::parse(&bytes)
        .with_context(|| format!("Failed to decode snapshot file: {path}"))?;
    Ok(response)
}

fn main() -> Result<()> {
    let config = HazewatchConfig::load()?;
    init_tracing(&config.logging);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.snapshot.path.clone());
    info!(path = %path, "presenting snapshot file");

    let mut presenter = MapPresenter::new(ConsoleView);

    presenter.present_loading_state(true);
    let result = load_snapshot(&path);
    presenter.present_loading_state(false);

    match result {
        Ok(response) => {
            presenter.present_data(&response);
            Ok(())
        }
        Err(err) => {
            presenter.present_error();
            Err(err)
        }
    }
}
