mod adapters;
mod core;
mod global_constants;
mod ports;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapters::HttpFaceRecognitionService;
use crate::core::models::ClientSettings;
use crate::core::orchestrators::RecognitionOrchestrator;
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN};
use crate::ports::{ConsoleNotifier, FileImageSource};

#[derive(Parser, Debug)]
#[command(name = "face-recog-client", about = "Send a photo to a face recognition service")]
struct Cli {
    /// Photo to recognize. Without it the capture counts as cancelled.
    image: Option<PathBuf>,
    /// Recognition service base URL, `recognize` is appended to it
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let settings = ClientSettings::load()
        .context("failed to load settings")?
        .with_overrides(cli.base_url, cli.timeout_secs);

    if cli.save_settings {
        let settings_path = settings.save()?;
        log::info!("{} Settings written to {:?}", LOG_TAG_MAIN, settings_path);
    }

    let recognition_service = HttpFaceRecognitionService::from_settings(&settings)
        .context("failed to create recognition client")?;
    log::info!(
        "{} Recognition endpoint: {}",
        LOG_TAG_MAIN,
        recognition_service.recognize_url()
    );

    let orchestrator = RecognitionOrchestrator::new(
        Arc::new(FileImageSource::initialize(cli.image)),
        Arc::new(recognition_service),
        Arc::new(ConsoleNotifier::initialize()),
        settings.jpeg_quality,
    );

    let notification = orchestrator.run_capture_cycle().await;
    log::debug!("{} Cycle finished: {:?}", LOG_TAG_MAIN, notification);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_image_and_overrides() {
        let cli = Cli::parse_from([
            "face-recog-client",
            "photo.jpg",
            "--base-url",
            "http://localhost:5000/",
            "--timeout-secs",
            "10",
        ]);

        assert_eq!(cli.image, Some(PathBuf::from("photo.jpg")));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:5000/"));
        assert_eq!(cli.timeout_secs, Some(10));
        assert!(!cli.save_settings);
    }

    #[test]
    fn test_cli_without_image_is_allowed() {
        let cli = Cli::parse_from(["face-recog-client"]);

        assert!(cli.image.is_none());
    }
}
