use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::ImageSource;
use crate::core::models::CaptureOutcome;
use crate::global_constants::LOG_TAG_CAPTURE;

/// Stands in for the camera: the "photo" is an image file on disk.
pub struct FileImageSource {
    image_path: Option<PathBuf>,
}

impl FileImageSource {
    pub fn initialize(image_path: Option<PathBuf>) -> Self {
        log::debug!("{} initializing file image source: {:?}", LOG_TAG_CAPTURE, image_path);
        Self { image_path }
    }
}

impl ImageSource for FileImageSource {
    fn acquire_image(&self) -> Result<CaptureOutcome> {
        let image_path = match &self.image_path {
            Some(path) => path,
            None => {
                log::info!("{} no image path given, capture cancelled", LOG_TAG_CAPTURE);
                return Ok(CaptureOutcome::NotCaptured);
            }
        };

        if !image_path.exists() {
            log::warn!("{} image file {:?} does not exist", LOG_TAG_CAPTURE, image_path);
            return Ok(CaptureOutcome::NotCaptured);
        }

        let image = image::open(image_path)
            .with_context(|| format!("failed to decode image {:?}", image_path))?;

        log::info!(
            "{} captured {}x{} image from {:?}",
            LOG_TAG_CAPTURE,
            image.width(),
            image.height(),
            image_path
        );

        Ok(CaptureOutcome::Captured(image))
    }
}
