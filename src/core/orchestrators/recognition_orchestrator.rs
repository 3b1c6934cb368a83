use std::sync::Arc;

use crate::core::interfaces::adapters::FaceRecognitionService;
use crate::core::interfaces::ports::{ImageSource, Notifier};
use crate::core::models::{
    CaptureOutcome, ImagePayload, Notification, RecognitionError, RecognitionResult,
};
use crate::global_constants::LOG_TAG_ORCHESTRATOR;

/// Runs one capture -> upload -> notify cycle.
pub struct RecognitionOrchestrator {
    image_source: Arc<dyn ImageSource>,
    recognition_service: Arc<dyn FaceRecognitionService>,
    notifier: Arc<dyn Notifier>,
    jpeg_quality: u8,
}

impl RecognitionOrchestrator {
    pub fn new(
        image_source: Arc<dyn ImageSource>,
        recognition_service: Arc<dyn FaceRecognitionService>,
        notifier: Arc<dyn Notifier>,
        jpeg_quality: u8,
    ) -> Self {
        Self {
            image_source,
            recognition_service,
            notifier,
            jpeg_quality,
        }
    }

    pub async fn run_capture_cycle(&self) -> Notification {
        let outcome = self.recognize_captured_image().await;

        if let Err(error) = &outcome {
            log::warn!("{} Recognition cycle failed: {}", LOG_TAG_ORCHESTRATOR, error);
        }

        let notification = Notification::from_outcome(&outcome);
        self.notifier.show(&notification);
        notification
    }

    pub async fn recognize_captured_image(&self) -> Result<RecognitionResult, RecognitionError> {
        let image = match self.image_source.acquire_image() {
            Ok(CaptureOutcome::Captured(image)) => image,
            Ok(CaptureOutcome::NotCaptured) => {
                log::info!("{} No image captured, skipping request", LOG_TAG_ORCHESTRATOR);
                return Err(RecognitionError::NoImageCaptured);
            }
            Err(error) => {
                log::error!("{} Image acquisition failed: {:#}", LOG_TAG_ORCHESTRATOR, error);
                return Err(RecognitionError::NoImageCaptured);
            }
        };

        let payload = ImagePayload::encode_jpeg(&image, self.jpeg_quality)
            .map_err(|error| RecognitionError::InvalidPayload(format!("{:#}", error)))?;

        log::info!(
            "{} Submitting {} byte capture for recognition",
            LOG_TAG_ORCHESTRATOR,
            payload.byte_count()
        );

        self.recognition_service.recognize(&payload).await
    }
}
