use async_trait::async_trait;

use crate::core::models::{ImagePayload, RecognitionError, RecognitionResult};

#[async_trait]
pub trait FaceRecognitionService: Send + Sync {
    /// Uploads one image and resolves exactly once, with a result or a failure.
    async fn recognize(&self, image: &ImagePayload)
        -> Result<RecognitionResult, RecognitionError>;
}
