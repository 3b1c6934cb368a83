use anyhow::Result;

use crate::core::models::CaptureOutcome;

pub trait ImageSource: Send + Sync {
    fn acquire_image(&self) -> Result<CaptureOutcome>;
}
