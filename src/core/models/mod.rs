mod capture_outcome;
mod client_settings;
mod image_payload;
mod notification;
mod recognition_error;
mod recognition_result;

pub use capture_outcome::CaptureOutcome;
pub use client_settings::ClientSettings;
pub use image_payload::ImagePayload;
pub use notification::{Notification, NotificationDuration};
pub use recognition_error::RecognitionError;
pub use recognition_result::RecognitionResult;
