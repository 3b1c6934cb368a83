use std::time::Duration;

use crate::core::models::{RecognitionError, RecognitionResult};
use crate::global_constants::{
    NOTIFICATION_LONG_MILLIS, NOTIFICATION_SHORT_MILLIS, USER_MESSAGE_NO_IMAGE,
    USER_MESSAGE_NO_PERSONS, USER_MESSAGE_RECOGNITION_FAILED, USER_MESSAGE_RECOGNIZED_PREFIX,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationDuration {
    Short,
    Long,
}

impl NotificationDuration {
    pub fn as_duration(&self) -> Duration {
        match self {
            NotificationDuration::Short => Duration::from_millis(NOTIFICATION_SHORT_MILLIS),
            NotificationDuration::Long => Duration::from_millis(NOTIFICATION_LONG_MILLIS),
        }
    }
}

/// One line of user-facing text, shown transiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub duration: NotificationDuration,
}

impl Notification {
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NotificationDuration::Short,
        }
    }

    pub fn long(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NotificationDuration::Long,
        }
    }

    pub fn from_outcome(outcome: &Result<RecognitionResult, RecognitionError>) -> Self {
        match outcome {
            Ok(result) if result.has_recognized_persons() => Self::long(format!(
                "{}{}",
                USER_MESSAGE_RECOGNIZED_PREFIX,
                result.joined_names()
            )),
            Ok(_) => Self::short(USER_MESSAGE_NO_PERSONS),
            Err(error) => Self::from_error(error),
        }
    }

    pub fn from_error(error: &RecognitionError) -> Self {
        match error {
            RecognitionError::NoImageCaptured => Self::short(USER_MESSAGE_NO_IMAGE),
            RecognitionError::ServerFailure { .. } => Self::short(USER_MESSAGE_RECOGNITION_FAILED),
            RecognitionError::TransportFailure { message } => {
                Self::short(format!("{}: {}", USER_MESSAGE_RECOGNITION_FAILED, message))
            }
            RecognitionError::InvalidPayload(message)
            | RecognitionError::InvalidConfiguration(message) => {
                Self::short(format!("{}: {}", USER_MESSAGE_RECOGNITION_FAILED, message))
            }
        }
    }
}
