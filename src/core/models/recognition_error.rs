use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("no image captured")]
    NoImageCaptured,
    #[error("invalid image payload: {0}")]
    InvalidPayload(String),
    #[error("invalid recognition client configuration: {0}")]
    InvalidConfiguration(String),
    /// The request never produced a response.
    #[error("transport failure: {message}")]
    TransportFailure { message: String },
    /// A response arrived but was not a usable recognition result.
    #[error("server failure (status {status:?}): {message}")]
    ServerFailure {
        status: Option<u16>,
        message: String,
    },
}

impl RecognitionError {
    pub fn transport(error: &(dyn std::error::Error + 'static)) -> Self {
        RecognitionError::TransportFailure {
            message: describe_error_chain(error),
        }
    }

    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        RecognitionError::ServerFailure {
            status,
            message: message.into(),
        }
    }
}

fn describe_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|existing| existing.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }

    parts.join(": ")
}
