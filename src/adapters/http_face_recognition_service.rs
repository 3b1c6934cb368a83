use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Url;

use crate::core::interfaces::adapters::FaceRecognitionService;
use crate::core::models::{ClientSettings, ImagePayload, RecognitionError, RecognitionResult};
use crate::global_constants::{IMAGE_FORM_FIELD_NAME, LOG_TAG_RECOGNIZE, RECOGNIZE_ENDPOINT_PATH};

/// Posts images to `{base_url}/recognize` as a single-part multipart form.
pub struct HttpFaceRecognitionService {
    client: reqwest::Client,
    recognize_url: Url,
}

impl HttpFaceRecognitionService {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, RecognitionError> {
        let recognize_url = build_recognize_url(base_url)?;

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|error| RecognitionError::InvalidConfiguration(error.to_string()))?;

        log::debug!(
            "{} client ready for {}, timeout={:?}",
            LOG_TAG_RECOGNIZE,
            recognize_url,
            request_timeout
        );

        Ok(Self {
            client,
            recognize_url,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, RecognitionError> {
        Self::new(&settings.base_url, settings.request_timeout())
    }

    pub fn recognize_url(&self) -> &Url {
        &self.recognize_url
    }

    fn build_form(&self, image: &ImagePayload) -> Result<Form, RecognitionError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|error| {
                RecognitionError::InvalidPayload(format!(
                    "content type {:?} rejected: {}",
                    image.content_type(),
                    error
                ))
            })?;

        Ok(Form::new().part(IMAGE_FORM_FIELD_NAME, part))
    }
}

fn build_recognize_url(base_url: &str) -> Result<Url, RecognitionError> {
    let mut normalized = base_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let base = Url::parse(&normalized).map_err(|error| {
        RecognitionError::InvalidConfiguration(format!("base url {:?}: {}", base_url, error))
    })?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(RecognitionError::InvalidConfiguration(format!(
            "base url {:?} must use http or https",
            base_url
        )));
    }

    base.join(RECOGNIZE_ENDPOINT_PATH).map_err(|error| {
        RecognitionError::InvalidConfiguration(format!("base url {:?}: {}", base_url, error))
    })
}

#[async_trait]
impl FaceRecognitionService for HttpFaceRecognitionService {
    async fn recognize(
        &self,
        image: &ImagePayload,
    ) -> Result<RecognitionResult, RecognitionError> {
        let form = self.build_form(image)?;

        log::info!(
            "{} Uploading {} bytes to {}",
            LOG_TAG_RECOGNIZE,
            image.byte_count(),
            self.recognize_url
        );

        let response = self
            .client
            .post(self.recognize_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|error| {
                log::warn!("{} Request failed before a response: {}", LOG_TAG_RECOGNIZE, error);
                RecognitionError::transport(&error)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|error| {
            RecognitionError::server(
                Some(status.as_u16()),
                format!("failed to read response body: {}", error),
            )
        })?;

        log::debug!(
            "{} Response status {}, {} body bytes",
            LOG_TAG_RECOGNIZE,
            status,
            body.len()
        );

        if !status.is_success() {
            log::warn!("{} Server answered with status {}", LOG_TAG_RECOGNIZE, status);
            return Err(RecognitionError::server(
                Some(status.as_u16()),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        if body.is_empty() {
            log::warn!("{} Server answered with an empty body", LOG_TAG_RECOGNIZE);
            return Err(RecognitionError::server(
                Some(status.as_u16()),
                "empty response body",
            ));
        }

        let result = RecognitionResult::from_json_slice(&body).map_err(|error| {
            log::warn!("{} Malformed response body: {}", LOG_TAG_RECOGNIZE, error);
            RecognitionError::server(
                Some(status.as_u16()),
                format!("malformed response body: {}", error),
            )
        })?;

        log::info!(
            "{} success={}, {} persons recognized",
            LOG_TAG_RECOGNIZE,
            result.success,
            result.recognized_persons.len()
        );

        Ok(result)
    }
}
