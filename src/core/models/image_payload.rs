use std::io::Cursor;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::core::models::RecognitionError;
use crate::global_constants::{
    DEFAULT_IMAGE_CONTENT_TYPE, DEFAULT_IMAGE_FILE_NAME, LOG_TAG_CAPTURE,
};

/// Encoded image bytes ready for upload. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    content_type: String,
    file_name: String,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("byte_count", &self.bytes.len())
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}

impl ImagePayload {
    pub fn build(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, RecognitionError> {
        if bytes.is_empty() {
            return Err(RecognitionError::NoImageCaptured);
        }

        Ok(Self {
            bytes,
            content_type: content_type.into(),
            file_name: file_name.into(),
        })
    }

    pub fn from_jpeg_bytes(bytes: Vec<u8>) -> Result<Self, RecognitionError> {
        Self::build(bytes, DEFAULT_IMAGE_CONTENT_TYPE, DEFAULT_IMAGE_FILE_NAME)
    }

    pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Self> {
        let quality = quality.clamp(1, 100);
        let mut encoded = Cursor::new(Vec::new());

        // the jpeg encoder has no alpha channel support
        let rgb_image = image.to_rgb8();
        JpegEncoder::new_with_quality(&mut encoded, quality)
            .encode_image(&rgb_image)
            .context("failed to encode image as jpeg")?;

        let bytes = encoded.into_inner();
        log::debug!(
            "{} encoded {}x{} image as jpeg, quality={}, {} bytes",
            LOG_TAG_CAPTURE,
            image.width(),
            image.height(),
            quality,
            bytes.len()
        );

        Ok(Self::from_jpeg_bytes(bytes)?)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_build_rejects_empty_buffer() {
        let result = ImagePayload::build(Vec::new(), "image/jpeg", "image.jpg");

        assert_eq!(result, Err(RecognitionError::NoImageCaptured));
    }

    #[test]
    fn test_from_jpeg_bytes_uses_default_name_and_type() {
        let payload = ImagePayload::from_jpeg_bytes(vec![1, 2, 3]).unwrap();

        assert_eq!(payload.file_name(), "image.jpg");
        assert_eq!(payload.content_type(), "image/jpeg");
        assert_eq!(payload.bytes(), &[1, 2, 3]);
        assert_eq!(payload.byte_count(), 3);
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic_bytes() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([200, 10, 10, 255])));

        let payload = ImagePayload::encode_jpeg(&image, 100).unwrap();

        assert_eq!(&payload.bytes()[..3], &[0xFF, 0xD8, 0xFF]);
        assert_eq!(payload.content_type(), "image/jpeg");
    }

    #[test]
    fn test_encode_jpeg_lower_quality_is_not_larger() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8, 255])
        }));

        let best = ImagePayload::encode_jpeg(&image, 100).unwrap();
        let worst = ImagePayload::encode_jpeg(&image, 10).unwrap();

        assert!(worst.byte_count() <= best.byte_count());
    }

    #[test]
    fn test_debug_output_omits_raw_bytes() {
        let payload = ImagePayload::from_jpeg_bytes(vec![7u8; 32]).unwrap();

        let debug_str = format!("{:?}", payload);

        assert!(debug_str.contains("byte_count: 32"));
        assert!(!debug_str.contains("[7, 7"));
    }
}
