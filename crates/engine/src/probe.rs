//! Image dimension probing (the engine's one real I/O-shaped suspension point).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use deepauth_core::ImageInput;

use crate::error::EngineError;

/// Pixel dimensions of a decoded image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: usize,
    pub height: usize,
}

impl ImageDimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl core::fmt::Display for ImageDimensions {
    /// Formats as shown in result metadata, e.g. `800 × 600px`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} × {}px", self.width, self.height)
    }
}

/// Learns an image's pixel dimensions.
#[async_trait]
pub trait DimensionProbe: Send + Sync + 'static {
    async fn probe(&self, image: &ImageInput) -> Result<ImageDimensions, EngineError>;
}

/// Reads dimensions from the image header (PNG, JPEG, GIF, WebP, BMP, ...)
/// on the blocking pool. Only the header is parsed; pixel data is never decoded.
#[derive(Debug, Default, Copy, Clone)]
pub struct HeaderProbe;

#[async_trait]
impl DimensionProbe for HeaderProbe {
    async fn probe(&self, image: &ImageInput) -> Result<ImageDimensions, EngineError> {
        let bytes = image.shared_bytes();
        let size = tokio::task::spawn_blocking(move || imagesize::blob_size(&bytes))
            .await
            .map_err(|e| EngineError::Internal(format!("dimension probe task failed: {e}")))?
            .map_err(|e| EngineError::Decode(format!("{}: {e}", image.file_name())))?;

        Ok(ImageDimensions::new(size.width, size.height))
    }
}

/// Always reports the same dimensions. For tests and demos with synthetic payloads.
#[derive(Debug, Copy, Clone)]
pub struct FixedProbe(pub ImageDimensions);

#[async_trait]
impl DimensionProbe for FixedProbe {
    async fn probe(&self, _image: &ImageInput) -> Result<ImageDimensions, EngineError> {
        Ok(self.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal PNG: signature + IHDR chunk. Enough for header probing.
    pub(crate) fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }

    #[test]
    fn dimensions_display_like_metadata() {
        assert_eq!(ImageDimensions::new(800, 600).to_string(), "800 × 600px");
    }

    #[tokio::test]
    async fn header_probe_reads_png_dimensions() {
        let img = ImageInput::new("tiny.png", "image/png", png_header(640, 480)).unwrap();
        let dims = HeaderProbe.probe(&img).await.unwrap();
        assert_eq!(dims, ImageDimensions::new(640, 480));
    }

    #[tokio::test]
    async fn header_probe_rejects_garbage() {
        let img = ImageInput::new("broken.png", "image/png", b"definitely not an image".to_vec())
            .unwrap();
        let err = HeaderProbe.probe(&img).await.unwrap_err();
        assert!(matches!(err, EngineError::Decode(msg) if msg.contains("broken.png")));
    }

    #[tokio::test]
    async fn fixed_probe_ignores_payload() {
        let img = ImageInput::new("x.png", "image/png", Vec::new()).unwrap();
        let dims = FixedProbe(ImageDimensions::new(3, 4)).probe(&img).await.unwrap();
        assert_eq!(dims.to_string(), "3 × 4px");
    }
}
