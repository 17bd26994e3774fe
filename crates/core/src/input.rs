//! Analysis inputs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Which analyzer a piece of content goes to (also the UI tab).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Image,
    Text,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Image => "image",
            Modality::Text => "text",
        }
    }
}

impl core::fmt::Display for Modality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded image: raw bytes plus what the uploader declared about them.
///
/// The payload is shared (`Arc<[u8]>`) so it can be handed to a blocking
/// decoder without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    file_name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl ImageInput {
    /// Build an image input. Only `image/*` MIME types are accepted.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> CoreResult<Self> {
        let mime_type = mime_type.into();
        if !mime_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(CoreError::validation(format!(
                "expected an image/* content type, got {mime_type:?}"
            )));
        }

        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes: Arc::from(bytes.into()),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Payload size as shown under the preview, e.g. `"12.50 KB"`.
    pub fn size_display(&self) -> String {
        format!("{:.2} KB", self.bytes.len() as f64 / 1024.0)
    }
}

/// Content submitted for analysis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Image(ImageInput),
    Text(String),
}

impl AnalysisInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn modality(&self) -> Modality {
        match self {
            AnalysisInput::Image(_) => Modality::Image,
            AnalysisInput::Text(_) => Modality::Text,
        }
    }
}

impl From<ImageInput> for AnalysisInput {
    fn from(value: ImageInput) -> Self {
        Self::Image(value)
    }
}
