//! Lifecycle of the single candidate image: validation, preview decoding and
//! reset.
//!
//! Preview decoding runs asynchronously in the browser. Every selection gets a
//! fresh [`SelectionId`]; a decoded preview is only applied while its id still
//! names the current candidate, so a slow decode for an earlier file can never
//! overwrite the preview of a later one.

use crate::config::MAX_UPLOAD_BYTES;
use crate::error::ValidationError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_more::Display;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "selection#{}", _0)]
pub struct SelectionId(u64);

/// A file handed over by the rendering surface.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Decoding,
    Ready(String),
}

#[derive(Debug, Clone)]
pub struct ImageCandidate {
    selection: SelectionId,
    file_name: String,
    media_type: String,
    size: u64,
    bytes: Arc<[u8]>,
    preview: Preview,
}

impl ImageCandidate {
    pub fn selection(&self) -> SelectionId {
        self.selection
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// The displayable preview, once decoding has finished.
    pub fn preview(&self) -> Option<&str> {
        match &self.preview {
            Preview::Ready(url) => Some(url),
            Preview::Decoding => None,
        }
    }

    pub fn is_preview_ready(&self) -> bool {
        matches!(self.preview, Preview::Ready(_))
    }
}

/// Work item for turning a candidate's bytes into its preview.
#[derive(Debug, Clone)]
pub struct PreviewJob {
    selection: SelectionId,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl PreviewJob {
    pub fn selection(&self) -> SelectionId {
        self.selection
    }

    /// Encodes the preview from the held bytes.
    pub fn decode(&self) -> DecodedPreview {
        self.ready(encode_data_url(&self.media_type, &self.bytes))
    }

    /// Wraps a data URL produced elsewhere, such as the browser's file reader.
    pub fn ready(&self, data_url: String) -> DecodedPreview {
        DecodedPreview {
            selection: self.selection,
            data_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPreview {
    pub selection: SelectionId,
    pub data_url: String,
}

pub fn is_image_type(media_type: &str) -> bool {
    media_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// Media type is checked first, so a non-image is always `NotAnImage`
/// whatever its size.
pub fn validate(media_type: &str, size: u64, limit: u64) -> Result<(), ValidationError> {
    if !is_image_type(media_type) {
        return Err(ValidationError::NotAnImage {
            media_type: media_type.to_string(),
        });
    }
    if size > limit {
        return Err(ValidationError::TooLarge { size, limit });
    }
    Ok(())
}

pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

#[derive(Debug)]
pub struct UploadController {
    limit: u64,
    last_selection: u64,
    candidate: Option<ImageCandidate>,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new(MAX_UPLOAD_BYTES)
    }
}

impl UploadController {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            last_selection: 0,
            candidate: None,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn candidate(&self) -> Option<&ImageCandidate> {
        self.candidate.as_ref()
    }

    /// Validates `file` and makes it the candidate. On error the previous
    /// candidate is left exactly as it was.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<PreviewJob, ValidationError> {
        let size = file.size.max(file.bytes.len() as u64);
        validate(&file.media_type, size, self.limit)?;

        self.last_selection += 1;
        let selection = SelectionId(self.last_selection);
        let bytes: Arc<[u8]> = file.bytes.into();

        log::debug!(
            "Selected {} as {} ({} bytes, {})",
            file.name,
            selection,
            size,
            file.media_type
        );

        self.candidate = Some(ImageCandidate {
            selection,
            file_name: file.name,
            media_type: file.media_type.clone(),
            size,
            bytes: Arc::clone(&bytes),
            preview: Preview::Decoding,
        });

        Ok(PreviewJob {
            selection,
            media_type: file.media_type,
            bytes,
        })
    }

    /// Returns `false` when the preview belongs to a superseded selection.
    pub fn complete_preview(&mut self, decoded: DecodedPreview) -> bool {
        match self.candidate.as_mut() {
            Some(candidate) if candidate.selection == decoded.selection => {
                candidate.preview = Preview::Ready(decoded.data_url);
                true
            }
            _ => {
                log::debug!("Discarding stale preview for {}", decoded.selection);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        if self.candidate.take().is_some() {
            log::debug!("Cleared candidate image");
        }
    }
}
