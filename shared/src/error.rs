use crate::i18n;
use thiserror::Error;

/// Rejection of a selected file before it becomes the candidate image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Declared media type {media_type:?} is not an image")]
    NotAnImage { media_type: String },
    #[error("Image is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::NotAnImage { .. } => i18n::NOT_AN_IMAGE.to_string(),
            ValidationError::TooLarge { .. } => i18n::TOO_LARGE.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("No image selected")]
    NoImageSelected,
    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::NoImageSelected => i18n::NO_IMAGE_SELECTED.to_string(),
            SubmitError::AlreadySubmitting => i18n::ALREADY_SUBMITTING.to_string(),
        }
    }
}

/// Anything that went wrong between sending the image and holding a usable
/// [`crate::PredictionResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server error: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    InvalidPayload(String),
}

impl NetworkError {
    /// Server-provided explanation, if the error response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            NetworkError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| i18n::NETWORK_ERROR.to_string())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Confidence {0} is outside [0, 1]")]
pub struct InvalidConfidence(pub f64);

impl From<InvalidConfidence> for NetworkError {
    fn from(err: InvalidConfidence) -> Self {
        NetworkError::InvalidPayload(err.to_string())
    }
}
