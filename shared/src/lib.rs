pub mod client;
pub mod config;
pub mod error;
pub mod i18n;
pub mod interpret;
pub mod session;
pub mod upload;

use serde::{Deserialize, Serialize};

pub use client::InferenceClient;
pub use config::ClientConfig;
pub use error::{InvalidConfidence, NetworkError, SubmitError, ValidationError};
pub use interpret::{Badge, ConfidenceTier, Diagnosis, RecommendationRecord, interpret};
pub use session::{PredictionSession, SessionState, Submission, SubmissionId};
pub use upload::{DecodedPreview, ImageCandidate, PreviewJob, SelectedFile, SelectionId};

pub use strum::IntoEnumIterator;

/// Body of a successful `/predict` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InferenceResponse {
    #[serde(rename = "class")]
    pub class_label: String,
    pub confidence: f64,
}

/// Body of a failed `/predict` response. FastAPI puts either a string or a
/// list of validation issues under `detail`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// A classification received from the inference endpoint.
///
/// The confidence is always finite and inside `[0, 1]`; the only way to build
/// one is [`PredictionResult::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    label: String,
    confidence: f64,
}

impl PredictionResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> Result<Self, InvalidConfidence> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(InvalidConfidence(confidence));
        }
        Ok(Self {
            label: label.into(),
            confidence,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl TryFrom<InferenceResponse> for PredictionResult {
    type Error = InvalidConfidence;

    fn try_from(response: InferenceResponse) -> Result<Self, Self::Error> {
        Self::new(response.class_label, response.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_result_accepts_closed_interval() {
        assert!(PredictionResult::new("Healthy", 0.0).is_ok());
        assert!(PredictionResult::new("Healthy", 1.0).is_ok());
    }

    #[test]
    fn prediction_result_rejects_out_of_range_confidence() {
        assert!(PredictionResult::new("Healthy", 1.01).is_err());
        assert!(PredictionResult::new("Healthy", -0.1).is_err());
        assert!(PredictionResult::new("Healthy", f64::NAN).is_err());
    }

    #[test]
    fn inference_response_ignores_extra_fields() {
        let body = r#"{"class":"Early Blight","confidence":0.71,"model":"v2"}"#;
        let response: InferenceResponse = serde_json::from_str(body).unwrap();
        let result = PredictionResult::try_from(response).unwrap();
        assert_eq!(result.label(), "Early Blight");
        assert_eq!(result.confidence(), 0.71);
    }
}
