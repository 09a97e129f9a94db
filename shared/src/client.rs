use crate::error::NetworkError;
use crate::session::Submission;
use crate::{ErrorResponse, InferenceResponse, PredictionResult};
use async_trait::async_trait;

/// Transport that delivers one [`Submission`] to the inference endpoint.
///
/// Implementations send exactly one request per call and never retry. The
/// futures are not required to be `Send` since browser fetch futures are not.
#[async_trait(?Send)]
pub trait InferenceClient {
    async fn predict(&self, submission: &Submission) -> Result<PredictionResult, NetworkError>;
}

/// Maps a raw HTTP status and body to the outcome of a submission.
pub fn parse_response(status: u16, body: &str) -> Result<PredictionResult, NetworkError> {
    if (200..300).contains(&status) {
        let response: InferenceResponse = serde_json::from_str(body)
            .map_err(|e| NetworkError::InvalidPayload(e.to_string()))?;
        return Ok(PredictionResult::try_from(response)?);
    }

    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.detail)
        .and_then(|detail| detail.as_str().map(str::to_string));

    Err(NetworkError::Status { status, detail })
}
