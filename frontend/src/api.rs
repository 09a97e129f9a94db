use async_trait::async_trait;
use gloo_file::Blob;
use gloo_net::http::Request;
use shared::client::parse_response;
use shared::{InferenceClient, NetworkError, PredictionResult, Submission};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Browser transport: one `fetch` POST with a multipart body per submission.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GlooInferenceClient;

fn js_error(context: &str, err: JsValue) -> NetworkError {
    NetworkError::Transport(format!("{}: {:?}", context, err))
}

fn build_form(submission: &Submission) -> Result<FormData, NetworkError> {
    let blob = Blob::new_with_options(&*submission.bytes, Some(submission.media_type.as_str()));
    let raw_blob: &web_sys::Blob = blob.as_ref();
    let form_data = FormData::new().map_err(|e| js_error("Failed to create form data", e))?;
    form_data
        .append_with_blob_and_filename(submission.field, raw_blob, &submission.file_name)
        .map_err(|e| js_error("Failed to attach image", e))?;
    Ok(form_data)
}

#[async_trait(?Send)]
impl InferenceClient for GlooInferenceClient {
    async fn predict(&self, submission: &Submission) -> Result<PredictionResult, NetworkError> {
        let form_data = build_form(submission)?;

        let request = Request::post(&submission.endpoint)
            .body(form_data)
            .map_err(|e| NetworkError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request.send().await.map_err(|e| {
            log::error!("Request {} failed: {}", submission.request_id, e);
            NetworkError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("Request {} body unreadable: {}", submission.request_id, err);
                String::new()
            }
        };
        log::debug!(
            "Request {} answered {} ({} bytes)",
            submission.request_id,
            status,
            body.len()
        );

        parse_response(status, &body)
    }
}
