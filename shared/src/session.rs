//! The prediction session: one candidate image, at most one request in flight,
//! and an explicit [`SessionState`] that every transition goes through.
//!
//! Submitting is split in two halves so the rendering surface can run the
//! request on its own executor: [`PredictionSession::begin_submit`] hands out a
//! [`Submission`] and [`PredictionSession::finish_submit`] applies its
//! outcome. [`PredictionSession::submit`] composes both around an
//! [`InferenceClient`].

use crate::PredictionResult;
use crate::client::InferenceClient;
use crate::config::ClientConfig;
use crate::error::{NetworkError, SubmitError, ValidationError};
use crate::interpret::{Diagnosis, RecommendationRecord, interpret};
use crate::upload::{DecodedPreview, ImageCandidate, PreviewJob, SelectedFile, UploadController};
use derive_more::Display;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "submission#{}", _0)]
pub struct SubmissionId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    ImageSelected,
    Submitting(SubmissionId),
    Succeeded(PredictionResult),
    Failed(NetworkError),
}

/// Everything a transport needs to send the candidate image once.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    /// Correlates client log lines for this request.
    pub request_id: Uuid,
    pub endpoint: String,
    pub field: &'static str,
    pub file_name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug)]
pub struct PredictionSession {
    config: ClientConfig,
    upload: UploadController,
    state: SessionState,
    last_submission: u64,
    in_flight: Option<SubmissionId>,
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl PredictionSession {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            upload: UploadController::new(config.max_upload_bytes),
            config,
            state: SessionState::Idle,
            last_submission: 0,
            in_flight: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn candidate(&self) -> Option<&ImageCandidate> {
        self.upload.candidate()
    }

    pub fn preview(&self) -> Option<&str> {
        self.candidate().and_then(ImageCandidate::preview)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            SessionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Display record for the current result, derived on every call.
    pub fn record(&self) -> Option<RecommendationRecord> {
        self.result().map(interpret)
    }

    pub fn error(&self) -> Option<&NetworkError> {
        match &self.state {
            SessionState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(NetworkError::user_message)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    /// Whether [`Self::begin_submit`] would currently succeed.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none() && self.candidate().is_some()
    }

    /// Makes `file` the candidate and moves to `ImageSelected`, dropping any
    /// previous result or error. A rejected file leaves the session untouched.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<PreviewJob, ValidationError> {
        let job = self.upload.select_file(file).inspect_err(|err| {
            log::info!("Rejected selected file: {}", err);
        })?;
        if self.is_submitting() {
            log::debug!("New selection supersedes the submission in flight");
        }
        self.state = SessionState::ImageSelected;
        Ok(job)
    }

    pub fn complete_preview(&mut self, decoded: DecodedPreview) -> bool {
        self.upload.complete_preview(decoded)
    }

    /// Starts a submission of the current candidate.
    ///
    /// A candidate that already has a result or an error may be submitted
    /// again; that is the explicit resubmission path.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.in_flight.is_some() {
            log::debug!("Ignoring submit while {:?} is in flight", self.in_flight);
            return Err(SubmitError::AlreadySubmitting);
        }
        let candidate = match (&self.state, self.upload.candidate()) {
            (SessionState::Idle, _) | (_, None) => return Err(SubmitError::NoImageSelected),
            (_, Some(candidate)) => candidate,
        };

        self.last_submission += 1;
        let id = SubmissionId(self.last_submission);
        let submission = Submission {
            id,
            request_id: Uuid::new_v4(),
            endpoint: self.config.endpoint.clone(),
            field: self.config.upload_field,
            file_name: candidate.file_name().to_string(),
            media_type: candidate.media_type().to_string(),
            bytes: candidate.bytes(),
        };

        log::info!(
            "Submitting {} ({} bytes) to {} as {} [request {}]",
            submission.file_name,
            submission.bytes.len(),
            submission.endpoint,
            id,
            submission.request_id
        );

        self.in_flight = Some(id);
        self.state = SessionState::Submitting(id);
        Ok(submission)
    }

    /// Applies the outcome of submission `id`. Returns `false` when the
    /// session moved on (reset or new selection) while it was in flight.
    pub fn finish_submit(
        &mut self,
        id: SubmissionId,
        outcome: Result<PredictionResult, NetworkError>,
    ) -> bool {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }

        match self.state {
            SessionState::Submitting(current) if current == id => {}
            _ => {
                log::debug!("Discarding outcome of superseded {}", id);
                return false;
            }
        }

        self.state = match outcome {
            Ok(result) => {
                log::info!(
                    "{} classified as {:?} ({:.3})",
                    id,
                    result.label(),
                    result.confidence()
                );
                if !Diagnosis::from_label(result.label()).is_known() {
                    log::warn!("Unrecognised disease label from model: {:?}", result.label());
                }
                SessionState::Succeeded(result)
            }
            Err(err) => {
                log::warn!("{} failed: {}", id, err);
                SessionState::Failed(err)
            }
        };
        true
    }

    /// Sends the candidate through `client` exactly once and applies the
    /// outcome.
    pub async fn submit<C>(&mut self, client: &C) -> Result<&SessionState, SubmitError>
    where
        C: InferenceClient + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = client.predict(&submission).await;
        self.finish_submit(submission.id, outcome);
        Ok(&self.state)
    }

    /// Back to `Idle` with no candidate, result or error. A submission still
    /// in flight keeps blocking new submissions until its outcome arrives.
    pub fn reset(&mut self) {
        if self.state != SessionState::Idle {
            log::debug!("Resetting session");
        }
        self.upload.reset();
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(len: usize) -> SelectedFile {
        SelectedFile {
            name: "leaf.png".into(),
            media_type: "image/png".into(),
            size: len as u64,
            bytes: vec![1; len],
        }
    }

    #[test]
    fn starts_idle() {
        let session = PredictionSession::default();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(!session.can_submit());
        assert!(session.record().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn submit_from_idle_is_rejected() {
        let mut session = PredictionSession::default();
        assert_eq!(session.begin_submit().unwrap_err(), SubmitError::NoImageSelected);
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn submission_carries_candidate_and_config() {
        let config = ClientConfig::from_override(Some("http://inference.local/predict"));
        let mut session = PredictionSession::new(config);
        session.select_file(png(16)).unwrap();

        let submission = session.begin_submit().unwrap();
        assert_eq!(submission.endpoint, "http://inference.local/predict");
        assert_eq!(submission.field, "file");
        assert_eq!(submission.file_name, "leaf.png");
        assert_eq!(submission.media_type, "image/png");
        assert_eq!(submission.bytes.len(), 16);
        assert_eq!(session.state(), &SessionState::Submitting(submission.id));
    }

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let first = session.begin_submit().unwrap();
        assert_eq!(session.begin_submit().unwrap_err(), SubmitError::AlreadySubmitting);
        assert!(!session.can_submit());
        assert_eq!(session.state(), &SessionState::Submitting(first.id));
    }

    #[test]
    fn failure_can_be_resubmitted() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let first = session.begin_submit().unwrap();
        assert!(session.finish_submit(first.id, Err(NetworkError::Transport("refused".into()))));
        assert!(session.error_message().is_some());

        let second = session.begin_submit().unwrap();
        assert!(second.id > first.id);
        let result = PredictionResult::new("Healthy", 0.97).unwrap();
        assert!(session.finish_submit(second.id, Ok(result.clone())));
        assert_eq!(session.state(), &SessionState::Succeeded(result));
        assert!(session.error().is_none());
    }

    #[test]
    fn outcome_after_reset_is_discarded() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let submission = session.begin_submit().unwrap();
        session.reset();

        let result = PredictionResult::new("Healthy", 0.97).unwrap();
        assert!(!session.finish_submit(submission.id, Ok(result)));
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.candidate().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn outcome_after_new_selection_is_discarded_and_releases_slot() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let submission = session.begin_submit().unwrap();
        session.select_file(png(32)).unwrap();
        assert_eq!(session.state(), &SessionState::ImageSelected);
        assert!(!session.can_submit());

        let late = Err(NetworkError::Status {
            status: 500,
            detail: None,
        });
        assert!(!session.finish_submit(submission.id, late));
        assert_eq!(session.state(), &SessionState::ImageSelected);
        assert!(session.can_submit());
        assert_eq!(session.begin_submit().unwrap().bytes.len(), 32);
    }

    #[test]
    fn unknown_label_still_succeeds() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let submission = session.begin_submit().unwrap();
        let result = PredictionResult::new("Bacterial Wilt", 0.71).unwrap();

        assert!(session.finish_submit(submission.id, Ok(result.clone())));
        assert_eq!(session.state(), &SessionState::Succeeded(result));
        let record = session.record().unwrap();
        assert!(!record.diagnosis.is_known());
        assert_eq!(record, session.record().unwrap());
    }

    #[test]
    fn rejected_selection_keeps_result() {
        let mut session = PredictionSession::default();
        session.select_file(png(16)).unwrap();
        let submission = session.begin_submit().unwrap();
        let result = PredictionResult::new("Early Blight", 0.66).unwrap();
        session.finish_submit(submission.id, Ok(result.clone()));

        let text = SelectedFile {
            name: "notes.txt".into(),
            media_type: "text/plain".into(),
            size: 10,
            bytes: vec![b'x'; 10],
        };
        assert!(session.select_file(text).is_err());
        assert_eq!(session.state(), &SessionState::Succeeded(result));
    }
}
