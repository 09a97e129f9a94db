//! End-to-end session scenarios against an in-memory inference endpoint.

use async_trait::async_trait;
use shared::client::parse_response;
use shared::i18n;
use shared::{
    Badge, ConfidenceTier, InferenceClient, NetworkError, PredictionResult, PredictionSession,
    SelectedFile, SessionState, Submission, SubmitError, ValidationError,
};
use std::cell::RefCell;

const MIB: usize = 1024 * 1024;

/// Records each request and answers with a canned HTTP status and body.
struct MockEndpoint {
    status: u16,
    body: String,
    requests: RefCell<Vec<RecordedRequest>>,
}

#[derive(Debug, Clone)]
struct RecordedRequest {
    endpoint: String,
    field: String,
    file_name: String,
    len: usize,
}

impl MockEndpoint {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl InferenceClient for MockEndpoint {
    async fn predict(&self, submission: &Submission) -> Result<PredictionResult, NetworkError> {
        self.requests.borrow_mut().push(RecordedRequest {
            endpoint: submission.endpoint.clone(),
            field: submission.field.to_string(),
            file_name: submission.file_name.clone(),
            len: submission.bytes.len(),
        });
        tokio::task::yield_now().await;
        parse_response(self.status, &self.body)
    }
}

struct Unreachable;

#[async_trait(?Send)]
impl InferenceClient for Unreachable {
    async fn predict(&self, _submission: &Submission) -> Result<PredictionResult, NetworkError> {
        Err(NetworkError::Transport("error sending request: connection refused".into()))
    }
}

fn image(name: &str, media_type: &str, len: usize) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
        size: len as u64,
        bytes: vec![0x5A; len],
    }
}

#[tokio::test]
async fn late_blight_end_to_end() {
    let endpoint = MockEndpoint::new(200, r#"{"class": "Late Blight", "confidence": 0.93}"#);
    let mut session = PredictionSession::default();

    let job = session
        .select_file(image("field.jpg", "image/jpeg", 2 * MIB))
        .unwrap();
    assert_eq!(session.state(), &SessionState::ImageSelected);
    assert!(session.complete_preview(job.decode()));
    assert!(session.preview().unwrap().starts_with("data:image/jpeg;base64,"));

    let state = session.submit(&endpoint).await.unwrap();
    assert!(matches!(state, SessionState::Succeeded(_)));

    let record = session.record().unwrap();
    assert_eq!(record.badge, Badge::LateBlight);
    assert_eq!(record.tier, ConfidenceTier::High);
    assert_eq!(record.confidence_percent, 93);
    assert_eq!(record.action.english, "Consult agricultural expert");
    assert!(session.error_message().is_none());

    let requests = endpoint.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "http://localhost:8000/predict");
    assert_eq!(requests[0].field, "file");
    assert_eq!(requests[0].file_name, "field.jpg");
    assert_eq!(requests[0].len, 2 * MIB);
}

#[tokio::test]
async fn server_error_without_detail_shows_generic_message() {
    let endpoint = MockEndpoint::new(500, "{}");
    let mut session = PredictionSession::default();
    session.select_file(image("leaf.png", "image/png", 1024)).unwrap();

    let state = session.submit(&endpoint).await.unwrap();
    assert!(matches!(
        state,
        SessionState::Failed(NetworkError::Status { status: 500, detail: None })
    ));
    assert_eq!(
        session.error_message().unwrap(),
        "नेटवर्क त्रुटि / Network error. Please check if the API server is running."
    );
    assert_eq!(session.error_message().unwrap(), i18n::NETWORK_ERROR.to_string());
    assert!(session.record().is_none());
}

#[tokio::test]
async fn server_detail_is_displayed() {
    let endpoint = MockEndpoint::new(422, r#"{"detail": "Uploaded file is not a leaf image"}"#);
    let mut session = PredictionSession::default();
    session.select_file(image("leaf.png", "image/png", 1024)).unwrap();

    session.submit(&endpoint).await.unwrap();
    assert_eq!(
        session.error_message().unwrap(),
        "Uploaded file is not a leaf image"
    );
}

#[tokio::test]
async fn transport_failure_is_recoverable() {
    let mut session = PredictionSession::default();
    session.select_file(image("leaf.png", "image/png", 1024)).unwrap();

    session.submit(&Unreachable).await.unwrap();
    assert_eq!(session.error_message().unwrap(), i18n::NETWORK_ERROR.to_string());

    let endpoint = MockEndpoint::new(200, r#"{"class":"healthy","confidence":0.88}"#);
    session.submit(&endpoint).await.unwrap();
    assert!(session.error().is_none());
    assert_eq!(session.record().unwrap().badge, Badge::Healthy);
}

#[tokio::test]
async fn double_submit_issues_one_request() {
    let endpoint = MockEndpoint::new(200, r#"{"class":"Early Blight","confidence":0.64}"#);
    let mut session = PredictionSession::default();
    session.select_file(image("leaf.png", "image/png", 1024)).unwrap();

    let first = session.begin_submit().unwrap();
    assert_eq!(session.begin_submit().unwrap_err(), SubmitError::AlreadySubmitting);

    let outcome = endpoint.predict(&first).await;
    assert!(session.finish_submit(first.id, outcome));

    assert_eq!(endpoint.request_count(), 1);
    let record = session.record().unwrap();
    assert_eq!(record.badge, Badge::EarlyBlight);
    assert_eq!(record.tier, ConfidenceTier::Medium);
}

#[tokio::test]
async fn submit_without_image_sends_nothing() {
    let endpoint = MockEndpoint::new(200, r#"{"class":"Healthy","confidence":1.0}"#);
    let mut session = PredictionSession::default();

    let err = session.submit(&endpoint).await.unwrap_err();
    assert_eq!(err, SubmitError::NoImageSelected);
    assert_eq!(
        err.user_message(),
        "कृपया एक छवि अपलोड करें / Please upload an image"
    );
    assert_eq!(endpoint.request_count(), 0);
}

#[tokio::test]
async fn out_of_range_confidence_is_a_network_error() {
    let endpoint = MockEndpoint::new(200, r#"{"class":"Healthy","confidence":1.7}"#);
    let mut session = PredictionSession::default();
    session.select_file(image("leaf.png", "image/png", 1024)).unwrap();

    session.submit(&endpoint).await.unwrap();
    assert!(matches!(session.error(), Some(NetworkError::InvalidPayload(_))));
    assert!(session.result().is_none());
}

#[test]
fn invalid_selections_never_reach_the_session() {
    let mut session = PredictionSession::default();
    let err = session
        .select_file(image("notes.txt", "text/plain", 10))
        .unwrap_err();
    assert!(matches!(err, ValidationError::NotAnImage { .. }));
    let err = session
        .select_file(image("huge.png", "image/png", 6 * MIB))
        .unwrap_err();
    assert!(matches!(err, ValidationError::TooLarge { .. }));
    assert_eq!(session.state(), &SessionState::Idle);
    assert!(session.candidate().is_none());
}

#[test]
fn stale_preview_never_shown() {
    let mut session = PredictionSession::default();
    let job_a = session.select_file(image("a.png", "image/png", 8)).unwrap();
    let job_b = session.select_file(image("b.gif", "image/gif", 8)).unwrap();

    assert!(!session.complete_preview(job_a.decode()));
    assert_eq!(session.preview(), None);
    assert!(session.complete_preview(job_b.decode()));
    assert!(!session.complete_preview(job_a.decode()));
    assert!(session.preview().unwrap().starts_with("data:image/gif;base64,"));
    assert_eq!(session.candidate().unwrap().file_name(), "b.gif");
}

#[tokio::test]
async fn reset_returns_to_idle_from_every_state() {
    let ok = MockEndpoint::new(200, r#"{"class":"Healthy","confidence":0.9}"#);
    let failing = MockEndpoint::new(503, "");

    // Idle
    let mut session = PredictionSession::default();
    session.reset();
    assert_idle(&session);

    // ImageSelected
    session.select_file(image("a.png", "image/png", 8)).unwrap();
    session.reset();
    assert_idle(&session);

    // Submitting
    session.select_file(image("a.png", "image/png", 8)).unwrap();
    let submission = session.begin_submit().unwrap();
    session.reset();
    assert_idle(&session);
    session.finish_submit(submission.id, ok.predict(&submission).await);
    assert_idle(&session);

    // Succeeded
    session.select_file(image("a.png", "image/png", 8)).unwrap();
    session.submit(&ok).await.unwrap();
    assert!(session.result().is_some());
    session.reset();
    assert_idle(&session);

    // Failed
    session.select_file(image("a.png", "image/png", 8)).unwrap();
    session.submit(&failing).await.unwrap();
    assert!(session.error().is_some());
    session.reset();
    assert_idle(&session);
}

fn assert_idle(session: &PredictionSession) {
    assert_eq!(session.state(), &SessionState::Idle);
    assert!(session.candidate().is_none());
    assert!(session.result().is_none());
    assert!(session.error().is_none());
    assert!(session.preview().is_none());
}
