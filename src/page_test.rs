use super::*;
use crate::error::MISSING_IMAGE_NOTICE;
use std::sync::Mutex;

// =========================================================================
// Fakes
// =========================================================================

struct MockApi {
    outcomes: Mutex<Vec<Result<EvaluationResult, EvaluationError>>>,
    requests: Mutex<Vec<EvaluationRequest>>,
}

impl MockApi {
    fn new(outcomes: Vec<Result<EvaluationResult, EvaluationError>>) -> Self {
        Self { outcomes: Mutex::new(outcomes), requests: Mutex::new(Vec::new()) }
    }

    fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl EvaluationApi for MockApi {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, EvaluationError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() { Ok(result(&[])) } else { outcomes.remove(0) }
    }
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<String>>,
}

impl Recorder {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.calls.lock().unwrap().push(message.to_owned());
    }
}

impl Navigator for Recorder {
    fn navigate(&self, path: &str) {
        self.calls.lock().unwrap().push(path.to_owned());
    }
}

fn result(comments: &[&str]) -> EvaluationResult {
    EvaluationResult {
        title: None,
        image_url: None,
        score: 90.0,
        summary: "멋진 트리".to_owned(),
        comments: comments.iter().map(|c| (*c).to_owned()).collect(),
    }
}

fn handoff(image_key: Option<&str>) -> NavigationState {
    NavigationState {
        image_key: image_key.map(ToOwned::to_owned),
        preview_url: Some("blob:preview".to_owned()),
    }
}

fn success_view(state: &PageState) -> &EvaluationView {
    match state {
        PageState::Success(view) => view,
        other => panic!("expected success, got {other:?}"),
    }
}

// =========================================================================
// Precondition
// =========================================================================

#[tokio::test]
async fn missing_image_key_redirects_without_request() {
    let api = MockApi::new(vec![]);
    let notices = Recorder::default();
    let routes = Recorder::default();
    let mut page = EvaluationPage::new(api, &notices, &routes);

    for state in [None, Some(handoff(None)), Some(handoff(Some("")))] {
        let mut fresh = EvaluationPage::new(MockApi::new(vec![]), &notices, &routes);
        let shown = fresh.load("tree-1", Some("mild"), state.as_ref()).await.clone();
        assert!(fresh.api().requests().is_empty());
        assert_eq!(
            shown,
            PageState::Redirecting(Redirect {
                target: "/tree/tree-1".to_owned(),
                notice: MISSING_IMAGE_NOTICE.to_owned(),
            })
        );
    }

    page.load("tree-1", None, None).await;
    assert!(page.api().requests().is_empty());
    assert_eq!(notices.calls().last().map(String::as_str), Some(MISSING_IMAGE_NOTICE));
    assert_eq!(routes.calls().last().map(String::as_str), Some("/tree/tree-1"));
}

// =========================================================================
// Request shape
// =========================================================================

#[tokio::test]
async fn mode_query_is_forwarded_or_defaults_to_mild() {
    let cases = [
        (Some("mild"), Mode::Mild),
        (Some("spicy"), Mode::Spicy),
        (Some("volcanic"), Mode::Mild),
        (None, Mode::Mild),
    ];
    for (query, expected) in cases {
        let recorder = Recorder::default();
        let mut page = EvaluationPage::new(MockApi::new(vec![]), &recorder, &recorder);
        page.load("tree-1", query, Some(&handoff(Some("img")))).await;
        let requests = page.api().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, expected);
        assert_eq!(requests[0].image_key, "img");
        assert_eq!(requests[0].path(), format!("/tree/tree-1/evaluate?mode={}", expected.as_str()));
    }
}

// =========================================================================
// Success rendering
// =========================================================================

#[tokio::test]
async fn success_preserves_comment_order() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![Ok(result(&["a", "b", "c"]))]), &recorder, &recorder);
    let state = page.load("tree-1", None, Some(&handoff(Some("img")))).await;
    assert_eq!(success_view(state).comments, vec!["a", "b", "c"]);
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn success_without_image_url_uses_preview() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![Ok(result(&[]))]), &recorder, &recorder);
    let state = page.load("tree-1", Some("spicy"), Some(&handoff(Some("img")))).await;
    let view = success_view(state);
    assert_eq!(view.image_src.as_deref(), Some("blob:preview"));
    assert_eq!(view.heading, "평가 결과 (매운맛)");
    assert_eq!(view.home_path, "/tree/tree-1");
}

// =========================================================================
// Failure handling
// =========================================================================

#[tokio::test]
async fn business_rejection_shows_exact_message_and_redirects() {
    let notices = Recorder::default();
    let routes = Recorder::default();
    let api = MockApi::new(vec![Err(EvaluationError::rejection(Some("장식이 부족합니다")))]);
    let mut page = EvaluationPage::new(api, &notices, &routes);
    page.load("tree-1", None, Some(&handoff(Some("img")))).await;

    assert_eq!(notices.calls(), vec!["장식이 부족합니다"]);
    assert_eq!(routes.calls(), vec!["/tree/tree-1"]);
}

#[tokio::test]
async fn transport_failure_without_message_uses_fallback_and_redirects() {
    let notices = Recorder::default();
    let routes = Recorder::default();
    let api = MockApi::new(vec![Err(EvaluationError::transport(None, None))]);
    let mut page = EvaluationPage::new(api, &notices, &routes);
    page.load("tree-1", None, Some(&handoff(Some("img")))).await;

    assert_eq!(notices.calls(), vec!["평가 실패: 잘못된 요청입니다."]);
    assert_eq!(routes.calls(), vec!["/tree/tree-1"]);
}

// =========================================================================
// Idempotence and input changes
// =========================================================================

#[tokio::test]
async fn unchanged_inputs_do_not_resend() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![]), &recorder, &recorder);
    let state = handoff(Some("img"));
    page.load("tree-1", Some("mild"), Some(&state)).await;
    page.load("tree-1", Some("mild"), Some(&state)).await;
    // Unknown mode resolves to the same tuple.
    page.load("tree-1", Some("weird"), Some(&state)).await;
    assert_eq!(page.api().requests().len(), 1);
}

#[tokio::test]
async fn changed_mode_sends_again() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![]), &recorder, &recorder);
    let state = handoff(Some("img"));
    page.load("tree-1", Some("mild"), Some(&state)).await;
    page.load("tree-1", Some("spicy"), Some(&state)).await;
    let modes: Vec<Mode> = page.api().requests().iter().map(|r| r.mode).collect();
    assert_eq!(modes, vec![Mode::Mild, Mode::Spicy]);
}

// =========================================================================
// EvaluationMachine
// =========================================================================

#[test]
fn begin_enters_loading() {
    let mut machine = EvaluationMachine::default();
    let begin = machine.begin("t", None, Some(&handoff(Some("img"))));
    assert!(matches!(begin, Begin::Dispatch(_)));
    assert_eq!(machine.state(), &PageState::Loading);
}

#[test]
fn newer_dispatch_makes_older_ticket_stale() {
    let mut machine = EvaluationMachine::default();
    let Begin::Dispatch(old) = machine.begin("t", Some("mild"), Some(&handoff(Some("img")))) else {
        panic!("expected dispatch");
    };
    let Begin::Dispatch(new) = machine.begin("t", Some("spicy"), Some(&handoff(Some("img")))) else {
        panic!("expected dispatch");
    };

    assert!(machine.complete(&old, Ok(result(&["late"]))).is_none());
    assert_eq!(machine.state(), &PageState::Loading);

    let state = machine.complete(&new, Ok(result(&["fresh"]))).unwrap();
    assert_eq!(success_view(state).comments, vec!["fresh"]);
}

#[test]
fn response_after_unmount_is_ignored() {
    let mut machine = EvaluationMachine::default();
    let Begin::Dispatch(ticket) = machine.begin("t", None, Some(&handoff(Some("img")))) else {
        panic!("expected dispatch");
    };
    machine.unmount();
    assert!(!machine.is_mounted());
    assert!(machine.complete(&ticket, Ok(result(&[]))).is_none());
    assert_eq!(machine.state(), &PageState::Loading);
}

#[test]
fn repeated_missing_precondition_is_already_dispatched() {
    let mut machine = EvaluationMachine::default();
    assert!(matches!(machine.begin("t", None, None), Begin::Redirect(_)));
    assert_eq!(machine.begin("t", None, None), Begin::AlreadyDispatched);
}

#[tokio::test]
async fn split_begin_then_settle_matches_load() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![]), &recorder, &recorder);
    let begin = page.begin("tree-1", Some("spicy"), Some(&handoff(Some("img"))));
    assert!(matches!(begin, Begin::Dispatch(_)));
    assert!(page.api().requests().is_empty());

    let state = page.settle(begin).await.clone();
    assert!(matches!(state, PageState::Success(_)));
    assert_eq!(page.api().requests().len(), 1);

    let again = page.begin("tree-1", Some("spicy"), Some(&handoff(Some("img"))));
    assert_eq!(again, Begin::AlreadyDispatched);
    page.settle(again).await;
    assert_eq!(page.api().requests().len(), 1);
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn split_begin_without_image_redirects_on_settle() {
    let recorder = Recorder::default();
    let mut page = EvaluationPage::new(MockApi::new(vec![]), &recorder, &recorder);
    let begin = page.begin("tree-1", None, None);
    assert!(matches!(begin, Begin::Redirect(_)));
    page.settle(begin).await;
    assert!(page.api().requests().is_empty());
    assert_eq!(recorder.calls(), vec![MISSING_IMAGE_NOTICE.to_owned(), "/tree/tree-1".to_owned()]);
}
