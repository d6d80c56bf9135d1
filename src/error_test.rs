use super::*;

#[test]
fn precondition_notice_asks_to_retry() {
    assert_eq!(EvaluationError::PreconditionMissing.notice(), MISSING_IMAGE_NOTICE);
}

#[test]
fn rejection_notice_is_server_message_verbatim() {
    let err = EvaluationError::rejection(Some("장식이 부족합니다"));
    assert_eq!(err.notice(), "장식이 부족합니다");
}

#[test]
fn rejection_without_message_uses_fallback() {
    assert_eq!(EvaluationError::rejection(None).notice(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(EvaluationError::rejection(Some("  ")).notice(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn transport_notice_is_prefixed() {
    let err = EvaluationError::transport(Some(400), Some("이미지 키가 유효하지 않습니다"));
    assert_eq!(err.notice(), "평가 실패: 이미지 키가 유효하지 않습니다");
}

#[test]
fn transport_without_message_never_renders_empty() {
    for message in [None, Some(""), Some("   ")] {
        let err = EvaluationError::transport(None, message);
        assert_eq!(err.notice(), "평가 실패: 잘못된 요청입니다.");
    }
}

#[test]
fn transport_keeps_status() {
    let err = EvaluationError::transport(Some(503), None);
    assert!(matches!(err, EvaluationError::Transport { status: Some(503), .. }));
}
