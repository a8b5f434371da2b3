use super::*;
use crate::consts::MAX_COOLDOWN;

#[test]
fn wait_hint_converts_seconds() {
    let err = ServiceError::Rejected { status: 429, wait_seconds: Some(5.0) };
    assert_eq!(err.wait_hint(), Some(Duration::from_millis(5000)));
}

#[test]
fn wait_hint_keeps_fractional_seconds() {
    let err = ServiceError::Rejected { status: 429, wait_seconds: Some(1.25) };
    assert_eq!(err.wait_hint(), Some(Duration::from_millis(1250)));
}

#[test]
fn wait_hint_treats_negative_and_nan_as_no_wait() {
    let negative = ServiceError::Rejected { status: 429, wait_seconds: Some(-3.0) };
    assert_eq!(negative.wait_hint(), Some(Duration::ZERO));
    let nan = ServiceError::Rejected { status: 429, wait_seconds: Some(f64::NAN) };
    assert_eq!(nan.wait_hint(), Some(Duration::ZERO));
}

#[test]
fn wait_hint_caps_oversized_values() {
    for secs in [1e19, 1e30, f64::INFINITY, MAX_COOLDOWN.as_secs_f64() + 1.0] {
        let err = ServiceError::Rejected { status: 429, wait_seconds: Some(secs) };
        assert_eq!(err.wait_hint(), Some(MAX_COOLDOWN), "hint {secs}");
    }
}

#[test]
fn wait_hint_absent_without_payload() {
    assert_eq!(ServiceError::Rejected { status: 500, wait_seconds: None }.wait_hint(), None);
    assert_eq!(ServiceError::Request("timeout".into()).wait_hint(), None);
    assert_eq!(ServiceError::Parse("eof".into()).wait_hint(), None);
}

#[test]
fn display_includes_status() {
    let err = ServiceError::Rejected { status: 429, wait_seconds: Some(1.0) };
    assert_eq!(err.to_string(), "service rejected request: status 429");
}
