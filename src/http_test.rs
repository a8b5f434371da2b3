use super::*;
use crate::consts::MAX_COOLDOWN;

fn config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.into(),
        request_timeout: Duration::from_secs(1),
        connect_timeout: Duration::from_secs(1),
    }
}

// =============================================================================
// parse_wait_response
// =============================================================================

#[test]
fn wait_response_whole_seconds() {
    assert_eq!(parse_wait_response(r#"{"wait_seconds": 12}"#).unwrap(), Duration::from_secs(12));
}

#[test]
fn wait_response_fractional_seconds() {
    assert_eq!(parse_wait_response(r#"{"wait_seconds": 0.5}"#).unwrap(), Duration::from_millis(500));
}

#[test]
fn wait_response_zero_means_ready() {
    assert_eq!(parse_wait_response(r#"{"wait_seconds": 0}"#).unwrap(), Duration::ZERO);
}

#[test]
fn wait_response_negative_means_ready() {
    assert_eq!(parse_wait_response(r#"{"wait_seconds": -1}"#).unwrap(), Duration::ZERO);
}

#[test]
fn wait_response_huge_values_are_capped() {
    assert_eq!(parse_wait_response(r#"{"wait_seconds": 1e19}"#).unwrap(), MAX_COOLDOWN);
    assert_eq!(parse_wait_response(r#"{"wait_seconds": 1e30}"#).unwrap(), MAX_COOLDOWN);
}

#[test]
fn wait_response_missing_field_is_parse_error() {
    assert!(matches!(parse_wait_response("{}"), Err(ServiceError::Parse(_))));
    assert!(matches!(parse_wait_response("not json"), Err(ServiceError::Parse(_))));
}

// =============================================================================
// rejection
// =============================================================================

#[test]
fn rejection_keeps_rate_limit_hint() {
    let err = rejection(429, r#"{"wait_seconds": 5}"#);
    assert_eq!(err, ServiceError::Rejected { status: 429, wait_seconds: Some(5.0) });
    assert_eq!(err.wait_hint(), Some(Duration::from_secs(5)));
}

#[test]
fn rejection_without_hint() {
    assert_eq!(rejection(500, "{}"), ServiceError::Rejected { status: 500, wait_seconds: None });
    assert_eq!(rejection(502, "<html>bad gateway</html>"), ServiceError::Rejected { status: 502, wait_seconds: None });
}

// =============================================================================
// request body / client
// =============================================================================

#[test]
fn draw_request_serializes_color_as_hex() {
    let color = Color::parse("#e50000").unwrap();
    let json = serde_json::to_value(DrawRequest { x: 3, y: 4, color: &color }).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 3, "y": 4, "color": "#e50000" }));
}

#[test]
fn url_joins_base_and_path() {
    let service = HttpPlaceService::new(&config("http://localhost:9999")).unwrap();
    assert_eq!(service.url(DRAW_PATH), "http://localhost:9999/api/place/draw.json");
}
