use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn load(pairs: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
    let map = vars(pairs);
    ClientConfig::from_vars(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = load(&[]).unwrap();
    assert_eq!(cfg.service.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.service.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.service.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
    assert!(cfg.session.enabled);
    assert_eq!(cfg.session.cooldown, Duration::from_millis(DEFAULT_COOLDOWN_MS));
    assert_eq!(cfg.session.color, None);
    assert_eq!(cfg.session.zoomed_in, None);
    assert_eq!(cfg.session.pan, None);
    assert_eq!(cfg.canvas_width, DEFAULT_CANVAS_SIZE);
    assert_eq!(cfg.canvas_height, DEFAULT_CANVAS_SIZE);
}

#[test]
fn base_url_trailing_slash_trimmed() {
    let cfg = load(&[("PLACE_API_URL", "https://example.test/")]).unwrap();
    assert_eq!(cfg.service.base_url, "https://example.test");
}

#[test]
fn session_values_parsed() {
    let cfg = load(&[
        ("PLACE_ENABLED", "false"),
        ("PLACE_COOLDOWN_MS", "60000"),
        ("PLACE_COLOR", "#FFF"),
        ("PLACE_ZOOMED_IN", "0"),
        ("PLACE_PAN_X", "-12.5"),
    ])
    .unwrap();
    assert!(!cfg.session.enabled);
    assert_eq!(cfg.session.cooldown, Duration::from_secs(60));
    assert_eq!(cfg.session.color, Some(Color::from_rgb(255, 255, 255)));
    assert_eq!(cfg.session.zoomed_in, Some(false));
    assert_eq!(cfg.session.pan, Some(Point::new(-12.5, 0.0)));
}

#[test]
fn blank_color_is_ignored() {
    let cfg = load(&[("PLACE_COLOR", "  ")]).unwrap();
    assert_eq!(cfg.session.color, None);
}

#[test]
fn bad_number_reports_key_and_value() {
    let err = load(&[("PLACE_COOLDOWN_MS", "soon")]).unwrap_err();
    assert_eq!(err, ConfigError::Parse { key: "PLACE_COOLDOWN_MS", value: "soon".into() });
}

#[test]
fn bad_bool_rejected() {
    let err = load(&[("PLACE_ENABLED", "maybe")]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { key: "PLACE_ENABLED", .. }));
}

#[test]
fn bad_color_rejected() {
    let err = load(&[("PLACE_COLOR", "red")]).unwrap_err();
    assert!(matches!(err, ConfigError::Color { key: "PLACE_COLOR", .. }));
}

#[test]
fn canvas_size_overrides() {
    let cfg = load(&[("PLACE_CANVAS_WIDTH", "64"), ("PLACE_CANVAS_HEIGHT", "32")]).unwrap();
    assert_eq!((cfg.canvas_width, cfg.canvas_height), (64, 32));
}
