use super::*;

#[test]
fn parse_long_form_lowercases() {
    let c = Color::parse("#FF4500").unwrap();
    assert_eq!(c.as_str(), "#ff4500");
}

#[test]
fn parse_short_form_expands() {
    let c = Color::parse("#0af").unwrap();
    assert_eq!(c.as_str(), "#00aaff");
}

#[test]
fn parse_trims_whitespace() {
    let c = Color::parse("  #123456 \n").unwrap();
    assert_eq!(c.as_str(), "#123456");
}

#[test]
fn parse_rejects_missing_hash() {
    assert_eq!(Color::parse("ff4500"), Err(ColorError::MissingHash("ff4500".into())));
}

#[test]
fn parse_rejects_bad_length() {
    assert!(matches!(Color::parse("#ff45"), Err(ColorError::BadLength(_))));
    assert!(matches!(Color::parse("#"), Err(ColorError::BadLength(_))));
}

#[test]
fn parse_rejects_non_hex_digits() {
    assert!(matches!(Color::parse("#gg0000"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Color::parse("#+f+f+f"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Color::parse("#ééé"), Err(ColorError::BadDigit(_))));
}

#[test]
fn from_rgb_formats_canonical_hex() {
    let c = Color::from_rgb(255, 69, 0);
    assert_eq!(c.as_str(), "#ff4500");
    assert_eq!(Color::parse("#FF4500").unwrap(), c);
}

#[test]
fn from_str_and_display_agree() {
    let c: Color = "#ABC".parse().unwrap();
    assert_eq!(c.to_string(), "#aabbcc");
}

#[test]
fn serde_uses_plain_string() {
    let c = Color::parse("#820080").unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#820080\"");
    let back: Color = serde_json::from_str("\"#820080\"").unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
}
