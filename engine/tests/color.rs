use engine::color::{Color, ColorParseError};

#[test]
fn parses_six_digit_hex() {
    let c: Color = "#062056".parse().unwrap();
    assert_eq!(c, Color::rgb(0x06, 0x20, 0x56));
}

#[test]
fn parses_eight_digit_hex_alpha() {
    let c: Color = "#ffffff80".parse().unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 255, 255));
    assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn parses_rgba_function() {
    let c: Color = "rgba(255, 255, 255, 0.7)".parse().unwrap();
    assert_eq!(c, Color::rgba(255, 255, 255, 0.7));
}

#[test]
fn parses_rgb_function_as_opaque() {
    let c: Color = "rgb(56, 189, 248)".parse().unwrap();
    assert_eq!(c, Color::rgb(56, 189, 248));
}

#[test]
fn trims_surrounding_whitespace() {
    let c: Color = "  #38bdf8 ".parse().unwrap();
    assert_eq!(c, Color::rgb(0x38, 0xbd, 0xf8));
}

#[test]
fn rejects_unknown_syntax() {
    let err = "cornflowerblue".parse::<Color>().unwrap_err();
    assert!(matches!(err, ColorParseError::Syntax(_)));
}

#[test]
fn rejects_short_hex() {
    let err = "#fff".parse::<Color>().unwrap_err();
    assert!(matches!(err, ColorParseError::Hex(_)));
}

#[test]
fn rejects_non_ascii_hex() {
    assert!("#ffffé6".parse::<Color>().is_err());
}

#[test]
fn rejects_alpha_out_of_range() {
    let err = "rgba(1, 2, 3, 1.5)".parse::<Color>().unwrap_err();
    assert!(matches!(err, ColorParseError::Component(_)));
}

#[test]
fn rejects_channel_overflow() {
    assert!("rgba(300, 0, 0, 1.0)".parse::<Color>().is_err());
}

#[test]
fn displays_opaque_as_six_digits() {
    assert_eq!(Color::rgb(0x06, 0x20, 0x56).to_string(), "#062056");
}

#[test]
fn displays_translucent_with_alpha_digits() {
    let s = Color::rgba(255, 255, 255, 0.5).to_string();
    assert_eq!(s, "#ffffff80");
}

#[test]
fn serde_roundtrips_through_string() {
    let c = Color::rgba(12, 34, 56, 0.25);
    let json = serde_json::to_string(&c).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!((back.r, back.g, back.b), (c.r, c.g, c.b));
    assert!((back.a - c.a).abs() < 1.0 / 255.0);
}

#[test]
fn linear_conversion_endpoints() {
    let black = Color::rgb(0, 0, 0).to_linear_rgba();
    let white = Color::rgb(255, 255, 255).to_linear_rgba();
    assert_eq!(black, [0.0, 0.0, 0.0, 1.0]);
    for ch in &white[..3] {
        assert!((ch - 1.0).abs() < 1e-5);
    }
}

#[test]
fn linear_conversion_is_below_srgb_midtones() {
    let mid = Color::rgb(128, 128, 128).to_linear_rgba();
    assert!(mid[0] < 0.5 && mid[0] > 0.2);
}
