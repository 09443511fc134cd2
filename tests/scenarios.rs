//! End-to-end behavior of the public color API.

use fox_color::{
    hex_to_int, hex_to_ubytes, int_to_hex, parse_hex, ubyte_to_hex, ubytes_to_hex, Color,
    ColorError, ColorKind, ColorValue, HexFormatError, Hsl, Hsv, Rgb,
};

#[test]
fn test_short_hex_is_opaque_white() {
    let c = parse_hex("#fff").unwrap();
    assert_eq!(c.rgba(), (255, 255, 255, 1.0));
    assert_eq!(c, Rgb::white(1.0).unwrap());
}

#[test]
fn test_red_hex_to_hsv() {
    let c = parse_hex("#ff0000").unwrap();
    assert_eq!(c.to_hsv(), Hsv::new(0, 1.0, 1.0, 1.0).unwrap());
}

#[test]
fn test_hsv_red_to_hex() {
    assert_eq!(Hsv::opaque(0, 1.0, 1.0).unwrap().to_hex(true), "#ff0000");
}

#[test]
fn test_hex_with_alpha_round_trips() {
    let c = parse_hex("#11223344").unwrap();
    assert_eq!(c.to_hex(true), "#11223344");
    assert_eq!(c.to_hex(false), "#112233");
    assert_eq!(parse_hex("#1234").unwrap().to_hex(true), "#11223344");
}

#[test]
fn test_every_eight_bit_alpha_survives_hex() {
    for a in 0..=255u8 {
        let c = Rgb::new(12, 34, 56, a as f64 / 255.0).unwrap();
        let back = parse_hex(&c.to_hex(true)).unwrap();
        assert_eq!(back, c, "alpha byte {a}");
    }
}

#[test]
fn test_hex_round_trip_over_byte_cube() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(3) {
                let c = Rgb::from_bytes(r, g, b);
                assert_eq!(parse_hex(&c.to_hex(true)).unwrap(), c);
            }
        }
    }
}

#[test]
fn test_hsl_and_hsv_round_trip_within_two() {
    for r in (0..=255u8).step_by(7) {
        for g in (0..=255u8).step_by(11) {
            for b in (0..=255u8).step_by(13) {
                let c = Rgb::from_bytes(r, g, b);
                for back in [c.to_hsl().to_rgb(), c.to_hsv().to_rgb()] {
                    let (r2, g2, b2) = back.rgb();
                    assert!(
                        r.abs_diff(r2) <= 2 && g.abs_diff(g2) <= 2 && b.abs_diff(b2) <= 2,
                        "{c} came back as {back}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_to_rgb_is_idempotent() {
    let values: [ColorValue; 3] = [
        Rgb::new(10, 200, 30, 0.5).unwrap().into(),
        Hsl::new(45, 0.3, 0.6, 0.2).unwrap().into(),
        Hsv::new(300, 0.9, 0.1, 1.0).unwrap().into(),
    ];
    for v in values {
        let once = v.to_rgb();
        assert_eq!(once.to_rgb(), once);
        assert_eq!(once.alpha(), v.alpha());
    }
}

#[test]
fn test_shading_black_and_tinting_white_change_nothing() {
    for fraction in [0.0, 0.25, 0.5, 0.7, 1.0] {
        let black = Rgb::black(0.5).unwrap();
        assert_eq!(black.shade(fraction).unwrap(), black);
        let white = Rgb::white(0.5).unwrap();
        assert_eq!(white.tint(fraction).unwrap(), white);

        let black = Hsl::black(1.0).unwrap();
        assert_eq!(black.shade(fraction).unwrap(), black);
        let white = Hsl::white(1.0).unwrap();
        assert_eq!(white.tint(fraction).unwrap(), white);

        let black = Hsv::black(0.1).unwrap();
        assert_eq!(black.shade(fraction).unwrap(), black);
        let white = Hsv::white(0.1).unwrap();
        assert_eq!(white.tint(fraction).unwrap(), white);
    }
}

#[test]
fn test_hue_rotation_keeps_variant() {
    let v: ColorValue = Hsl::opaque(10, 0.5, 0.5).unwrap().into();
    let rotated = v.rotate_hue_by_degrees(-30);
    assert_eq!(rotated.kind(), ColorKind::Hsl);
    assert_eq!(rotated.hsla(), (340, 0.5, 0.5, 1.0));
}

#[test]
fn test_conversion_preserves_alpha_through_every_path() {
    let c = Rgb::new(90, 60, 30, 0.35).unwrap();
    assert_eq!(c.to_hsl().to_hsv().to_rgb().alpha(), 0.35);
    assert_eq!(c.to_hsv().to_hsl().alpha(), 0.35);
}

#[test]
fn test_mixed_variant_arithmetic_fails() {
    let a: ColorValue = Rgb::default().into();
    let b: ColorValue = Hsv::default().into();
    assert_eq!(
        (a + b).unwrap_err(),
        ColorError::TypeMismatch {
            left: ColorKind::Rgb,
            right: ColorKind::Hsv,
        }
    );
}

#[test]
fn test_errors_render_readable_messages() {
    let err = Rgb::opaque(256, 0, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "red must be between 0 and 255 (inclusive), got 256"
    );
    let err = parse_hex("#ggg").unwrap_err();
    assert!(matches!(
        err,
        ColorError::Format {
            reason: HexFormatError::InvalidDigit { digit: 'g', position: 1 },
            ..
        }
    ));
}

#[test]
fn test_hex_utilities() {
    assert_eq!(ubyte_to_hex(15, false), "0f");
    assert_eq!(ubyte_to_hex(240, false), "f0");
    assert_eq!(ubytes_to_hex(&[0, 15, 240, 255], "0x", true), "0x000FF0FF");
    assert_eq!(ubytes_to_hex(&hex_to_ubytes("", "").unwrap(), "#", false), "#");
    assert_eq!(int_to_hex(255, 6, "#", true), "#0000FF");
    assert_eq!(hex_to_ubytes("#0000FF", "#").unwrap(), vec![0, 0, 255]);
    assert_eq!(hex_to_int("ffffffff", "").unwrap(), 4_294_967_295);
}
