use super::*;

#[test]
fn hex_to_rgb_parses_gradient_top() {
    assert_eq!(hex_to_rgb("accbf2").unwrap(), (172, 203, 242));
    assert_eq!(hex_to_rgb("fd9965").unwrap(), (253, 153, 101));
}

#[test]
fn hex_prefix_stripping_is_idempotent() {
    assert_eq!(
        hex_to_rgb("#accbf2").unwrap(),
        hex_to_rgb("accbf2").unwrap()
    );
    assert_eq!(
        hex_to_rgb("#ACCBF2").unwrap(),
        hex_to_rgb("accbf2").unwrap()
    );
    assert_eq!(Rgb8::from_hex("  #FFD700 ").unwrap(), Rgb8::new(255, 215, 0));
}

#[test]
fn hex_rejects_bad_input() {
    for bad in ["", "#", "abc", "##accbf2", "accbf2ff", "zzzzzz", "é12345"] {
        let err = Rgb8::from_hex(bad).unwrap_err();
        assert!(
            matches!(err, BloomError::Validation(_)),
            "expected validation error for {bad:?}"
        );
    }
}

#[test]
fn opaque_keeps_channels() {
    assert_eq!(Rgb8::PINK.opaque().to_array(), [255, 192, 203, 255]);
}
