use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BloomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BloomError::asset("x").to_string().contains("asset error:"));
    assert!(BloomError::render("x").to_string().contains("render error:"));
    assert!(
        BloomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BloomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn open_missing() -> BloomResult<()> {
        use anyhow::Context as _;
        std::fs::read("target/definitely/not/here.bin").context("read fixture")?;
        Ok(())
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, BloomError::Other(_)));
    assert!(err.to_string().contains("read fixture"));
}
