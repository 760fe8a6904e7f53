use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpiralError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SpiralError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = SpiralError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn io_context_converts_through_question_mark() {
    use anyhow::Context as _;

    fn open_missing() -> SpiralResult<std::fs::File> {
        let f = std::fs::File::open("target/definitely/not/here.gif")
            .context("failed to open animation")?;
        Ok(f)
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, SpiralError::Other(_)));
    assert!(err.to_string().contains("failed to open animation"));
}
