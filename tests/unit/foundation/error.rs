use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StripError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StripError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        StripError::tool_not_found("convert")
            .to_string()
            .contains("tool not found: 'convert'")
    );
}

#[test]
fn tool_failure_reports_exit_code_and_stderr() {
    let msg = StripError::tool_failed("composite", Some(1), "unable to open image").to_string();
    assert!(msg.contains("'composite'"));
    assert!(msg.contains("exit code 1"));
    assert!(msg.contains("unable to open image"));

    let killed = StripError::tool_failed("convert", None, "").to_string();
    assert!(killed.contains("terminated by signal"));
}

#[test]
fn missing_source_names_the_path() {
    let err = StripError::SourceImageMissing(PathBuf::from("shots/p_0.00_0.50.png"));
    assert!(err.to_string().contains("shots/p_0.00_0.50.png"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StripError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
