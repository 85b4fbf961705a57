use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrellisError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TrellisError::environment("x")
            .to_string()
            .contains("environment error:")
    );
    assert!(
        TrellisError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrellisError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: TrellisError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, TrellisError::Serde(_)));
}
