use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        BridgeError::EngineUnavailable.to_string(),
        "script engine unavailable"
    );
    assert!(
        BridgeError::remote("x")
            .to_string()
            .contains("remote exception:")
    );
    assert!(
        BridgeError::coercion("x")
            .to_string()
            .contains("coercion failed:")
    );
    assert!(
        BridgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BridgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn protocol_violation_names_the_identifier() {
    let err = BridgeError::protocol("ramp_7");
    assert_eq!(
        err.to_string(),
        "protocol violation: identifier 'ramp_7' was never created"
    );
}

#[test]
fn json_errors_map_to_serde() {
    let base = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = BridgeError::from(base);
    assert!(matches!(err, BridgeError::Serde(_)));
}
