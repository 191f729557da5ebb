use super::*;

#[test]
fn json_text_decodes_primitives() {
    assert_eq!(RawValue::from_json_text("undefined"), RawValue::Undefined);
    assert_eq!(RawValue::from_json_text(""), RawValue::Undefined);
    assert_eq!(RawValue::from_json_text("null"), RawValue::Null);
    assert_eq!(RawValue::from_json_text("true"), RawValue::Bool(true));
    assert_eq!(RawValue::from_json_text(" 12.5 "), RawValue::Number(12.5));
    assert_eq!(
        RawValue::from_json_text("\"#ff0000\""),
        RawValue::String("#ff0000".into())
    );
}

#[test]
fn json_text_keeps_structured_and_invalid_text() {
    assert_eq!(
        RawValue::from_json_text("{\"lng\":1,\"lat\":2}"),
        RawValue::String("{\"lng\":1,\"lat\":2}".into())
    );
    assert_eq!(
        RawValue::from_json_text("not json"),
        RawValue::String("not json".into())
    );
}

#[tokio::test]
async fn scripted_engine_answers_first_matching_rule() {
    let engine = ScriptedEngine::new()
        .respond("getZoom", RawValue::Number(3.0))
        .throw("boom", "ReferenceError: boom is not defined")
        .respond("get", RawValue::Null);

    assert_eq!(
        engine.evaluate("map.getZoom();").await.unwrap(),
        RawValue::Number(3.0)
    );
    assert_eq!(
        engine.evaluate("map.getPitch();").await.unwrap(),
        RawValue::Null
    );
    assert_eq!(
        engine.evaluate("map.setZoom(1.0);").await.unwrap(),
        RawValue::Undefined
    );
    assert!(matches!(
        engine.evaluate("boom();").await,
        Err(EngineFault::Exception(msg)) if msg.contains("boom")
    ));
    assert_eq!(engine.evaluated().len(), 4);
}

#[tokio::test]
async fn scripted_engine_refuses_when_not_ready() {
    let engine = ScriptedEngine::new();
    engine.set_ready(false);
    assert!(!engine.is_ready());
    assert!(matches!(
        engine.evaluate("map.getZoom();").await,
        Err(EngineFault::Unavailable)
    ));
    assert!(engine.evaluated().is_empty());
}

#[tokio::test]
async fn host_failures_surface_as_host_faults() {
    let engine = ScriptedEngine::new().on("x", Scripted::HostFailure("webview detached".into()));
    let err = engine.evaluate("x;").await.unwrap_err();
    assert!(matches!(err, EngineFault::Host(_)));
    assert_eq!(err.to_string(), "webview detached");
}
