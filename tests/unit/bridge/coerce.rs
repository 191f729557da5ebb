use super::*;
use serde::Deserialize;

#[test]
fn none_shape_swallows_anything() {
    assert_eq!(coerce(RawValue::Number(1.0), ResultShape::None), ReturnValue::None);
    assert_eq!(coerce(RawValue::Undefined, ResultShape::None), ReturnValue::None);
}

#[test]
fn numbers_accept_numeric_strings() {
    assert_eq!(
        coerce(RawValue::Number(2.5), ResultShape::Number),
        ReturnValue::Number(2.5)
    );
    assert_eq!(
        coerce(RawValue::String("5".into()), ResultShape::Number),
        ReturnValue::Number(5.0)
    );
    assert_eq!(
        coerce(RawValue::String(" \"7.25\" ".into()), ResultShape::Number),
        ReturnValue::Number(7.25)
    );
}

#[test]
fn non_numeric_strings_fail_coercion() {
    let v = coerce(RawValue::String("abc".into()), ResultShape::Number);
    assert!(matches!(v, ReturnValue::Error(BridgeError::CoercionFailed(_))));
    let v = coerce(RawValue::Null, ResultShape::Number);
    assert!(matches!(v, ReturnValue::Error(BridgeError::CoercionFailed(_))));
}

#[test]
fn non_finite_words_are_not_numbers() {
    for word in ["NaN", "inf", "infinity", "-Infinity", "\"nan\""] {
        let v = coerce(RawValue::String(word.into()), ResultShape::Number);
        assert!(
            matches!(v, ReturnValue::Error(BridgeError::CoercionFailed(_))),
            "{word} coerced to {v:?}"
        );
    }
    assert_eq!(
        coerce(RawValue::String("1e3".into()), ResultShape::Number),
        ReturnValue::Number(1000.0)
    );
}

#[test]
fn booleans_accept_native_and_quoted_forms() {
    assert_eq!(
        coerce(RawValue::Bool(false), ResultShape::Bool),
        ReturnValue::Bool(false)
    );
    assert_eq!(
        coerce(RawValue::String("true".into()), ResultShape::Bool),
        ReturnValue::Bool(true)
    );
    assert_eq!(
        coerce(RawValue::String("\"false\"".into()), ResultShape::Bool),
        ReturnValue::Bool(false)
    );
    assert!(coerce(RawValue::String("yes".into()), ResultShape::Bool).is_error());
}

#[test]
fn strings_must_be_native() {
    assert_eq!(
        coerce(RawValue::String("#00ff00".into()), ResultShape::String),
        ReturnValue::String("#00ff00".into())
    );
    assert!(coerce(RawValue::Number(1.0), ResultShape::String).is_error());
}

#[test]
fn documents_pass_through_untouched() {
    let text = "{\"lng\":1.5,\"lat\":2}";
    assert_eq!(
        coerce(RawValue::String(text.into()), ResultShape::Document),
        ReturnValue::String(text.into())
    );
    assert!(coerce(RawValue::Null, ResultShape::Document).is_error());
    assert!(coerce(RawValue::Undefined, ResultShape::Document).is_error());
}

#[test]
fn accessors_propagate_errors_and_mismatches() {
    assert_eq!(ReturnValue::Number(3.0).into_number(), Ok(3.0));
    assert_eq!(
        ReturnValue::Error(BridgeError::EngineUnavailable).into_number(),
        Err(BridgeError::EngineUnavailable)
    );
    assert!(matches!(
        ReturnValue::Bool(true).into_string(),
        Err(BridgeError::CoercionFailed(_))
    ));
    assert_eq!(ReturnValue::Bool(true).into_unit(), Ok(()));
    assert_eq!(
        ReturnValue::Error(BridgeError::remote("x")).into_unit(),
        Err(BridgeError::remote("x"))
    );
}

#[derive(Debug, Deserialize, PartialEq)]
struct Bounds {
    min: f64,
    max: f64,
}

#[test]
fn decode_document_parses_or_fails_coercion() {
    let ok: Bounds = decode_document(ReturnValue::String("{\"min\":0,\"max\":10}".into())).unwrap();
    assert_eq!(ok, Bounds { min: 0.0, max: 10.0 });

    let bad = decode_document::<Bounds>(ReturnValue::String("{\"min\":".into()));
    assert!(matches!(bad, Err(BridgeError::CoercionFailed(_))));
}
