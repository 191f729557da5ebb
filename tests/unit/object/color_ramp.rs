use super::*;
use std::sync::Arc;

use crate::bridge::{BridgeOpts, RawValue, ScriptedEngine};

fn setup(engine: ScriptedEngine) -> (Arc<ScriptedEngine>, Bridge, ObjectRegistry) {
    let engine = Arc::new(engine);
    let bridge = Bridge::spawn(engine.clone(), BridgeOpts::default());
    (engine, bridge, ObjectRegistry::new())
}

#[tokio::test]
async fn create_registers_and_clone_returns_a_new_handle() {
    let (engine, bridge, mut registry) = setup(ScriptedEngine::new());

    let base = ColorRamp::builtin(
        &bridge,
        &mut registry,
        ObjectId::new("base").unwrap(),
        BuiltinRamp::Turbo,
    )
    .await
    .unwrap();
    assert!(registry.contains(base.id()));

    let wide = base
        .scale(
            &bridge,
            &mut registry,
            0.0,
            50.0,
            RampTarget::Clone(ObjectId::new("wide").unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(wide.id().as_str(), "wide");
    assert_eq!(registry.len(), 2);

    let same = wide
        .reverse(&bridge, &mut registry, RampTarget::InPlace)
        .await
        .unwrap();
    assert_eq!(same, wide);
    assert_eq!(registry.len(), 2);

    assert_eq!(
        engine.evaluated(),
        vec![
            "const base = maptilersdk.ColorRampCollection.TURBO.clone();".to_string(),
            "const wide = base.scale(0.0, 50.0, {\"clone\":true});".to_string(),
            "wide.reverse();".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_create_leaves_no_usable_id() {
    let (engine, bridge, mut registry) = setup(ScriptedEngine::new().throw("fromArrayDefinition", "bad"));

    let err = ColorRamp::from_array_definition(
        &bridge,
        &mut registry,
        ObjectId::new("r").unwrap(),
        vec![(0.0, Color::BLACK)],
    )
    .await
    .unwrap_err();
    assert_eq!(err, BridgeError::remote("bad"));
    assert!(registry.is_empty());
    assert_eq!(engine.evaluated().len(), 1);
}

#[tokio::test]
async fn queries_decode_engine_documents() {
    let (_engine, bridge, mut registry) = setup(
        ScriptedEngine::new()
            .respond(
                "getBounds",
                RawValue::String("{\"min\":-5,\"max\":35}".into()),
            )
            .respond("getColorHex", RawValue::String("#FF8800".into()))
            .respond(
                "getRawColorStops",
                RawValue::String(
                    "[{\"value\":-5,\"color\":[0,0,255,255]},{\"value\":35,\"color\":[255,0,0,255]}]"
                        .into(),
                ),
            ),
    );

    let ramp = ColorRamp::create(
        &bridge,
        &mut registry,
        ObjectId::new("t").unwrap(),
        ColorRampOptions::from_stops([
            ColorStop::new(-5.0, Color::rgb(0, 0, 255)),
            ColorStop::new(35.0, Color::rgb(255, 0, 0)),
        ]),
    )
    .await
    .unwrap();

    assert_eq!(
        ramp.bounds(&bridge, &registry).await.unwrap(),
        RampBounds { min: -5.0, max: 35.0 }
    );
    assert_eq!(
        ramp.color_at(&bridge, &registry, 10.0).await.unwrap(),
        Color::rgb(0xff, 0x88, 0x00)
    );
    let stops = ramp.stops(&bridge, &registry).await.unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[1].value, 35.0);
}

#[tokio::test]
async fn queries_on_unknown_ids_are_protocol_violations() {
    let (engine, bridge, registry) = setup(ScriptedEngine::new());
    let ghost = ColorRamp {
        id: ObjectId::new("ghost").unwrap(),
    };
    assert_eq!(
        ghost.bounds(&bridge, &registry).await,
        Err(BridgeError::ProtocolViolation("ghost".into()))
    );
    assert!(engine.evaluated().is_empty());
}

#[tokio::test]
async fn malformed_hex_is_a_coercion_failure() {
    let (_engine, bridge, mut registry) =
        setup(ScriptedEngine::new().respond("getColorHex", RawValue::String("teal".into())));
    let ramp = ColorRamp::builtin(
        &bridge,
        &mut registry,
        ObjectId::new("r").unwrap(),
        BuiltinRamp::Viridis,
    )
    .await
    .unwrap();
    assert!(matches!(
        ramp.color_at(&bridge, &registry, 0.5).await,
        Err(BridgeError::CoercionFailed(_))
    ));
}

#[tokio::test]
async fn resample_and_set_stops_clone_under_new_ids() {
    let (engine, bridge, mut registry) = setup(ScriptedEngine::new());
    let ramp = ColorRamp::builtin(
        &bridge,
        &mut registry,
        ObjectId::new("r").unwrap(),
        BuiltinRamp::Magma,
    )
    .await
    .unwrap();

    let smooth = ramp
        .resample(
            &bridge,
            &mut registry,
            ResampleMethod::EaseInSquare,
            16,
            RampTarget::Clone(ObjectId::new("smooth").unwrap()),
        )
        .await
        .unwrap();
    let flat = smooth
        .set_stops(
            &bridge,
            &mut registry,
            vec![ColorStop::new(0.0, Color::WHITE)],
            RampTarget::InPlace,
        )
        .await
        .unwrap();
    assert_eq!(flat.id().as_str(), "smooth");
    assert_eq!(
        engine.evaluated()[1],
        "const smooth = r.resample(\"ease-in-square\", 16, {\"clone\":true});"
    );
    assert_eq!(
        engine.evaluated()[2],
        "smooth.setStops([{\"value\":0.0,\"color\":\"#ffffff\"}]);"
    );
}
