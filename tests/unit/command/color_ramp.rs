use super::*;
use crate::object::ids::ObjectRegistry;

fn id(name: &str) -> ObjectId {
    ObjectId::new(name).unwrap()
}

fn two_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::rgb(0, 0, 255)),
        ColorStop::new(100.0, Color::rgb(255, 0, 0)),
    ]
}

#[test]
fn create_declares_a_const_binding() {
    let cmd = CreateColorRamp {
        id: id("temps"),
        options: ColorRampOptions {
            min: Some(-20.0),
            max: Some(40.0),
            stops: vec![ColorStop::new(-20.0, Color::rgb(0, 0, 255))],
        },
    };
    assert_eq!(
        cmd.render().unwrap(),
        "const temps = new maptilersdk.ColorRamp({\"min\":-20.0,\"max\":40.0,\
         \"stops\":[{\"value\":-20.0,\"color\":\"#0000ff\"}]});"
    );
    assert_eq!(cmd.declares(), Some(&id("temps")));
    assert!(cmd.references().is_empty());
}

#[test]
fn create_rejects_inverted_range() {
    let cmd = CreateColorRamp {
        id: id("bad"),
        options: ColorRampOptions {
            min: Some(10.0),
            max: Some(0.0),
            stops: Vec::new(),
        },
    };
    assert!(matches!(cmd.render(), Err(BridgeError::Validation(_))));
}

#[test]
fn array_definition_renders_value_color_pairs() {
    let cmd = ColorRampFromArrayDefinition {
        id: id("ramp"),
        definition: vec![
            (0.0, Color::rgb(0, 0, 0)),
            (1.0, Color::rgba(255, 255, 255, 128)),
        ],
    };
    assert_eq!(
        cmd.render().unwrap(),
        "const ramp = maptilersdk.ColorRamp.fromArrayDefinition([[0.0,\"#000000\"],[1.0,\"#ffffff80\"]]);"
    );
}

#[test]
fn builtin_is_cloned_out_of_the_collection() {
    let cmd = CloneBuiltinColorRamp {
        id: id("v"),
        ramp: BuiltinRamp::Viridis,
    };
    assert_eq!(
        cmd.render().unwrap(),
        "const v = maptilersdk.ColorRampCollection.VIRIDIS.clone();"
    );
}

#[test]
fn scale_clone_versus_in_place() {
    let clone = ScaleColorRamp {
        ramp: id("a"),
        min: 0.0,
        max: 10.0,
        target: RampTarget::Clone(id("b")),
    };
    assert_eq!(
        clone.render().unwrap(),
        "const b = a.scale(0.0, 10.0, {\"clone\":true});"
    );
    assert_eq!(clone.declares(), Some(&id("b")));

    let in_place = ScaleColorRamp {
        target: RampTarget::InPlace,
        ..clone
    };
    assert_eq!(in_place.render().unwrap(), "a.scale(0.0, 10.0);");
    assert_eq!(in_place.declares(), None);
    assert_eq!(in_place.references(), vec![&id("a")]);
}

#[test]
fn every_transform_has_both_shapes() {
    let reverse = ReverseColorRamp {
        ramp: id("a"),
        target: RampTarget::InPlace,
    };
    assert_eq!(reverse.render().unwrap(), "a.reverse();");
    let reverse = ReverseColorRamp {
        target: RampTarget::Clone(id("r")),
        ..reverse
    };
    assert_eq!(
        reverse.render().unwrap(),
        "const r = a.reverse({\"clone\":true});"
    );

    let stops = SetColorRampStops {
        ramp: id("a"),
        stops: two_stops(),
        target: RampTarget::InPlace,
    };
    assert_eq!(
        stops.render().unwrap(),
        "a.setStops([{\"value\":0.0,\"color\":\"#0000ff\"},{\"value\":100.0,\"color\":\"#ff0000\"}]);"
    );
    let stops = SetColorRampStops {
        target: RampTarget::Clone(id("s")),
        ..stops
    };
    assert!(
        stops
            .render()
            .unwrap()
            .starts_with("const s = a.setStops([")
    );
    assert!(stops.render().unwrap().ends_with("], {\"clone\":true});"));

    let resample = ResampleColorRamp {
        ramp: id("a"),
        method: ResampleMethod::EaseOutSqrt,
        samples: 8,
        target: RampTarget::InPlace,
    };
    assert_eq!(
        resample.render().unwrap(),
        "a.resample(\"ease-out-sqrt\", 8);"
    );
    let resample = ResampleColorRamp {
        target: RampTarget::Clone(id("q")),
        ..resample
    };
    assert_eq!(
        resample.render().unwrap(),
        "const q = a.resample(\"ease-out-sqrt\", 8, {\"clone\":true});"
    );
}

#[test]
fn clone_onto_itself_is_rejected() {
    let cmd = ReverseColorRamp {
        ramp: id("a"),
        target: RampTarget::Clone(id("a")),
    };
    assert!(matches!(cmd.render(), Err(BridgeError::Validation(_))));
}

#[test]
fn resample_needs_two_samples() {
    let cmd = ResampleColorRamp {
        ramp: id("a"),
        method: ResampleMethod::EaseInExp,
        samples: 1,
        target: RampTarget::InPlace,
    };
    assert!(cmd.render().is_err());
}

#[test]
fn non_finite_stops_are_rejected() {
    let cmd = SetColorRampStops {
        ramp: id("a"),
        stops: vec![ColorStop::new(f64::NAN, Color::BLACK)],
        target: RampTarget::InPlace,
    };
    assert!(cmd.render().is_err());
}

#[test]
fn queries_reference_their_ramp() {
    let bounds = GetColorRampBounds(id("a"));
    assert_eq!(bounds.render().unwrap(), "JSON.stringify(a.getBounds());");
    assert_eq!(bounds.shape(), ResultShape::Document);

    let hex = GetColorHex {
        ramp: id("a"),
        value: 5.0,
    };
    assert_eq!(hex.render().unwrap(), "a.getColorHex(5.0);");
    assert_eq!(hex.shape(), ResultShape::String);

    let stops = GetColorRampStops(id("a"));
    assert_eq!(
        stops.render().unwrap(),
        "JSON.stringify(a.getRawColorStops());"
    );
}

#[test]
fn validation_reports_unknown_ramps() {
    let mut registry = ObjectRegistry::new();
    let cmd = GetColorHex {
        ramp: id("ghost"),
        value: 1.0,
    };
    assert_eq!(
        cmd.validate(&registry),
        Err(BridgeError::ProtocolViolation("ghost".into()))
    );
    registry.register(id("ghost"));
    assert!(cmd.validate(&registry).is_ok());
}

#[test]
fn stops_decode_from_engine_rgba_arrays() {
    let stops: Vec<ColorStop> = serde_json::from_str(
        r##"[{"value":0,"color":[0,0,255,255]},{"value":1,"color":"#ff0000"}]"##,
    )
    .unwrap();
    assert_eq!(stops[0].color, Color::rgb(0, 0, 255));
    assert_eq!(stops[1], ColorStop::new(1.0, Color::rgb(255, 0, 0)));
}

#[test]
fn opaque_stops_read_back_render_without_alpha() {
    let stops: Vec<ColorStop> = serde_json::from_str(
        r#"[{"value":0,"color":[0,0,255,255]},{"value":1,"color":[255,0,0,128]}]"#,
    )
    .unwrap();
    let cmd = SetColorRampStops {
        ramp: id("r"),
        stops,
        target: RampTarget::InPlace,
    };
    assert_eq!(
        cmd.render().unwrap(),
        "r.setStops([{\"value\":0.0,\"color\":\"#0000ff\"},{\"value\":1.0,\"color\":\"#ff000080\"}]);"
    );
}
