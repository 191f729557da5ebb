use super::*;
use crate::style::expression::{get, unclustered};
use crate::style::source::{SourceSpec, TileSourceSpec};
use serde_json::{Value, json};

fn fill_layer() -> Layer {
    Layer {
        id: "parks".to_string(),
        source: Some("osm".to_string()),
        source_layer: Some("landuse".to_string()),
        min_zoom: None,
        max_zoom: None,
        filter: None,
        style: LayerStyle::fill(),
    }
}

fn parsed(layer: &Layer) -> Value {
    serde_json::from_str(&layer.to_script()).unwrap()
}

#[test]
fn kind_wire_names_are_explicit() {
    assert_eq!(LayerKind::FillExtrusion.as_str(), "fill-extrusion");
    assert_eq!(
        serde_json::to_value(LayerKind::FillExtrusion).unwrap(),
        json!("fill-extrusion")
    );
    assert!(!LayerKind::Background.needs_source());
}

#[test]
fn defaults_apply_at_accessors_not_construction() {
    let paint = FillPaint::default();
    assert_eq!(paint.color, None);
    assert_eq!(paint.color(), StyleValue::Color(Color::BLACK));
    assert!(paint.antialias());

    assert_eq!(HillshadePaint::default().exaggeration(), StyleValue::Number(0.5));
    assert_eq!(HeatmapPaint::default().radius(), StyleValue::Number(30.0));
    assert_eq!(RasterPaint::default().resampling(), RasterResampling::Linear);
}

#[test]
fn unset_and_set_to_default_serialize_identically() {
    let unset = fill_layer();
    let mut explicit = fill_layer();
    explicit.style = LayerStyle::Fill {
        paint: FillPaint {
            color: Some(StyleValue::Color(Color::BLACK)),
            antialias: Some(true),
            ..FillPaint::default()
        },
        layout: FillLayout::default(),
    };
    assert_ne!(unset, explicit);
    assert_eq!(unset.to_script(), explicit.to_script());
}

#[test]
fn fill_layer_renders_full_record() {
    let mut layer = fill_layer();
    layer.min_zoom = Some(4.0);
    layer.filter = Some(unclustered());
    assert_eq!(
        layer.to_script(),
        concat!(
            r#"{"id":"parks","type":"fill","source":"osm","source-layer":"landuse","minzoom":4.0,"#,
            r#""filter":["!",["has","point_count"]],"layout":{"visibility":"visible"},"#,
            r##""paint":{"fill-antialias":true,"fill-opacity":1.0,"fill-color":"#000000","##,
            r#""fill-translate":[0.0,0.0],"fill-translate-anchor":"map"}}"#
        )
    );
}

#[test]
fn expression_valued_properties_compile_inline() {
    let layer = Layer {
        id: "labels".into(),
        source: Some("pts".into()),
        source_layer: None,
        min_zoom: None,
        max_zoom: None,
        filter: None,
        style: LayerStyle::Symbol {
            paint: SymbolPaint::default(),
            layout: SymbolLayout {
                text_field: Some(StyleValue::Expression(get("name"))),
                text_font: Some(vec!["Noto Sans Regular".into()]),
                ..SymbolLayout::default()
            },
        },
    };
    let v = parsed(&layer);
    assert_eq!(v["layout"]["text-field"], json!(["get", "name"]));
    assert_eq!(v["layout"]["text-font"], json!(["Noto Sans Regular"]));
    assert_eq!(v["layout"]["symbol-placement"], json!("point"));
    assert_eq!(v["paint"]["text-halo-color"], json!("#00000000"));
}

#[test]
fn untyped_layers_keep_property_order() {
    let layer = Layer {
        id: "bg".into(),
        source: None,
        source_layer: None,
        min_zoom: None,
        max_zoom: None,
        filter: None,
        style: LayerStyle::Untyped {
            kind: LayerKind::Background,
            paint: vec![
                ("background-opacity".into(), StyleValue::Number(0.5)),
                ("background-color".into(), StyleValue::Color(Color::WHITE)),
            ],
            layout: vec![],
        },
    };
    assert_eq!(
        layer.to_script(),
        r##"{"id":"bg","type":"background","layout":{},"paint":{"background-opacity":0.5,"background-color":"#ffffff"}}"##
    );
    assert!(layer.validate().is_ok());
}

#[test]
fn zoom_bounds_are_validated() {
    let mut layer = fill_layer();
    layer.min_zoom = Some(10.0);
    layer.max_zoom = Some(5.0);
    assert!(layer.validate().is_err());

    layer.min_zoom = Some(-1.0);
    layer.max_zoom = None;
    assert!(layer.validate().is_err());

    layer.min_zoom = Some(0.0);
    layer.max_zoom = Some(24.0);
    assert!(layer.validate().is_ok());

    layer.max_zoom = Some(24.5);
    assert!(layer.validate().is_err());
}

#[test]
fn source_layer_required_iff_vector_source() {
    let vector = Source::new("osm", SourceSpec::Vector(TileSourceSpec::from_url("u")));
    let raster = Source::new("osm", SourceSpec::Raster(TileSourceSpec::from_url("u")));

    let mut layer = fill_layer();
    assert!(layer.validate_against(&vector).is_ok());
    assert!(layer.validate_against(&raster).is_err());

    layer.source_layer = None;
    assert!(layer.validate_against(&vector).is_err());
    assert!(layer.validate_against(&raster).is_ok());
}

#[test]
fn source_presence_follows_kind() {
    let mut layer = fill_layer();
    layer.source = None;
    assert!(layer.validate().is_err());

    let mut bg = fill_layer();
    bg.style = LayerStyle::untyped(LayerKind::Background);
    assert!(bg.validate().is_err());
}
