use super::*;
use crate::foundation::core::Color;
use crate::foundation::script::ScriptLiteral;
use crate::style::expression::{clustered, unclustered};
use crate::style::source::{GeoJsonData, GeoJsonSourceSpec, SourceSpec};

fn points() -> Source {
    Source::new(
        "pts",
        SourceSpec::GeoJson(
            GeoJsonSourceSpec::new(GeoJsonData::Url("https://d.example/p.json".into()))
                .clustered(40),
        ),
    )
}

#[test]
fn untyped_layers_keep_property_order() {
    let layer = LayerBuilder::untyped("clusters", LayerKind::Circle, "pts")
        .filter(clustered())
        .paint("circle-color", Color::rgb(0x51, 0xbb, 0xd6))
        .unwrap()
        .paint("circle-radius", 20.0)
        .unwrap()
        .layout("visibility", "visible")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        layer.to_script(),
        "{\"id\":\"clusters\",\"type\":\"circle\",\"source\":\"pts\",\
         \"filter\":[\"has\",\"point_count\"],\"layout\":{\"visibility\":\"visible\"},\
         \"paint\":{\"circle-color\":\"#51bbd6\",\"circle-radius\":20.0}}"
    );
}

#[test]
fn typed_layers_refuse_named_properties() {
    let err = LayerBuilder::fill("parks", "osm")
        .paint("fill-color", "#00ff00")
        .unwrap_err();
    assert!(err.to_string().contains("typed paint record"));
}

#[test]
fn style_closure_edits_typed_records() {
    let layer = LayerBuilder::heatmap("heat", "pts")
        .style(|style| {
            if let LayerStyle::Heatmap { paint, .. } = style {
                paint.radius = Some(StyleValue::Number(12.0));
            }
        })
        .build()
        .unwrap();
    let LayerStyle::Heatmap { paint, .. } = &layer.style else {
        panic!("expected heatmap style");
    };
    assert_eq!(paint.radius(), StyleValue::Number(12.0));
}

#[test]
fn zoom_range_is_validated_at_build() {
    assert!(LayerBuilder::raster("r", "sat").zoom_range(3.0, 2.0).build().is_err());
    assert!(LayerBuilder::raster("r", "sat").zoom_range(0.0, 24.0).build().is_ok());
}

#[test]
fn background_needs_no_source() {
    let layer = LayerBuilder::background("bg").build().unwrap();
    assert_eq!(layer.source, None);
    assert!(LayerBuilder::new("f", LayerStyle::fill()).build().is_err());
}

#[test]
fn document_builder_validates_links() {
    let doc = StyleDocumentBuilder::new()
        .source(points())
        .unwrap()
        .layer(
            LayerBuilder::untyped("clusters", LayerKind::Circle, "pts")
                .filter(clustered())
                .build()
                .unwrap(),
        )
        .layer(
            LayerBuilder::untyped("points", LayerKind::Circle, "pts")
                .filter(unclustered())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(doc.layers.len(), 2);

    assert!(StyleDocumentBuilder::new()
        .source(points())
        .unwrap()
        .source(points())
        .is_err());
}
