use super::*;
use crate::foundation::script::encode_document;
use serde_json::json;

#[test]
fn tile_sources_render_with_wire_type_names() {
    let s = SourceSpec::Vector(TileSourceSpec::from_url("https://tiles.example/v3.json"));
    assert_eq!(
        encode_document(&s).unwrap(),
        r#"{"type":"vector","url":"https://tiles.example/v3.json"}"#
    );

    let dem = SourceSpec::RasterDem(DemSourceSpec {
        tiles: TileSourceSpec {
            tile_size: Some(512),
            ..TileSourceSpec::from_tiles(["https://dem.example/{z}/{x}/{y}.png".to_string()])
        },
        encoding: Some(DemEncoding::Terrarium),
    });
    assert_eq!(
        encode_document(&dem).unwrap(),
        r#"{"type":"raster-dem","tiles":["https://dem.example/{z}/{x}/{y}.png"],"tileSize":512,"encoding":"terrarium"}"#
    );
}

#[test]
fn geojson_source_renders_clustering_options() {
    let s = SourceSpec::GeoJson(
        GeoJsonSourceSpec::new(GeoJsonData::Inline(json!({
            "type": "FeatureCollection",
            "features": []
        })))
        .clustered(50),
    );
    assert_eq!(
        encode_document(&s).unwrap(),
        r#"{"type":"geojson","data":{"type":"FeatureCollection","features":[]},"cluster":true,"clusterRadius":50}"#
    );
}

#[test]
fn only_vector_sources_are_vector_tile_backed() {
    let v = Source::new("v", SourceSpec::Vector(TileSourceSpec::from_url("u")));
    let r = Source::new("r", SourceSpec::Raster(TileSourceSpec::from_url("u")));
    assert!(v.is_vector_tile());
    assert!(!r.is_vector_tile());
}

#[test]
fn validation_requires_addressing() {
    let s = Source::new("v", SourceSpec::Vector(TileSourceSpec::default()));
    assert!(s.validate().is_err());

    let s = Source::new(
        "v",
        SourceSpec::Vector(TileSourceSpec {
            minzoom: Some(10),
            maxzoom: Some(2),
            ..TileSourceSpec::from_url("u")
        }),
    );
    assert!(s.validate().is_err());

    let s = Source::new("g", SourceSpec::GeoJson(GeoJsonSourceSpec::new(GeoJsonData::Url(" ".into()))));
    assert!(s.validate().is_err());
}
