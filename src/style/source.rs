use serde::{Deserialize, Serialize};

use crate::foundation::core::LngLat;
use crate::foundation::error::{BridgeError, BridgeResult};

/// A named data source in a style.
#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    /// Source identifier, unique within a style.
    pub id: String,
    /// Source definition sent to the engine.
    pub spec: SourceSpec,
}

impl Source {
    /// Create a source.
    pub fn new(id: impl Into<String>, spec: SourceSpec) -> Self {
        Self {
            id: id.into(),
            spec,
        }
    }

    /// Vector-tile sources require layers to name a source layer.
    pub fn is_vector_tile(&self) -> bool {
        matches!(self.spec, SourceSpec::Vector(_))
    }

    /// Validate the definition.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.id.trim().is_empty() {
            return Err(BridgeError::validation("source id must be non-empty"));
        }
        match &self.spec {
            SourceSpec::Vector(t) | SourceSpec::Raster(t) => t.validate(&self.id),
            SourceSpec::RasterDem(d) => d.tiles.validate(&self.id),
            SourceSpec::GeoJson(g) => {
                if let GeoJsonData::Url(url) = &g.data
                    && url.trim().is_empty()
                {
                    return Err(BridgeError::validation(format!(
                        "geojson source '{}' data url must be non-empty",
                        self.id
                    )));
                }
                Ok(())
            }
            SourceSpec::Image(i) => {
                if i.url.trim().is_empty() {
                    return Err(BridgeError::validation(format!(
                        "image source '{}' url must be non-empty",
                        self.id
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Source definition, tagged by the engine's `type` field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SourceSpec {
    /// Vector tiles.
    #[serde(rename = "vector")]
    Vector(TileSourceSpec),
    /// Raster tiles.
    #[serde(rename = "raster")]
    Raster(TileSourceSpec),
    /// Raster elevation tiles.
    #[serde(rename = "raster-dem")]
    RasterDem(DemSourceSpec),
    /// GeoJSON data, inline or by URL.
    #[serde(rename = "geojson")]
    GeoJson(GeoJsonSourceSpec),
    /// A single georeferenced image.
    #[serde(rename = "image")]
    Image(ImageSourceSpec),
}

/// Tiled source via TileJSON `url` or explicit `tiles` templates.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TileSourceSpec {
    /// TileJSON URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Tile URL templates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<String>,
    /// Tile size in pixels.
    #[serde(rename = "tileSize", skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    /// Minimum zoom with data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<u32>,
    /// Maximum zoom with data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<u32>,
    /// Attribution HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl TileSourceSpec {
    /// Source backed by a TileJSON URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Source backed by tile templates.
    pub fn from_tiles(tiles: impl IntoIterator<Item = String>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            ..Self::default()
        }
    }

    fn validate(&self, id: &str) -> BridgeResult<()> {
        if self.url.is_none() && self.tiles.is_empty() {
            return Err(BridgeError::validation(format!(
                "source '{id}' needs a url or at least one tile template"
            )));
        }
        if let (Some(min), Some(max)) = (self.minzoom, self.maxzoom)
            && min > max
        {
            return Err(BridgeError::validation(format!(
                "source '{id}' minzoom must be <= maxzoom"
            )));
        }
        Ok(())
    }
}

/// Elevation tile encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemEncoding {
    /// Mapbox Terrain-RGB.
    #[serde(rename = "mapbox")]
    Mapbox,
    /// Terrarium.
    #[serde(rename = "terrarium")]
    Terrarium,
}

/// Raster elevation source.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DemSourceSpec {
    /// Tile addressing.
    #[serde(flatten)]
    pub tiles: TileSourceSpec,
    /// Pixel encoding of elevation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<DemEncoding>,
}

/// GeoJSON payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoJsonData {
    /// Fetched by the engine.
    Url(String),
    /// Inline feature or feature collection.
    Inline(serde_json::Value),
}

/// GeoJSON source with optional point clustering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeoJsonSourceSpec {
    /// Data payload.
    pub data: GeoJsonData,
    /// Cluster points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<bool>,
    /// Cluster radius in pixels.
    #[serde(rename = "clusterRadius", skip_serializing_if = "Option::is_none")]
    pub cluster_radius: Option<u32>,
    /// Max zoom at which points are clustered.
    #[serde(rename = "clusterMaxZoom", skip_serializing_if = "Option::is_none")]
    pub cluster_max_zoom: Option<u32>,
}

impl GeoJsonSourceSpec {
    /// Unclustered source over `data`.
    pub fn new(data: GeoJsonData) -> Self {
        Self {
            data,
            cluster: None,
            cluster_radius: None,
            cluster_max_zoom: None,
        }
    }

    /// Enable clustering with the given radius.
    pub fn clustered(mut self, radius: u32) -> Self {
        self.cluster = Some(true);
        self.cluster_radius = Some(radius);
        self
    }
}

/// Image overlay source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageSourceSpec {
    /// Image URL.
    pub url: String,
    /// Corners: top-left, top-right, bottom-right, bottom-left.
    pub coordinates: [LngLat; 4],
}

#[cfg(test)]
#[path = "../../tests/unit/style/source.rs"]
mod tests;
