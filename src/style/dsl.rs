use crate::foundation::error::{BridgeError, BridgeResult};
use crate::style::document::StyleDocument;
use crate::style::expression::PropertyValue;
use crate::style::layer::{Layer, LayerKind, LayerStyle};
use crate::style::source::Source;
use crate::style::value::StyleValue;

/// Builder for a [`StyleDocument`]; `build` validates the result.
#[derive(Debug, Default)]
pub struct StyleDocumentBuilder {
    sources: Vec<Source>,
    layers: Vec<Layer>,
}

impl StyleDocumentBuilder {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source; ids must be unique.
    pub fn source(mut self, source: Source) -> BridgeResult<Self> {
        if self.sources.iter().any(|s| s.id == source.id) {
            return Err(BridgeError::validation(format!(
                "duplicate source id '{}'",
                source.id
            )));
        }
        self.sources.push(source);
        Ok(self)
    }

    /// Stack a layer on top of the ones added so far.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Finish and validate.
    pub fn build(self) -> BridgeResult<StyleDocument> {
        let doc = StyleDocument {
            sources: self.sources,
            layers: self.layers,
        };
        doc.validate()?;
        Ok(doc)
    }
}

/// Builder for a single [`Layer`].
#[derive(Debug)]
pub struct LayerBuilder {
    layer: Layer,
}

impl LayerBuilder {
    /// Layer with the given style and no source.
    pub fn new(id: impl Into<String>, style: LayerStyle) -> Self {
        Self {
            layer: Layer {
                id: id.into(),
                source: None,
                source_layer: None,
                min_zoom: None,
                max_zoom: None,
                filter: None,
                style,
            },
        }
    }

    /// `fill` layer drawing from `source`.
    pub fn fill(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::fill()).source(source)
    }

    /// `raster` layer drawing from `source`.
    pub fn raster(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::raster()).source(source)
    }

    /// `heatmap` layer drawing from `source`.
    pub fn heatmap(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::heatmap()).source(source)
    }

    /// `hillshade` layer drawing from `source`.
    pub fn hillshade(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::hillshade()).source(source)
    }

    /// `symbol` layer drawing from `source`.
    pub fn symbol(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::symbol()).source(source)
    }

    /// Untyped layer of `kind` drawing from `source`.
    pub fn untyped(id: impl Into<String>, kind: LayerKind, source: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::untyped(kind)).source(source)
    }

    /// Sourceless `background` layer.
    pub fn background(id: impl Into<String>) -> Self {
        Self::new(id, LayerStyle::untyped(LayerKind::Background))
    }

    /// Set the source.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.layer.source = Some(source.into());
        self
    }

    /// Set the vector-tile source layer.
    pub fn source_layer(mut self, name: impl Into<String>) -> Self {
        self.layer.source_layer = Some(name.into());
        self
    }

    /// Set both zoom bounds.
    pub fn zoom_range(mut self, min: f64, max: f64) -> Self {
        self.layer.min_zoom = Some(min);
        self.layer.max_zoom = Some(max);
        self
    }

    /// Set the feature filter.
    pub fn filter(mut self, filter: PropertyValue) -> Self {
        self.layer.filter = Some(filter);
        self
    }

    /// Edit the typed style record in place.
    pub fn style(mut self, edit: impl FnOnce(&mut LayerStyle)) -> Self {
        edit(&mut self.layer.style);
        self
    }

    /// Append a paint property; only untyped layers take properties by name.
    pub fn paint(
        mut self,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> BridgeResult<Self> {
        match &mut self.layer.style {
            LayerStyle::Untyped { paint, .. } => paint.push((name.into(), value.into())),
            other => {
                return Err(BridgeError::validation(format!(
                    "{} layer '{}' takes a typed paint record",
                    other.kind().as_str(),
                    self.layer.id
                )));
            }
        }
        Ok(self)
    }

    /// Append a layout property; only untyped layers take properties by name.
    pub fn layout(
        mut self,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> BridgeResult<Self> {
        match &mut self.layer.style {
            LayerStyle::Untyped { layout, .. } => layout.push((name.into(), value.into())),
            other => {
                return Err(BridgeError::validation(format!(
                    "{} layer '{}' takes a typed layout record",
                    other.kind().as_str(),
                    self.layer.id
                )));
            }
        }
        Ok(self)
    }

    /// Finish and validate on its own; the source-layer rule is checked by the document.
    pub fn build(self) -> BridgeResult<Layer> {
        self.layer.validate()?;
        Ok(self.layer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/dsl.rs"]
mod tests;
