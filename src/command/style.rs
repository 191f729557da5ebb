use crate::command::{Command, MAP, ResultShape};
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::{ScriptCall, encode_document, quote};
use crate::style::expression::PropertyValue;
use crate::style::layer::{Layer, validate_zoom_range};
use crate::style::source::Source;
use crate::style::value::StyleValue;

fn map_call(method: &str) -> ScriptCall {
    ScriptCall::method(MAP, method)
}

fn non_empty(what: &str, id: &str) -> BridgeResult<()> {
    if id.trim().is_empty() {
        return Err(BridgeError::validation(format!("{what} must be non-empty")));
    }
    Ok(())
}

/// `map.setStyle("url");`
#[derive(Clone, Debug, PartialEq)]
pub struct SetStyle(pub String);

impl Command for SetStyle {
    fn render(&self) -> BridgeResult<String> {
        non_empty("style url", &self.0)?;
        Ok(map_call("setStyle").arg(&self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.addSource("id", {...});`
#[derive(Clone, Debug, PartialEq)]
pub struct AddSource(pub Source);

impl Command for AddSource {
    fn render(&self) -> BridgeResult<String> {
        self.0.validate()?;
        Ok(map_call("addSource")
            .arg(&self.0.id)
            .raw_arg(encode_document(&self.0.spec)?)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.removeSource("id");`
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveSource(pub String);

impl Command for RemoveSource {
    fn render(&self) -> BridgeResult<String> {
        non_empty("source id", &self.0)?;
        Ok(map_call("removeSource").arg(&self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.addLayer({...}[, "before"]);`
#[derive(Clone, Debug, PartialEq)]
pub struct AddLayer {
    /// Layer definition.
    pub layer: Layer,
    /// Insert below this existing layer; appended on top when absent.
    pub before: Option<String>,
}

impl AddLayer {
    /// Append `layer` on top of the stack.
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            before: None,
        }
    }

    /// Insert below `before` instead.
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }
}

impl Command for AddLayer {
    fn render(&self) -> BridgeResult<String> {
        self.layer.validate()?;
        Ok(map_call("addLayer")
            .arg(&self.layer)
            .opt_raw_arg(self.before.as_deref().map(quote))
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.removeLayer("id");`
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveLayer(pub String);

impl Command for RemoveLayer {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.0)?;
        Ok(map_call("removeLayer").arg(&self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.moveLayer("id"[, "before"]);`
#[derive(Clone, Debug, PartialEq)]
pub struct MoveLayer {
    /// Layer to move.
    pub id: String,
    /// Move below this layer; moved to the top when absent.
    pub before: Option<String>,
}

impl Command for MoveLayer {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.id)?;
        Ok(map_call("moveLayer")
            .arg(&self.id)
            .opt_raw_arg(self.before.as_deref().map(quote))
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setPaintProperty("layer", "name", value);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetPaintProperty {
    /// Target layer.
    pub layer: String,
    /// Property name, e.g. `fill-color`.
    pub name: String,
    /// New value.
    pub value: StyleValue,
}

impl Command for SetPaintProperty {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.layer)?;
        non_empty("property name", &self.name)?;
        Ok(map_call("setPaintProperty")
            .arg(&self.layer)
            .arg(&self.name)
            .arg(&self.value)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setPaintProperty("layer", "name", null);` restores the engine default.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetPaintProperty {
    /// Target layer.
    pub layer: String,
    /// Property name.
    pub name: String,
}

impl Command for ResetPaintProperty {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.layer)?;
        non_empty("property name", &self.name)?;
        Ok(map_call("setPaintProperty")
            .arg(&self.layer)
            .arg(&self.name)
            .raw_arg("null")
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setLayoutProperty("layer", "name", value);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetLayoutProperty {
    /// Target layer.
    pub layer: String,
    /// Property name, e.g. `visibility`.
    pub name: String,
    /// New value.
    pub value: StyleValue,
}

impl Command for SetLayoutProperty {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.layer)?;
        non_empty("property name", &self.name)?;
        Ok(map_call("setLayoutProperty")
            .arg(&self.layer)
            .arg(&self.name)
            .arg(&self.value)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setFilter("layer", filter);`, where `None` renders `null` and removes the filter.
#[derive(Clone, Debug, PartialEq)]
pub struct SetFilter {
    /// Target layer.
    pub layer: String,
    /// New filter.
    pub filter: Option<PropertyValue>,
}

impl Command for SetFilter {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.layer)?;
        Ok(map_call("setFilter")
            .arg(&self.layer)
            .arg(self.filter.as_ref())
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setLayerZoomRange("layer", min, max);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetLayerZoomRange {
    /// Target layer.
    pub layer: String,
    /// Minimum zoom.
    pub min_zoom: f64,
    /// Maximum zoom.
    pub max_zoom: f64,
}

impl Command for SetLayerZoomRange {
    fn render(&self) -> BridgeResult<String> {
        non_empty("layer id", &self.layer)?;
        validate_zoom_range(&self.layer, Some(self.min_zoom), Some(self.max_zoom))?;
        Ok(map_call("setLayerZoomRange")
            .arg(&self.layer)
            .arg(self.min_zoom)
            .arg(self.max_zoom)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.getLayer("id") !== undefined;`
#[derive(Clone, Debug, PartialEq)]
pub struct HasLayer(pub String);

impl Command for HasLayer {
    fn render(&self) -> BridgeResult<String> {
        Ok(format!(
            "{} !== undefined;",
            map_call("getLayer").arg(&self.0).expr()
        ))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Bool
    }
}

/// `map.getSource("id") !== undefined;`
#[derive(Clone, Debug, PartialEq)]
pub struct HasSource(pub String);

impl Command for HasSource {
    fn render(&self) -> BridgeResult<String> {
        Ok(format!(
            "{} !== undefined;",
            map_call("getSource").arg(&self.0).expr()
        ))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Bool
    }
}

/// `map.isSourceLoaded("id");`
#[derive(Clone, Debug, PartialEq)]
pub struct IsSourceLoaded(pub String);

impl Command for IsSourceLoaded {
    fn render(&self) -> BridgeResult<String> {
        non_empty("source id", &self.0)?;
        Ok(map_call("isSourceLoaded").arg(&self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Bool
    }
}

/// `map.isStyleLoaded();`
#[derive(Clone, Debug, PartialEq)]
pub struct IsStyleLoaded;

impl Command for IsStyleLoaded {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("isStyleLoaded").statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Bool
    }
}

/// Layer ids of the current style, bottom to top.
#[derive(Clone, Debug, PartialEq)]
pub struct GetLayerIds;

impl Command for GetLayerIds {
    fn render(&self) -> BridgeResult<String> {
        Ok(format!(
            "JSON.stringify({}.layers.map((l) => l.id));",
            map_call("getStyle").expr()
        ))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Document
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/style.rs"]
mod tests;
