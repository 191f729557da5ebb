use std::collections::BTreeMap;

use crate::command::{AddLayer, AddSource, Command};
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::style::layer::Layer;
use crate::style::source::Source;

/// Sources and layers installed together onto a map.
///
/// Layers are kept bottom to top. Layer identifiers are expected to be unique, but collisions are
/// not detected here; the engine rejects the second `addLayer`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDocument {
    /// Sources in insertion order.
    pub sources: Vec<Source>,
    /// Layers, bottom to top.
    pub layers: Vec<Layer>,
}

impl StyleDocument {
    /// Source by id.
    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// First layer with `id`.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Check sources, layers and the links between them.
    pub fn validate(&self) -> BridgeResult<()> {
        let mut by_id = BTreeMap::new();
        for source in &self.sources {
            source.validate()?;
            if by_id.insert(source.id.as_str(), source).is_some() {
                return Err(BridgeError::validation(format!(
                    "duplicate source id '{}'",
                    source.id
                )));
            }
        }

        for layer in &self.layers {
            match &layer.source {
                None => layer.validate()?,
                Some(source_id) => {
                    let source = by_id.get(source_id.as_str()).ok_or_else(|| {
                        BridgeError::validation(format!(
                            "layer '{}' references unknown source '{source_id}'",
                            layer.id
                        ))
                    })?;
                    layer.validate_against(source)?;
                }
            }
        }
        Ok(())
    }

    /// Commands that install the document: every source, then every layer in stacking order.
    pub fn install_commands(&self) -> BridgeResult<Vec<Box<dyn Command>>> {
        self.validate()?;
        let mut cmds: Vec<Box<dyn Command>> =
            Vec::with_capacity(self.sources.len() + self.layers.len());
        for source in &self.sources {
            cmds.push(Box::new(AddSource(source.clone())));
        }
        for layer in &self.layers {
            cmds.push(Box::new(AddLayer::new(layer.clone())));
        }
        Ok(cmds)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/document.rs"]
mod tests;
