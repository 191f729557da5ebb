//! One type per remote operation.
//!
//! A command is an immutable value that renders itself as exact script source and declares the
//! shape of the result it expects back. Rendering is a pure function of the command's fields.

use std::fmt::Debug;

use crate::foundation::error::BridgeResult;
use crate::object::ids::{ObjectId, ObjectRegistry};

/// Camera and viewport commands.
pub mod camera;
/// Color-ramp remote object commands.
pub mod color_ramp;
/// Style, source and layer commands.
pub mod style;

/// Global the map instance is bound to in the page.
pub const MAP: &str = "map";
/// SDK namespace holding constructors and built-in collections.
pub const SDK: &str = "maptilersdk";

/// What the dispatcher should expect back from the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultShape {
    /// Nothing meaningful; any raw value is dropped.
    None,
    /// Boolean scalar.
    Bool,
    /// Numeric scalar (native number or numeric string).
    Number,
    /// String scalar.
    String,
    /// Structured value, stringified remotely and returned as a string for the typed caller.
    Document,
}

impl ResultShape {
    /// Structured results are wrapped in `JSON.stringify` on the remote side.
    pub fn is_document(self) -> bool {
        self == ResultShape::Document
    }
}

/// A single remote operation.
pub trait Command: Debug + Send + Sync {
    /// Exact script text sent to the engine.
    fn render(&self) -> BridgeResult<String>;

    /// Expected result shape.
    fn shape(&self) -> ResultShape;

    /// Remote objects this command reads or mutates; each must already exist.
    fn references(&self) -> Vec<&ObjectId> {
        Vec::new()
    }

    /// Remote object this command binds under a new name, if any.
    fn declares(&self) -> Option<&ObjectId> {
        None
    }

    /// Check every referenced identifier against `registry`.
    fn validate(&self, registry: &ObjectRegistry) -> BridgeResult<()> {
        for id in self.references() {
            registry.check(id)?;
        }
        Ok(())
    }
}

pub use camera::{
    AnimationOptions, CameraOptions, EaseTo, FitBounds, FitBoundsOptions, FlyTo, GetBearing,
    GetBounds, GetCenter, GetPitch, GetZoom, IsMoving, JumpTo, SetBearing, SetCenter,
    SetMaxBounds, SetMaxZoom, SetMinZoom, SetPitch, SetZoom, ZoomIn, ZoomOut,
};
pub use color_ramp::{
    BuiltinRamp, CloneBuiltinColorRamp, ColorRampFromArrayDefinition, ColorRampOptions,
    ColorStop, CreateColorRamp, GetColorHex, GetColorRampBounds, GetColorRampStops,
    RampTarget, ResampleColorRamp, ResampleMethod, ReverseColorRamp, ScaleColorRamp,
    SetColorRampStops,
};
pub use style::{
    AddLayer, AddSource, GetLayerIds, HasLayer, HasSource, IsSourceLoaded, IsStyleLoaded,
    MoveLayer, RemoveLayer, RemoveSource, ResetPaintProperty, SetFilter, SetLayerZoomRange,
    SetLayoutProperty, SetPaintProperty, SetStyle,
};
