use serde::Deserialize;

use crate::bridge::{Bridge, decode_document};
use crate::command::{
    BuiltinRamp, CloneBuiltinColorRamp, ColorRampFromArrayDefinition, ColorRampOptions, ColorStop,
    Command, CreateColorRamp, GetColorHex, GetColorRampBounds, GetColorRampStops, RampTarget,
    ResampleColorRamp, ResampleMethod, ReverseColorRamp, ScaleColorRamp, SetColorRampStops,
};
use crate::foundation::core::Color;
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::object::ids::{ObjectId, ObjectRegistry};

/// Value range of a ramp as reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RampBounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

/// Typed handle to a color ramp living in the engine.
///
/// Handles only come out of successful create or clone commands, so the wrapped identifier is
/// live in the registry that minted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRamp {
    id: ObjectId,
}

impl ColorRamp {
    /// Engine-side identifier.
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Construct a ramp from an options document.
    pub async fn create(
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        id: ObjectId,
        options: ColorRampOptions,
    ) -> BridgeResult<Self> {
        let cmd = CreateColorRamp { id, options };
        bridge.execute_checked(&cmd, registry).await.into_unit()?;
        Ok(Self { id: cmd.id })
    }

    /// Construct a ramp from `(value, color)` pairs.
    pub async fn from_array_definition(
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        id: ObjectId,
        definition: Vec<(f64, Color)>,
    ) -> BridgeResult<Self> {
        let cmd = ColorRampFromArrayDefinition { id, definition };
        bridge.execute_checked(&cmd, registry).await.into_unit()?;
        Ok(Self { id: cmd.id })
    }

    /// Private copy of a built-in ramp.
    pub async fn builtin(
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        id: ObjectId,
        ramp: BuiltinRamp,
    ) -> BridgeResult<Self> {
        let cmd = CloneBuiltinColorRamp { id, ramp };
        bridge.execute_checked(&cmd, registry).await.into_unit()?;
        Ok(Self { id: cmd.id })
    }

    async fn transform(
        &self,
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        cmd: &dyn Command,
        target: &RampTarget,
    ) -> BridgeResult<ColorRamp> {
        bridge.execute_checked(cmd, registry).await.into_unit()?;
        Ok(match target {
            RampTarget::InPlace => self.clone(),
            RampTarget::Clone(id) => ColorRamp { id: id.clone() },
        })
    }

    /// Remap onto `[min, max]`. Returns the handle the result lives under.
    pub async fn scale(
        &self,
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        min: f64,
        max: f64,
        target: RampTarget,
    ) -> BridgeResult<ColorRamp> {
        let cmd = ScaleColorRamp {
            ramp: self.id.clone(),
            min,
            max,
            target,
        };
        self.transform(bridge, registry, &cmd, &cmd.target).await
    }

    /// Flip the stop order.
    pub async fn reverse(
        &self,
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        target: RampTarget,
    ) -> BridgeResult<ColorRamp> {
        let cmd = ReverseColorRamp {
            ramp: self.id.clone(),
            target,
        };
        self.transform(bridge, registry, &cmd, &cmd.target).await
    }

    /// Replace the stops.
    pub async fn set_stops(
        &self,
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        stops: Vec<ColorStop>,
        target: RampTarget,
    ) -> BridgeResult<ColorRamp> {
        let cmd = SetColorRampStops {
            ramp: self.id.clone(),
            stops,
            target,
        };
        self.transform(bridge, registry, &cmd, &cmd.target).await
    }

    /// Resample into `samples` evenly spaced stops using `method`.
    pub async fn resample(
        &self,
        bridge: &Bridge,
        registry: &mut ObjectRegistry,
        method: ResampleMethod,
        samples: u32,
        target: RampTarget,
    ) -> BridgeResult<ColorRamp> {
        let cmd = ResampleColorRamp {
            ramp: self.id.clone(),
            method,
            samples,
            target,
        };
        self.transform(bridge, registry, &cmd, &cmd.target).await
    }

    /// Current value range.
    pub async fn bounds(
        &self,
        bridge: &Bridge,
        registry: &ObjectRegistry,
    ) -> BridgeResult<RampBounds> {
        let cmd = GetColorRampBounds(self.id.clone());
        cmd.validate(registry)?;
        decode_document(bridge.execute(&cmd).await)
    }

    /// Color at `value`.
    pub async fn color_at(
        &self,
        bridge: &Bridge,
        registry: &ObjectRegistry,
        value: f64,
    ) -> BridgeResult<Color> {
        let cmd = GetColorHex {
            ramp: self.id.clone(),
            value,
        };
        cmd.validate(registry)?;
        let hex = bridge.execute(&cmd).await.into_string()?;
        Color::parse_hex(&hex)
            .map_err(|_| BridgeError::coercion(format!("\"{hex}\" is not a hex color")))
    }

    /// Stops as the engine currently holds them.
    pub async fn stops(
        &self,
        bridge: &Bridge,
        registry: &ObjectRegistry,
    ) -> BridgeResult<Vec<ColorStop>> {
        let cmd = GetColorRampStops(self.id.clone());
        cmd.validate(registry)?;
        decode_document(bridge.execute(&cmd).await)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/color_ramp.rs"]
mod tests;
