//! Color ramps live in the engine as named `const` bindings.
//!
//! Constructors declare a binding under the caller's [`ObjectId`]. Transforms either mutate the
//! ramp they are called on ([`RampTarget::InPlace`], no declaration) or pass `{"clone":true}` and
//! bind the returned copy under a fresh identifier ([`RampTarget::Clone`]).

use serde::{Deserialize, Serialize};

use crate::command::{Command, ResultShape, SDK};
use crate::foundation::core::Color;
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::{ScriptCall, ScriptLiteral, encode_document, format_number};
use crate::object::ids::ObjectId;

/// One stop of a ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position on the ramp's value axis.
    #[serde(serialize_with = "crate::foundation::script::finite")]
    pub value: f64,
    /// Color at `value`.
    pub color: Color,
}

impl ColorStop {
    /// Create a stop.
    pub fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

fn validate_stops(stops: &[ColorStop]) -> BridgeResult<()> {
    if let Some(stop) = stops.iter().find(|s| !s.value.is_finite()) {
        return Err(BridgeError::validation(format!(
            "color stop value {} must be finite",
            stop.value
        )));
    }
    Ok(())
}

fn validate_range(min: f64, max: f64) -> BridgeResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(BridgeError::validation("ramp range must be finite"));
    }
    if min > max {
        return Err(BridgeError::validation(format!(
            "ramp min {min} must be <= max {max}"
        )));
    }
    Ok(())
}

/// Constructor document for `new maptilersdk.ColorRamp(...)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ColorRampOptions {
    /// Lower bound of the value axis; the engine derives it from the stops when unset.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub min: Option<f64>,
    /// Upper bound of the value axis.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub max: Option<f64>,
    /// Stops in caller order.
    pub stops: Vec<ColorStop>,
}

impl ColorRampOptions {
    /// Options holding only `stops`.
    pub fn from_stops(stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self {
            min: None,
            max: None,
            stops: stops.into_iter().collect(),
        }
    }

    /// Validate stop values and, when both are set, the range.
    pub fn validate(&self) -> BridgeResult<()> {
        validate_stops(&self.stops)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            validate_range(min, max)?;
        }
        Ok(())
    }
}

/// Entries of the engine's built-in ramp collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinRamp {
    /// `GRAY`
    Gray,
    /// `JET`
    Jet,
    /// `HOT`
    Hot,
    /// `COOL`
    Cool,
    /// `WARM`
    Warm,
    /// `VIRIDIS`
    Viridis,
    /// `MAGMA`
    Magma,
    /// `INFERNO`
    Inferno,
    /// `PLASMA`
    Plasma,
    /// `CIVIDIS`
    Cividis,
    /// `TURBO`
    Turbo,
    /// `RAINBOW`
    Rainbow,
    /// `BLACKBODY`
    Blackbody,
    /// `EARTH`
    Earth,
    /// `TEMPERATURE`
    Temperature,
    /// `BATHYMETRY`
    Bathymetry,
}

impl BuiltinRamp {
    /// Member name inside `ColorRampCollection`.
    pub fn as_str(self) -> &'static str {
        match self {
            BuiltinRamp::Gray => "GRAY",
            BuiltinRamp::Jet => "JET",
            BuiltinRamp::Hot => "HOT",
            BuiltinRamp::Cool => "COOL",
            BuiltinRamp::Warm => "WARM",
            BuiltinRamp::Viridis => "VIRIDIS",
            BuiltinRamp::Magma => "MAGMA",
            BuiltinRamp::Inferno => "INFERNO",
            BuiltinRamp::Plasma => "PLASMA",
            BuiltinRamp::Cividis => "CIVIDIS",
            BuiltinRamp::Turbo => "TURBO",
            BuiltinRamp::Rainbow => "RAINBOW",
            BuiltinRamp::Blackbody => "BLACKBODY",
            BuiltinRamp::Earth => "EARTH",
            BuiltinRamp::Temperature => "TEMPERATURE",
            BuiltinRamp::Bathymetry => "BATHYMETRY",
        }
    }
}

/// Where the result of a ramp transform lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RampTarget {
    /// Mutate the source ramp; nothing new is declared.
    InPlace,
    /// Leave the source untouched and bind a transformed copy under this identifier.
    Clone(ObjectId),
}

impl RampTarget {
    /// Identifier declared by the transform, if any.
    pub fn declared(&self) -> Option<&ObjectId> {
        match self {
            RampTarget::InPlace => None,
            RampTarget::Clone(id) => Some(id),
        }
    }
}

#[derive(Serialize)]
struct CloneOption {
    clone: bool,
}

// Shared tail of every transform: the clone variant gains a trailing options argument and a
// declaration, the in-place variant is a bare statement.
fn finish_transform(call: ScriptCall, source: &ObjectId, target: &RampTarget) -> BridgeResult<String> {
    match target {
        RampTarget::InPlace => Ok(call.statement()),
        RampTarget::Clone(id) if id == source => Err(BridgeError::validation(format!(
            "clone of '{source}' must be bound to a new identifier"
        ))),
        RampTarget::Clone(id) => Ok(call
            .raw_arg(encode_document(&CloneOption { clone: true })?)
            .declare(id.as_str())),
    }
}

/// `const <id> = new maptilersdk.ColorRamp({...});`
#[derive(Clone, Debug, PartialEq)]
pub struct CreateColorRamp {
    /// Binding to declare.
    pub id: ObjectId,
    /// Constructor document.
    pub options: ColorRampOptions,
}

impl Command for CreateColorRamp {
    fn render(&self) -> BridgeResult<String> {
        self.options.validate()?;
        Ok(ScriptCall::construct(&format!("{SDK}.ColorRamp"))
            .raw_arg(encode_document(&self.options)?)
            .declare(self.id.as_str()))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn declares(&self) -> Option<&ObjectId> {
        Some(&self.id)
    }
}

/// `const <id> = maptilersdk.ColorRamp.fromArrayDefinition([[v,"#rrggbb"],...]);`
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRampFromArrayDefinition {
    /// Binding to declare.
    pub id: ObjectId,
    /// `(value, color)` pairs in caller order.
    pub definition: Vec<(f64, Color)>,
}

impl Command for ColorRampFromArrayDefinition {
    fn render(&self) -> BridgeResult<String> {
        let mut pairs = String::from("[");
        for (i, (value, color)) in self.definition.iter().enumerate() {
            if !value.is_finite() {
                return Err(BridgeError::validation(format!(
                    "color stop value {value} must be finite"
                )));
            }
            if i > 0 {
                pairs.push(',');
            }
            pairs.push('[');
            pairs.push_str(&format_number(*value));
            pairs.push(',');
            color.write_script(&mut pairs);
            pairs.push(']');
        }
        pairs.push(']');
        Ok(ScriptCall::method(&format!("{SDK}.ColorRamp"), "fromArrayDefinition")
            .raw_arg(pairs)
            .declare(self.id.as_str()))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn declares(&self) -> Option<&ObjectId> {
        Some(&self.id)
    }
}

/// `const <id> = maptilersdk.ColorRampCollection.<NAME>.clone();`
///
/// Built-ins are shared engine objects, so they are always copied before being handed out.
#[derive(Clone, Debug, PartialEq)]
pub struct CloneBuiltinColorRamp {
    /// Binding to declare.
    pub id: ObjectId,
    /// Collection member to copy.
    pub ramp: BuiltinRamp,
}

impl Command for CloneBuiltinColorRamp {
    fn render(&self) -> BridgeResult<String> {
        let member = format!("{SDK}.ColorRampCollection.{}", self.ramp.as_str());
        Ok(ScriptCall::method(&member, "clone").declare(self.id.as_str()))
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn declares(&self) -> Option<&ObjectId> {
        Some(&self.id)
    }
}

/// `ramp.scale(min, max[, {"clone":true}])`: remap the stops onto `[min, max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleColorRamp {
    /// Ramp the call is made on.
    pub ramp: ObjectId,
    /// New lower bound.
    pub min: f64,
    /// New upper bound.
    pub max: f64,
    /// Clone or mutate.
    pub target: RampTarget,
}

impl Command for ScaleColorRamp {
    fn render(&self) -> BridgeResult<String> {
        validate_range(self.min, self.max)?;
        let call = ScriptCall::method(self.ramp.as_str(), "scale")
            .arg(self.min)
            .arg(self.max);
        finish_transform(call, &self.ramp, &self.target)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.ramp]
    }

    fn declares(&self) -> Option<&ObjectId> {
        self.target.declared()
    }
}

/// `ramp.reverse([{"clone":true}])`
#[derive(Clone, Debug, PartialEq)]
pub struct ReverseColorRamp {
    /// Ramp the call is made on.
    pub ramp: ObjectId,
    /// Clone or mutate.
    pub target: RampTarget,
}

impl Command for ReverseColorRamp {
    fn render(&self) -> BridgeResult<String> {
        let call = ScriptCall::method(self.ramp.as_str(), "reverse");
        finish_transform(call, &self.ramp, &self.target)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.ramp]
    }

    fn declares(&self) -> Option<&ObjectId> {
        self.target.declared()
    }
}

/// `ramp.setStops([...][, {"clone":true}])`
#[derive(Clone, Debug, PartialEq)]
pub struct SetColorRampStops {
    /// Ramp the call is made on.
    pub ramp: ObjectId,
    /// Replacement stops.
    pub stops: Vec<ColorStop>,
    /// Clone or mutate.
    pub target: RampTarget,
}

impl Command for SetColorRampStops {
    fn render(&self) -> BridgeResult<String> {
        validate_stops(&self.stops)?;
        let call = ScriptCall::method(self.ramp.as_str(), "setStops")
            .raw_arg(encode_document(&self.stops)?);
        finish_transform(call, &self.ramp, &self.target)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.ramp]
    }

    fn declares(&self) -> Option<&ObjectId> {
        self.target.declared()
    }
}

/// Easing applied when resampling a ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResampleMethod {
    /// `ease-in-square`
    EaseInSquare,
    /// `ease-out-square`
    EaseOutSquare,
    /// `ease-in-sqrt`
    EaseInSqrt,
    /// `ease-out-sqrt`
    EaseOutSqrt,
    /// `ease-in-exp`
    EaseInExp,
    /// `ease-out-exp`
    EaseOutExp,
}

impl ResampleMethod {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            ResampleMethod::EaseInSquare => "ease-in-square",
            ResampleMethod::EaseOutSquare => "ease-out-square",
            ResampleMethod::EaseInSqrt => "ease-in-sqrt",
            ResampleMethod::EaseOutSqrt => "ease-out-sqrt",
            ResampleMethod::EaseInExp => "ease-in-exp",
            ResampleMethod::EaseOutExp => "ease-out-exp",
        }
    }
}

impl ScriptLiteral for ResampleMethod {
    fn write_script(&self, out: &mut String) {
        self.as_str().write_script(out);
    }
}

/// `ramp.resample("method", samples[, {"clone":true}])`
#[derive(Clone, Debug, PartialEq)]
pub struct ResampleColorRamp {
    /// Ramp the call is made on.
    pub ramp: ObjectId,
    /// Easing between samples.
    pub method: ResampleMethod,
    /// Number of stops in the result; at least 2.
    pub samples: u32,
    /// Clone or mutate.
    pub target: RampTarget,
}

impl Command for ResampleColorRamp {
    fn render(&self) -> BridgeResult<String> {
        if self.samples < 2 {
            return Err(BridgeError::validation(format!(
                "resample needs at least 2 samples, got {}",
                self.samples
            )));
        }
        let call = ScriptCall::method(self.ramp.as_str(), "resample")
            .arg(self.method)
            .raw_arg(self.samples.to_string());
        finish_transform(call, &self.ramp, &self.target)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.ramp]
    }

    fn declares(&self) -> Option<&ObjectId> {
        self.target.declared()
    }
}

/// `JSON.stringify(ramp.getBounds());`, a `{"min":..,"max":..}` document.
#[derive(Clone, Debug, PartialEq)]
pub struct GetColorRampBounds(pub ObjectId);

impl Command for GetColorRampBounds {
    fn render(&self) -> BridgeResult<String> {
        Ok(ScriptCall::method(self.0.as_str(), "getBounds").stringified())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Document
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.0]
    }
}

/// `ramp.getColorHex(value);`
#[derive(Clone, Debug, PartialEq)]
pub struct GetColorHex {
    /// Ramp to sample.
    pub ramp: ObjectId,
    /// Position on the value axis.
    pub value: f64,
}

impl Command for GetColorHex {
    fn render(&self) -> BridgeResult<String> {
        Ok(ScriptCall::method(self.ramp.as_str(), "getColorHex")
            .arg(self.value)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::String
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.ramp]
    }
}

/// `JSON.stringify(ramp.getRawColorStops());`
#[derive(Clone, Debug, PartialEq)]
pub struct GetColorRampStops(pub ObjectId);

impl Command for GetColorRampStops {
    fn render(&self) -> BridgeResult<String> {
        Ok(ScriptCall::method(self.0.as_str(), "getRawColorStops").stringified())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Document
    }

    fn references(&self) -> Vec<&ObjectId> {
        vec![&self.0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/color_ramp.rs"]
mod tests;
