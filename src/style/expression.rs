//! Style-expression compiler.
//!
//! [`PropertyValue`] trees compile to the engine's nested-array style grammar
//! (`["get","name"]`, `["step",input,default,stop,value,...]`). The compiler is
//! purely structural: it never checks that an expression makes sense to the engine, e.g. that
//! `step` stops are increasing. Callers own that contract.

use crate::foundation::core::Color;
use crate::foundation::script::{ScriptLiteral, format_number, write_quoted};

/// Expression tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// String literal.
    Str(String),
    /// Number literal.
    Num(f64),
    /// Boolean literal.
    Bool(bool),
    /// Ordered array; may be empty.
    Arr(Vec<PropertyValue>),
    /// Script text inserted verbatim, for engine object references such as a named collection
    /// member. Escaping is the caller's responsibility.
    RawLiteral(String),
    /// Color literal, written as a hex string.
    Color(Color),
}

impl PropertyValue {
    /// Build an array node from an operator name and its operands.
    pub fn op(name: &str, args: impl IntoIterator<Item = PropertyValue>) -> Self {
        let mut items = vec![PropertyValue::Str(name.to_owned())];
        items.extend(args);
        PropertyValue::Arr(items)
    }
}

impl ScriptLiteral for PropertyValue {
    fn write_script(&self, out: &mut String) {
        match self {
            PropertyValue::Str(s) => write_quoted(out, s),
            PropertyValue::Num(n) => out.push_str(&format_number(*n)),
            PropertyValue::Bool(b) => b.write_script(out),
            PropertyValue::Arr(items) => items.write_script(out),
            PropertyValue::RawLiteral(text) => out.push_str(text),
            PropertyValue::Color(c) => c.write_script(out),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Str(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Num(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<Color> for PropertyValue {
    fn from(v: Color) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(v: Vec<PropertyValue>) -> Self {
        PropertyValue::Arr(v)
    }
}

/// Feature property named `point_count`, present only on cluster features.
pub const POINT_COUNT: &str = "point_count";

/// `["get", key]`
pub fn get(key: impl Into<String>) -> PropertyValue {
    PropertyValue::op("get", [PropertyValue::Str(key.into())])
}

/// `["has", key]`
pub fn has(key: impl Into<String>) -> PropertyValue {
    PropertyValue::op("has", [PropertyValue::Str(key.into())])
}

/// `["to-string", v]`
pub fn to_string(v: impl Into<PropertyValue>) -> PropertyValue {
    PropertyValue::op("to-string", [v.into()])
}

/// `["!", v]`
pub fn not(v: PropertyValue) -> PropertyValue {
    PropertyValue::op("!", [v])
}

/// `["==", a, b]`
pub fn eq(a: impl Into<PropertyValue>, b: impl Into<PropertyValue>) -> PropertyValue {
    PropertyValue::op("==", [a.into(), b.into()])
}

/// `["all", ...]`
pub fn all(filters: impl IntoIterator<Item = PropertyValue>) -> PropertyValue {
    PropertyValue::op("all", filters)
}

/// `["any", ...]`
pub fn any(filters: impl IntoIterator<Item = PropertyValue>) -> PropertyValue {
    PropertyValue::op("any", filters)
}

/// `["step", input, default, stop1, value1, stop2, value2, ...]`
///
/// Stops are emitted in the order given.
pub fn step(
    input: PropertyValue,
    default: impl Into<PropertyValue>,
    stops: impl IntoIterator<Item = (f64, PropertyValue)>,
) -> PropertyValue {
    let mut items = vec![input, default.into()];
    for (stop, value) in stops {
        items.push(PropertyValue::Num(stop));
        items.push(value);
    }
    PropertyValue::op("step", items)
}

/// `["interpolate", ["linear"], input, stop1, value1, ...]`
pub fn interpolate_linear(
    input: PropertyValue,
    stops: impl IntoIterator<Item = (f64, PropertyValue)>,
) -> PropertyValue {
    let mut items = vec![PropertyValue::op("linear", []), input];
    for (stop, value) in stops {
        items.push(PropertyValue::Num(stop));
        items.push(value);
    }
    PropertyValue::op("interpolate", items)
}

/// `["match", input, label1, output1, ..., fallback]`
pub fn match_(
    input: PropertyValue,
    arms: impl IntoIterator<Item = (PropertyValue, PropertyValue)>,
    fallback: impl Into<PropertyValue>,
) -> PropertyValue {
    let mut items = vec![input];
    for (label, output) in arms {
        items.push(label);
        items.push(output);
    }
    items.push(fallback.into());
    PropertyValue::op("match", items)
}

/// `["coalesce", ...]`
pub fn coalesce(values: impl IntoIterator<Item = PropertyValue>) -> PropertyValue {
    PropertyValue::op("coalesce", values)
}

/// `["zoom"]`
pub fn zoom() -> PropertyValue {
    PropertyValue::op("zoom", [])
}

/// `["literal", v]`, stops the engine from evaluating an array as an expression.
pub fn literal(v: PropertyValue) -> PropertyValue {
    PropertyValue::op("literal", [v])
}

/// Matches cluster features: `["has","point_count"]`.
pub fn clustered() -> PropertyValue {
    has(POINT_COUNT)
}

/// Matches non-cluster features: `["!",["has","point_count"]]`.
pub fn unclustered() -> PropertyValue {
    not(has(POINT_COUNT))
}

#[cfg(test)]
#[path = "../../tests/unit/style/expression.rs"]
mod tests;
