use crate::foundation::core::Color;
use crate::foundation::script::{ScriptLiteral, format_number, write_quoted};
use crate::style::expression::PropertyValue;

/// A paint or layout property value: a constant, or an expression the engine evaluates.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Constant color.
    Color(Color),
    /// Constant number.
    Number(f64),
    /// Constant boolean.
    Bool(bool),
    /// Constant string (also used for enum-like engine keywords).
    Str(String),
    /// Computed value.
    Expression(PropertyValue),
}

impl StyleValue {
    /// Constant value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Constant value as a color, if it is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Whether the value needs engine-side evaluation.
    pub fn is_expression(&self) -> bool {
        matches!(self, StyleValue::Expression(_))
    }
}

impl ScriptLiteral for StyleValue {
    fn write_script(&self, out: &mut String) {
        match self {
            StyleValue::Color(c) => c.write_script(out),
            StyleValue::Number(n) => out.push_str(&format_number(*n)),
            StyleValue::Bool(b) => b.write_script(out),
            StyleValue::Str(s) => write_quoted(out, s),
            StyleValue::Expression(e) => e.write_script(out),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        StyleValue::Color(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Str(v.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Str(v)
    }
}

impl From<PropertyValue> for StyleValue {
    fn from(v: PropertyValue) -> Self {
        StyleValue::Expression(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
