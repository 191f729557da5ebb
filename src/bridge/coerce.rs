//! Raw engine values to typed results.

use serde::de::DeserializeOwned;

use crate::bridge::engine::RawValue;
use crate::command::ResultShape;
use crate::foundation::error::{BridgeError, BridgeResult};

/// Typed outcome of one command.
#[derive(Clone, Debug, PartialEq)]
pub enum ReturnValue {
    /// Command completed without a meaningful value.
    None,
    /// Boolean result.
    Bool(bool),
    /// Numeric result.
    Number(f64),
    /// String result; also carries stringified documents.
    String(String),
    /// The command failed.
    Error(BridgeError),
}

impl ReturnValue {
    /// Whether this is a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ReturnValue::Error(_))
    }

    /// Expect a unit result.
    pub fn into_unit(self) -> BridgeResult<()> {
        match self {
            ReturnValue::Error(e) => Err(e),
            _ => Ok(()),
        }
    }

    /// Expect a number.
    pub fn into_number(self) -> BridgeResult<f64> {
        match self {
            ReturnValue::Number(n) => Ok(n),
            other => Err(other.mismatch("number")),
        }
    }

    /// Expect a boolean.
    pub fn into_bool(self) -> BridgeResult<bool> {
        match self {
            ReturnValue::Bool(b) => Ok(b),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Expect a string or a stringified document.
    pub fn into_string(self) -> BridgeResult<String> {
        match self {
            ReturnValue::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    fn mismatch(self, wanted: &str) -> BridgeError {
        match self {
            ReturnValue::Error(e) => e,
            other => BridgeError::coercion(format!("expected {wanted}, got {other:?}")),
        }
    }
}

impl From<BridgeError> for ReturnValue {
    fn from(err: BridgeError) -> Self {
        ReturnValue::Error(err)
    }
}

// Hosts that round-trip results through JSON text hand scalars back quoted.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Convert `raw` into the typed value `shape` asks for.
///
/// Numbers may also arrive as numeric strings, and booleans as the strings `true`/`false`,
/// optionally JSON-quoted. Documents are passed through untouched for [`decode_document`].
pub fn coerce(raw: RawValue, shape: ResultShape) -> ReturnValue {
    match (shape, raw) {
        (ResultShape::None, _) => ReturnValue::None,

        (ResultShape::Number, RawValue::Number(n)) => ReturnValue::Number(n),
        // `f64::from_str` also takes `NaN` and `inf`; those are words, not numbers.
        (ResultShape::Number, RawValue::String(s)) => match unquote(&s).parse::<f64>() {
            Ok(n) if n.is_finite() => ReturnValue::Number(n),
            _ => BridgeError::coercion(format!("\"{s}\" is not numeric")).into(),
        },

        (ResultShape::Bool, RawValue::Bool(b)) => ReturnValue::Bool(b),
        (ResultShape::Bool, RawValue::String(s)) => match unquote(&s) {
            "true" => ReturnValue::Bool(true),
            "false" => ReturnValue::Bool(false),
            _ => BridgeError::coercion(format!("\"{s}\" is not a boolean")).into(),
        },

        (ResultShape::String | ResultShape::Document, RawValue::String(s)) => {
            ReturnValue::String(s)
        }

        (shape, raw) => BridgeError::coercion(format!(
            "cannot read {} as {shape:?}",
            raw.kind()
        ))
        .into(),
    }
}

/// Parse a stringified document into `T`.
pub fn decode_document<T: DeserializeOwned>(value: ReturnValue) -> BridgeResult<T> {
    let text = value.into_string()?;
    serde_json::from_str(&text)
        .map_err(|e| BridgeError::coercion(format!("malformed document: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/coerce.rs"]
mod tests;
