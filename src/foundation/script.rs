//! Script-literal writer and structured-document encoder.
//!
//! Everything the bridge sends to the engine is produced here, so the literal rules live in one
//! place:
//!
//! - numbers always carry a fractional digit (`5` becomes `5.0`) and non-finite values become `0.0`
//! - strings are double-quoted with only `\`, `"`, `\n`, `\r` and `\t` escaped
//! - documents keep field declaration order and drop unset optionals

use serde::Serialize;

use crate::foundation::error::BridgeResult;

/// A value that can be written as JavaScript source text.
pub trait ScriptLiteral {
    /// Append the literal text of `self` to `out`.
    fn write_script(&self, out: &mut String);

    /// Render `self` into a fresh string.
    fn to_script(&self) -> String {
        let mut out = String::new();
        self.write_script(&mut out);
        out
    }
}

/// Replace NaN and infinities with `0.0`.
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Format a number the way the engine protocol expects it.
pub fn format_number(v: f64) -> String {
    let v = finite_or_zero(v);
    // `{:?}` keeps the shortest round-trip form but drops the fraction in exponent form (`1e16`).
    let text = format!("{v:?}");
    if text.contains('.') {
        return text;
    }
    match text.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => format!("{}.0{}", &text[..i], &text[i..]),
        None => format!("{text}.0"),
    }
}

/// Quote and escape a string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted(&mut out, s);
    out
}

pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}

impl ScriptLiteral for f64 {
    fn write_script(&self, out: &mut String) {
        out.push_str(&format_number(*self));
    }
}

impl ScriptLiteral for bool {
    fn write_script(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ScriptLiteral for str {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self);
    }
}

impl ScriptLiteral for String {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self);
    }
}

impl<T: ScriptLiteral + ?Sized> ScriptLiteral for &T {
    fn write_script(&self, out: &mut String) {
        (**self).write_script(out);
    }
}

/// `None` renders as an explicit `null`.
///
/// Only use this where `null` carries meaning (clearing a setting); optional trailing arguments
/// are dropped from the call instead.
impl<T: ScriptLiteral> ScriptLiteral for Option<T> {
    fn write_script(&self, out: &mut String) {
        match self {
            Some(v) => v.write_script(out),
            None => out.push_str("null"),
        }
    }
}

impl<T: ScriptLiteral> ScriptLiteral for [T] {
    fn write_script(&self, out: &mut String) {
        out.push('[');
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            v.write_script(out);
        }
        out.push(']');
    }
}

impl<T: ScriptLiteral> ScriptLiteral for Vec<T> {
    fn write_script(&self, out: &mut String) {
        self.as_slice().write_script(out);
    }
}

/// Encode a serde value as a script object/array literal.
///
/// Floats follow [`format_number`], integers stay integers, `None` fields must be skipped by the
/// type itself (`skip_serializing_if`).
pub fn encode_document<T: Serialize + ?Sized>(value: &T) -> BridgeResult<String> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_json_value(&mut out, &value);
    Ok(out)
}

pub(crate) fn write_json_value(out: &mut String, value: &serde_json::Value) {
    use serde_json::Value;
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => b.write_script(out),
        Value::Number(n) => {
            if n.is_f64() {
                out.push_str(&format_number(n.as_f64().unwrap_or(0.0)));
            } else {
                out.push_str(&n.to_string());
            }
        }
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_value(out, v);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(out, k);
                out.push(':');
                write_json_value(out, v);
            }
            out.push('}');
        }
    }
}

/// `serialize_with` helper keeping document floats finite.
pub(crate) fn finite<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(finite_or_zero(*v))
}

/// `serialize_with` helper for optional floats; pair with `skip_serializing_if`.
pub(crate) fn finite_opt<S: serde::Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => s.serialize_some(&finite_or_zero(*v)),
        None => s.serialize_none(),
    }
}

/// Object literal builder for records whose values are already script literals.
#[derive(Debug)]
pub(crate) struct ObjectWriter {
    out: String,
    len: usize,
}

impl ObjectWriter {
    pub(crate) fn new() -> Self {
        Self {
            out: String::from("{"),
            len: 0,
        }
    }

    pub(crate) fn field<T: ScriptLiteral + ?Sized>(&mut self, name: &str, value: &T) -> &mut Self {
        self.key(name);
        value.write_script(&mut self.out);
        self
    }

    pub(crate) fn opt_field<T: ScriptLiteral>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            self.key(name);
            v.write_script(&mut self.out);
        }
        self
    }

    pub(crate) fn raw_field(&mut self, name: &str, text: &str) -> &mut Self {
        self.key(name);
        self.out.push_str(text);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push('}');
        self.out
    }

    fn key(&mut self, name: &str) {
        if self.len > 0 {
            self.out.push(',');
        }
        write_quoted(&mut self.out, name);
        self.out.push(':');
        self.len += 1;
    }
}

/// A method call on a script receiver, rendered in one of the statement forms the protocol uses.
#[derive(Clone, Debug)]
pub(crate) struct ScriptCall {
    callee: String,
    args: Vec<String>,
}

impl ScriptCall {
    /// `receiver.method(...)`; the receiver is written verbatim (bare identifier or global).
    pub(crate) fn method(receiver: &str, method: &str) -> Self {
        Self {
            callee: format!("{receiver}.{method}"),
            args: Vec::new(),
        }
    }

    /// `new Constructor(...)`.
    pub(crate) fn construct(constructor: &str) -> Self {
        Self {
            callee: format!("new {constructor}"),
            args: Vec::new(),
        }
    }

    pub(crate) fn arg(mut self, value: impl ScriptLiteral) -> Self {
        self.args.push(value.to_script());
        self
    }

    pub(crate) fn raw_arg(mut self, text: impl Into<String>) -> Self {
        self.args.push(text.into());
        self
    }

    /// Append the argument only when present; absent optionals leave no trace in the call.
    pub(crate) fn opt_raw_arg(mut self, text: Option<String>) -> Self {
        if let Some(text) = text {
            self.args.push(text);
        }
        self
    }

    pub(crate) fn expr(&self) -> String {
        format!("{}({})", self.callee, self.args.join(", "))
    }

    /// `call;` for scalar or no-value results.
    pub(crate) fn statement(&self) -> String {
        format!("{};", self.expr())
    }

    /// `JSON.stringify(call);` for structured results.
    pub(crate) fn stringified(&self) -> String {
        format!("JSON.stringify({});", self.expr())
    }

    /// `const ident = call;` for calls that mint a new remote object.
    pub(crate) fn declare(&self, ident: &str) -> String {
        format!("const {ident} = {};", self.expr())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/script.rs"]
mod tests;
