use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::ScriptLiteral;

static NEXT_GENERATED: AtomicU64 = AtomicU64::new(1);

// Names a binding must not shadow: keywords plus the globals commands are rendered against.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
    "with", "yield", "JSON", "map", "maptilersdk", "window", "document",
];

/// Name of a script-side object created through the bridge.
///
/// Rendered as a bare identifier, so the engine resolves it to the live object rather than a
/// string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap a caller-chosen name after checking it is a plain script identifier.
    pub fn new(name: impl Into<String>) -> BridgeResult<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(BridgeError::validation(format!(
                "'{name}' is not a valid script identifier"
            )));
        }
        if RESERVED.contains(&name.as_str()) {
            return Err(BridgeError::validation(format!(
                "'{name}' is reserved and cannot name a remote object"
            )));
        }
        Ok(Self(name))
    }

    /// Mint a process-unique name such as `ramp_12`.
    ///
    /// Characters of `prefix` that cannot appear in an identifier are replaced with `_`.
    pub fn generate(prefix: &str) -> Self {
        let n = NEXT_GENERATED.fetch_add(1, Ordering::Relaxed);
        let mut name: String = prefix
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert_str(0, "obj");
        }
        Self(format!("{name}_{n}"))
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ScriptLiteral for ObjectId {
    fn write_script(&self, out: &mut String) {
        out.push_str(&self.0);
    }
}

/// Identifiers known to name live script-side objects.
///
/// Owned by the caller and lent to the dispatcher by `&mut`, so each registry stays isolated
/// (one per map document, one per test).
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    live: BTreeSet<ObjectId>,
}

impl ObjectRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` was successfully created.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.live.contains(id)
    }

    /// Record a successful create/clone. Returns `false` if the id was already known.
    pub fn register(&mut self, id: ObjectId) -> bool {
        self.live.insert(id)
    }

    /// Fail with [`BridgeError::ProtocolViolation`] unless `id` is live.
    pub fn check(&self, id: &ObjectId) -> BridgeResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(BridgeError::protocol(id.as_str()))
        }
    }

    /// Number of live identifiers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no identifiers are live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.live.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/ids.rs"]
mod tests;
