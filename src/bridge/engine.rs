use std::sync::Mutex;
use std::time::Duration;

/// Primitive value handed back by the engine after evaluating one script.
///
/// Structured values never cross the boundary: commands that want a document stringify it
/// remotely, so they arrive as [`RawValue::String`].
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// `undefined`, also what statements without a value yield.
    Undefined,
    /// `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Number.
    Number(f64),
    /// String.
    String(String),
}

impl RawValue {
    /// Decode the JSON text some hosts hand back instead of a typed value.
    ///
    /// Empty text and the bare word `undefined` decode as [`RawValue::Undefined`]. Arrays and
    /// objects keep their text as a string; text that is not JSON at all is taken verbatim.
    pub fn from_json_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "undefined" {
            return RawValue::Undefined;
        }
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::Null) => RawValue::Null,
            Ok(serde_json::Value::Bool(b)) => RawValue::Bool(b),
            Ok(serde_json::Value::Number(n)) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Ok(serde_json::Value::String(s)) => RawValue::String(s),
            Ok(_) => RawValue::String(trimmed.to_owned()),
            Err(_) => RawValue::String(text.to_owned()),
        }
    }

    /// Short type name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Undefined => "undefined",
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
        }
    }
}

/// Why an evaluation produced no value.
#[derive(thiserror::Error, Debug)]
pub enum EngineFault {
    /// The script threw; carries the exception message.
    #[error("script threw: {0}")]
    Exception(String),
    /// The engine is not initialized or has been torn down.
    #[error("engine unavailable")]
    Unavailable,
    /// The host failed to deliver the script or its result.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

/// Single-threaded script evaluator behind the bridge.
///
/// The dispatcher never calls [`ScriptEngine::evaluate`] concurrently, and never before
/// [`ScriptEngine::is_ready`] reports `true`.
#[async_trait::async_trait]
pub trait ScriptEngine: Send + Sync + 'static {
    /// Whether scripts can be evaluated right now.
    fn is_ready(&self) -> bool {
        true
    }

    /// Evaluate `script` and return its completion value.
    async fn evaluate(&self, script: &str) -> Result<RawValue, EngineFault>;
}

/// Canned reaction of a [`ScriptedEngine`] to a matching script.
#[derive(Clone, Debug, PartialEq)]
pub enum Scripted {
    /// Return this value.
    Value(RawValue),
    /// Throw with this message.
    Throw(String),
    /// Fail at the host level.
    HostFailure(String),
}

#[derive(Debug)]
struct ScriptedState {
    ready: bool,
    evaluated: Vec<String>,
    rules: Vec<(String, Scripted)>,
}

/// In-memory engine for tests and offline runs.
///
/// Records every evaluated script in order and answers from substring rules; the first rule
/// whose pattern occurs in the script wins, and unmatched scripts yield `undefined`.
#[derive(Debug)]
pub struct ScriptedEngine {
    state: Mutex<ScriptedState>,
    latency: Option<Duration>,
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedEngine {
    /// Ready engine with no rules.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ScriptedState {
                ready: true,
                evaluated: Vec::new(),
                rules: Vec::new(),
            }),
            latency: None,
        }
    }

    /// Delay every evaluation by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Answer scripts containing `pattern` with `reaction`.
    pub fn on(self, pattern: impl Into<String>, reaction: Scripted) -> Self {
        self.lock().rules.push((pattern.into(), reaction));
        self
    }

    /// Answer scripts containing `pattern` with `value`.
    pub fn respond(self, pattern: impl Into<String>, value: RawValue) -> Self {
        self.on(pattern, Scripted::Value(value))
    }

    /// Make scripts containing `pattern` throw `message`.
    pub fn throw(self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.on(pattern, Scripted::Throw(message.into()))
    }

    /// Flip readiness, e.g. to simulate the page reloading.
    pub fn set_ready(&self, ready: bool) {
        self.lock().ready = ready;
    }

    /// Scripts evaluated so far, in evaluation order.
    pub fn evaluated(&self) -> Vec<String> {
        self.lock().evaluated.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptedState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait::async_trait]
impl ScriptEngine for ScriptedEngine {
    fn is_ready(&self) -> bool {
        self.lock().ready
    }

    async fn evaluate(&self, script: &str) -> Result<RawValue, EngineFault> {
        let reaction = {
            let mut state = self.lock();
            if !state.ready {
                return Err(EngineFault::Unavailable);
            }
            state.evaluated.push(script.to_owned());
            state
                .rules
                .iter()
                .find(|(pattern, _)| script.contains(pattern.as_str()))
                .map(|(_, r)| r.clone())
        };
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match reaction {
            None => Ok(RawValue::Undefined),
            Some(Scripted::Value(v)) => Ok(v),
            Some(Scripted::Throw(msg)) => Err(EngineFault::Exception(msg)),
            Some(Scripted::HostFailure(msg)) => Err(EngineFault::Host(anyhow::anyhow!(msg))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/engine.rs"]
mod tests;
