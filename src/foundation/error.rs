/// Convenience result type used across the bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error taxonomy shared by commands, the dispatcher and typed handles.
///
/// Every variant is recoverable at the bridge level: a failed command never blocks the commands
/// queued behind it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The script engine is not initialized yet, or has already been torn down.
    #[error("script engine unavailable")]
    EngineUnavailable,

    /// The script raised an exception while evaluating a command.
    #[error("remote exception: {0}")]
    RemoteException(String),

    /// The raw result did not match the shape the command asked for.
    #[error("coercion failed: {0}")]
    CoercionFailed(String),

    /// A command referenced a remote object that was never successfully created.
    #[error("protocol violation: identifier '{0}' was never created")]
    ProtocolViolation(String),

    /// Invalid caller-provided data (identifier syntax, zoom bounds, missing sources).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when encoding option documents or decoding structured results.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl BridgeError {
    /// Build a [`BridgeError::RemoteException`] value.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteException(msg.into())
    }

    /// Build a [`BridgeError::CoercionFailed`] value.
    pub fn coercion(msg: impl Into<String>) -> Self {
        Self::CoercionFailed(msg.into())
    }

    /// Build a [`BridgeError::ProtocolViolation`] value for an unknown identifier.
    pub fn protocol(ident: impl Into<String>) -> Self {
        Self::ProtocolViolation(ident.into())
    }

    /// Build a [`BridgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BridgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
