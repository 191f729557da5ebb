//! Ordered dispatch of commands to the script engine.
//!
//! A [`Bridge`] handle renders commands and queues them; a single [`BridgeWorker`] evaluates them
//! one at a time and coerces each raw result into a [`ReturnValue`].

/// Raw-value to typed-result conversion.
pub mod coerce;
/// FIFO queue, worker loop and pending results.
pub mod dispatcher;
/// Engine seam and the in-memory scripted engine.
pub mod engine;

pub use coerce::{ReturnValue, coerce, decode_document};
pub use dispatcher::{Bridge, BridgeOpts, BridgeWorker, PendingResult};
pub use engine::{EngineFault, RawValue, ScriptEngine, Scripted, ScriptedEngine};
