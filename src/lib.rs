//! Typed command bridge for driving a JavaScript map engine inside an embedded script runtime.
//!
//! Native code never talks to the engine directly. It builds typed commands, each of which
//! renders itself as an exact, deterministic script, and hands them to a [`Bridge`]:
//!
//! - [`command`] holds one type per remote operation (camera, style, color ramps)
//! - [`Bridge`] queues commands in FIFO order and coerces raw results into a [`ReturnValue`]
//! - [`object`] tracks script-side objects and wraps them in typed handles such as [`ColorRamp`]
//! - [`style`] compiles expressions, sources and layers into style documents
//! - [`MapController`] offers typed async methods for the common map operations
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Ordered dispatch and result coercion.
pub mod bridge;
/// Remote operations.
pub mod command;
/// Typed map facade.
pub mod map;
/// Script-side objects and their identifiers.
pub mod object;
/// Style expressions, sources, layers and documents.
pub mod style;

pub use crate::bridge::{
    Bridge, BridgeOpts, BridgeWorker, EngineFault, PendingResult, RawValue, ReturnValue,
    ScriptEngine, Scripted, ScriptedEngine,
};
pub use crate::command::{Command, ResultShape};
pub use crate::foundation::core::{Color, LngLat, LngLatBounds, Padding};
pub use crate::foundation::error::{BridgeError, BridgeResult};
pub use crate::foundation::script::{ScriptLiteral, encode_document, format_number, quote};
pub use crate::map::MapController;
pub use crate::object::{ColorRamp, ObjectId, ObjectRegistry, RampBounds};
pub use crate::style::{
    LayerBuilder, PropertyValue, StyleDocument, StyleDocumentBuilder, StyleValue,
};
