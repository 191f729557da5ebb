//! Script-side objects created through the bridge.

/// Typed color-ramp handle.
pub mod color_ramp;
/// Identifiers and the registry of live ones.
pub mod ids;

pub use color_ramp::{ColorRamp, RampBounds};
pub use ids::{ObjectId, ObjectRegistry};
