//! Typed map operations on top of the bridge.

/// [`MapController`] and its async camera and style methods.
pub mod controller;

pub use controller::MapController;
