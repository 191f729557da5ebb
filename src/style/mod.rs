//! Style model: expressions, property values, sources, layers and documents.

/// Style documents and their install commands.
pub mod document;
/// Builders for layers and documents.
pub mod dsl;
/// Expression tree and builders.
pub mod expression;
/// Layer kinds and per-kind paint/layout records.
pub mod layer;
/// Source definitions.
pub mod source;
/// Constant-or-expression property values.
pub mod value;

pub use document::StyleDocument;
pub use dsl::{LayerBuilder, StyleDocumentBuilder};
pub use expression::PropertyValue;
pub use layer::{Layer, LayerKind, LayerStyle};
pub use source::{Source, SourceSpec};
pub use value::StyleValue;
