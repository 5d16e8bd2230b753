//! YAML layout documents for Orderly view trees.
//!
//! A document names a root view and nests children under containers. Each
//! child's `layout_*` keys are passed to its parent as inflation attributes,
//! the way a container would receive them from a markup inflater.

mod document;
mod error;
mod inflate;

pub use document::{LayoutDocument, NodeKind, NodeSpec, PaddingSpec};
pub use error::InflateError;
pub use inflate::{inflate, inflate_str, parse_document};
