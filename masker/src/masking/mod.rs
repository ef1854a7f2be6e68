//! Masking traversal and entrypoints.
//!
//! This module ties the pieces together:
//!
//! - **`node`**: the tagged view of a value (`Node`, `Leaf`, `Field`) and the
//!   `Maskable` trait that produces it
//! - **`containers`**: `Maskable` implementations for std and foreign types
//! - **`ledger`**: typed FIFO of original leaf values
//! - **`walker`**: the save/mask and restore passes
//! - **`format`**: codec adapters (`Json`, `Xml`)
//! - **`masker`**: configuration and the public entrypoints
//! - **`error`**: `MaskError`

mod containers;
mod error;
mod format;
mod ledger;
mod masker;
mod node;
mod walker;

pub use error::MaskError;
#[cfg(feature = "xml")]
pub use format::Xml;
pub use format::{Format, Json};
#[cfg(feature = "xml")]
pub use masker::redact_to_xml;
pub use masker::{DEFAULT_MARKER, Masker, PLACEHOLDER, redact_to_json};
pub use node::{Field, Leaf, LeafKind, Maskable, Node, SharedValue};
