//! Field-level masking for structured records on their way to JSON or XML.
//!
//! A record marks its sensitive fields with `#[tags(...)]`. At the call site a
//! [`Masker`] names the marker to honour, walks the record, overwrites every
//! leaf reachable through a marked field, serializes the result and then puts
//! the original values back:
//!
//! ```rust
//! use masker::{Maskable, Masker};
//! use serde::Serialize;
//!
//! #[derive(Maskable, Serialize)]
//! struct Login {
//!     user: String,
//!     #[tags(mask)]
//!     password: String,
//! }
//!
//! let mut login = Login {
//!     user: "ada".to_string(),
//!     password: "hunter2".to_string(),
//! };
//! let json = Masker::new("mask").to_json(&mut login).unwrap();
//! assert_eq!(json, r#"{"user":"ada","password":"********"}"#);
//! assert_eq!(login.password, "hunter2");
//! ```
//!
//! What this crate does:
//! - defines the [`Node`] view the walker traverses and the [`Maskable`] trait
//!   that produces it (derived by `masker-derive`)
//! - saves, masks and restores recognized leaves (`String`, `i32`, `i64`,
//!   `isize`, `f32`, `f64`)
//! - encodes through `serde_json` and `quick-xml`
//! - provides logging adapters for `tracing` and, behind a feature, `slog`
//!
//! What it does not do:
//! - mask map values, sets, booleans, unsigned integers or other leaf kinds
//! - keep any state between calls

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate self as masker;

pub use masker_derive::Maskable;

// Module declarations
mod masking;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;

#[cfg(feature = "xml")]
pub use masking::Xml;
pub use masking::{
    DEFAULT_MARKER, Field, Format, Json, Leaf, LeafKind, MaskError, Maskable, Masker, Node,
    PLACEHOLDER, SharedValue, redact_to_json,
};
#[cfg(feature = "xml")]
pub use masking::redact_to_xml;
