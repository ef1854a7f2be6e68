//! Errors surfaced by the masking entrypoints.
//!
//! Absent records and unsupported leaves are not errors; the walker skips
//! them. What remains is a failing codec, masked data the walker could not
//! reach, and a restore pass that does not line up with the save pass.

use thiserror::Error;

use super::node::LeafKind;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum MaskError {
    /// The codec rejected the masked record. The record has been restored.
    #[error("failed to serialize masked record as {format}: {source}")]
    SerializationFailed {
        format: &'static str,
        #[source]
        source: BoxError,
    },

    /// A shared `Rc`/`Arc` holds data that should have been masked. Masking
    /// it in place would change it for every other owner, so nothing is
    /// encoded. The record has been restored.
    #[error("field `{field}` holds masked data behind a shared pointer")]
    SharedPointer { field: &'static str },

    /// The restore pass met a leaf the ledger has no matching entry for.
    #[error("ledger out of sync at entry {position}: expected {expected}, found {found:?}")]
    LedgerMismatch {
        position: usize,
        expected: LeafKind,
        found: Option<LeafKind>,
    },

    /// The restore pass finished with entries left in the ledger.
    #[error("ledger still holds {remaining} entries after restore")]
    LedgerNotDrained { remaining: usize },
}

impl MaskError {
    pub(crate) fn serialization<E>(format: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SerializationFailed {
            format,
            source: Box::new(source),
        }
    }
}
