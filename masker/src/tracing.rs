//! Adapter for emitting masked values through `tracing`.
//!
//! # Example
//!
//! ```ignore
//! use masker::{Masker, tracing::TracingMaskedExt};
//!
//! let masker = Masker::default();
//! tracing::info!(user = %user.tracing_masked(&masker));
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::masking::{Format, Maskable, Masker};

/// Extension trait for logging masked values as display strings.
///
/// The value is cloned and the clone is masked, so `&self` is never mutated.
/// The logged text is the clone encoded with the masker's JSON settings.
pub trait TracingMaskedExt {
    /// Wraps a masked JSON rendering of `self` for use as a `tracing` field.
    ///
    /// If encoding fails the field holds
    /// `"Failed to serialize masked value: <error>"` instead.
    fn tracing_masked(&self, masker: &Masker) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: Maskable + Serialize + Clone,
{
    fn tracing_masked(&self, masker: &Masker) -> DisplayValue<String> {
        let masked = masker.masked_copy(self);
        let text = masker
            .json()
            .encode(&masked)
            .unwrap_or_else(|err| format!("Failed to serialize masked value: {err}"));
        display(text)
    }
}
