//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Masker`] with `slog` by providing a `slog::Value`
//! that serializes a masked record as structured JSON via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the masked record, never the
//!   original.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::{Maskable, Masker};

/// A `slog::Value` holding a masked record as a `serde_json::Value`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The masked JSON that will be logged.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for ergonomic slog logging of masked records.
///
/// ## Example
/// ```ignore
/// use masker::{Masker, slog::SlogMaskedExt};
///
/// info!(logger, "login"; "request" => request.slog_masked_json(&masker));
/// ```
pub trait SlogMaskedExt: Maskable + Serialize + Sized {
    /// Consumes `self`, masks it and stores it as JSON.
    ///
    /// Nothing is restored since the value is consumed. If the conversion to
    /// `serde_json::Value` fails, the stored value is a JSON string starting
    /// with `"Failed to serialize masked value"`.
    fn slog_masked_json(mut self, masker: &Masker) -> MaskedJson {
        masker.redact(&mut self);
        let json_value = serde_json::to_value(&self).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        });
        MaskedJson::new(json_value)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}
