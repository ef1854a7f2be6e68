//! Codec adapters.
//!
//! The walker does not know how a record is encoded; it hands the masked
//! record to a [`Format`] and takes back a string. Field names in the output
//! come from the record's serde attributes.

use serde::Serialize;

use super::error::MaskError;

/// An exchange format a masked record can be encoded to.
pub trait Format {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Encodes `value`. Codec errors become [`MaskError::SerializationFailed`].
    fn encode<T>(&self, value: &T) -> Result<String, MaskError>
    where
        T: Serialize + ?Sized;
}

/// JSON through `serde_json`, compact unless `pretty` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Json {
    pretty: bool,
}

impl Json {
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Format for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode<T>(&self, value: &T) -> Result<String, MaskError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|err| MaskError::serialization(self.name(), err))
    }
}

/// XML through `quick-xml`.
///
/// The root element is named after the serialized type unless a root name is
/// configured.
#[cfg(feature = "xml")]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Xml {
    root: Option<String>,
}

#[cfg(feature = "xml")]
impl Xml {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }
}

#[cfg(feature = "xml")]
impl Format for Xml {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn encode<T>(&self, value: &T) -> Result<String, MaskError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = match &self.root {
            Some(root) => quick_xml::se::to_string_with_root(root, value),
            None => quick_xml::se::to_string(value),
        };
        encoded.map_err(|err| MaskError::serialization(self.name(), err))
    }
}
