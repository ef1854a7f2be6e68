//! Configuration and public entrypoints.
//!
//! A [`Masker`] carries the marker name for a call. Each entrypoint runs the
//! save pass, encodes the masked record, then runs the restore pass, so the
//! record ends the call holding its original values whether or not the codec
//! succeeded.

use serde::Serialize;
use tracing::{debug, debug_span, error};

#[cfg(feature = "xml")]
use super::format::Xml;
use super::{
    error::MaskError,
    format::{Format, Json},
    node::{Maskable, Node},
    walker::Walker,
};

/// Replacement for masked text leaves. Masked numbers become zero.
pub const PLACEHOLDER: &str = "********";

/// Marker name used by [`Masker::default`].
pub const DEFAULT_MARKER: &str = "mask";

/// Masking configuration.
///
/// The marker name selects which `#[tags(...)]` entries mark a field. Different
/// callers can use different markers on the same types at the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Masker {
    marker: String,
    pretty_json: bool,
    #[cfg(feature = "xml")]
    xml_root: Option<String>,
}

impl Default for Masker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Masker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            pretty_json: false,
            #[cfg(feature = "xml")]
            xml_root: None,
        }
    }

    /// Emit indented JSON from [`Masker::to_json`].
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Name the XML root element instead of using the record's type name.
    #[cfg(feature = "xml")]
    #[must_use]
    pub fn with_xml_root(mut self, root: impl Into<String>) -> Self {
        self.xml_root = Some(root.into());
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The JSON format this masker encodes with.
    pub fn json(&self) -> Json {
        if self.pretty_json {
            Json::pretty()
        } else {
            Json::compact()
        }
    }

    /// The XML format this masker encodes with.
    #[cfg(feature = "xml")]
    pub fn xml(&self) -> Xml {
        match &self.xml_root {
            Some(root) => Xml::new().with_root(root.clone()),
            None => Xml::new(),
        }
    }

    /// Masks `record`, encodes it with `format` and restores it.
    ///
    /// An absent record (`None`) yields an empty string without invoking the
    /// codec. If data that should be masked sits behind a shared `Rc`/`Arc`,
    /// the encoded output is discarded and [`MaskError::SharedPointer`] is
    /// returned; use [`Masker::masked_copy`] for such records.
    pub fn mask_with<T, F>(&self, record: &mut T, format: &F) -> Result<String, MaskError>
    where
        T: Maskable + Serialize + ?Sized,
        F: Format,
    {
        let span = debug_span!("mask", format = format.name(), marker = %self.marker);
        let _enter = span.enter();

        let mut walker = Walker::new(&self.marker);
        match record.mask_node() {
            Node::Absent => {
                debug!("record is absent");
                return Ok(String::new());
            }
            node => walker.save(node),
        }
        debug!(saved = walker.saved(), "record masked");

        let encoded = format.encode(&*record);

        walker.restore(record.mask_node())?;
        walker.finish()?;
        debug!(ok = encoded.is_ok(), "record restored");
        encoded
    }

    /// Masks `record` and encodes it as JSON.
    pub fn to_json<T>(&self, record: &mut T) -> Result<String, MaskError>
    where
        T: Maskable + Serialize + ?Sized,
    {
        self.mask_with(record, &self.json())
    }

    /// Masks `record` and encodes it as XML.
    #[cfg(feature = "xml")]
    pub fn to_xml<T>(&self, record: &mut T) -> Result<String, MaskError>
    where
        T: Maskable + Serialize + ?Sized,
    {
        self.mask_with(record, &self.xml())
    }

    /// Like [`Masker::to_json`] for a record passed by value. The record is
    /// moved to the heap, masked there and dropped.
    pub fn to_json_owned<T>(&self, record: T) -> Result<String, MaskError>
    where
        T: Maskable + Serialize,
    {
        let mut record = Box::new(record);
        self.to_json(record.as_mut())
    }

    /// Like [`Masker::to_xml`] for a record passed by value.
    #[cfg(feature = "xml")]
    pub fn to_xml_owned<T>(&self, record: T) -> Result<String, MaskError>
    where
        T: Maskable + Serialize,
    {
        let mut record = Box::new(record);
        self.to_xml(record.as_mut())
    }

    /// [`Masker::to_json`], logging any error and returning an empty string
    /// in its place.
    pub fn to_json_lossy<T>(&self, record: &mut T) -> String
    where
        T: Maskable + Serialize + ?Sized,
    {
        self.to_json(record).unwrap_or_else(|err| {
            error!(%err, "masking to json failed");
            String::new()
        })
    }

    /// [`Masker::to_xml`], logging any error and returning an empty string in
    /// its place.
    #[cfg(feature = "xml")]
    pub fn to_xml_lossy<T>(&self, record: &mut T) -> String
    where
        T: Maskable + Serialize + ?Sized,
    {
        self.to_xml(record).unwrap_or_else(|err| {
            error!(%err, "masking to xml failed");
            String::new()
        })
    }

    /// Masks `record` for good: nothing is restored.
    ///
    /// An `Rc`/`Arc` in `record` whose target has other owners first gets its
    /// own copy of the target, so the other owners keep the original values.
    pub fn redact<T>(&self, record: &mut T)
    where
        T: Maskable + ?Sized,
    {
        let mut walker = Walker::detaching(&self.marker);
        walker.save(record.mask_node());
    }

    /// Returns a masked clone of `record`, leaving `record` untouched.
    pub fn masked_copy<T>(&self, record: &T) -> T
    where
        T: Maskable + Clone,
    {
        let mut copy = record.clone();
        self.redact(&mut copy);
        copy
    }
}

/// Masks the fields of `record` tagged with `marker` and encodes it as JSON.
pub fn redact_to_json<T>(record: &mut T, marker: &str) -> Result<String, MaskError>
where
    T: Maskable + Serialize + ?Sized,
{
    Masker::new(marker).to_json(record)
}

/// Masks the fields of `record` tagged with `marker` and encodes it as XML.
#[cfg(feature = "xml")]
pub fn redact_to_xml<T>(record: &mut T, marker: &str) -> Result<String, MaskError>
where
    T: Maskable + Serialize + ?Sized,
{
    Masker::new(marker).to_xml(record)
}
