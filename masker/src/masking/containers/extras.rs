//! Foreign date, time and identifier types, behind their feature flags.
//!
//! None of these are recognized leaves. The impls exist so records holding
//! them can derive `Maskable` without marking the fields `#[opaque]`.

#[cfg(feature = "chrono")]
use crate::masking::node::{Maskable, Node};

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Maskable for chrono::DateTime<Tz> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}

#[cfg(feature = "chrono")]
super::impl_maskable_unsupported!(chrono::NaiveDate);
#[cfg(feature = "chrono")]
super::impl_maskable_unsupported!(chrono::NaiveDateTime);
#[cfg(feature = "chrono")]
super::impl_maskable_unsupported!(chrono::NaiveTime);

#[cfg(feature = "time")]
super::impl_maskable_unsupported!(time::OffsetDateTime);
#[cfg(feature = "time")]
super::impl_maskable_unsupported!(time::PrimitiveDateTime);
#[cfg(feature = "time")]
super::impl_maskable_unsupported!(time::Date);
#[cfg(feature = "time")]
super::impl_maskable_unsupported!(time::Time);

#[cfg(feature = "uuid")]
super::impl_maskable_unsupported!(uuid::Uuid);
