//! Leaf `Maskable` implementations for scalar-like types.

use std::{
    borrow::Cow,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    path::PathBuf,
    time::{Duration, SystemTime},
};

use super::impl_maskable_unsupported;
use crate::masking::node::{Leaf, Maskable, Node};

// =============================================================================
// Recognized leaves
// =============================================================================

macro_rules! impl_maskable_leaf {
    ($ty:ty, $variant:ident) => {
        impl Maskable for $ty {
            fn mask_node(&mut self) -> Node<'_> {
                Node::Leaf(Leaf::$variant(self))
            }
        }
    };
}

impl_maskable_leaf!(String, Text);
impl_maskable_leaf!(i32, I32);
impl_maskable_leaf!(i64, I64);
impl_maskable_leaf!(isize, Isize);
impl_maskable_leaf!(f32, F32);
impl_maskable_leaf!(f64, F64);

// A borrowed Cow becomes owned on the first walk; the restored value compares
// equal to the original.
impl Maskable for Cow<'_, str> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::Leaf(Leaf::Text(self.to_mut()))
    }
}

// =============================================================================
// Unsupported leaves
// =============================================================================

impl_maskable_unsupported!(bool);
impl_maskable_unsupported!(char);
impl_maskable_unsupported!(());

impl_maskable_unsupported!(i8);
impl_maskable_unsupported!(i16);
impl_maskable_unsupported!(i128);

impl_maskable_unsupported!(u8);
impl_maskable_unsupported!(u16);
impl_maskable_unsupported!(u32);
impl_maskable_unsupported!(u64);
impl_maskable_unsupported!(u128);
impl_maskable_unsupported!(usize);

impl_maskable_unsupported!(NonZeroI8);
impl_maskable_unsupported!(NonZeroI16);
impl_maskable_unsupported!(NonZeroI32);
impl_maskable_unsupported!(NonZeroI64);
impl_maskable_unsupported!(NonZeroI128);
impl_maskable_unsupported!(NonZeroIsize);
impl_maskable_unsupported!(NonZeroU8);
impl_maskable_unsupported!(NonZeroU16);
impl_maskable_unsupported!(NonZeroU32);
impl_maskable_unsupported!(NonZeroU64);
impl_maskable_unsupported!(NonZeroU128);
impl_maskable_unsupported!(NonZeroUsize);

impl_maskable_unsupported!(Duration);
impl_maskable_unsupported!(SystemTime);
impl_maskable_unsupported!(PathBuf);

impl_maskable_unsupported!(IpAddr);
impl_maskable_unsupported!(Ipv4Addr);
impl_maskable_unsupported!(Ipv6Addr);
impl_maskable_unsupported!(SocketAddr);

impl_maskable_unsupported!(serde_json::Value);

impl<T: ?Sized> Maskable for PhantomData<T> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}
