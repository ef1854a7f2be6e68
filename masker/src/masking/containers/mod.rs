//! `Maskable` implementations for standard library and foreign types.
//!
//! ## Recognized leaves
//!
//! `String`, `Cow<str>`, `i32`, `i64`, `isize`, `f32` and `f64` are the only
//! values the walker records and masks.
//!
//! ## Transparent wrappers
//!
//! `Option`, `Box`, `&mut`, `RefCell`, `Cell`, `Mutex` and `RwLock` expose the
//! node of their contents. `Rc` and `Arc` do the same only while they are the
//! sole owner; otherwise they report `Node::Shared` and the walker decides
//! whether to detach them or refuse the call.
//!
//! ## Maps and sets are not walked
//!
//! Map values and set elements are reported as unsupported leaves. A marked
//! map field is serialized as is.

mod leaves;
mod maps;
mod pointers;
mod sequences;
#[cfg(any(feature = "chrono", feature = "time", feature = "uuid"))]
mod extras;


// =============================================================================
// Unsupported implementation helper
// =============================================================================

macro_rules! impl_maskable_unsupported {
    ($ty:ty) => {
        impl crate::masking::node::Maskable for $ty {
            fn mask_node(&mut self) -> crate::masking::node::Node<'_> {
                crate::masking::node::Node::unsupported()
            }
        }
    };
}

pub(super) use impl_maskable_unsupported;
