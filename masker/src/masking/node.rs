//! The tagged view the walker traverses.
//!
//! - [`Node`]: what a value looks like to the walker (record, sequence, leaf)
//! - [`Leaf`]: mutable handle to a recognized scalar, or `Unsupported`
//! - [`Field`]: a named slot of a record together with its marker tags
//! - [`SharedValue`]: a pointer target with other owners
//! - [`Maskable`]: produces a `Node` borrowing the value mutably

use std::fmt;

// =============================================================================
// LeafKind / Leaf - Recognized scalar leaves
// =============================================================================

/// The scalar kinds the walker knows how to save, mask and restore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Text,
    I32,
    I64,
    Isize,
    F32,
    F64,
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// A mutable handle to a terminal value.
///
/// Anything that is not one of the recognized kinds is `Unsupported`: it is
/// never recorded, masked or restored, even when its field is marked.
#[derive(Debug)]
pub enum Leaf<'a> {
    Text(&'a mut String),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Unsupported,
}

impl Leaf<'_> {
    /// Returns the kind of this leaf, or `None` for unsupported leaves.
    pub fn kind(&self) -> Option<LeafKind> {
        match self {
            Self::Text(_) => Some(LeafKind::Text),
            Self::I32(_) => Some(LeafKind::I32),
            Self::I64(_) => Some(LeafKind::I64),
            Self::Isize(_) => Some(LeafKind::Isize),
            Self::F32(_) => Some(LeafKind::F32),
            Self::F64(_) => Some(LeafKind::F64),
            Self::Unsupported => None,
        }
    }
}

// =============================================================================
// Field - A named slot with marker tags
// =============================================================================

/// A field of a record as seen by the walker.
///
/// `tags` holds every marker name declared with `#[tags(...)]`. Only presence
/// matters; values given to a tag are dropped by the derive.
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    tags: &'static [&'static str],
    node: Node<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, tags: &'static [&'static str], node: Node<'a>) -> Self {
        Self { name, tags, node }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }

    /// Returns `true` when `marker` is one of this field's tags.
    pub fn is_marked(&self, marker: &str) -> bool {
        self.tags.iter().any(|tag| *tag == marker)
    }

    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    pub fn into_node(self) -> Node<'a> {
        self.node
    }
}

// =============================================================================
// Node - What a value looks like to the walker
// =============================================================================

/// A value viewed through a mutable borrow.
///
/// `Absent` is an empty optional: there is nothing under it to mask.
/// `Shared` is a pointer whose target has other owners (`Rc`/`Arc` with more
/// than one strong reference). Its target cannot be masked in place without
/// the other owners seeing it.
#[derive(Debug)]
pub enum Node<'a> {
    Record(Vec<Field<'a>>),
    Sequence(Vec<Node<'a>>),
    Leaf(Leaf<'a>),
    Absent,
    Shared(&'a mut dyn SharedValue),
}

impl Node<'_> {
    /// Shorthand for `Node::Leaf(Leaf::Unsupported)`.
    pub fn unsupported() -> Self {
        Node::Leaf(Leaf::Unsupported)
    }
}

// =============================================================================
// SharedValue - Pointers with other owners
// =============================================================================

/// A pointer whose target is also held elsewhere.
pub trait SharedValue {
    /// Gives this pointer its own copy of the target and views that copy.
    /// Other owners keep the old target.
    fn detach(&mut self) -> Node<'_>;

    /// Views a scratch copy of the target. The pointer is left as it is.
    fn inspect(&self, visit: &mut dyn FnMut(Node<'_>));
}

impl fmt::Debug for dyn SharedValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedValue")
    }
}

// =============================================================================
// Maskable - Types the walker can traverse
// =============================================================================

/// A type that can be viewed as a [`Node`] for masking.
///
/// Derive it with `#[derive(Maskable)]` on structs and enums. Implementations
/// for strings, the recognized numeric kinds, sequences and pointer wrappers
/// are provided; other scalars, maps and sets report `Leaf::Unsupported`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be walked for masking",
    note = "use `#[derive(Maskable)]` on the type definition",
    note = "or mark the field `#[opaque]` if it never holds masked data"
)]
pub trait Maskable {
    /// Borrows `self` as a node.
    ///
    /// Two calls on an unchanged value must yield the same shape. The restore
    /// pass replays the save pass by position. When a hand-written impl breaks
    /// this, the call fails with `MaskError::LedgerMismatch` and leaves every
    /// leaf from the mismatch onward masked.
    fn mask_node(&mut self) -> Node<'_>;
}
