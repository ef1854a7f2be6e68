//! Typed FIFO of original leaf values.
//!
//! The save pass pushes one entry per recognized leaf in traversal order and
//! the restore pass pops them in the same order. Position is the only link
//! between an entry and its leaf, so every entry carries its kind and the
//! restore pass checks it.

use std::collections::VecDeque;

use super::node::LeafKind;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Saved {
    Text(String),
    /// Tombstone for an empty string, which is never masked.
    EmptyText,
    I32(i32),
    I64(i64),
    Isize(isize),
    F32(f32),
    F64(f64),
}

impl Saved {
    pub(crate) fn kind(&self) -> LeafKind {
        match self {
            Self::Text(_) | Self::EmptyText => LeafKind::Text,
            Self::I32(_) => LeafKind::I32,
            Self::I64(_) => LeafKind::I64,
            Self::Isize(_) => LeafKind::Isize,
            Self::F32(_) => LeafKind::F32,
            Self::F64(_) => LeafKind::F64,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    entries: VecDeque<Saved>,
    popped: usize,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, saved: Saved) {
        self.entries.push_back(saved);
    }

    /// Takes the oldest entry along with its position in the save order.
    pub(crate) fn pop(&mut self) -> (usize, Option<Saved>) {
        let position = self.popped;
        let saved = self.entries.pop_front();
        if saved.is_some() {
            self.popped += 1;
        }
        (position, saved)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
