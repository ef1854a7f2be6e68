//! The save/mask and restore passes.
//!
//! Both passes visit nodes depth-first: record fields in declaration order,
//! sequence elements in index order. The save pass pushes one ledger entry per
//! recognized leaf and the restore pass pops them back in that same order.
//!
//! Shared pointers are handled by [`SharedPolicy`]: a walker that masks in
//! place refuses to encode masked data it cannot reach, while a walker that
//! masks for good gives each pointer its own copy first.

use std::mem;

use tracing::{trace, warn};

use super::{
    error::MaskError,
    ledger::{Ledger, Saved},
    masker::PLACEHOLDER,
    node::{Leaf, Node, SharedValue},
};

const ROOT: &str = "<root>";

/// What the save pass does with a pointer whose target has other owners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SharedPolicy {
    /// Leave the pointer alone. If anything behind it would have been masked,
    /// remember the field so [`Walker::finish`] fails.
    Guard,
    /// Give the pointer its own copy of the target and mask that.
    Detach,
}

pub(crate) struct Walker<'m> {
    marker: &'m str,
    ledger: Ledger,
    shared: SharedPolicy,
    masked: usize,
    exposed: Option<&'static str>,
}

impl<'m> Walker<'m> {
    /// A walker for masking in place and restoring afterwards.
    pub(crate) fn new(marker: &'m str) -> Self {
        Self::with_policy(marker, SharedPolicy::Guard)
    }

    /// A walker for masking for good; nothing is restored.
    pub(crate) fn detaching(marker: &'m str) -> Self {
        Self::with_policy(marker, SharedPolicy::Detach)
    }

    fn with_policy(marker: &'m str, shared: SharedPolicy) -> Self {
        Self {
            marker,
            ledger: Ledger::new(),
            shared,
            masked: 0,
            exposed: None,
        }
    }

    /// Number of entries waiting to be restored.
    pub(crate) fn saved(&self) -> usize {
        self.ledger.len()
    }

    /// Records every recognized leaf under `node`. Leaves reached through a
    /// field tagged with the marker are overwritten: text with the
    /// placeholder, numbers with zero. Empty text is recorded but left alone.
    pub(crate) fn save(&mut self, node: Node<'_>) {
        self.save_node(node, false, ROOT);
    }

    fn save_node(&mut self, node: Node<'_>, mask: bool, field: &'static str) {
        match node {
            Node::Record(fields) => {
                for field in fields {
                    let marked = field.is_marked(self.marker);
                    let name = field.name();
                    self.save_node(field.into_node(), marked, name);
                }
            }
            Node::Sequence(items) => {
                for item in items {
                    self.save_node(item, mask, field);
                }
            }
            Node::Leaf(leaf) => self.save_leaf(leaf, mask),
            Node::Absent => trace!(field, "skipping absent value"),
            Node::Shared(value) => match self.shared {
                SharedPolicy::Detach => {
                    trace!(field, "detaching shared pointer");
                    self.save_node(value.detach(), mask, field);
                }
                SharedPolicy::Guard => self.guard_shared(value, mask, field),
            },
        }
    }

    /// Walks a scratch copy of a shared target to find out whether masking
    /// would have changed it.
    fn guard_shared(&mut self, value: &dyn SharedValue, mask: bool, field: &'static str) {
        let mut scratch = Walker::new(self.marker);
        value.inspect(&mut |node| scratch.save_node(node, mask, field));
        if scratch.masked == 0 && scratch.exposed.is_none() {
            trace!(field, "skipping shared pointer");
            return;
        }
        warn!(
            field,
            marker = self.marker,
            "masked data is behind a shared pointer"
        );
        self.exposed.get_or_insert(field);
    }

    fn save_leaf(&mut self, leaf: Leaf<'_>, mask: bool) {
        match leaf {
            Leaf::Text(text) if text.is_empty() => self.ledger.push(Saved::EmptyText),
            Leaf::Text(text) if mask => {
                let original = mem::replace(text, PLACEHOLDER.to_owned());
                self.ledger.push(Saved::Text(original));
                self.masked += 1;
            }
            Leaf::Text(text) => self.ledger.push(Saved::Text(text.clone())),
            Leaf::I32(value) => self.save_number(value, mask, Saved::I32),
            Leaf::I64(value) => self.save_number(value, mask, Saved::I64),
            Leaf::Isize(value) => self.save_number(value, mask, Saved::Isize),
            Leaf::F32(value) => self.save_number(value, mask, Saved::F32),
            Leaf::F64(value) => self.save_number(value, mask, Saved::F64),
            Leaf::Unsupported => {}
        }
    }

    fn save_number<N>(&mut self, value: &mut N, mask: bool, saved: fn(N) -> Saved)
    where
        N: Copy + Default,
    {
        self.ledger.push(saved(*value));
        if mask {
            *value = N::default();
            self.masked += 1;
        }
    }

    /// Writes every recorded value back into `node`, which must have the
    /// shape the save pass saw.
    pub(crate) fn restore(&mut self, node: Node<'_>) -> Result<(), MaskError> {
        match node {
            Node::Record(fields) => fields
                .into_iter()
                .try_for_each(|field| self.restore(field.into_node())),
            Node::Sequence(items) => items.into_iter().try_for_each(|item| self.restore(item)),
            Node::Leaf(leaf) => self.restore_leaf(leaf),
            Node::Absent | Node::Shared(_) => Ok(()),
        }
    }

    fn restore_leaf(&mut self, leaf: Leaf<'_>) -> Result<(), MaskError> {
        let Some(expected) = leaf.kind() else {
            return Ok(());
        };
        let (position, saved) = self.ledger.pop();
        match (leaf, saved) {
            (Leaf::Text(text), Some(Saved::Text(original))) => *text = original,
            (Leaf::Text(text), Some(Saved::EmptyText)) => text.clear(),
            (Leaf::I32(value), Some(Saved::I32(original))) => *value = original,
            (Leaf::I64(value), Some(Saved::I64(original))) => *value = original,
            (Leaf::Isize(value), Some(Saved::Isize(original))) => *value = original,
            (Leaf::F32(value), Some(Saved::F32(original))) => *value = original,
            (Leaf::F64(value), Some(Saved::F64(original))) => *value = original,
            (_, found) => {
                return Err(MaskError::LedgerMismatch {
                    position,
                    expected,
                    found: found.as_ref().map(Saved::kind),
                });
            }
        }
        Ok(())
    }

    /// Fails if the restore pass left entries behind or if masked data sat
    /// behind a shared pointer.
    pub(crate) fn finish(self) -> Result<(), MaskError> {
        if let remaining @ 1.. = self.ledger.len() {
            return Err(MaskError::LedgerNotDrained { remaining });
        }
        match self.exposed {
            Some(field) => Err(MaskError::SharedPointer { field }),
            None => Ok(()),
        }
    }
}
