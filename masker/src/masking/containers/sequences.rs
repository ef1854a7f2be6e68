//! Sequences: every element inherits the marking of the field holding it.

use std::collections::VecDeque;

use crate::masking::node::{Maskable, Node};

impl<T: Maskable> Maskable for [T] {
    fn mask_node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(Maskable::mask_node).collect())
    }
}

impl<T: Maskable, const N: usize> Maskable for [T; N] {
    fn mask_node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(Maskable::mask_node).collect())
    }
}

impl<T: Maskable> Maskable for Vec<T> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(Maskable::mask_node).collect())
    }
}

impl<T: Maskable> Maskable for VecDeque<T> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(Maskable::mask_node).collect())
    }
}
