//! Maps and sets are opaque to the walker.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::masking::node::{Maskable, Node};

impl<K, V, S> Maskable for HashMap<K, V, S> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}

impl<K, V> Maskable for BTreeMap<K, V> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}

impl<T, S> Maskable for HashSet<T, S> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}

impl<T> Maskable for BTreeSet<T> {
    fn mask_node(&mut self) -> Node<'_> {
        Node::unsupported()
    }
}
