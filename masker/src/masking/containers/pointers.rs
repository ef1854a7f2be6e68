//! Pointer-like wrappers expose the node of the value they hold.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use crate::masking::node::{Maskable, Node, SharedValue};

impl<T: Maskable> Maskable for Option<T> {
    fn mask_node(&mut self) -> Node<'_> {
        match self {
            Some(value) => value.mask_node(),
            None => Node::Absent,
        }
    }
}

impl<T: Maskable + ?Sized> Maskable for Box<T> {
    fn mask_node(&mut self) -> Node<'_> {
        (**self).mask_node()
    }
}

impl<T: Maskable + ?Sized> Maskable for &mut T {
    fn mask_node(&mut self) -> Node<'_> {
        (**self).mask_node()
    }
}

// A pointer is walked in place only while nothing else holds it. The codec
// never clones the record, so both passes see the same answer.
impl<T: Maskable + Clone> Maskable for Rc<T> {
    fn mask_node(&mut self) -> Node<'_> {
        if Rc::get_mut(self).is_some() {
            return Rc::make_mut(self).mask_node();
        }
        Node::Shared(self)
    }
}

impl<T: Maskable + Clone> SharedValue for Rc<T> {
    fn detach(&mut self) -> Node<'_> {
        Rc::make_mut(self).mask_node()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Node<'_>)) {
        let mut scratch = T::clone(self);
        visit(scratch.mask_node());
    }
}

impl<T: Maskable + Clone> Maskable for Arc<T> {
    fn mask_node(&mut self) -> Node<'_> {
        if Arc::get_mut(self).is_some() {
            return Arc::make_mut(self).mask_node();
        }
        Node::Shared(self)
    }
}

impl<T: Maskable + Clone> SharedValue for Arc<T> {
    fn detach(&mut self) -> Node<'_> {
        Arc::make_mut(self).mask_node()
    }

    fn inspect(&self, visit: &mut dyn FnMut(Node<'_>)) {
        let mut scratch = T::clone(self);
        visit(scratch.mask_node());
    }
}

impl<T: Maskable + ?Sized> Maskable for RefCell<T> {
    fn mask_node(&mut self) -> Node<'_> {
        self.get_mut().mask_node()
    }
}

impl<T: Maskable> Maskable for Cell<T> {
    fn mask_node(&mut self) -> Node<'_> {
        self.get_mut().mask_node()
    }
}

impl<T: Maskable + ?Sized> Maskable for Mutex<T> {
    fn mask_node(&mut self) -> Node<'_> {
        self.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .mask_node()
    }
}

impl<T: Maskable + ?Sized> Maskable for RwLock<T> {
    fn mask_node(&mut self) -> Node<'_> {
        self.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .mask_node()
    }
}
