use std::{fmt::Debug, ptr::NonNull};

use crate::{Color, Node};

impl<T> Node<T> {
    /// A fresh, unlinked node. New nodes are red: linking one in can only
    /// violate the no-red-red invariant, never the black-height invariant.
    pub(crate) fn new(value: T) -> Self {
        Node {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            value,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.map(|n| unsafe { n.as_ref() })
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.map(|n| unsafe { n.as_ref() })
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<&Node<T>> {
        self.parent.map(|n| unsafe { n.as_ref() })
    }

    /// The in-order successor, or `None` when this node holds the largest
    /// value.
    pub fn next(&self) -> Option<&Node<T>> {
        // With a right-hand child, the successor is down and then left as
        // far as we can go.
        if let Some(mut current) = self.right {
            while let Some(left) = unsafe { current.as_ref() }.left {
                current = left;
            }
            return Some(unsafe { current.as_ref() });
        }
        // No right-hand child: everything below us is smaller, so climb
        // until we leave a left-hand subtree; that parent is the successor.
        let mut node = self;
        loop {
            let parent = unsafe { node.parent?.as_ref() };
            if parent.right != Some(NonNull::from(node)) {
                return Some(parent);
            }
            node = parent;
        }
    }

    /// The in-order predecessor, or `None` when this node holds the
    /// smallest value.
    pub fn prev(&self) -> Option<&Node<T>> {
        if let Some(mut current) = self.left {
            while let Some(right) = unsafe { current.as_ref() }.right {
                current = right;
            }
            return Some(unsafe { current.as_ref() });
        }
        let mut node = self;
        loop {
            let parent = unsafe { node.parent?.as_ref() };
            if parent.left != Some(NonNull::from(node)) {
                return Some(parent);
            }
            node = parent;
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}::({:?})", self.color, self.value))
    }
}
