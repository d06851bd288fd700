//! A self-balancing red-black search tree.
//!
//! [`Tree`] is an ordered, set-like container with logarithmic worst-case
//! insertion, lookup and removal. Nodes are linked through raw parent/child
//! pointers owned exclusively by the tree; [`Tree::root`] hands out a
//! read-only [`Node`] handle for external traversal.

mod iter;
mod node;
mod root;
mod tree;

pub use iter::Iter;

use std::ptr::NonNull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

pub(crate) type NodePtr<T> = Option<NonNull<Node<T>>>;

/// Link-level helpers over a nullable node pointer. A null link reads as a
/// black leaf and ignores writes, which keeps the fix-up state machines
/// uniform without a sentinel node.
pub(crate) trait NodePtrExt {
    type Item;

    fn color(&self) -> Color;
    fn is_black(&self) -> bool;
    fn is_red(&self) -> bool;
    fn left(&self) -> NodePtr<Self::Item>;
    fn parent(&self) -> NodePtr<Self::Item>;
    fn right(&self) -> NodePtr<Self::Item>;
    fn set_color(&mut self, color: Color);
    fn set_left(&mut self, left: NodePtr<Self::Item>);
    fn set_parent(&mut self, parent: NodePtr<Self::Item>);
    fn set_right(&mut self, right: NodePtr<Self::Item>);
}

impl<T> NodePtrExt for NodePtr<T> {
    type Item = T;

    #[inline(always)]
    fn color(&self) -> Color {
        self.map_or(Color::Black, |v| unsafe { v.as_ref() }.color)
    }

    #[inline(always)]
    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    #[inline(always)]
    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline(always)]
    fn left(&self) -> NodePtr<T> {
        self.map_or(None, |v| unsafe { v.as_ref() }.left)
    }

    #[inline(always)]
    fn parent(&self) -> NodePtr<T> {
        self.map_or(None, |v| unsafe { v.as_ref() }.parent)
    }

    #[inline(always)]
    fn right(&self) -> NodePtr<T> {
        self.map_or(None, |v| unsafe { v.as_ref() }.right)
    }

    #[inline(always)]
    fn set_color(&mut self, color: Color) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.color = color;
        }
    }

    #[inline(always)]
    fn set_left(&mut self, left: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.left = left;
        }
    }

    #[inline(always)]
    fn set_parent(&mut self, parent: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.parent = parent;
        }
    }

    #[inline(always)]
    fn set_right(&mut self, right: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.right = right;
        }
    }
}

/// A tree node: the stored value, a color tag and the three links.
///
/// The parent link is strictly non-owning; it exists for upward traversal
/// during rotation and fix-up.
pub struct Node<T> {
    pub(crate) parent: NodePtr<T>,
    pub(crate) left: NodePtr<T>,
    pub(crate) right: NodePtr<T>,
    pub(crate) color: Color,
    pub(crate) value: T,
}

/// The bare root pointer plus the structural primitives: rotations and the
/// two rebalancing state machines. Ownership and size bookkeeping live one
/// layer up, in [`Tree`].
pub(crate) struct Root<T> {
    pub(crate) root: NodePtr<T>,
}

/// An ordered set of unique values backed by a red-black tree.
pub struct Tree<T> {
    root: Root<T>,
    len: usize,
}
