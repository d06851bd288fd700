use std::{mem, ptr::NonNull};

use crate::{Color, Node, NodePtr, NodePtrExt, Root};

impl<T> Root<T> {
    pub(crate) const fn new() -> Self {
        Root { root: None }
    }

    /// The node holding the smallest value, by all-left descent.
    pub(crate) fn first(&self) -> NodePtr<T> {
        let mut node = self.root?;
        while let Some(left) = unsafe { node.as_ref() }.left {
            node = left;
        }
        Some(node)
    }

    /// The node holding the largest value, by all-right descent.
    pub(crate) fn last(&self) -> NodePtr<T> {
        let mut node = self.root?;
        while let Some(right) = unsafe { node.as_ref() }.right {
            node = right;
        }
        Some(node)
    }

    /// Restore the red-black invariants after linking `node` in red.
    ///
    /// Loops while the parent is red, walking the uncle-color state machine:
    /// a red uncle means recolor and ascend two levels; a black uncle means
    /// at most two rotations and the loop ends.
    pub(crate) fn insert_fixup(&mut self, node: NonNull<Node<T>>) {
        let mut node: NodePtr<T> = Some(node);
        loop {
            let mut parent = node.parent();
            if parent.is_none() {
                node.set_color(Color::Black);
                break;
            }
            if parent.is_black() {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let mut gparent = parent.parent();
            if parent == gparent.left() {
                let mut uncle = gparent.right();
                if uncle.is_red() {
                    parent.set_color(Color::Black);
                    uncle.set_color(Color::Black);
                    gparent.set_color(Color::Red);
                    node = gparent;
                    continue;
                }
                if node == parent.right() {
                    // Zig-zag; straighten into a left-left line first.
                    node = parent;
                    self.rotate_left(node.unwrap());
                    parent = node.parent();
                }
                parent.set_color(Color::Black);
                gparent.set_color(Color::Red);
                self.rotate_right(gparent.unwrap());
                break;
            } else {
                let mut uncle = gparent.left();
                if uncle.is_red() {
                    parent.set_color(Color::Black);
                    uncle.set_color(Color::Black);
                    gparent.set_color(Color::Red);
                    node = gparent;
                    continue;
                }
                if node == parent.left() {
                    node = parent;
                    self.rotate_right(node.unwrap());
                    parent = node.parent();
                }
                parent.set_color(Color::Black);
                gparent.set_color(Color::Red);
                self.rotate_left(gparent.unwrap());
                break;
            }
        }
    }

    /// Unlink the node holding `node`'s value and return the node to free.
    ///
    /// With two children the value is swapped with the in-order successor
    /// and the successor is spliced out instead; it has no left child, so
    /// the splice is always the single-child (or leaf) case.
    pub(crate) fn erase(&mut self, node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        let mut target = node;
        let two_children = {
            let node = unsafe { node.as_ref() };
            node.left.is_some() && node.right.is_some()
        };
        if two_children {
            // Guarded by two_children.
            let mut successor = unsafe { node.as_ref() }.right.unwrap();
            while let Some(left) = unsafe { successor.as_ref() }.left {
                successor = left;
            }
            unsafe {
                mem::swap(&mut (*node.as_ptr()).value, &mut (*successor.as_ptr()).value);
            }
            target = successor;
        }

        let spliced: NodePtr<T> = Some(target);
        let mut child = spliced.left().or(spliced.right());
        let parent = spliced.parent();
        let color = spliced.color();
        self.change_child(spliced, child, parent);
        child.set_parent(parent);
        if color == Color::Black {
            self.erase_fixup(child, parent);
        }
        target
    }

    /// Restore the black-height after splicing out a black node.
    ///
    /// The deficit position is carried as a (node, parent) pair so the
    /// virtual black leaf, a null slot under `parent`, flows through the
    /// same sibling-color state machine as a real node.
    fn erase_fixup(&mut self, mut node: NodePtr<T>, mut parent: NodePtr<T>) {
        while parent.is_some() && node.is_black() {
            if node == parent.left() {
                let mut sibling = parent.right();
                if sibling.is_red() {
                    sibling.set_color(Color::Black);
                    parent.set_color(Color::Red);
                    self.rotate_left(parent.unwrap());
                    sibling = parent.right();
                }
                // The spliced node was black, so a real sibling exists.
                if sibling.left().is_black() && sibling.right().is_black() {
                    sibling.set_color(Color::Red);
                    node = parent;
                    parent = node.parent();
                } else {
                    if sibling.right().is_black() {
                        let mut near = sibling.left();
                        near.set_color(Color::Black);
                        sibling.set_color(Color::Red);
                        self.rotate_right(sibling.unwrap());
                        sibling = parent.right();
                    }
                    sibling.set_color(parent.color());
                    parent.set_color(Color::Black);
                    let mut far = sibling.right();
                    far.set_color(Color::Black);
                    self.rotate_left(parent.unwrap());
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = parent.left();
                if sibling.is_red() {
                    sibling.set_color(Color::Black);
                    parent.set_color(Color::Red);
                    self.rotate_right(parent.unwrap());
                    sibling = parent.left();
                }
                if sibling.left().is_black() && sibling.right().is_black() {
                    sibling.set_color(Color::Red);
                    node = parent;
                    parent = node.parent();
                } else {
                    if sibling.left().is_black() {
                        let mut near = sibling.right();
                        near.set_color(Color::Black);
                        sibling.set_color(Color::Red);
                        self.rotate_left(sibling.unwrap());
                        sibling = parent.left();
                    }
                    sibling.set_color(parent.color());
                    parent.set_color(Color::Black);
                    let mut far = sibling.left();
                    far.set_color(Color::Black);
                    self.rotate_right(parent.unwrap());
                    node = self.root;
                    parent = None;
                }
            }
        }
        node.set_color(Color::Black);
    }

    /// Rotate `node` down to the left; its right child becomes the subtree
    /// root. Links only, colors untouched.
    fn rotate_left(&mut self, node: NonNull<Node<T>>) {
        let mut node: NodePtr<T> = Some(node);
        let mut pivot = node.right();
        debug_assert!(pivot.is_some(), "left rotation requires a right child");
        let mut inner = pivot.left();
        node.set_right(inner);
        inner.set_parent(node);
        let parent = node.parent();
        pivot.set_parent(parent);
        self.change_child(node, pivot, parent);
        pivot.set_left(node);
        node.set_parent(pivot);
    }

    /// Rotate `node` down to the right; its left child becomes the subtree
    /// root.
    fn rotate_right(&mut self, node: NonNull<Node<T>>) {
        let mut node: NodePtr<T> = Some(node);
        let mut pivot = node.left();
        debug_assert!(pivot.is_some(), "right rotation requires a left child");
        let mut inner = pivot.right();
        node.set_left(inner);
        inner.set_parent(node);
        let parent = node.parent();
        pivot.set_parent(parent);
        self.change_child(node, pivot, parent);
        pivot.set_right(node);
        node.set_parent(pivot);
    }

    /// Point whichever of `parent`'s child slots held `old` at `new`; with
    /// no parent, `new` becomes the tree root.
    fn change_child(&mut self, old: NodePtr<T>, new: NodePtr<T>, parent: NodePtr<T>) {
        if let Some(mut parent) = parent {
            let parent = unsafe { parent.as_mut() };
            if parent.left == old {
                parent.left = new;
            } else {
                parent.right = new;
            }
        } else {
            self.root = new;
        }
    }
}
