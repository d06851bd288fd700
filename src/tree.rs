use std::{
    borrow::Borrow,
    cmp::Ordering::*,
    fmt::{self, Debug},
    ptr::NonNull,
};

use crate::{Iter, Node, NodePtr, Root, Tree};

enum Side {
    Left,
    Right,
}

impl<T> Tree<T> {
    pub const fn new() -> Self {
        Tree {
            root: Root::new(),
            len: 0,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A read-only handle on the root node, for external traversal.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.root.map(|n| unsafe { n.as_ref() })
    }

    /// The smallest value, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.root.first().map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// The largest value, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.root.last().map(|n| unsafe { &(*n.as_ptr()).value })
    }

    #[inline(always)]
    pub fn min(&self) -> Option<&T> {
        self.first()
    }

    #[inline(always)]
    pub fn max(&self) -> Option<&T> {
        self.last()
    }

    /// The number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        fn height_of<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| 1 + height_of(n.left()).max(height_of(n.right())))
        }
        height_of(self.root())
    }

    /// In-order iterator over shared references to the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            self.root.first().map(|n| unsafe { &*n.as_ptr() }),
            self.len,
        )
    }

    /// Drop every node and reset to empty.
    pub fn clear(&mut self) {
        free_subtree(self.root.root.take());
        self.len = 0;
    }
}

impl<T: Ord> Tree<T> {
    /// Insert `value`, rebalance, and return a reference to the stored
    /// value. A duplicate leaves the tree untouched and returns the value
    /// already in place.
    pub fn push(&mut self, value: T) -> &T {
        let mut parent: NodePtr<T> = None;
        let mut side = Side::Left;
        let mut current = self.root.root;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            match value.cmp(&node_ref.value) {
                Less => {
                    parent = current;
                    side = Side::Left;
                    current = node_ref.left;
                }
                Greater => {
                    parent = current;
                    side = Side::Right;
                    current = node_ref.right;
                }
                Equal => return unsafe { &(*node.as_ptr()).value },
            }
        }

        let mut node = Node::new(value);
        node.parent = parent;
        let node = NonNull::from(Box::leak(Box::new(node)));
        match parent {
            Some(mut parent) => match side {
                Side::Left => unsafe { parent.as_mut() }.left = Some(node),
                Side::Right => unsafe { parent.as_mut() }.right = Some(node),
            },
            None => self.root.root = Some(node),
        }
        self.root.insert_fixup(node);
        self.len += 1;
        unsafe { &(*node.as_ptr()).value }
    }

    /// Remove the node holding `value` and return the value. A miss is a
    /// silent no-op returning `None`.
    pub fn pop<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find_node(value)?;
        let spliced = self.root.erase(node);
        self.len -= 1;
        let boxed = unsafe { Box::from_raw(spliced.as_ptr()) };
        Some(boxed.value)
    }

    /// Remove and return the smallest value.
    pub fn pop_first(&mut self) -> Option<T> {
        let node = self.root.first()?;
        let spliced = self.root.erase(node);
        self.len -= 1;
        let boxed = unsafe { Box::from_raw(spliced.as_ptr()) };
        Some(boxed.value)
    }

    /// Remove and return the largest value.
    pub fn pop_last(&mut self) -> Option<T> {
        let node = self.root.last()?;
        let spliced = self.root.erase(node);
        self.len -= 1;
        let boxed = unsafe { Box::from_raw(spliced.as_ptr()) };
        Some(boxed.value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value).is_some()
    }

    pub fn find<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value)
            .map(|n| unsafe { &(*n.as_ptr()).value })
    }

    fn find_node<Q>(&self, value: &Q) -> NodePtr<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.root;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            match value.cmp(node_ref.value.borrow()) {
                Less => current = node_ref.left,
                Greater => current = node_ref.right,
                Equal => return current,
            }
        }
        None
    }
}

/// Iterative post-order free over the child links, backtracking through
/// the parent pointers. No recursion, so deep trees cannot blow the stack.
fn free_subtree<T>(root: NodePtr<T>) {
    let mut current = root;
    while let Some(node) = current {
        let node_ref = unsafe { node.as_ref() };
        if node_ref.left.is_some() {
            current = node_ref.left;
            continue;
        }
        if node_ref.right.is_some() {
            current = node_ref.right;
            continue;
        }
        let parent = node_ref.parent;
        if let Some(mut parent) = parent {
            let parent = unsafe { parent.as_mut() };
            if parent.left == current {
                parent.left = None;
            } else {
                parent.right = None;
            }
        }
        drop(unsafe { Box::from_raw(node.as_ptr()) });
        current = parent;
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        free_subtree(self.root.root.take());
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
