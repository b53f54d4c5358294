//! A mutable, unbalanced BST. Nodes live in a generational arena and refer to their children by
//! handle, so every node has exactly one owner slot (its parent's `left`/`right`, or the tree's
//! root) and there are no parent pointers.
//!
//! Nothing here rebalances: inserting in sorted order produces a tree shaped like a linked list.
//! All the descents are loops rather than recursion so that such a tree can't overflow the stack.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::{Tree, TraversalOrder};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.height(), 0);
//!
//! assert!(tree.add(5));
//! assert!(tree.add(3));
//! assert!(tree.add(8));
//!
//! // Duplicates are rejected.
//! assert!(!tree.add(5));
//! assert_eq!(tree.len(), 3);
//!
//! let sorted: Vec<_> = tree.traverse(TraversalOrder::InOrder).copied().collect();
//! assert_eq!(sorted, [3, 5, 8]);
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.contains(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};

use crate::traversal::{Cursor, Traversal, TraversalOrder};

/// Handle to a child subtree. `None` is an empty subtree.
pub(crate) type Link = Option<Index>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<T> Node<T> {
    fn new(elem: T) -> Self {
        Self {
            elem,
            left: None,
            right: None,
        }
    }
}

/// The place a node hangs from: the tree's root or one side of its parent.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    Left(Index),
    Right(Index),
}

/// An unbalanced Binary Search Tree holding unique, totally ordered elements.
///
/// Cloning copies the arena slot for slot, so the clone has the exact same shape.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Link,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.traverse(TraversalOrder::InOrder))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The number of elements in the tree. This is `O(1)`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the tree holds an element equal to `elem`. Takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = ['B', 'A', 'C'].into_iter().collect();
    ///
    /// assert!(tree.contains(&'A'));
    /// assert!(!tree.contains(&'D'));
    /// ```
    pub fn contains(&self, elem: &T) -> bool
    where
        T: Ord,
    {
        self.locate(elem).1.is_some()
    }

    /// Adds `elem` as a new leaf. Returns `false`, leaving the tree untouched, if an equal element
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add('A'));
    /// assert!(!tree.add('A'));
    /// assert!(tree.add('B'));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, elem: T) -> bool
    where
        T: Ord,
    {
        let (slot, found) = self.locate(&elem);
        if found.is_some() {
            return false;
        }

        let index = self.nodes.insert(Node::new(elem));
        self.set_link(slot, Some(index));
        true
    }

    /// Removes the element equal to `elem`. Returns `false`, leaving the tree untouched, if there
    /// is no such element.
    ///
    /// A node with two children takes over the element of its in-order successor (the smallest
    /// element of its right subtree) and the successor's node is detached instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Tree, TraversalOrder};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    ///
    /// let level: Vec<_> = tree.traverse(TraversalOrder::LevelOrder).copied().collect();
    /// assert_eq!(level, [7, 3, 8, 1, 4, 9]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> bool
    where
        T: Ord,
    {
        match self.locate(elem) {
            (slot, Some(index)) => {
                self.unlink(slot, index);
                true
            }
            (_, None) => false,
        }
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root. Not cached, so every
    /// call walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// // Sorted input degenerates into a list.
    /// let tree: Tree<_> = (0..10).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<Index> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .filter_map(|index| self.nodes.get(index))
                .flat_map(|node| [node.left, node.right])
                .flatten()
                .collect();
        }
        height
    }

    /// The smallest element, if any.
    pub fn min(&self) -> Option<&T> {
        let (_, index) = self.leftmost(Slot::Root)?;
        self.node(index).map(|node| &node.elem)
    }

    /// The largest element, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.node(self.root?)?;
        while let Some(right) = node.right.and_then(|index| self.node(index)) {
            node = right;
        }
        Some(&node.elem)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// A lazy sequence of the tree's elements in the given order. Each call starts a fresh
    /// traversal. The tree is borrowed for as long as the traversal lives, so it can't be
    /// modified mid-way; use [`Tree::cursor`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Tree, TraversalOrder};
    ///
    /// let tree: Tree<_> = ['M', 'J', 'S', 'B', 'N', 'Z', 'A'].into_iter().collect();
    ///
    /// let pre: String = tree.traverse(TraversalOrder::PreOrder).collect();
    /// let post: String = tree.traverse(TraversalOrder::PostOrder).collect();
    /// assert_eq!(pre, "MJBASNZ");
    /// assert_eq!(post, "ABJNZSM");
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self, order)
    }

    /// A traversal that doesn't borrow the tree. Elements are pulled with [`Cursor::next`], which
    /// reports an error if the tree was modified since the cursor was created.
    pub fn cursor(&self, order: TraversalOrder) -> Cursor {
        Cursor::new(self, order)
    }

    /// Iterates the tree in pre-order.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::PreOrder)
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn node(&self, index: Index) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    /// Follows `link` to its node, keeping the handle alongside.
    fn entry(&self, link: Link) -> Option<(Index, &Node<T>)> {
        let index = link?;
        self.nodes.get(index).map(|node| (index, node))
    }

    /// Descends from the root towards `elem`. Returns the slot where `elem` lives, or where it
    /// would be inserted, and the node found there.
    fn locate(&self, elem: &T) -> (Slot, Link)
    where
        T: Ord,
    {
        let mut slot = Slot::Root;
        while let Some((index, node)) = self.entry(self.link(slot)) {
            slot = match elem.cmp(&node.elem) {
                Ordering::Less => Slot::Left(index),
                Ordering::Equal => return (slot, Some(index)),
                Ordering::Greater => Slot::Right(index),
            };
        }
        (slot, None)
    }

    /// The leftmost node of the subtree hanging from `slot`, and the slot it hangs from.
    fn leftmost(&self, mut slot: Slot) -> Option<(Slot, Index)> {
        let (mut index, mut node) = self.entry(self.link(slot))?;
        while let Some((left_index, left)) = self.entry(node.left) {
            slot = Slot::Left(index);
            index = left_index;
            node = left;
        }
        Some((slot, index))
    }

    fn link(&self, slot: Slot) -> Link {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes.get(parent).and_then(|node| node.left),
            Slot::Right(parent) => self.nodes.get(parent).and_then(|node| node.right),
        }
    }

    fn set_link(&mut self, slot: Slot, link: Link) {
        match slot {
            Slot::Root => self.root = link,
            Slot::Left(parent) => {
                if let Some(node) = self.nodes.get_mut(parent) {
                    node.left = link;
                }
            }
            Slot::Right(parent) => {
                if let Some(node) = self.nodes.get_mut(parent) {
                    node.right = link;
                }
            }
        }
    }

    /// Removes the node at `index`, which hangs from `slot`.
    fn unlink(&mut self, slot: Slot, index: Index) {
        let (left, right) = match self.nodes.get(index) {
            Some(node) => (node.left, node.right),
            None => return,
        };

        match (left, right) {
            (None, right) => {
                self.set_link(slot, right);
                self.nodes.remove(index);
            }
            (left, None) => {
                self.set_link(slot, left);
                self.nodes.remove(index);
            }
            (Some(_), Some(_)) => {
                // The successor has no left child, so it is replaced by its right child just
                // like the first case above.
                let Some((successor_slot, successor)) = self.leftmost(Slot::Right(index)) else {
                    return;
                };
                let successor_right = self.nodes.get(successor).and_then(|node| node.right);
                self.set_link(successor_slot, successor_right);

                if let Some(Node { elem, .. }) = self.nodes.remove(successor) {
                    if let Some(node) = self.nodes.get_mut(index) {
                        node.elem = elem;
                    }
                }
            }
        }
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    /// Adds every element, skipping ones already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
