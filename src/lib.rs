//! An unbalanced Binary Search Tree (BST) over unique, ordered elements with four
//! ways of walking it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root to a leaf). This tree does nothing to
//! keep its height down: adding elements in sorted order gives a height of `N`.
//!
//! ## Traversals
//!
//! [`Tree::traverse`] walks the tree in one of four [`TraversalOrder`]s:
//!
//! - pre-order: a node, its left subtree, its right subtree;
//! - in-order: the left subtree, the node, the right subtree (i.e. sorted);
//! - post-order: the left subtree, the right subtree, the node;
//! - level-order: breadth first, top to bottom.
//!
//! ```
//! use ordered_bst::{Tree, TraversalOrder};
//!
//! let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! let level: Vec<_> = tree.traverse(TraversalOrder::LevelOrder).copied().collect();
//! assert_eq!(level, [5, 3, 8, 1, 4]);
//! ```
//!
//! A [`Cursor`] is the same walk without holding on to the tree, for callers that
//! need to modify the tree between steps. It notices the modification and reports a
//! [`TraversalError`] instead of yielding stale elements.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traversal;
pub mod tree;

pub use error::{InvalidTraversalOrder, TraversalError};
pub use traversal::{Cursor, Traversal, TraversalOrder};
pub use tree::Tree;
