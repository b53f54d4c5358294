//! Tree traversals. There are four orders and two ways to consume them:
//!
//! - [`Traversal`] borrows the tree and is an ordinary [`Iterator`]. The borrow checker forbids
//!   modifying the tree while one is alive.
//! - [`Cursor`] holds nothing but node handles and is handed the tree on every pull. The tree may
//!   be modified between pulls, in which case the next pull fails with
//!   [`TraversalError::ConcurrentModification`].
//!
//! Both are one-shot. Once exhausted, ask the tree for a new one.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use generational_arena::Index;

use crate::error::{InvalidTraversalOrder, TraversalError};
use crate::tree::{Link, Tree};

/// The order in which a traversal visits nodes.
///
/// # Examples
///
/// ```
/// use ordered_bst::TraversalOrder;
///
/// assert_eq!("pre".parse(), Ok(TraversalOrder::PreOrder));
/// assert_eq!("Level-Order".parse(), Ok(TraversalOrder::LevelOrder));
/// assert_eq!(TraversalOrder::PostOrder.to_string(), "post-order");
/// assert!("zigzag".parse::<TraversalOrder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// A node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Yields elements in sorted order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Breadth first: the root, then every node one level down from left to right, and so on.
    LevelOrder,
}

impl TraversalOrder {
    /// Every order.
    pub const ALL: [Self; 4] = [
        Self::PreOrder,
        Self::InOrder,
        Self::PostOrder,
        Self::LevelOrder,
    ];
}

impl FromStr for TraversalOrder {
    type Err = InvalidTraversalOrder;

    /// Accepts `pre`, `in`, `post` and `level`, optionally suffixed with `order` (`pre-order`,
    /// `in_order`, `PostOrder`, ...). Case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let name = name.strip_suffix("order").unwrap_or(&name);

        match name {
            "pre" => Ok(Self::PreOrder),
            "in" => Ok(Self::InOrder),
            "post" => Ok(Self::PostOrder),
            "level" => Ok(Self::LevelOrder),
            _ => Err(InvalidTraversalOrder(s.to_string())),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
            Self::LevelOrder => "level-order",
        })
    }
}

/// The nodes a cursor has yet to visit, laid out the way each order needs them.
#[derive(Debug, Clone)]
enum Frontier {
    /// Top of the stack is the next node to emit.
    PreOrder(Vec<Index>),
    /// Ancestors waiting for their left subtree to finish, plus the subtree to descend into next.
    InOrder { stack: Vec<Index>, travel: Link },
    /// Fully built when the cursor is created. Popping yields post-order.
    PostOrder(Vec<Index>),
    LevelOrder(VecDeque<Index>),
}

impl Frontier {
    fn new<T>(tree: &Tree<T>, order: TraversalOrder) -> Self {
        let root = tree.root();
        match order {
            TraversalOrder::PreOrder => Self::PreOrder(root.into_iter().collect()),
            TraversalOrder::InOrder => Self::InOrder {
                stack: Vec::new(),
                travel: root,
            },
            TraversalOrder::PostOrder => Self::PostOrder(post_order_stack(tree)),
            TraversalOrder::LevelOrder => Self::LevelOrder(root.into_iter().collect()),
        }
    }

    fn is_exhausted(&self) -> bool {
        match self {
            Self::PreOrder(stack) | Self::PostOrder(stack) => stack.is_empty(),
            Self::InOrder { stack, travel } => stack.is_empty() && travel.is_none(),
            Self::LevelOrder(queue) => queue.is_empty(),
        }
    }

    /// Emits the next element. Must not be called once exhausted. Returns `None` if a handle no
    /// longer refers to a node, i.e. the tree changed.
    fn step<'t, T>(&mut self, tree: &'t Tree<T>) -> Option<&'t T> {
        match self {
            Self::PreOrder(stack) => {
                let node = tree.node(stack.pop()?)?;
                // Left is pushed last so it is popped first.
                stack.extend(node.right);
                stack.extend(node.left);
                Some(&node.elem)
            }
            Self::InOrder { stack, travel } => {
                while let Some(index) = *travel {
                    stack.push(index);
                    *travel = tree.node(index)?.left;
                }
                let node = tree.node(stack.pop()?)?;
                *travel = node.right;
                Some(&node.elem)
            }
            Self::PostOrder(stack) => tree.node(stack.pop()?).map(|node| &node.elem),
            Self::LevelOrder(queue) => {
                let node = tree.node(queue.pop_front()?)?;
                queue.extend(node.left);
                queue.extend(node.right);
                Some(&node.elem)
            }
        }
    }
}

/// First half of the two-stack post-order: walk root first, pushing left then right children, and
/// move every visited node onto a second stack. That stack pops as left, right, node.
fn post_order_stack<T>(tree: &Tree<T>) -> Vec<Index> {
    let mut pending: Vec<Index> = tree.root().into_iter().collect();
    let mut visited = Vec::with_capacity(tree.len());
    while let Some(index) = pending.pop() {
        if let Some(node) = tree.node(index) {
            visited.push(index);
            pending.extend(node.left);
            pending.extend(node.right);
        }
    }
    visited
}

/// A traversal detached from the tree it walks. Created by [`Tree::cursor`].
///
/// The cursor remembers how many elements the tree held when it was created. On every pull it
/// checks the tree still holds that many and that the nodes it is about to visit still exist. If
/// not, the pull returns [`TraversalError::ConcurrentModification`], as does every later pull.
/// The tree itself is never harmed.
///
/// The check runs even after everything has been yielded: an exhausted cursor returns `None` only
/// while the tree still holds as many elements as it started with. The same goes for a cursor
/// created on an empty tree.
///
/// A cursor must only be advanced with the tree that created it.
///
/// # Examples
///
/// ```
/// use ordered_bst::{Tree, TraversalError, TraversalOrder};
///
/// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// let mut cursor = tree.cursor(TraversalOrder::InOrder);
///
/// assert_eq!(cursor.next(&tree), Some(Ok(&1)));
///
/// tree.add(0);
/// assert_eq!(
///     cursor.next(&tree),
///     Some(Err(TraversalError::ConcurrentModification { expected: 3, found: 4 }))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    order: TraversalOrder,
    expected_len: usize,
    emitted: usize,
    invalidated: bool,
    frontier: Frontier,
}

impl Cursor {
    pub(crate) fn new<T>(tree: &Tree<T>, order: TraversalOrder) -> Self {
        Self {
            order,
            expected_len: tree.len(),
            emitted: 0,
            invalidated: false,
            frontier: Frontier::new(tree, order),
        }
    }

    /// The order this cursor visits nodes in.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// How many elements are left to yield, assuming the tree is left alone.
    pub fn remaining(&self) -> usize {
        if self.invalidated {
            0
        } else {
            self.expected_len.saturating_sub(self.emitted)
        }
    }

    /// Pulls the next element out of `tree`. Returns `None` once every element has been yielded
    /// and the tree is still the size it was when the cursor was created.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'t, T>(&mut self, tree: &'t Tree<T>) -> Option<Result<&'t T, TraversalError>> {
        let modified = TraversalError::ConcurrentModification {
            expected: self.expected_len,
            found: tree.len(),
        };
        if self.invalidated {
            return Some(Err(modified));
        }
        if tree.len() != self.expected_len {
            self.invalidated = true;
            return Some(Err(modified));
        }
        if self.frontier.is_exhausted() {
            return None;
        }

        match self.frontier.step(tree) {
            Some(elem) => {
                self.emitted += 1;
                Some(Ok(elem))
            }
            None => {
                self.invalidated = true;
                Some(Err(modified))
            }
        }
    }
}

/// A lazy sequence of a tree's elements, created by [`Tree::traverse`].
///
/// The tree stays borrowed until the traversal is dropped, so it can't be changed in the middle:
///
/// ```compile_fail
/// use ordered_bst::{Tree, TraversalOrder};
///
/// let mut tree: Tree<_> = (1..=3).collect();
/// for x in tree.traverse(TraversalOrder::InOrder) {
///     tree.add(x + 10);
/// }
/// ```
pub struct Traversal<'a, T> {
    tree: &'a Tree<T>,
    cursor: Cursor,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, order: TraversalOrder) -> Self {
        Self {
            tree,
            cursor: Cursor::new(tree, order),
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> TraversalOrder {
        self.cursor.order()
    }
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            cursor: self.cursor.clone(),
        }
    }
}

impl<T> fmt::Debug for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.cursor.order())
            .field("remaining", &self.cursor.remaining())
            .finish()
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // The shared borrow of `tree` means it can't have been modified.
        self.cursor.next(self.tree).and_then(Result::ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
