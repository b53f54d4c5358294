//! Errors reported by traversals.
//!
//! Structural operations on a [`Tree`][crate::Tree] never fail: `add`, `remove` and `contains`
//! answer with a `bool`. The only fallible things are naming a traversal order and pulling from a
//! detached [`Cursor`][crate::Cursor] after the tree changed underneath it.

use thiserror::Error;

/// A traversal order name that isn't one of `pre`, `in`, `post` or `level`.
///
/// # Examples
///
/// ```
/// use ordered_bst::TraversalOrder;
///
/// let err = "sideways".parse::<TraversalOrder>().unwrap_err();
/// assert_eq!(err.name(), "sideways");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid traversal order `{0}`, expected one of: pre, in, post, level")]
pub struct InvalidTraversalOrder(pub(crate) String);

impl InvalidTraversalOrder {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Errors produced while pulling elements out of a [`Cursor`][crate::Cursor].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TraversalError {
    /// The tree was structurally modified (an element was added or removed) after the cursor was
    /// created. The tree is still valid; only the cursor is spent.
    #[error("tree was modified during traversal (started with {expected} elements, now {found})")]
    ConcurrentModification {
        /// Number of elements when the cursor was created.
        expected: usize,
        /// Number of elements at the pull that noticed the change.
        found: usize,
    },
}
