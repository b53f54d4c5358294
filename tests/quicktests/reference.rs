use std::collections::VecDeque;

use ordered_bst::TraversalOrder;

/// The most naive BST possible: recursive boxes, recursive walks. Traversals of the real tree are
/// checked against this one built from the same input.
pub(crate) struct Reference<T> {
    root: Option<Box<RefNode<T>>>,
}

struct RefNode<T> {
    elem: T,
    left: Option<Box<RefNode<T>>>,
    right: Option<Box<RefNode<T>>>,
}

impl<T: Ord + Copy> Reference<T> {
    /// Builds the tree by adding `xs` in order, skipping duplicates.
    pub(crate) fn new(xs: &[T]) -> Self {
        let mut root = None;
        for &x in xs {
            root = Some(add(root, x));
        }
        Self { root }
    }

    pub(crate) fn traverse(&self, order: TraversalOrder) -> Vec<T> {
        let mut out = Vec::new();
        match order {
            TraversalOrder::PreOrder => pre_order(&self.root, &mut out),
            TraversalOrder::InOrder => in_order(&self.root, &mut out),
            TraversalOrder::PostOrder => post_order(&self.root, &mut out),
            TraversalOrder::LevelOrder => level_order(&self.root, &mut out),
        }
        out
    }

    pub(crate) fn height(&self) -> usize {
        height(&self.root)
    }
}

fn add<T: Ord>(node: Option<Box<RefNode<T>>>, elem: T) -> Box<RefNode<T>> {
    match node {
        None => Box::new(RefNode {
            elem,
            left: None,
            right: None,
        }),
        Some(mut n) => {
            if elem < n.elem {
                n.left = Some(add(n.left.take(), elem));
            } else if elem > n.elem {
                n.right = Some(add(n.right.take(), elem));
            }
            n
        }
    }
}

fn pre_order<T: Copy>(node: &Option<Box<RefNode<T>>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        out.push(n.elem);
        pre_order(&n.left, out);
        pre_order(&n.right, out);
    }
}

fn in_order<T: Copy>(node: &Option<Box<RefNode<T>>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        in_order(&n.left, out);
        out.push(n.elem);
        in_order(&n.right, out);
    }
}

fn post_order<T: Copy>(node: &Option<Box<RefNode<T>>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        post_order(&n.left, out);
        post_order(&n.right, out);
        out.push(n.elem);
    }
}

fn level_order<T: Copy>(root: &Option<Box<RefNode<T>>>, out: &mut Vec<T>) {
    let mut queue: VecDeque<&RefNode<T>> = root.as_deref().into_iter().collect();
    while let Some(n) = queue.pop_front() {
        out.push(n.elem);
        queue.extend(n.left.as_deref());
        queue.extend(n.right.as_deref());
    }
}

fn height<T>(node: &Option<Box<RefNode<T>>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(&n.left).max(height(&n.right)),
    }
}
