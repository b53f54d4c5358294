use ordered_bst::{Tree, TraversalError, TraversalOrder};
use quickcheck_macros::quickcheck;

use crate::reference::Reference;

#[quickcheck]
fn matches_reference(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let reference = Reference::new(&xs);

    TraversalOrder::ALL.into_iter().all(|order| {
        let seen: Vec<_> = tree.traverse(order).copied().collect();
        seen == reference.traverse(order)
    })
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.traverse(TraversalOrder::InOrder).collect();

    sorted.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn orders_agree_on_contents(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
    }
    let sorted: Vec<_> = tree.traverse(TraversalOrder::InOrder).copied().collect();

    TraversalOrder::ALL.into_iter().all(|order| {
        let mut seen: Vec<_> = tree.traverse(order).copied().collect();
        seen.sort();
        seen == sorted && seen.len() == tree.len()
    })
}

#[quickcheck]
fn cursor_notices_any_add(xs: Vec<i8>, x: i8, pulls: u8) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    if tree.contains(&x) {
        return true;
    }

    TraversalOrder::ALL.into_iter().all(|order| {
        let mut tree = tree.clone();
        let mut cursor = tree.cursor(order);
        for _ in 0..(pulls as usize % (tree.len() + 1)) {
            if !matches!(cursor.next(&tree), Some(Ok(_))) {
                return false;
            }
        }

        // Whether or not the cursor has run dry, the add must be reported.
        let expected = tree.len();
        tree.add(x);
        match cursor.next(&tree) {
            Some(Err(TraversalError::ConcurrentModification { expected: e, found })) => {
                e == expected && found == expected + 1
            }
            None | Some(Ok(_)) | Some(Err(_)) => false,
        }
    })
}
