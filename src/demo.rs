use clap::Parser;
use ordered_bst::{Tree, TraversalOrder};
use rand::seq::SliceRandom;

#[derive(Parser)]
#[command(name = "bst-demo")]
#[command(about = "Builds a binary search tree and prints its traversals")]
struct Args {
    /// Elements to add, in order.
    elements: Vec<i64>,

    /// Traversal order to print: pre, in, post or level.
    #[arg(long, default_value = "in")]
    order: TraversalOrder,

    /// Print all four traversal orders.
    #[arg(long)]
    all: bool,

    /// Also add the numbers 0..N in a random order.
    #[arg(long)]
    random: Option<i64>,

    /// Elements to remove once everything is added.
    #[arg(long, value_delimiter = ',')]
    remove: Vec<i64>,
}

fn main() {
    let args = Args::parse();

    let mut elements = args.elements;
    if let Some(n) = args.random {
        let mut shuffled: Vec<i64> = (0..n).collect();
        shuffled.shuffle(&mut rand::rng());
        elements.extend(shuffled);
    }

    let mut tree = Tree::new();
    let added = elements.iter().filter(|&&x| tree.add(x)).count();
    println!(
        "Added {} elements ({} duplicates ignored)",
        added,
        elements.len() - added
    );

    if !args.remove.is_empty() {
        let removed = args.remove.iter().filter(|x| tree.remove(x)).count();
        println!(
            "Removed {} elements ({} not found)",
            removed,
            args.remove.len() - removed
        );
    }

    println!("Size: {}", tree.len());
    println!("Height: {}", tree.height());
    match (tree.min(), tree.max()) {
        (Some(min), Some(max)) => println!("Range: {min}..={max}"),
        _ => println!("Range: empty"),
    }

    let orders = if args.all {
        TraversalOrder::ALL.to_vec()
    } else {
        vec![args.order]
    };
    for order in orders {
        let elems: Vec<String> = tree.traverse(order).map(i64::to_string).collect();
        println!("{order}: {}", elems.join(" "));
    }
}
