//! Randomised tests. Each module builds trees from arbitrary input and checks them against a
//! simpler model of what the tree should hold.

mod reference;
mod traversal;
