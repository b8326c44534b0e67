mod fenwick_tree;

pub use fenwick_tree::FenwickTree;
