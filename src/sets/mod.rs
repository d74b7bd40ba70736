pub mod disjoint_set;

pub use disjoint_set::{
    DisjointSet, FindStrategy, Naive, PathCompression, PathHalving, PathSplitting,
};
