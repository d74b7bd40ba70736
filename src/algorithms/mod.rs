pub mod components;
pub mod kruskal;
pub mod tarjan;
pub mod toposort;

pub use components::{ccs, disjoint_set, split_ccs};
pub use kruskal::{kruskal, kruskal_by, spanning_forest};
pub use tarjan::{tarjan, StronglyConnected};
pub use toposort::toposort;
