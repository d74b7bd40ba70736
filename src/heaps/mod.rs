pub mod binary_heap;

pub use binary_heap::{BinaryHeap, Comparator, FnOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
