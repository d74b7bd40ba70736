mod sealed {
    pub trait Sealed {}
}

/// Static direction of a graph's edges.
///
/// Implemented only by [`Directed`] and [`Undirected`]. Undirected graphs
/// store every logical edge as two mirrored out-edge records, which is why
/// edge accounting lives here.
pub trait Directivity: sealed::Sealed + Copy + Default + std::fmt::Debug + 'static {
    const DIRECTED: bool;

    /// Logical edge count for `records` stored out-edge records.
    fn edge_count(records: usize) -> usize;

    /// Largest edge count of a simple graph on `vertices` vertices.
    fn max_edges(vertices: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl sealed::Sealed for Directed {}
impl sealed::Sealed for Undirected {}

impl Directivity for Directed {
    const DIRECTED: bool = true;

    #[inline]
    fn edge_count(records: usize) -> usize {
        records
    }

    #[inline]
    fn max_edges(vertices: usize) -> usize {
        vertices * vertices.saturating_sub(1)
    }
}

impl Directivity for Undirected {
    const DIRECTED: bool = false;

    #[inline]
    fn edge_count(records: usize) -> usize {
        records / 2
    }

    #[inline]
    fn max_edges(vertices: usize) -> usize {
        vertices * vertices.saturating_sub(1) / 2
    }
}
