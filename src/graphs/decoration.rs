use crate::graphs::edges::OutEdge;
use crate::graphs::properties::{Capacitated, Scalar};
use crate::graphs::vertices::VertexIndex;

/// Hop count along a traversal path.
pub type PathLength = u32;

/// Predecessor reported for vertices no search reached.
pub const NO_PREDECESSOR: VertexIndex = usize::MAX;

/// Distance reported for vertices no breadth-first search reached.
pub const UNREACHED: PathLength = PathLength::MAX;

/// Per-visit state carried alongside a vertex in a traversal frontier.
///
/// A decoration is created for each source with [`Decoration::seed`] and for
/// every newly enqueued vertex by folding the edge just taken into the
/// parent's decoration with [`Decoration::follow`]. Traversals never inspect
/// decorations, so new ones plug in without touching the search loop, and
/// `()` costs nothing.
pub trait Decoration<E>: Sized {
    fn seed(source: VertexIndex) -> Self;

    fn follow(&self, from: VertexIndex, edge: &OutEdge<E>) -> Self;
}

impl<E> Decoration<E> for () {
    #[inline]
    fn seed(_: VertexIndex) -> Self {}

    #[inline]
    fn follow(&self, _: VertexIndex, _: &OutEdge<E>) -> Self {}
}

/// Number of edges from the nearest source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hops(pub PathLength);

impl<E> Decoration<E> for Hops {
    #[inline]
    fn seed(_: VertexIndex) -> Self {
        Hops(0)
    }

    #[inline]
    fn follow(&self, _: VertexIndex, _: &OutEdge<E>) -> Self {
        Hops(self.0 + 1)
    }
}

/// Vertex the traversal came from. A source is its own predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predecessor(pub VertexIndex);

impl Default for Predecessor {
    fn default() -> Self {
        Predecessor(NO_PREDECESSOR)
    }
}

impl<E> Decoration<E> for Predecessor {
    #[inline]
    fn seed(source: VertexIndex) -> Self {
        Predecessor(source)
    }

    #[inline]
    fn follow(&self, from: VertexIndex, _: &OutEdge<E>) -> Self {
        Predecessor(from)
    }
}

/// Smallest edge capacity along the traversal path.
///
/// Sources start unbounded at `C::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bottleneck<C>(pub C);

impl<E> Decoration<E> for Bottleneck<E::Capacity>
where
    E: Capacitated,
{
    #[inline]
    fn seed(_: VertexIndex) -> Self {
        Bottleneck(E::Capacity::INFINITY)
    }

    #[inline]
    fn follow(&self, _: VertexIndex, edge: &OutEdge<E>) -> Self {
        let capacity = edge.properties.capacity();
        if capacity < self.0 {
            Bottleneck(capacity)
        } else {
            *self
        }
    }
}

macro_rules! impl_decoration_tuple {
    ($($name:ident),+) => {
        impl<E, $($name: Decoration<E>),+> Decoration<E> for ($($name,)+) {
            #[inline]
            fn seed(source: VertexIndex) -> Self {
                ($($name::seed(source),)+)
            }

            #[inline]
            #[allow(non_snake_case)]
            fn follow(&self, from: VertexIndex, edge: &OutEdge<E>) -> Self {
                let ($($name,)+) = self;
                ($($name.follow(from, edge),)+)
            }
        }
    };
}

impl_decoration_tuple!(A);
impl_decoration_tuple!(A, B);
impl_decoration_tuple!(A, B, C);
impl_decoration_tuple!(A, B, C, D);
