use std::collections::VecDeque;

/// Worklist holding the enqueued-but-unvisited part of a traversal.
///
/// The worklist discipline alone decides the traversal order: FIFO gives
/// breadth-first search, LIFO gives depth-first search.
pub trait Frontier<T>: Default {
    /// Whether the most recently pushed item is popped first.
    ///
    /// LIFO frontiers receive a vertex's successors in reverse adjacency
    /// order so the first listed successor is still visited first.
    const LIFO: bool;

    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    const LIFO: bool = false;

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Frontier<T> for Vec<T> {
    const LIFO: bool = true;

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
