/// Strict ordering used by [`BinaryHeap`].
///
/// `precedes(a, b)` returns true when `a` must sit above `b`. Equal elements
/// must not precede each other.
pub trait Comparator<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Largest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

/// Ordering given by a `Fn(&T, &T) -> bool` closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<T: PartialOrd> Comparator<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> Comparator<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Comparator<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Array-backed binary heap with addressable positions.
///
/// Unlike `std::collections::BinaryHeap`, positions are exposed: [`push`],
/// [`update`], [`increase`] and [`decrease`] return the final index of the
/// touched element so callers can keep handles for later key changes.
///
/// [`push`]: BinaryHeap::push
/// [`update`]: BinaryHeap::update
/// [`increase`]: BinaryHeap::increase
/// [`decrease`]: BinaryHeap::decrease
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = MinOrder> {
    data: Vec<T>,
    order: C,
}

pub type MinHeap<T> = BinaryHeap<T, MinOrder>;
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            order: C::default(),
        }
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_capacity(C::default(), capacity)
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Comparator<T>,
{
    #[must_use]
    pub fn with_comparator(order: C) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    #[must_use]
    pub fn with_comparator_and_capacity(order: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from arbitrary storage in O(n).
    pub fn from_vec(data: Vec<T>, order: C) -> Self {
        let mut heap = Self { data, order };
        heap.make_heap();
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The element that would be removed by [`BinaryHeap::pop`].
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.data.first()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Storage in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Inserts `value` and returns its final position.
    pub fn push(&mut self, value: T) -> usize {
        self.data.push(value);
        let index = self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_ordered_at(index));
        index
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }

        let top = std::mem::replace(&mut self.data[0], last);
        let index = self.sift_down(0);
        debug_assert!(self.is_ordered_at(index));
        Some(top)
    }

    /// Replaces the top element with `value` and returns the old top.
    ///
    /// On an empty heap `value` is simply pushed.
    pub fn exchange_top(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.data.push(value);
            return None;
        }

        let top = std::mem::replace(&mut self.data[0], value);
        let index = self.sift_down(0);
        debug_assert!(self.is_ordered_at(index));
        Some(top)
    }

    /// Removes the element at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn erase(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);

        if index < self.data.len() {
            let mut moved = self.sift_up(index);
            if moved == index {
                moved = self.sift_down(index);
            }
            debug_assert!(self.is_ordered_at(moved));
        }
        removed
    }

    /// Replaces the element at `index`, restoring order in either direction.
    pub fn update(&mut self, index: usize, value: T) -> usize {
        let rises = self.order.precedes(&value, &self.data[index]);
        self.data[index] = value;
        let index = if rises {
            self.sift_up(index)
        } else {
            self.sift_down(index)
        };
        debug_assert!(self.is_ordered_at(index));
        index
    }

    /// Replaces the element at `index` with one that orders after it.
    ///
    /// The new value must not precede the old one.
    pub fn increase(&mut self, index: usize, value: T) -> usize {
        debug_assert!(
            !self.order.precedes(&value, &self.data[index]),
            "increase must not move an element toward the top"
        );
        self.data[index] = value;
        let index = self.sift_down(index);
        debug_assert!(self.is_ordered_at(index));
        index
    }

    /// Replaces the element at `index` with one that orders before it.
    ///
    /// The old value must not precede the new one.
    pub fn decrease(&mut self, index: usize, value: T) -> usize {
        debug_assert!(
            !self.order.precedes(&self.data[index], &value),
            "decrease must not move an element toward the bottom"
        );
        self.data[index] = value;
        let index = self.sift_up(index);
        debug_assert!(self.is_ordered_at(index));
        index
    }

    /// Adds copies of every element of `other`, rebuilding in O(n).
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.data.extend_from_slice(&other.data);
        self.make_heap();
    }

    /// Moves every element of `other` into `self`, rebuilding in O(n).
    ///
    /// Keeps whichever backing vector has the larger capacity.
    pub fn append(&mut self, mut other: Self) {
        if self.data.capacity() < other.data.capacity() {
            std::mem::swap(&mut self.data, &mut other.data);
        }
        self.data.append(&mut other.data);
        self.make_heap();
    }

    fn make_heap(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.is_heap());
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.order.precedes(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                return index;
            }

            let right = left + 1;
            let child = if right < len && self.order.precedes(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if !self.order.precedes(&self.data[child], &self.data[index]) {
                return index;
            }
            self.data.swap(index, child);
            index = child;
        }
    }

    /// Heap order between `index` and its parent and children.
    fn is_ordered_at(&self, index: usize) -> bool {
        let data = &self.data;
        let below_parent = index == 0 || !self.order.precedes(&data[index], &data[(index - 1) / 2]);
        let above_children = [2 * index + 1, 2 * index + 2]
            .into_iter()
            .filter(|&child| child < data.len())
            .all(|child| !self.order.precedes(&data[child], &data[index]));
        below_parent && above_children
    }

    fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !self.order.precedes(&self.data[i], &self.data[(i - 1) / 2]))
    }
}

impl<T, C> FromIterator<T> for BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), C::default())
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
        self.make_heap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn drain<T, C: Comparator<T>>(mut heap: BinaryHeap<T, C>) -> Vec<T> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(value) = heap.pop() {
            out.push(value);
        }
        out
    }

    #[test]
    fn push_keeps_minimum_on_top() {
        let mut heap = MinHeap::new();
        heap.push(2);
        assert_eq!(heap.top(), Some(&2));
        heap.push(0);
        assert_eq!(heap.top(), Some(&0));
        heap.push(4);
        assert_eq!(heap.top(), Some(&0));
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.top(), Some(&2));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn max_heap_reverses_order() {
        let heap: MaxHeap<i32> = [3, 9, 1, 7].into_iter().collect();
        assert_eq!(drain(heap), vec![9, 7, 3, 1]);
    }

    #[test]
    fn closure_order() {
        let mut heap = BinaryHeap::with_comparator(FnOrder(|a: &(u32, char), b: &(u32, char)| a.0 > b.0));
        heap.push((1, 'a'));
        heap.push((5, 'b'));
        heap.push((3, 'c'));
        assert_eq!(heap.top(), Some(&(5, 'b')));
    }

    #[test]
    fn exchange_top_returns_previous_top() {
        let mut heap: MinHeap<i32> = [5, 1, 3].into_iter().collect();
        assert_eq!(heap.exchange_top(4), Some(1));
        assert_eq!(heap.top(), Some(&3));
        assert_eq!(drain(heap), vec![3, 4, 5]);

        let mut empty = MinHeap::new();
        assert_eq!(empty.exchange_top(7), None);
        assert_eq!(empty.top(), Some(&7));
    }

    #[test]
    fn update_moves_element_both_ways() {
        let mut heap: MinHeap<i32> = [0, 2, 4, 6, 8].into_iter().collect();
        let index = heap.iter().position(|&v| v == 2).unwrap();
        let index = heap.update(index, -1);
        assert_eq!(index, 0);
        assert_eq!(heap.top(), Some(&-1));

        let index = heap.update(0, 10);
        assert_eq!(heap.get(index), Some(&10));
        assert_eq!(drain(heap), vec![0, 4, 6, 8, 10]);
    }

    #[test]
    fn increase_and_decrease() {
        let mut heap: MinHeap<i32> = [1, 3, 5, 7].into_iter().collect();
        let index = heap.iter().position(|&v| v == 7).unwrap();
        let index = heap.decrease(index, 0);
        assert_eq!(index, 0);

        let index = heap.increase(0, 6);
        assert_eq!(heap.get(index), Some(&6));
        assert_eq!(drain(heap), vec![1, 3, 5, 6]);
    }

    #[test]
    fn erase_any_position() {
        let mut heap: MinHeap<i32> = (0..10).collect();
        let index = heap.iter().position(|&v| v == 4).unwrap();
        assert_eq!(heap.erase(index), 4);
        let last = heap.len() - 1;
        let value = *heap.get(last).unwrap();
        assert_eq!(heap.erase(last), value);

        let mut expected: Vec<i32> = (0..10).filter(|&v| v != 4 && v != value).collect();
        expected.sort_unstable();
        assert_eq!(drain(heap), expected);
    }

    #[test]
    fn merge_copies_and_append_moves() {
        let mut a: MinHeap<i32> = [4, 8, 2].into_iter().collect();
        let b: MinHeap<i32> = [7, 1, 5].into_iter().collect();

        a.merge(&b);
        assert_eq!(b.len(), 3);
        assert_eq!(a.top(), Some(&1));

        let mut small: MinHeap<i32> = MinHeap::with_capacity(1);
        small.push(3);
        let large: MinHeap<i32> = {
            let mut heap = MinHeap::with_capacity(64);
            heap.extend([9, 0]);
            heap
        };
        small.append(large);
        assert!(small.capacity() >= 64);
        assert_eq!(drain(small), vec![0, 3, 9]);
        assert_eq!(drain(a), vec![1, 2, 4, 5, 7, 8]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        Update(usize, i32),
        Erase(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-50i32..50).prop_map(Op::Push),
            Just(Op::Pop),
            (0usize..64, -50i32..50).prop_map(|(i, v)| Op::Update(i, v)),
            (0usize..64).prop_map(Op::Erase),
        ]
    }

    proptest! {
        // Every operation sequence must leave the same multiset as a sorted vector model.
        #[test]
        fn prop_heap_matches_sorted_model(ops in proptest::collection::vec(op(), 0..200)) {
            let mut heap = MinHeap::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        let index = heap.push(v);
                        prop_assert_eq!(heap.get(index), Some(&v));
                        model.push(v);
                    }
                    Op::Pop => {
                        model.sort_unstable();
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(heap.pop(), expected);
                    }
                    Op::Update(i, v) if !heap.is_empty() => {
                        let i = i % heap.len();
                        let old = *heap.get(i).unwrap();
                        let index = heap.update(i, v);
                        prop_assert_eq!(heap.get(index), Some(&v));
                        let pos = model.iter().position(|&x| x == old).unwrap();
                        model[pos] = v;
                    }
                    Op::Erase(i) if !heap.is_empty() => {
                        let i = i % heap.len();
                        let removed = heap.erase(i);
                        let pos = model.iter().position(|&x| x == removed).unwrap();
                        model.remove(pos);
                    }
                    _ => {}
                }
                prop_assert!(heap.is_heap());
                prop_assert_eq!(heap.len(), model.len());
            }

            model.sort_unstable();
            prop_assert_eq!(drain(heap), model);
        }
    }

    #[test]
    fn stress_heap_sort_matches_std_sort() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x4EA9_50E7);
        for _ in 0..50 {
            let len = rng.random_range(0..500);
            let values: Vec<u32> = (0..len).map(|_| rng.random_range(0..1_000)).collect();

            let heap: MaxHeap<u32> = values.iter().copied().collect();
            let mut expected = values;
            expected.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(drain(heap), expected);
        }
    }

    #[test]
    fn large_heap_stays_fast_in_debug_builds() {
        let n = 200_000u32;
        let mut rng = ChaCha8Rng::seed_from_u64(0x1A_26E);
        let mut heap = MinHeap::with_capacity(n as usize);
        for _ in 0..n {
            heap.push(rng.random_range(0..n));
        }
        let index = heap.decrease(heap.len() - 1, 0);
        assert_eq!(heap.get(index), Some(&0));

        let mut last = 0;
        let mut popped = 0;
        while let Some(value) = heap.pop() {
            assert!(value >= last);
            last = value;
            popped += 1;
        }
        assert_eq!(popped, n);
    }
}
