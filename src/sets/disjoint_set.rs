use std::marker::PhantomData;

/// Root lookup strategy for [`DisjointSet`].
///
/// A strategy walks `parent` from `element` to its self-pointing root and may
/// rewrite parent links on the way, as long as every element keeps the same
/// root.
pub trait FindStrategy {
    fn find(parent: &mut [usize], element: usize) -> usize;
}

/// Plain root walk without any path rewriting.
///
/// Worst case is linear per lookup; useful as a correctness baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Naive;

/// Two-pass walk that points every element on the path directly at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathCompression;

/// Single-pass walk that points every other element at its grandparent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathHalving;

/// Single-pass walk that points every element on the path at its grandparent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathSplitting;

impl FindStrategy for Naive {
    #[inline]
    fn find(parent: &mut [usize], mut element: usize) -> usize {
        while parent[element] != element {
            element = parent[element];
        }
        element
    }
}

impl FindStrategy for PathCompression {
    #[inline]
    fn find(parent: &mut [usize], element: usize) -> usize {
        let mut root = element;
        while parent[root] != root {
            root = parent[root];
        }

        let mut current = element;
        while parent[current] != root {
            let next = parent[current];
            parent[current] = root;
            current = next;
        }
        root
    }
}

impl FindStrategy for PathHalving {
    #[inline]
    fn find(parent: &mut [usize], mut element: usize) -> usize {
        while parent[element] != element {
            parent[element] = parent[parent[element]];
            element = parent[element];
        }
        element
    }
}

impl FindStrategy for PathSplitting {
    #[inline]
    fn find(parent: &mut [usize], mut element: usize) -> usize {
        while parent[element] != element {
            let next = parent[element];
            parent[element] = parent[next];
            element = next;
        }
        element
    }
}

/// Partition of `0..n` into disjoint sets with union by size.
///
/// `cardinality` is only meaningful at root positions. The number of sets is
/// maintained incrementally by [`DisjointSet::unite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet<S: FindStrategy = PathSplitting> {
    parent: Vec<usize>,
    cardinality: Vec<usize>,
    sets: usize,
    strategy: PhantomData<S>,
}

impl<S: FindStrategy> Default for DisjointSet<S> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S: FindStrategy> DisjointSet<S> {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            cardinality: vec![1; n],
            sets: n,
            strategy: PhantomData,
        }
    }

    /// Discards every union and restores `n` singleton sets.
    pub fn reset(&mut self, n: usize) {
        self.parent.clear();
        self.parent.extend(0..n);
        self.cardinality.clear();
        self.cardinality.resize(n, 1);
        self.sets = n;
    }

    /// Number of elements in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Panics if `element` is out of range.
    #[inline]
    pub fn find(&mut self, element: usize) -> usize {
        S::find(&mut self.parent, element)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` when both already belong to the same set.
    pub fn unite(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }

        if self.cardinality[a] < self.cardinality[b] {
            std::mem::swap(&mut a, &mut b);
        }

        self.parent[b] = a;
        self.cardinality[a] += self.cardinality[b];
        self.sets -= 1;
        true
    }

    /// Size of the set containing `element`.
    #[inline]
    pub fn cardinality(&mut self, element: usize) -> usize {
        let root = self.find(element);
        self.cardinality[root]
    }

    #[inline]
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn scenario<S: FindStrategy>() {
        let mut set = DisjointSet::<S>::new(10);
        assert_eq!(set.sets(), 10);

        assert!(set.unite(1, 2));
        assert!(set.unite(2, 3));
        assert!(set.unite(7, 6));
        assert!(set.unite(5, 6));
        assert!(!set.unite(1, 3));

        assert_eq!(set.sets(), 6);
        assert_eq!(set.cardinality(1), 3);
        assert_eq!(set.cardinality(5), 3);
        assert_eq!(set.cardinality(0), 1);
        assert!(set.same_set(3, 1));
        assert!(!set.same_set(3, 5));

        assert!(set.unite(7, 2));
        assert!(set.unite(3, 9));
        assert_eq!(set.sets(), 4);
        assert_eq!(set.cardinality(9), 7);
        assert_eq!(set.cardinality(6), 7);
        assert_eq!(set.cardinality(8), 1);
    }

    #[test]
    fn naive_scenario() {
        scenario::<Naive>();
    }

    #[test]
    fn path_compression_scenario() {
        scenario::<PathCompression>();
    }

    #[test]
    fn path_halving_scenario() {
        scenario::<PathHalving>();
    }

    #[test]
    fn path_splitting_scenario() {
        scenario::<PathSplitting>();
    }

    #[test]
    fn reset_restores_singletons() {
        let mut set: DisjointSet = DisjointSet::new(4);
        set.unite(0, 1);
        set.unite(2, 3);
        assert_eq!(set.sets(), 2);

        set.reset(6);
        assert_eq!(set.len(), 6);
        assert_eq!(set.sets(), 6);
        for i in 0..6 {
            assert_eq!(set.find(i), i);
            assert_eq!(set.cardinality(i), 1);
        }
    }

    #[test]
    fn empty_set() {
        let set: DisjointSet = DisjointSet::default();
        assert!(set.is_empty());
        assert_eq!(set.sets(), 0);
    }

    #[test]
    fn compression_flattens_chain() {
        let mut set = DisjointSet::<PathCompression>::new(5);
        // Build a chain by hand through equal-size unions.
        set.unite(0, 1);
        set.unite(2, 3);
        set.unite(0, 2);
        set.unite(4, 0);
        let root = set.find(3);
        assert_eq!(set.parent[3], root);
    }

    fn check_against_labels<S: FindStrategy>(n: usize, pairs: &[(usize, usize)]) {
        let mut set = DisjointSet::<S>::new(n);
        let mut labels: Vec<usize> = (0..n).collect();
        let mut merged = 0;

        for &(a, b) in pairs {
            let (la, lb) = (labels[a], labels[b]);
            let expected = la != lb;
            if expected {
                for label in labels.iter_mut() {
                    if *label == lb {
                        *label = la;
                    }
                }
                merged += 1;
            }
            assert_eq!(set.unite(a, b), expected, "unite({a}, {b})");
        }

        assert_eq!(set.sets(), n - merged);
        for x in 0..n {
            let size = labels.iter().filter(|&&l| l == labels[x]).count();
            assert_eq!(set.cardinality(x), size, "cardinality({x})");
            for y in 0..n {
                assert_eq!(set.same_set(x, y), labels[x] == labels[y]);
            }
        }
    }

    prop_compose! {
        fn universe_and_pairs()
            (n in 1usize..40)
            (pairs in proptest::collection::vec((0..n, 0..n), 0..80), n in Just(n))
            -> (usize, Vec<(usize, usize)>)
        {
            (n, pairs)
        }
    }

    proptest! {
        #[test]
        fn prop_strategies_agree_with_labelling((n, pairs) in universe_and_pairs()) {
            check_against_labels::<Naive>(n, &pairs);
            check_against_labels::<PathCompression>(n, &pairs);
            check_against_labels::<PathHalving>(n, &pairs);
            check_against_labels::<PathSplitting>(n, &pairs);
        }
    }

    #[test]
    fn stress_random_unions_keep_cardinality_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xD15_5E7);
        let n = 2_000;
        let mut set: DisjointSet = DisjointSet::new(n);
        let mut successful = 0;

        for _ in 0..5_000 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if set.unite(a, b) {
                successful += 1;
            }
        }

        assert_eq!(set.sets(), n - successful);

        let mut total = 0;
        for x in 0..n {
            if set.find(x) == x {
                total += set.cardinality(x);
            }
        }
        assert_eq!(total, n);
    }
}
