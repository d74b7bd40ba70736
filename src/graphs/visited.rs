use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Marker set recording which vertices a search has already enqueued.
///
/// [`Visited::visit`] returns true only on the first call for a value, which
/// is what keeps every vertex in a traversal frontier at most once.
pub trait Visited<V>: Default {
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;

    /// Marker sized for `capacity` dense values.
    fn with_capacity(capacity: usize) -> Self {
        let _ = capacity;
        Self::default()
    }
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }

    fn with_capacity(capacity: usize) -> Self {
        FxHashSet::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        let len = self.len();
        if value >= len {
            self.grow(value + 1 - len, false);
        }

        if self[value] {
            false
        } else {
            self.set(value, true);
            true
        }
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }

    fn with_capacity(capacity: usize) -> Self {
        BitVec::from_elem(capacity, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn visit_returns_true_only_first_time() {
        let mut hashed = FxHashSet::<usize>::default();
        let mut bits = <BitVec as Visited<usize>>::with_capacity(4);

        for visited in [&mut hashed as &mut dyn VisitedDyn, &mut bits] {
            assert!(!visited.seen(10));
            assert!(visited.mark(10));
            assert!(visited.seen(10));
            assert!(!visited.mark(10));
        }
    }

    // Object-safe shim so both markers run through one test body.
    trait VisitedDyn {
        fn mark(&mut self, value: usize) -> bool;
        fn seen(&self, value: usize) -> bool;
    }

    impl<T: Visited<usize>> VisitedDyn for T {
        fn mark(&mut self, value: usize) -> bool {
            self.visit(value)
        }

        fn seen(&self, value: usize) -> bool {
            self.is_visited(&value)
        }
    }

    #[test]
    fn bitvec_grows_on_out_of_range_visit() {
        let mut visited = BitVec::from_elem(4, false);
        assert!(visited.visit(10));
        assert!(visited.len() > 10);
        assert!(visited.is_visited(&10));
        assert!(!visited.is_visited(&9));
        assert!(!visited.is_visited(&1_000));
    }

    prop_compose! {
        fn small_usize_vec()
            (values in proptest::collection::vec(0usize..200, 0..200))
            -> Vec<usize>
        {
            values
        }
    }

    proptest! {
        // Both markers must agree with HashSet::insert on first-time visits.
        #[test]
        fn prop_markers_match_hashset(values in small_usize_vec()) {
            let mut hashed = FxHashSet::<usize>::default();
            let mut bits = BitVec::default();
            let mut reference = HashSet::new();

            for &v in &values {
                let was_new = reference.insert(v);
                prop_assert_eq!(hashed.visit(v), was_new, "hash visit({})", v);
                prop_assert_eq!(bits.visit(v), was_new, "bit visit({})", v);
                prop_assert!(bits.len() > v);
            }

            for v in 0..200 {
                prop_assert_eq!(hashed.is_visited(&v), reference.contains(&v));
                prop_assert_eq!(bits.is_visited(&v), reference.contains(&v));
            }
        }
    }

    #[test]
    fn random_stress_bitvec_visited() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5649_5349_5445_445F);

        for _case in 0..100 {
            let initial_len = rng.random_range(0..64);
            let mut visited = <BitVec as Visited<usize>>::with_capacity(initial_len);
            let mut reference = HashSet::new();

            for _ in 0..rng.random_range(0..500) {
                let v: usize = rng.random_range(0..256);
                assert_eq!(visited.visit(v), reference.insert(v), "visit({v})");
                assert!(visited.is_visited(&v));
            }

            for v in &reference {
                assert!(visited.is_visited(v));
            }
        }
    }
}
