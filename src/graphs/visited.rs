use std::hash::Hash;

use bit_vec::BitVec;
use rustc_hash::FxHashSet;

pub trait Visited<V>: Default {
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
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
}

impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        if value >= self.len() {
            self.grow(value + 1 - self.len(), false);
        }

        if self.get(value) == Some(true) {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn hashset_default_is_empty() {
        let visited = FxHashSet::<usize>::default();
        assert!(!visited.is_visited(&0));
        assert!(!visited.is_visited(&17));
    }

    #[test]
    fn hashset_visit_returns_true_only_first_time() {
        let mut visited = FxHashSet::<usize>::default();

        assert!(visited.visit(10));
        assert!(visited.is_visited(&10));
        assert!(!visited.visit(10));
        assert!(visited.is_visited(&10));
    }

    #[test]
    fn bitvec_visited_within_initial_capacity() {
        let mut visited = BitVec::from_elem(8, false);
        for index in 0..8 {
            assert!(!visited.is_visited(&index));
        }

        assert!(visited.visit(3));
        assert!(visited.is_visited(&3));
        assert!(!visited.visit(3), "second visit must report stale");

        for index in 0..8 {
            if index != 3 {
                assert!(!visited.is_visited(&index), "other bits unchanged");
            }
        }
    }

    #[test]
    fn bitvec_grows_on_out_of_range_visit() {
        let mut visited = BitVec::from_elem(4, false);
        assert_eq!(visited.len(), 4);

        let index = 11_usize;
        assert!(visited.visit(index));
        assert!(visited.len() > index);
        assert!(visited.is_visited(&index));
        assert!(!visited.visit(index));
    }

    #[test]
    fn bitvec_is_visited_is_false_out_of_range() {
        let visited = BitVec::default();
        assert!(!visited.is_visited(&0));
        assert!(!visited.is_visited(&1000));
    }

    // Random vector of small usize values to exercise both implementations.
    prop_compose! {
        fn small_usize_vec()
            (values in proptest::collection::vec(0usize..150, 0..150))
            -> Vec<usize>
        {
            values
        }
    }

    proptest! {
        // Both implementations must agree with HashSet::insert on
        // first-time visits and membership.
        #[test]
        fn prop_bitvec_and_hashset_match_reference(values in small_usize_vec()) {
            let mut dense = BitVec::default();
            let mut sparse = FxHashSet::<usize>::default();
            let mut reference = HashSet::new();

            for v in &values {
                let was_new = reference.insert(*v);
                prop_assert_eq!(dense.visit(*v), was_new, "BitVec visit({})", v);
                prop_assert_eq!(sparse.visit(*v), was_new, "FxHashSet visit({})", v);
                prop_assert!(dense.len() > *v, "BitVec must cover index {}", v);
            }

            for v in &reference {
                prop_assert!(dense.is_visited(v));
                prop_assert!(sparse.is_visited(v));
            }
        }
    }

    #[test]
    fn random_stress_bitvec_matches_hashset_reference() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5649_5349_5445_445F);

        for _case in 0..100 {
            let initial_len = rng.random_range(0..48);
            let mut visited = BitVec::from_elem(initial_len, false);
            let mut reference = HashSet::new();

            let steps = rng.random_range(0..400);
            for _ in 0..steps {
                let v: usize = rng.random_range(0..192);
                let got_first = visited.visit(v);
                let was_new = reference.insert(v);
                assert_eq!(got_first, was_new, "visit({v}) mismatch");
                assert_eq!(visited.is_visited(&v), reference.contains(&v));
            }

            for v in &reference {
                assert!(visited.is_visited(v));
            }
        }
    }
}
