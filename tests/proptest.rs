// SPDX-License-Identifier: MPL-2.0

use interval_set::{ClosedInterval, IntervalSet};
use proptest::prelude::*;

fn set_strategy() -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec((0u32..1_000, 0u32..50), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(inf, width)| ClosedInterval::new(inf, inf + width).unwrap())
            .collect()
    })
}

fn element_strategy() -> impl Strategy<Value = u32> {
    0u32..1_100
}

proptest! {

    // Normalization -----------------------------------

    #[test]
    fn construction_is_order_insensitive(a in set_strategy(), b in set_strategy()) {
        let forward: IntervalSet = a.runs().chain(b.runs()).copied().collect();
        let backward: IntervalSet = b.runs().chain(a.runs()).copied().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn rebuilding_from_runs_is_identity(s in set_strategy()) {
        let rebuilt: IntervalSet = s.runs().copied().collect();
        prop_assert_eq!(rebuilt, s);
    }

    // Algebra -----------------------------------------

    #[test]
    fn union_is_commutative(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn intersection_is_commutative(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn union_is_associative(a in set_strategy(), b in set_strategy(), c in set_strategy()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn intersection_is_associative(a in set_strategy(), b in set_strategy(), c in set_strategy()) {
        prop_assert_eq!(a.intersection(&b).intersection(&c), a.intersection(&b.intersection(&c)));
    }

    #[test]
    fn difference_of_intersection(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.difference(&b), a.difference(&a.intersection(&b)));
    }

    #[test]
    fn symmetric_difference_is_self_inverse(a in set_strategy()) {
        prop_assert!(a.symmetric_difference(&a).is_empty());
    }

    #[test]
    fn symmetric_difference_via_union_and_intersection(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(
            a.symmetric_difference(&b),
            a.union(&b).difference(&a.intersection(&b))
        );
    }

    #[test]
    fn cardinality_is_additive(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(
            a.union(&b).cardinality() + a.intersection(&b).cardinality(),
            a.cardinality() + b.cardinality()
        );
    }

    // Relations ---------------------------------------

    #[test]
    fn disjoint_iff_empty_intersection(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.is_disjoint(&b), a.intersection(&b).is_empty());
    }

    #[test]
    fn subset_iff_intersection_is_identity(a in set_strategy(), b in set_strategy()) {
        prop_assert_eq!(a.is_subset(&b), a.intersection(&b) == a);
    }

    #[test]
    fn both_operands_are_subsets_of_the_union(a in set_strategy(), b in set_strategy()) {
        let union = a.union(&b);
        prop_assert!(a.is_subset(&union));
        prop_assert!(b.is_subset(&union));
        prop_assert!(union.is_superset(&a));
    }

    // Membership --------------------------------------

    #[test]
    fn union_contains_either(a in set_strategy(), b in set_strategy(), x in element_strategy()) {
        prop_assert_eq!(a.union(&b).contains(x), a.contains(x) || b.contains(x));
    }

    #[test]
    fn intersection_contains_both(a in set_strategy(), b in set_strategy(), x in element_strategy()) {
        prop_assert_eq!(a.intersection(&b).contains(x), a.contains(x) && b.contains(x));
    }

    #[test]
    fn difference_contains_left_only(a in set_strategy(), b in set_strategy(), x in element_strategy()) {
        prop_assert_eq!(a.difference(&b).contains(x), a.contains(x) && !b.contains(x));
    }

    #[test]
    fn contains_matches_iteration(s in set_strategy(), x in element_strategy()) {
        prop_assert_eq!(s.contains(x), s.iter().any(|e| e == x));
    }

    // Iteration and indexing --------------------------

    #[test]
    fn indexing_is_consistent_with_iteration(s in set_strategy()) {
        let elements: Vec<u32> = s.iter().collect();
        prop_assert_eq!(elements.len() as u64, s.cardinality());
        for (position, element) in elements.iter().enumerate() {
            prop_assert_eq!(s.index(position as i64), Ok(*element));
            let negative = position as i64 - elements.len() as i64;
            prop_assert_eq!(s.index(negative), Ok(*element));
        }
        prop_assert!(s.index(elements.len() as i64).is_err());
        prop_assert!(s.index(-(elements.len() as i64) - 1).is_err());
        if !s.is_empty() {
            prop_assert_eq!(s.index(0), s.min());
            prop_assert_eq!(s.index(-1), s.max());
        }
    }

    #[test]
    fn reverse_iteration_mirrors_forward(s in set_strategy()) {
        let mut forward: Vec<u32> = s.iter().collect();
        forward.reverse();
        let backward: Vec<u32> = s.iter().rev().collect();
        prop_assert_eq!(forward, backward);
    }

    // Text format -------------------------------------

    #[test]
    fn canonical_string_round_trips(s in set_strategy()) {
        prop_assert_eq!(s.to_string().parse::<IntervalSet>(), Ok(s));
    }

    #[test]
    fn custom_separators_round_trip(s in set_strategy()) {
        let text = s.to_string_with(":", ",");
        prop_assert_eq!(IntervalSet::from_str_with(&text, ":", ","), Ok(s));
    }

    // Serde -------------------------------------------

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips(s in set_strategy()) {
        let text = ron::ser::to_string(&s).unwrap();
        let back: IntervalSet = ron::de::from_str(&text).unwrap();
        prop_assert_eq!(back, s);
    }
}
