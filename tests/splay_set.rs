use std::collections::BTreeSet;

use core::ops::Bound;
use proptest::prelude::*;
use splay_tree::{BuildError, ReverseOrder, SplaySet};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

fn value_strategy() -> impl Strategy<Value = i32> + Clone {
    -5_000i32..5_000i32
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i32),
    Replace(i32),
    Remove(i32),
    Take(i32),
    Contains(i32),
    Get(i32),
    First,
    Last,
    PopFirst,
    PopLast,
    Predecessor(i32),
    Successor(i32),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        1 => value_strategy().prop_map(SetOp::Replace),
        2 => value_strategy().prop_map(SetOp::Remove),
        1 => value_strategy().prop_map(SetOp::Take),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::Get),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
        1 => value_strategy().prop_map(SetOp::Predecessor),
        1 => value_strategy().prop_map(SetOp::Successor),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both SplaySet and BTreeSet
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: SplaySet<i32> = SplaySet::new();
        let mut model: BTreeSet<i32> = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(set.insert(v), model.insert(v), "insert({})", v);
                    prop_assert_eq!(set.root(), Some(&v), "insert({}) root", v);
                }
                SetOp::Replace(v) => {
                    prop_assert_eq!(set.replace(v), model.replace(v), "replace({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), model.remove(&v), "remove({})", v);
                }
                SetOp::Take(v) => {
                    prop_assert_eq!(set.take(&v), model.take(&v), "take({})", v);
                }
                SetOp::Contains(v) => {
                    let found = set.contains(&v);
                    prop_assert_eq!(found, model.contains(&v), "contains({})", v);
                    if found {
                        prop_assert_eq!(set.root(), Some(&v), "contains({}) root", v);
                    }
                }
                SetOp::Get(v) => {
                    prop_assert_eq!(set.get(&v), model.get(&v), "get({})", v);
                }
                SetOp::First => {
                    prop_assert_eq!(set.first(), model.first(), "first()");
                }
                SetOp::Last => {
                    prop_assert_eq!(set.last(), model.last(), "last()");
                }
                SetOp::PopFirst => {
                    prop_assert_eq!(set.pop_first(), model.pop_first(), "pop_first()");
                }
                SetOp::PopLast => {
                    prop_assert_eq!(set.pop_last(), model.pop_last(), "pop_last()");
                }
                SetOp::Predecessor(v) => {
                    prop_assert_eq!(set.predecessor(&v), model.range(..v).next_back(), "predecessor({})", v);
                }
                SetOp::Successor(v) => {
                    let expected = model.range((Bound::Excluded(v), Bound::Unbounded)).next();
                    prop_assert_eq!(set.successor(&v), expected, "successor({})", v);
                }
            }
            prop_assert_eq!(set.len(), model.len(), "len after {:?}", op);
        }

        prop_assert!(set.iter().eq(model.iter()));
    }

    /// Tests iteration and ranges match BTreeSet.
    #[test]
    fn iter_and_range_match_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        lo in value_strategy(),
        hi in value_strategy(),
    ) {
        let set: SplaySet<i32> = values.iter().copied().collect();
        let model: BTreeSet<i32> = values.iter().copied().collect();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        prop_assert!(set.iter().eq(model.iter()));
        prop_assert!(set.iter().rev().eq(model.iter().rev()));
        prop_assert_eq!(set.iter().len(), model.len());
        prop_assert!(set.range(lo..hi).eq(model.range(lo..hi)), "range({}..{}) mismatch", lo, hi);
        prop_assert!(set.range(lo..=hi).rev().eq(model.range(lo..=hi).rev()), "range({}..={}).rev() mismatch", lo, hi);
        prop_assert!(set.range(..hi).eq(model.range(..hi)), "range(..{}) mismatch", hi);
    }

    /// Tests retain and append match BTreeSet.
    #[test]
    fn retain_and_append_match_btreeset(
        a in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
        b in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
    ) {
        let mut set_a: SplaySet<i32> = a.iter().copied().collect();
        let mut set_b: SplaySet<i32> = b.iter().copied().collect();
        let mut model_a: BTreeSet<i32> = a.iter().copied().collect();
        let mut model_b: BTreeSet<i32> = b.iter().copied().collect();

        set_a.retain(|v| v % 2 == 0);
        model_a.retain(|v| v % 2 == 0);
        prop_assert!(set_a.iter().eq(model_a.iter()));

        set_a.append(&mut set_b);
        model_a.append(&mut model_b);
        prop_assert!(set_b.is_empty());
        prop_assert!(set_a.iter().eq(model_a.iter()));
        prop_assert!(set_a.into_iter().eq(model_a));
    }

    /// Tests that a sorted build is perfectly balanced and keeps every element.
    #[test]
    fn from_sorted_iter_is_balanced(values in proptest::collection::btree_set(value_strategy(), 0..TEST_SIZE)) {
        let set = SplaySet::from_sorted_iter(values.iter().copied());
        let expected_height = (usize::BITS - values.len().leading_zeros()) as usize;

        prop_assert_eq!(set.height(), expected_height);
        prop_assert!(set.iter().eq(values.iter()));
    }

    /// Tests that equal sets hash equally regardless of shape.
    #[test]
    fn hash_consistent_for_equal_sets(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let set1: SplaySet<i32> = values.iter().copied().collect();
        let mut set2: SplaySet<i32> = values.iter().rev().copied().collect();
        let _ = set2.last();

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        set1.hash(&mut h1);
        set2.hash(&mut h2);

        prop_assert_eq!(&set1, &set2);
        prop_assert_eq!(h1.finish(), h2.finish(), "equal sets should have equal hashes");
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn replace_swaps_the_stored_element() {
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct Tagged(u32, &'static str);
    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut set = SplaySet::new();
    assert!(set.insert(Tagged(1, "old")));
    assert!(!set.insert(Tagged(1, "ignored")));
    assert_eq!(set.get(&Tagged(1, "")).map(|t| t.1), Some("old"));

    let replaced = set.replace(Tagged(1, "new"));
    assert_eq!(replaced.map(|t| t.1), Some("old"));
    assert_eq!(set.get(&Tagged(1, "")).map(|t| t.1), Some("new"));
    assert_eq!(set.len(), 1);
}

#[test]
fn reverse_order_set() {
    let mut set = SplaySet::with_comparator(ReverseOrder);
    set.extend([2, 9, 4]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [9, 4, 2]);
    assert_eq!(set.first(), Some(&9));
    assert_eq!(set.successor(&9), Some(&4));
    assert_eq!(format!("{set:?}"), "{9, 4, 2}");
}

#[test]
fn presized_set_with_comparator() {
    let mut set = SplaySet::with_capacity_and_comparator(16, ReverseOrder);
    assert!(set.capacity() >= 16);
    set.extend(0..16);
    assert!(set.capacity() >= 16);
    assert_eq!(set.len(), 16);
    assert_eq!(set.first(), Some(&15));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), (0..16).rev().collect::<Vec<_>>());
}

#[test]
fn sorted_build_errors() {
    assert_eq!(SplaySet::try_from_sorted_iter([1, 2, 2]).err(), Some(BuildError::Duplicate { index: 2 }));
    assert_eq!(SplaySet::try_from_sorted_iter([2, 1]).err(), Some(BuildError::OutOfOrder { index: 1 }));
    assert_eq!(BuildError::Duplicate { index: 2 }.index(), 2);
    assert_eq!(
        BuildError::OutOfOrder { index: 7 }.to_string(),
        "sorted input is out of order at index 7"
    );

    let descending = SplaySet::try_from_sorted_iter_with_comparator([3, 2, 1], ReverseOrder);
    assert_eq!(descending.map(|s| s.len()), Ok(3));
}

/// Tests that range with start > end panics just like BTreeSet.
#[test]
#[should_panic(expected = "range start is greater than range end in SplaySet")]
fn range_start_greater_than_end_panics() {
    let set: SplaySet<i32> = [1, 2, 3].into_iter().collect();
    let _: Vec<_> = set.range((Bound::Included(5), Bound::Included(3))).collect();
}

#[test]
#[should_panic(expected = "`SplaySet::from_sorted_iter()` - sorted input repeats a key at index 1")]
fn from_sorted_iter_duplicate_panics() {
    let _ = SplaySet::from_sorted_iter([4, 4]);
}
