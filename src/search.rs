//! Linear and binary search over slices.
//!
//! Both functions return `Option<usize>`: `Some(index)` for a hit, `None` when the
//! target is absent. Callers that need the classic `-1` sentinel can render `None`
//! that way (see [`Outcome`](crate::dispatch::Outcome)).

use std::cmp::Ordering;

/// Returns the index of the first element equal to `target`, scanning left to right.
///
/// Runs in O(n) time and O(1) space. An empty slice always yields `None`.
///
/// # Examples
///
/// ```
/// use algovault::search::linear_search;
///
/// assert_eq!(linear_search(&[1, 2, 3, 4], &3), Some(2));
/// assert_eq!(linear_search(&[1, 2, 3, 4], &7), None);
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Finds `target` in an ascending slice by interval halving.
///
/// Keeps an inclusive interval `[left, right]` and probes `mid = (left + right) / 2`
/// (floor) until the element matches or the interval is empty. Runs in O(log n)
/// time and O(1) space.
///
/// # Preconditions
///
/// `items` must be sorted ascending. On unsorted input the result is unspecified
/// (it may be `None` even though the target is present) but the function never
/// panics. When the slice holds duplicates of `target`, the index returned is
/// whichever probe hits first; it is not guaranteed to be the first or last
/// occurrence.
///
/// # Examples
///
/// ```
/// use algovault::search::binary_search;
///
/// assert_eq!(binary_search(&[1, 2, 5, 9], &9), Some(3));
/// assert_eq!(binary_search(&[1, 2, 5, 9], &4), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    if items.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = items.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                // Interval [left, mid - 1] is empty when mid is 0.
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{int, ints};
    use proptest::prelude::*;

    #[test]
    fn linear_search_finds_target() {
        assert_eq!(linear_search(&ints(&[1, 2, 3, 4]), &int(3)), Some(2));
    }

    #[test]
    fn linear_search_returns_first_occurrence() {
        assert_eq!(linear_search(&ints(&[5, 1, 5, 1]), &int(1)), Some(1));
    }

    #[test]
    fn linear_search_missing_and_empty() {
        assert_eq!(linear_search(&ints(&[1, 2, 3]), &int(9)), None);
        assert_eq!(linear_search::<i64>(&[], &1), None);
    }

    #[test]
    fn binary_search_finds_last_element() {
        assert_eq!(binary_search(&ints(&[1, 2, 5, 9]), &int(9)), Some(3));
    }

    #[test]
    fn binary_search_finds_first_element() {
        assert_eq!(binary_search(&ints(&[1, 2, 5, 9]), &int(1)), Some(0));
    }

    #[test]
    fn binary_search_below_minimum_does_not_underflow() {
        assert_eq!(binary_search(&ints(&[1, 2, 5, 9]), &int(-4)), None);
        assert_eq!(binary_search(&ints(&[3]), &int(0)), None);
    }

    #[test]
    fn binary_search_above_maximum() {
        assert_eq!(binary_search(&ints(&[1, 2, 5, 9]), &int(10)), None);
    }

    #[test]
    fn binary_search_empty() {
        assert_eq!(binary_search::<i64>(&[], &0), None);
    }

    #[test]
    fn binary_search_duplicates_hit_some_copy() {
        let items = ints(&[2, 2, 2, 2, 2]);
        let index = binary_search(&items, &int(2)).expect("target is present");
        assert_eq!(items[index], int(2));
    }

    #[test]
    fn binary_search_unsorted_input_does_not_panic() {
        // Result is unspecified; only the absence of a panic is checked.
        let _ = binary_search(&ints(&[9, 5, 2, 1]), &int(1));
    }

    proptest! {
        #[test]
        fn binary_search_hits_present_target(
            values in prop::collection::vec(-1000i64..1000, 1..64),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut items = values;
            items.sort_unstable();
            let target = items[pick.index(items.len())];
            let index = binary_search(&items, &target);
            prop_assert!(index.is_some());
            prop_assert_eq!(items[index.unwrap_or_default()], target);
        }

        #[test]
        fn binary_search_misses_absent_target(
            values in prop::collection::vec(-1000i64..1000, 0..64),
            target in -1000i64..1000,
        ) {
            let mut items = values;
            items.sort_unstable();
            prop_assume!(!items.contains(&target));
            prop_assert_eq!(binary_search(&items, &target), None);
        }

        #[test]
        fn linear_search_returns_smallest_index(
            items in prop::collection::vec(-20i64..20, 0..64),
            target in -20i64..20,
        ) {
            let expected = items.iter().position(|item| *item == target);
            prop_assert_eq!(linear_search(&items, &target), expected);
        }
    }
}
