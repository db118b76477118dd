//! # Sort - Insertion Sort from Fold + Partition
//!
//! The capstone of the derivation: sorting with no loop of its own.
//! One fold over the input; each step partitions the sorted-so-far
//! accumulator around the incoming element and reassembles it:
//!
//! ```text
//!    accum ──split_by(a < x)──▶ (less, more)
//!                                  │
//!    new accum = less ++ [x] ++ more
//! ```
//!
//! ## Placement of Equal Keys
//!
//! `a < x` is false when `a == x`, so elements equal to `x` that are
//! already in the accumulator land in `more`, and the incoming `x` is
//! inserted *before* them. The placement is well-defined but not
//! input-order-stable: equal keys come out in reverse insertion order.
//!
//! Cost is O(n²) comparisons and moves from the append-based
//! construction; accepted, not a defect.

use tracing::trace;

use crate::fold::{append, concat, fold};
use crate::transform::split_by;

/// Sort into non-decreasing order under `<`.
///
/// Returns a permutation of `items`; equal keys follow the placement
/// rule described at the module level.
///
/// # Example
///
/// ```rust
/// use seqfold_core::insertion_sort;
///
/// assert_eq!(
///     insertion_sort(vec![5, -10, 0, 15, 10, -15, -5]),
///     vec![-15, -10, -5, 0, 5, 10, 15],
/// );
/// ```
pub fn insertion_sort<A: PartialOrd>(items: Vec<A>) -> Vec<A> {
    trace!(items = items.len(), "insertion_sort");
    fold(Vec::new(), items, |x, sorted| {
        let (less, more) = split_by(sorted, |a| *a < x);
        concat(append(x, less), more)
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mixed_signs() {
        assert_eq!(
            insertion_sort(vec![5, -10, 0, 15, 10, -15, -5]),
            vec![-15, -10, -5, 0, 5, 10, 15],
        );
    }

    #[test]
    fn test_sort_empty_and_singleton() {
        assert_eq!(insertion_sort(Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(insertion_sort(vec![42]), vec![42]);
    }

    #[test]
    fn test_sort_already_sorted() {
        assert_eq!(insertion_sort(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_reverse_input() {
        assert_eq!(insertion_sort(vec![3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_keeps_duplicates() {
        assert_eq!(insertion_sort(vec![2, 1, 2, 1]), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_sort_idempotent() {
        let once = insertion_sort(vec![9, 4, 6, 4, 1]);
        let twice = insertion_sort(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_keys_reverse_insertion_order() {
        // Keys compare equal; the tag records insertion order
        #[derive(Debug, Clone, PartialEq)]
        struct Keyed(i32, &'static str);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let sorted = insertion_sort(vec![Keyed(1, "a"), Keyed(1, "b"), Keyed(1, "c")]);
        let tags: Vec<_> = sorted.into_iter().map(|k| k.1).collect();
        // Each new equal key is inserted before the ones already placed
        assert_eq!(tags, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_floats() {
        assert_eq!(
            insertion_sort(vec![2.5, -1.0, 0.25]),
            vec![-1.0, 0.25, 2.5],
        );
    }
}
