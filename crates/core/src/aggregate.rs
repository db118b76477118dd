//! # Aggregate - Extremum Search and Counting
//!
//! Direct folds to a scalar. `max` and `min` seed the fold with the
//! first element and fold over the tail; `len` counts with an integer
//! accumulator. Empty input gives `None` for the extremum queries — a
//! typed absent value, never a panic.

use crate::fold::fold;

/// Largest element under `>`, or `None` on empty input.
///
/// The comparator is `if x > best { x } else { best }` with `x` the
/// newly visited element and `best` the running value, so ties keep the
/// earlier-seen element.
pub fn max<A: PartialOrd>(mut items: Vec<A>) -> Option<A> {
    if items.is_empty() {
        return None;
    }
    let first = items.remove(0);
    Some(fold(first, items, |x, best| if x > best { x } else { best }))
}

/// Smallest element under `<`, or `None` on empty input.
///
/// Symmetric to [`max`]; ties keep the earlier-seen element.
pub fn min<A: PartialOrd>(mut items: Vec<A>) -> Option<A> {
    if items.is_empty() {
        return None;
    }
    let first = items.remove(0);
    Some(fold(first, items, |x, best| if x < best { x } else { best }))
}

/// Number of elements, duplicates included.
pub fn len<A>(items: Vec<A>) -> usize {
    fold(0, items, |_, count| count + 1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_basic() {
        assert_eq!(max(vec![1, 2, 3]), Some(3));
        assert_eq!(max(vec![3, 1, 2]), Some(3));
        assert_eq!(max(vec![-5]), Some(-5));
    }

    #[test]
    fn test_min_basic() {
        assert_eq!(min(vec![1, 2, 3]), Some(1));
        assert_eq!(min(vec![2, 1, 3]), Some(1));
    }

    #[test]
    fn test_max_min_empty_is_none() {
        assert_eq!(max(Vec::<i32>::new()), None);
        assert_eq!(min(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_max_ties_keep_earlier_seen() {
        // Pairs compare on the first field only via PartialOrd on f64
        #[derive(Debug, Clone, PartialEq)]
        struct Keyed(f64, &'static str);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let items = vec![Keyed(1.0, "first"), Keyed(1.0, "second")];
        assert_eq!(max(items), Some(Keyed(1.0, "first")));

        let items = vec![Keyed(1.0, "first"), Keyed(1.0, "second")];
        assert_eq!(min(items), Some(Keyed(1.0, "first")));
    }

    #[test]
    fn test_len_counts_duplicates() {
        assert_eq!(len(vec![1, 2, 3, 4, 5]), 5);
        assert_eq!(len(vec![7, 7, 7]), 3);
        assert_eq!(len(Vec::<i32>::new()), 0);
    }
}
