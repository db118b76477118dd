//! # Transform - Rebuilding Sequences in Order
//!
//! Map, filter, and split_by all share one shape: a single [`fold`] whose
//! accumulator starts empty and whose combining step uses [`append`] to
//! keep output order equal to input order. The only difference between
//! them is what the step does with each element.

use crate::fold::{append, fold};

/// Apply `f` to every element, preserving order.
///
/// Output length equals input length and `output[i] = f(input[i])`.
/// `A` and `B` are independent: the element and result types need not
/// coincide.
///
/// # Example
///
/// ```rust
/// use seqfold_core::map;
///
/// assert_eq!(map(vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
/// ```
pub fn map<A, B, F>(items: Vec<A>, mut f: F) -> Vec<B>
where
    F: FnMut(A) -> B,
{
    fold(Vec::new(), items, |item, accum| append(f(item), accum))
}

/// Keep exactly the elements for which `pred` holds.
///
/// The result is an order-preserving subsequence of `items`. The
/// predicate takes the element by reference since kept elements survive
/// into the output.
///
/// # Example
///
/// ```rust
/// use seqfold_core::filter;
///
/// assert_eq!(filter(vec![1, 2, 3], |x| *x < 3), vec![1, 2]);
/// ```
pub fn filter<A, P>(items: Vec<A>, pred: P) -> Vec<A>
where
    P: Fn(&A) -> bool,
{
    fold(Vec::new(), items, |item, accum| {
        if pred(&item) {
            append(item, accum)
        } else {
            accum
        }
    })
}

/// Split a sequence into `(satisfying, rest)` by a predicate.
///
/// One fold over a pair accumulator: each element is appended to the
/// left half when `pred` holds and to the right half otherwise. Both
/// halves preserve the relative order of `items`, and every element
/// lands in exactly one half.
///
/// # Example
///
/// ```rust
/// use seqfold_core::split_by;
///
/// let (evens, odds) = split_by(vec![1, 2, 3, 4], |x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// assert_eq!(odds, vec![1, 3]);
/// ```
pub fn split_by<A, P>(items: Vec<A>, pred: P) -> (Vec<A>, Vec<A>)
where
    P: Fn(&A) -> bool,
{
    fold((Vec::new(), Vec::new()), items, |item, (left, right)| {
        if pred(&item) {
            (append(item, left), right)
        } else {
            (left, append(item, right))
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
