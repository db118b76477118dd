//! # Quantify - Existential and Universal Tests
//!
//! Both quantifiers are one layer above [`filter`]: `any` asks whether
//! the filtered sequence is non-empty, and `all` is `any` run through
//! De Morgan's law. Neither short-circuits — the underlying fold always
//! visits every element — which keeps the derivation uniform at the cost
//! of some wasted comparisons.

use crate::transform::filter;

/// True iff at least one element satisfies `pred`.
///
/// Empty input yields `false`: there is no witness.
///
/// # Example
///
/// ```rust
/// use seqfold_core::any;
///
/// assert!(!any(vec![1, 2, 3], |x| *x > 10));
/// assert!(any(vec![1, 2, 3], |x| *x == 2));
/// ```
pub fn any<A, P>(items: Vec<A>, pred: P) -> bool
where
    P: Fn(&A) -> bool,
{
    !filter(items, pred).is_empty()
}

/// True iff every element satisfies `pred`.
///
/// Defined as `!any(items, |x| !pred(x))`. Empty input yields `true`
/// (vacuous truth, falling straight out of `any` on empty being false).
///
/// # Example
///
/// ```rust
/// use seqfold_core::all;
///
/// assert!(all(vec![1, 2, 3], |x| *x <= 3));
/// assert!(all(Vec::<i32>::new(), |_| false));
/// ```
pub fn all<A, P>(items: Vec<A>, pred: P) -> bool
where
    P: Fn(&A) -> bool,
{
    !any(items, |x| !pred(x))
}

// ============================================================================
// Tests
// ============================================================================
