//! # Fold - The Reduction Primitive
//!
//! Everything in this crate is a left fold in disguise. This module holds
//! the fold itself, plus the tail-append helper that every
//! "accumulate results in input order" combinator is built from.
//!
//! ## The Argument-Order Contract
//!
//! The combining function receives the *current element first* and the
//! *accumulator second*: `combine(element, accum)`. Every derived
//! operation in this crate relies on that order; flipping it silently
//! breaks anything order-sensitive (string concatenation, comparators
//! that favor one side on ties).
//!
//! ## Stack Safety
//!
//! The textbook definition is self-recursive:
//!
//! ```text
//! fold(accum, [], f)          = accum
//! fold(accum, [fst, rst...], f) = fold(f(fst, accum), rst, f)
//! ```
//!
//! Recursion depth would equal input length, so the primitive is written
//! as an explicit accumulation loop instead. The semantics are identical;
//! only the stack usage changes. Derived operations still treat fold as
//! the one place iteration happens.

use tracing::trace;

/// Reduce a sequence to a single value, left to right.
///
/// Returns `accum` unchanged when `items` is empty; otherwise threads the
/// accumulator through `combine(element, accum)` for each element in
/// order, head to tail. Never short-circuits.
///
/// The accumulator type `B` is unconstrained: a sequence, a scalar, a
/// pair — fold is agnostic to its shape.
///
/// # Example
///
/// ```rust
/// use seqfold_core::fold;
///
/// let product = fold(1, vec![2, 3, 4], |x, acc| x * acc);
/// assert_eq!(product, 24);
///
/// // Element-first order matters for non-commutative steps:
/// let s = fold(String::from("!"), vec!["a", "b"], |x, acc| format!("{x}{acc}"));
/// assert_eq!(s, "ba!");
/// ```
pub fn fold<A, B, F>(mut accum: B, items: Vec<A>, mut combine: F) -> B
where
    F: FnMut(A, B) -> B,
{
    trace!(items = items.len(), "fold");
    for item in items {
        accum = combine(item, accum);
    }
    accum
}

/// Place `x` after the last element of `items`.
///
/// This is the universal "accumulate in order" building block: fold
/// visits elements left to right, append adds at the tail, so composing
/// the two yields output order equal to input order.
///
/// # Example
///
/// ```rust
/// use seqfold_core::append;
///
/// assert_eq!(append(3, vec![1, 2]), vec![1, 2, 3]);
/// ```
pub fn append<A>(x: A, mut items: Vec<A>) -> Vec<A> {
    items.push(x);
    items
}

/// Concatenate two sequences, `front` then `back`.
///
/// Derived, like everything else: fold over `back` with `front` as the
/// accumulator and [`append`] as the combining step.
pub fn concat<A>(front: Vec<A>, back: Vec<A>) -> Vec<A> {
    fold(front, back, append)
}

// ============================================================================
// Tests
// ============================================================================
