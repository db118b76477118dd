//! # Core - Fold-Derived Sequence Combinators
//!
//! This crate provides a small library of generic sequence combinators,
//! all derived from a single left-fold primitive:
//!
//! - **Fold**: the sole reduction primitive ([`fold`], [`append`], [`concat`])
//! - **Transform**: order-preserving rebuilds ([`map`], [`filter`], [`split_by`])
//! - **Quantify**: existential and universal tests ([`any`], [`all`])
//! - **Aggregate**: extremum search and counting ([`max`], [`min`], [`len`])
//! - **Sort**: insertion sort from fold + partition ([`insertion_sort`])
//!
//! ## Design Philosophy
//!
//! "Fold-first" means treating the left fold as the only place iteration
//! happens. Every other operation calls [`fold`] (or a function built on
//! it) exactly once and supplies a combining closure:
//!
//! ```text
//!    fold ─┬─ append ─── concat
//!          ├─ map / filter / split_by
//!          │                  │
//!          │            any ─── all
//!          ├─ max / min / len
//!          └─ insertion_sort (via split_by)
//! ```
//!
//! Because fold processes elements head-to-tail and [`append`] always adds
//! at the tail, composing the two preserves input order everywhere.
//! The append-based construction makes [`insertion_sort`] O(n²); that is
//! the accepted cost of keeping the derivation uniform.

pub mod aggregate;
pub mod fold;
pub mod quantify;
pub mod sort;
pub mod transform;

// Re-export the full surface at the crate root for convenience
pub use aggregate::{len, max, min};
pub use fold::{append, concat, fold};
pub use quantify::{all, any};
pub use sort::insertion_sort;
pub use transform::{filter, map, split_by};
