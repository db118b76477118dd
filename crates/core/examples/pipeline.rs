//! Pipeline: the layered derivation, end to end.
//!
//! Run with: cargo run --example pipeline
//! (set RUST_LOG=trace to watch the fold events underneath every step)
//!
//! This example demonstrates:
//! - The fold primitive and its element-first argument order
//! - Order-preserving transforms built on fold + append
//! - Quantifiers, aggregates, and sorting stacked on top

use seqfold_core::{all, any, filter, fold, insertion_sort, len, map, max, min, split_by};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fold-Derived Combinators ===\n");

    // -------------------------------------------------------------------------
    // The Primitive
    // -------------------------------------------------------------------------
    println!("1. Fold");
    println!("-------");

    let product = fold(1, vec![2, 3, 4], |x, acc| x * acc);
    println!("fold(1, [2,3,4], *) = {product}");

    let unchanged = fold(42, Vec::<i32>::new(), |x, acc| x + acc);
    println!("fold(42, [], +)     = {unchanged} (empty input returns the accumulator)");
    println!();

    // -------------------------------------------------------------------------
    // Transforms
    // -------------------------------------------------------------------------
    println!("2. Transforms");
    println!("-------------");

    let readings = vec![3, -1, 4, -1, 5, 9, -2, 6];
    println!("readings            = {readings:?}");

    let valid = filter(readings.clone(), |x| *x >= 0);
    println!("filter(>= 0)        = {valid:?}");

    let scaled = map(valid.clone(), |x| x * 10);
    println!("map(*10)            = {scaled:?}");

    let (low, high) = split_by(scaled.clone(), |x| *x < 50);
    println!("split_by(< 50)      = {low:?} / {high:?}");
    println!();

    // -------------------------------------------------------------------------
    // Quantifiers and Aggregates
    // -------------------------------------------------------------------------
    println!("3. Quantifiers and Aggregates");
    println!("-----------------------------");

    println!("any(> 80)?          = {}", any(scaled.clone(), |x| *x > 80));
    println!("all(>= 30)?         = {}", all(scaled.clone(), |x| *x >= 30));
    println!("len                 = {}", len(scaled.clone()));
    println!("max                 = {:?}", max(scaled.clone()));
    println!("min                 = {:?}", min(scaled.clone()));
    println!("max of []           = {:?}", max(Vec::<i32>::new()));
    println!();

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------
    println!("4. Insertion Sort");
    println!("-----------------");

    let sorted = insertion_sort(vec![5, -10, 0, 15, 10, -15, -5]);
    println!("sort([5,-10,0,15,10,-15,-5]) = {sorted:?}");

    println!("\n=== Complete ===");
}
