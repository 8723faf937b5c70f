//! Binary Min-Heap for Rust
//!
//! This crate provides [`BinaryMinHeap`], a priority queue stored as a dense
//! array-backed binary tree that always yields its smallest element first.
//!
//! # Features
//!
//! - **Core heap operations**: O(log n) `add` and `extract_min`, O(1) `peek`
//! - **Max extraction**: O(n) `extract_max` by linear scan
//! - **Value-addressed edits**: `contains`, `update` and `remove` locate the first
//!   element comparing equal to a given value and repair the heap around it
//! - **Pluggable ordering**: any type implementing [`Orderable`] can be stored;
//!   every [`Ord`] type qualifies automatically
//!
//! Fallible operations return [`HeapError`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::{BinaryMinHeap, HeapError};
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.add(5);
//! heap.add(3);
//! heap.add(8);
//!
//! assert_eq!(heap.peek(), Ok(&3));
//! assert!(heap.contains(&8));
//! heap.remove(&8).unwrap();
//! assert_eq!(heap.remove(&8), Err(HeapError::NotFound));
//! assert_eq!(heap.extract_min(), Ok(3));
//! ```

pub mod min_heap;
pub mod traits;

pub use min_heap::{BinaryMinHeap, INITIAL_CAPACITY};
pub use traits::{HeapError, Orderable};
