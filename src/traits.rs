//! Ordering capability and error type for the heap
//!
//! - [`Orderable`]: the total order a [`BinaryMinHeap`](crate::BinaryMinHeap) arranges its elements by
//! - [`HeapError`]: failures surfaced by fallible heap operations
//!
//! Every type implementing [`Ord`] is [`Orderable`] through a blanket
//! implementation, so integers, strings, tuples and [`std::cmp::Reverse`]
//! work out of the box.

use std::cmp::Ordering;
use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("heap is empty")]
    EmptyContainer,
    /// No element in the heap compares equal to the requested value
    #[error("value not found in heap")]
    NotFound,
}

/// A type with a total order over its own values
///
/// Implement this directly for types whose order is total but which do not
/// implement [`Ord`]. Equality inside the heap means `compare` returned
/// [`Ordering::Equal`], independent of any [`PartialEq`] implementation.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use binary_min_heap::{BinaryMinHeap, Orderable};
///
/// #[derive(Debug)]
/// struct Distance(f64);
///
/// impl Orderable for Distance {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.0.total_cmp(&other.0)
///     }
/// }
///
/// let mut heap = BinaryMinHeap::new();
/// heap.add(Distance(2.5));
/// heap.add(Distance(0.5));
/// assert_eq!(heap.peek().unwrap().0, 0.5);
/// ```
pub trait Orderable {
    /// Three-way comparison of `self` against `other`
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns true if `self` orders strictly before `other`
    fn is_less(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl<T: Ord + ?Sized> Orderable for T {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
