//! Array-backed binary min-heap
//!
//! [`BinaryMinHeap`] keeps its elements in a single contiguous buffer laid out
//! as an implicit complete binary tree: the children of slot `i` live at
//! `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. No links between nodes
//! are stored.
//!
//! Besides the usual insert / peek / extract-min operations the heap supports
//! maximum extraction, membership tests, in-place value updates and removal of
//! arbitrary values. Those operations locate their target by linear scan and
//! then repair the heap locally.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `add`         | O(log n) amortized  |
//! | `peek`        | O(1)                |
//! | `extract_min` | O(log n)            |
//! | `extract_max` | O(n)                |
//! | `contains`    | O(n)                |
//! | `update`      | O(n)                |
//! | `remove`      | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use binary_min_heap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::from_slice(&[5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! assert_eq!(heap.extract_max(), Ok(9));
//! heap.update(&8, 0).unwrap();
//! assert_eq!(heap.extract_min(), Ok(0));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5]);
//! ```

use std::cmp::Ordering;

use crate::traits::{HeapError, Orderable};

/// Logical capacity of a freshly constructed heap
pub const INITIAL_CAPACITY: usize = 8;

const GROWTH_FACTOR: usize = 2;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap over any [`Orderable`] element type
///
/// The smallest element (by [`Orderable::compare`]) is always at the root.
/// The heap tracks a logical capacity that starts at [`INITIAL_CAPACITY`]
/// and doubles as soon as an insertion fills it; it never shrinks.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T: Orderable> {
    /// Live elements in heap order; `data.len()` is the element count
    data: Vec<T>,
    capacity: usize,
}

impl<T: Orderable> BinaryMinHeap<T> {
    /// Creates an empty heap with capacity [`INITIAL_CAPACITY`]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Creates a heap seeded with clones of `items`, inserted one at a time
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized; doubling the capacity copies every element once.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);

        if self.data.len() == self.capacity {
            self.grow();
        }
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Same as [`extract_min`](Self::extract_min)
    pub fn extract(&mut self) -> Result<T, HeapError> {
        self.extract_min()
    }

    /// Removes and returns the maximum element
    ///
    /// The maximum is found by scanning every element; among equal maxima the
    /// one at the lowest index is taken.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }

        let mut max = 0;
        for i in 1..self.data.len() {
            if self.data[i].compare(&self.data[max]) == Ordering::Greater {
                max = i;
            }
        }

        Ok(self.remove_at(max))
    }

    /// Returns true if some element compares equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Replaces the first element equal to `old_value` with `new_value`
    ///
    /// The element count is unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if no element compares equal to
    /// `old_value`; the heap is left unmodified.
    pub fn update(&mut self, old_value: &T, new_value: T) -> Result<(), HeapError> {
        let index = self.position(old_value).ok_or(HeapError::NotFound)?;
        let increased = new_value.compare(old_value) == Ordering::Greater;

        self.data[index] = new_value;
        if increased {
            self.sift_down(index);
        } else {
            self.sift_up(index);
        }

        Ok(())
    }

    /// Removes the first element equal to `value` and returns it
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if no element compares equal to
    /// `value`; the heap is left unmodified.
    pub fn remove(&mut self, value: &T) -> Result<T, HeapError> {
        let index = self.position(value).ok_or(HeapError::NotFound)?;
        Ok(self.remove_at(index))
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the structural invariants: every element is no smaller than its
    /// parent, and the element count does not exceed the capacity
    pub fn is_valid_heap(&self) -> bool {
        self.data.len() <= self.capacity
            && (1..self.data.len()).all(|i| !self.data[i].is_less(&self.data[parent(i)]))
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.data
            .iter()
            .position(|item| item.compare(value) == Ordering::Equal)
    }

    /// Removes the element at `index`, filling the hole with the last element
    fn remove_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);

        // The relocated last element can be smaller than its new parent.
        if index < self.data.len() {
            if index > 0 && self.data[index].is_less(&self.data[parent(index)]) {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }

        removed
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * GROWTH_FACTOR;
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.data[index].is_less(&self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }

            // Left child wins ties
            let right = right_child(index);
            let smaller = if right < len && self.data[right].is_less(&self.data[left]) {
                right
            } else {
                left
            };

            if self.data[smaller].is_less(&self.data[index]) {
                self.data.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Orderable> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Orderable> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Orderable> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Orderable> From<Vec<T>> for BinaryMinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
