//! Common traits for heap data structures
//!
//! [`Heap`] is the contract that collaborators (schedulers, event queues,
//! graph-search frontiers) depend on. It mirrors the shape of
//! `std::collections::BinaryHeap`, except that the minimum comes out first.

use std::fmt;

/// Error type for heap operations
///
/// Emptiness is never an error; `peek` and `pop` report it through `Option`.
/// The only failure this crate reports is a broken heap-order invariant found
/// by [`MinHeap::verify_heap_order`](crate::binary::MinHeap::verify_heap_order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The element at `child` orders strictly before its parent at `parent`
    OrderViolation { parent: usize, child: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::OrderViolation { parent, child } => {
                write!(
                    f,
                    "heap order violated: element at {child} is less than its parent at {parent}"
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-oriented heaps
///
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use rust_min_heap::Heap;
/// use rust_min_heap::binary::MinHeap;
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
