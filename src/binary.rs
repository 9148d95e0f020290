//! Binary min-heap
//!
//! An implicit binary tree stored in a `Vec`: node `i` has children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. The vector's length is
//! the logical element count and its capacity is the physical storage, so no
//! slot past the last element is ever visible to the heap logic.
//!
//! Ordering is supplied by a [`Compare`] strategy. [`Natural`] (the default)
//! uses the element's `Ord` impl; any `Fn(&T, &T) -> Ordering` closure works as
//! well, so a reversed or key-based order needs no separate container.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `len`      | O(1)       |
//! | `from_vec` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::binary::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push("delta");
//! heap.push("alpha");
//! heap.push("charlie");
//! heap.push("bravo");
//!
//! assert_eq!(heap.as_slice(), &["alpha", "bravo", "charlie", "delta"]);
//! assert_eq!(heap.peek(), Some(&"alpha"));
//! assert_eq!(heap.pop(), Some("alpha"));
//! assert_eq!(heap.as_slice(), &["bravo", "delta", "charlie"]);
//! ```

use std::fmt;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};
use log::trace;

use crate::traits::{Heap, HeapError};

/// A binary min-heap
///
/// `peek` and `pop` always yield an element that no other element orders
/// before, according to the heap's comparator.
///
/// It is a logic error for an element to change its ordering relative to the
/// others while it is in the heap.
#[derive(Clone)]
pub struct MinHeap<T, C: Compare<T> = Natural<T>> {
    /// Backing storage; `data.len()` is the logical size
    data: Vec<T>,
    cmp: C,
}

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

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }

    /// Builds a heap from an unordered vector in O(n)
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with the given capacity, ordered by the given comparator
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from an unordered vector using the given comparator
    ///
    /// Sifts down every internal node from the last one to the root, which is
    /// O(n) overall instead of the O(n log n) of pushing one by one.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: vec, cmp };
        heap.rebuild();
        heap
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum element, or `None` if empty
    ///
    /// The last element takes the root's slot and is sifted down.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Read-only view of the valid elements in storage order, root first
    ///
    /// Only the first element is guaranteed to be a minimum; the rest follow
    /// the implicit tree layout, not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops spare capacity beyond the current length
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes all elements, keeping the allocated capacity
    pub fn clear(&mut self) {
        trace!("clearing heap of {} elements", self.data.len());
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap-order invariant over every parent/child pair
    ///
    /// Returns the first violation found in storage order.
    pub fn verify_heap_order(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = parent(child);
            if self.cmp.compares_lt(&self.data[child], &self.data[parent]) {
                return Err(HeapError::OrderViolation { parent, child });
            }
        }
        Ok(())
    }

    /// Move element at index up to maintain heap property
    ///
    /// Stops at the first parent that is not greater: everything above it
    /// already satisfied the invariant before the insertion.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.cmp.compares_lt(&self.data[index], &self.data[parent]) {
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
            let right = right_child(index);
            let mut smallest = index;

            if left < len && self.cmp.compares_lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            // Compare against the winner of the left check, not `index`
            if right < len && self.cmp.compares_lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Restore heap order over the whole storage
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        trace!("heapifying {len} elements");
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Restore heap order after appending elements at `start..`
    ///
    /// Rebuilding is linear in the total size while pushing is
    /// O(appended * log n), so rebuild when the appended batch dominates.
    fn rebuild_tail(&mut self, start: usize) {
        let len = self.data.len();
        if start == len {
            return;
        }
        if start < len - start {
            self.rebuild();
        } else {
            for index in start..len {
                self.sift_up(index);
            }
        }
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for MinHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MinHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        MinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        MinHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let start = self.data.len();
        self.data.extend(iter);
        self.rebuild_tail(start);
    }
}

impl<T, C: Compare<T>> IntoIterator for MinHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Iterates in storage order; use [`MinHeap::into_sorted_vec`] for sorted output
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Renders the storage view, e.g. `[alpha, bravo, charlie]`
impl<T: fmt::Display, C: Compare<T>> fmt::Display for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_basic_operations() {
        let mut heap = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_walkthrough_layout() {
        let mut heap = MinHeap::new();
        for word in ["delta", "alpha", "charlie", "bravo"] {
            heap.push(word.to_string());
        }

        assert_eq!(heap.as_slice(), ["alpha", "bravo", "charlie", "delta"]);
        assert_eq!(heap.to_string(), "[alpha, bravo, charlie, delta]");
        assert_eq!(heap.peek().map(String::as_str), Some("alpha"));
        assert_eq!(heap.len(), 4);

        assert_eq!(heap.pop().as_deref(), Some("alpha"));
        assert_eq!(heap.as_slice(), ["bravo", "delta", "charlie"]);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_empty_queries_do_not_mutate() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.to_string(), "[]");
    }

    #[test]
    fn test_duplicate_elements() {
        let mut heap = MinHeap::new();

        heap.push(1);
        heap.push(1);
        heap.push(0);
        heap.push(1);

        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = MinHeap::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MinHeap::new();

        for i in (0..100).rev() {
            heap.push(i);
            assert_eq!(heap.verify_heap_order(), Ok(()));
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_sift_down_picks_smaller_child() {
        // After popping 0 the root becomes 9, whose children are 2 (left) and 1
        // (right); the right child must win even though it is compared second.
        let mut heap = MinHeap::from_vec(vec![0, 2, 1, 3, 4, 5, 9]);
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.verify_heap_order(), Ok(()));
    }

    #[test]
    fn test_sift_down_prefers_left_when_smaller() {
        // Root becomes 9 with children 1 (left) and 2 (right). Comparing the
        // right child against the root instead of the left winner would lift 2
        // above 1.
        let mut heap = MinHeap::from_vec(vec![0, 1, 2, 3, 4, 5, 9]);
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.as_slice(), &[1, 3, 2, 9, 4, 5]);
        assert_eq!(heap.verify_heap_order(), Ok(()));
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = MinHeap::from_vec(vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0]);
        assert_eq!(heap.len(), 10);
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.verify_heap_order(), Ok(()));
        assert_eq!(heap.into_sorted_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_verify_reports_violation() {
        let heap = MinHeap {
            data: vec![1, 5, 3, 2],
            cmp: natural(),
        };
        assert_eq!(
            heap.verify_heap_order(),
            Err(HeapError::OrderViolation {
                parent: 1,
                child: 3
            })
        );
    }

    #[test]
    fn test_custom_comparator() {
        let mut heap = MinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for i in [4, 9, 1, 7] {
            heap.push(i);
        }
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 1]);
    }

    #[test]
    fn test_key_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut heap = MinHeap::with_comparator(by_len);
        heap.push("charlie");
        heap.push("ab");
        heap.push("bravo");

        assert_eq!(heap.comparator()(&"x", &"yy"), Ordering::Less);
        assert_eq!(heap.pop(), Some("ab"));
        assert_eq!(heap.pop(), Some("bravo"));
        assert_eq!(heap.pop(), Some("charlie"));
    }

    #[test]
    fn test_extend_small_and_large_batches() {
        let mut heap: MinHeap<i32> = (10..20).collect();
        heap.extend([5, 15]);
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.verify_heap_order(), Ok(()));

        heap.extend((0..100).rev());
        assert_eq!(heap.len(), 112);
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.verify_heap_order(), Ok(()));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap = MinHeap::with_capacity(16);
        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 16);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_storage_views_agree() {
        let mut heap = MinHeap::from(vec![8, 3, 6, 1, 7]);
        heap.push(2);

        let slice = heap.as_slice().to_vec();
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), slice);
        assert_eq!((&heap).into_iter().copied().collect::<Vec<_>>(), slice);

        let mut seen = Vec::new();
        for item in &heap {
            seen.push(*item);
        }
        assert_eq!(seen, slice);

        // Heapifying a valid heap moves nothing, so the owned iterator sees the same layout
        let rebuilt = MinHeap::from_vec(slice.clone());
        assert_eq!(rebuilt.into_iter().collect::<Vec<_>>(), slice);

        let storage = heap.into_vec();
        assert_eq!(storage, slice);
        assert_eq!(storage[0], 1);
    }

    #[test]
    fn test_from_vec_conversion() {
        let heap: MinHeap<i32> = vec![5, 4, 3, 2, 1].into();
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.verify_heap_order(), Ok(()));
        assert_eq!(heap.into_vec()[0], 1);
    }

    #[test]
    fn test_default_is_empty() {
        let mut heap: MinHeap<u8> = MinHeap::default();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        heap.push(4);
        heap.push(2);
        assert_eq!(heap.pop(), Some(2));
    }

    #[test]
    fn test_reserve_and_shrink() {
        let mut heap = MinHeap::new();
        heap.reserve(64);
        assert!(heap.capacity() >= 64);

        heap.extend([3, 1, 2]);
        heap.shrink_to_fit();
        assert!(heap.capacity() >= 3);
        assert!(heap.capacity() < 64);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    }
}
