//! Binary Min-Heap for Rust
//!
//! This crate provides an array-backed binary min-heap: the smallest element is
//! available in O(1), insertion and extraction take O(log n).
//!
//! # Features
//!
//! - **Implicit tree layout**: a single `Vec` holds a complete binary tree, so
//!   there are no per-node allocations and no stale "empty" slots
//! - **Pluggable ordering**: any [`compare::Compare`] strategy, including plain
//!   closures, decides which element comes out first
//! - **Explicit emptiness**: `peek` and `pop` return `Option`, never a sentinel
//! - **O(n) construction** from an unordered `Vec` via bottom-up heapify
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::binary::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.len(), 2);
//! ```

pub mod binary;
pub mod traits;

// Re-export the main types for convenience
pub use binary::MinHeap;
pub use traits::{Heap, HeapError};
