//! Indexed Binary Heap Priority Queue
//!
//! This crate provides a fixed-capacity binary heap whose elements are
//! identified by integer ids, with an id table maintained alongside the heap
//! array so that operations on arbitrary ids, not just the root, run in
//! logarithmic time.
//!
//! # Features
//!
//! - **O(1) id lookup**: every id's heap position is cached in its record
//! - **O(log n) arbitrary-id updates**: `change_priority` and `remove` work
//!   on any present id, with a single percolation pass
//! - **Min or max ordering**: chosen at construction, fixed for the life of
//!   the heap
//! - **Bounded arena**: one allocation per structure; element records are
//!   created once per id and reused across insert/remove cycles
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{HeapKind, IndexedBinaryHeap};
//!
//! let mut pq = IndexedBinaryHeap::new(16, HeapKind::Min);
//! pq.insert(4, 10.0)?;
//! pq.insert(9, 3.0)?;
//! pq.insert(2, 7.5)?;
//!
//! // Any id can be updated or removed, not just the root.
//! pq.change_priority(4, 1.0)?;
//! pq.remove(2)?;
//!
//! assert_eq!(pq.pop()?, (4, 1.0));
//! assert_eq!(pq.pop()?, (9, 3.0));
//! assert!(pq.is_empty());
//! # Ok::<(), indexed_heap::HeapError>(())
//! ```

pub mod error;
pub mod indexed;

// Re-export the main types for convenience
pub use error::HeapError;
pub use indexed::{HeapKind, IndexedBinaryHeap};
