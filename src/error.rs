//! Error type for indexed heap operations
//!
//! All failures are recoverable, caller-facing conditions reported through
//! the operation's `Result`. Internal consistency violations (a broken heap
//! property, a stale position cache) are programming errors and show up as
//! debug assertions during testing, never as an [`HeapError`].

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The id is outside the `[0, capacity)` universe fixed at construction
    IdOutOfRange {
        /// The offending id
        id: usize,
        /// The heap's fixed capacity
        capacity: usize,
    },
    /// An insert was attempted for an id already in the heap
    AlreadyPresent(usize),
    /// A priority change or removal was attempted for an id not in the heap
    NotPresent(usize),
    /// A pop was attempted on an empty heap
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IdOutOfRange { id, capacity } => {
                write!(f, "id {} is outside the universe [0, {})", id, capacity)
            }
            HeapError::AlreadyPresent(id) => {
                write!(f, "id {} is already in the heap", id)
            }
            HeapError::NotPresent(id) => {
                write!(f, "id {} is not in the heap", id)
            }
            HeapError::Empty => {
                write!(f, "the heap is empty")
            }
        }
    }
}

impl std::error::Error for HeapError {}
