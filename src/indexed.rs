//! Indexed binary heap implementation
//!
//! A fixed-capacity binary heap over a universe of integer ids
//! `0..capacity`, maintaining an id table alongside the heap array so that
//! any id can be
//! located in O(1) and updated or removed in O(log n), without linear scans.
//!
//! The heap array holds ids in heap order; the id table holds one record per
//! id carrying its current priority and its cached heap position. Every slot
//! swap updates the cached positions of both participants, which is what
//! keeps id-indexed operations honest.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity  |
//! |-------------------|-------------|
//! | `new`             | O(capacity) |
//! | `contains`        | O(1)        |
//! | `priority`        | O(1)        |
//! | `peek`            | O(1)        |
//! | `insert`          | O(log n)    |
//! | `change_priority` | O(log n)    |
//! | `remove`          | O(log n)    |
//! | `pop`             | O(log n)    |
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::{HeapKind, IndexedBinaryHeap};
//!
//! let mut pq = IndexedBinaryHeap::new(8, HeapKind::Min);
//! pq.insert(3, 2.5)?;
//! pq.insert(5, 1.0)?;
//! pq.insert(0, 4.0)?;
//!
//! assert_eq!(pq.peek(), Some((5, 1.0)));
//!
//! pq.change_priority(0, 0.5)?;
//! assert_eq!(pq.pop()?, (0, 0.5));
//! assert_eq!(pq.pop()?, (5, 1.0));
//! # Ok::<(), indexed_heap::HeapError>(())
//! ```

use crate::error::HeapError;

/// Ordering discipline of a heap, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// Smallest priority at the root
    Min,
    /// Largest priority at the root
    Max,
}

impl HeapKind {
    /// True if priority `a` belongs closer to the root than priority `b`.
    ///
    /// NaN compares false on both sides, so a NaN priority is never promoted
    /// toward the root and never displaces anything.
    #[inline]
    fn outranks(self, a: f64, b: f64) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

/// Sentinel position marking an id as absent from the heap.
///
/// Live positions are 1-based, so 0 is never a valid position.
const ABSENT: usize = 0;

/// Per-id record: current priority and cached 1-based heap position.
///
/// One record exists for every id in the universe for the life of the heap;
/// insert/remove cycles reset its fields rather than reallocating.
#[derive(Debug, Clone)]
struct Node {
    priority: f64,
    pos: usize,
}

impl Node {
    const fn vacant() -> Self {
        Node {
            priority: 0.0,
            pos: ABSENT,
        }
    }
}

/// A fixed-capacity indexed binary heap
///
/// Elements are identified by `usize` ids drawn from `[0, capacity)` and
/// ordered by `f64` priority under the [`HeapKind`] chosen at construction.
/// Each id may be present at most once; since ids are bounded by the
/// capacity, the heap can never overflow.
///
/// Unlike a plain binary heap, any present id (not just the root) can have
/// its priority changed or be removed in O(log n), because the id table
/// caches every element's heap position.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap {
    kind: HeapKind,
    /// Heap order over ids; slot 0 unused, slots `1..=len` live.
    heap: Vec<usize>,
    /// Id table, indexed by id; fixed length = capacity.
    nodes: Vec<Node>,
    len: usize,
}

impl IndexedBinaryHeap {
    /// Creates an empty heap over the id universe `[0, capacity)`.
    ///
    /// Both the heap array and the id table are allocated here, once; no
    /// further allocation happens across insert/remove cycles.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, kind: HeapKind) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        IndexedBinaryHeap {
            kind,
            heap: vec![0; capacity + 1],
            nodes: vec![Node::vacant(); capacity],
            len: 0,
        }
    }

    /// Returns the ordering discipline chosen at construction
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the fixed id-universe size
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of ids currently in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no ids are in the heap
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `id` is currently in the heap.
    ///
    /// Ids outside `[0, capacity)` are simply not present: `false`, no error.
    pub fn contains(&self, id: usize) -> bool {
        self.nodes.get(id).map_or(false, |n| n.pos != ABSENT)
    }

    /// Returns the current priority of `id`, or `None` if it is not present
    pub fn priority(&self, id: usize) -> Option<f64> {
        self.nodes
            .get(id)
            .filter(|n| n.pos != ABSENT)
            .map(|n| n.priority)
    }

    /// Returns the root element without removing it, or `None` if empty
    pub fn peek(&self) -> Option<(usize, f64)> {
        if self.len == 0 {
            return None;
        }
        let id = self.heap[1];
        Some((id, self.nodes[id].priority))
    }

    /// Inserts `id` with the given priority.
    ///
    /// The new element is appended at the last heap slot and percolated up.
    ///
    /// # Errors
    /// [`HeapError::IdOutOfRange`] if `id` is outside `[0, capacity)`,
    /// [`HeapError::AlreadyPresent`] if `id` is already in the heap. The
    /// heap is unchanged on error.
    pub fn insert(&mut self, id: usize, priority: f64) -> Result<(), HeapError> {
        self.check_range(id)?;
        if self.nodes[id].pos != ABSENT {
            return Err(HeapError::AlreadyPresent(id));
        }
        self.len += 1;
        let pos = self.len;
        self.heap[pos] = id;
        self.nodes[id] = Node { priority, pos };
        self.percolate_up(pos);
        Ok(())
    }

    /// Changes the priority of a present `id` and restores heap order.
    ///
    /// A change toward the root percolates up, a change away from it
    /// percolates down; an unchanged priority is a successful no-op. A single
    /// in-place change can only violate the heap property in one direction,
    /// so exactly one pass runs.
    ///
    /// # Errors
    /// [`HeapError::IdOutOfRange`] if `id` is outside `[0, capacity)`,
    /// [`HeapError::NotPresent`] if `id` is not in the heap.
    pub fn change_priority(&mut self, id: usize, new_priority: f64) -> Result<(), HeapError> {
        self.check_range(id)?;
        let pos = self.nodes[id].pos;
        if pos == ABSENT {
            return Err(HeapError::NotPresent(id));
        }
        let old_priority = self.nodes[id].priority;
        if new_priority == old_priority {
            return Ok(());
        }
        self.nodes[id].priority = new_priority;
        if self.kind.outranks(new_priority, old_priority) {
            self.percolate_up(pos);
        } else {
            self.percolate_down(pos);
        }
        Ok(())
    }

    /// Removes a present `id`, returning the priority it had.
    ///
    /// The record at the last heap slot takes over the vacated slot and the
    /// heap property is restored around it; the removed id's record is reset
    /// to vacant for reuse by a later insert.
    ///
    /// # Errors
    /// [`HeapError::IdOutOfRange`] if `id` is outside `[0, capacity)`,
    /// [`HeapError::NotPresent`] if `id` is not in the heap.
    pub fn remove(&mut self, id: usize) -> Result<f64, HeapError> {
        self.check_range(id)?;
        let pos = self.nodes[id].pos;
        if pos == ABSENT {
            return Err(HeapError::NotPresent(id));
        }
        let priority = self.nodes[id].priority;
        self.remove_slot(pos);
        Ok(priority)
    }

    /// Removes and returns the root element.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<(usize, f64), HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        let id = self.heap[1];
        let priority = self.nodes[id].priority;
        self.remove_slot(1);
        Ok((id, priority))
    }

    /// Iterates over `(id, priority)` pairs in heap-array (level) order.
    ///
    /// The first pair is the root; beyond that the order reflects the
    /// internal array, not priority order. Mainly useful for diagnostics and
    /// for checking the heap shape from outside.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.heap[1..=self.len]
            .iter()
            .map(move |&id| (id, self.nodes[id].priority))
    }

    /// Iterates over `(id, priority)` pairs in pre-order (root, left
    /// subtree, right subtree). Diagnostic traversal; not priority order.
    pub fn preorder(&self) -> Preorder<'_> {
        let stack = if self.len == 0 { Vec::new() } else { vec![1] };
        Preorder { inner: self, stack }
    }

    fn check_range(&self, id: usize) -> Result<(), HeapError> {
        if id >= self.nodes.len() {
            return Err(HeapError::IdOutOfRange {
                id,
                capacity: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Evicts the record at heap position `pos` (1-based, occupied).
    ///
    /// A substitution from the last slot can violate the heap property
    /// toward either the new parent or the new children, so this tries
    /// percolate-up first and falls back to percolate-down only when the
    /// up pass made no move. At most one direction ever fires.
    fn remove_slot(&mut self, pos: usize) {
        debug_assert!(pos >= 1 && pos <= self.len);
        let id = self.heap[pos];
        let last = self.len;
        self.len -= 1;
        self.nodes[id] = Node::vacant();
        if pos != last {
            let moved = self.heap[last];
            self.heap[pos] = moved;
            self.nodes[moved].pos = pos;
            if self.percolate_up(pos) == pos {
                self.percolate_down(pos);
            }
        }
    }

    /// Moves the record at `pos` toward the root until its parent outranks
    /// it or it reaches slot 1. Returns the final position.
    ///
    /// The mover is held out as a hole; displaced parents drop into the hole
    /// with their cached positions updated, and the mover is written back
    /// once at the end.
    fn percolate_up(&mut self, mut pos: usize) -> usize {
        let id = self.heap[pos];
        let priority = self.nodes[id].priority;
        while pos > 1 {
            let parent_pos = pos / 2;
            let parent = self.heap[parent_pos];
            if !self.kind.outranks(priority, self.nodes[parent].priority) {
                break;
            }
            self.heap[pos] = parent;
            self.nodes[parent].pos = pos;
            pos = parent_pos;
        }
        self.heap[pos] = id;
        self.nodes[id].pos = pos;
        pos
    }

    /// Moves the record at `pos` away from the root, always descending into
    /// the more extreme child, until no child outranks it. Returns the final
    /// position.
    fn percolate_down(&mut self, mut pos: usize) -> usize {
        let id = self.heap[pos];
        let priority = self.nodes[id].priority;
        loop {
            let left = pos * 2;
            if left > self.len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right <= self.len {
                let left_priority = self.nodes[self.heap[left]].priority;
                let right_priority = self.nodes[self.heap[right]].priority;
                if self.kind.outranks(right_priority, left_priority) {
                    child = right;
                }
            }
            let child_id = self.heap[child];
            if !self.kind.outranks(self.nodes[child_id].priority, priority) {
                break;
            }
            self.heap[pos] = child_id;
            self.nodes[child_id].pos = pos;
            pos = child;
        }
        self.heap[pos] = id;
        self.nodes[id].pos = pos;
        pos
    }

    /// Full consistency check over both arrays; test-only.
    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.heap.len(), self.nodes.len() + 1);
        let mut present = 0;
        for (id, node) in self.nodes.iter().enumerate() {
            if node.pos != ABSENT {
                present += 1;
                assert!(node.pos <= self.len, "position {} beyond len", node.pos);
                assert_eq!(self.heap[node.pos], id, "stale position cache for id {}", id);
            }
        }
        assert_eq!(present, self.len, "size does not match present ids");
        for pos in 2..=self.len {
            let parent = self.heap[pos / 2];
            let child = self.heap[pos];
            assert!(
                !self
                    .kind
                    .outranks(self.nodes[child].priority, self.nodes[parent].priority),
                "heap property violated at slot {}",
                pos
            );
        }
    }
}

/// Pre-order traversal over a heap's `(id, priority)` pairs.
///
/// Created by [`IndexedBinaryHeap::preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    inner: &'a IndexedBinaryHeap,
    stack: Vec<usize>,
}

impl Iterator for Preorder<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.stack.pop()?;
        let left = pos * 2;
        let right = left + 1;
        if right <= self.inner.len {
            self.stack.push(right);
        }
        if left <= self.inner.len {
            self.stack.push(left);
        }
        let id = self.inner.heap[pos];
        Some((id, self.inner.nodes[id].priority))
    }
}
