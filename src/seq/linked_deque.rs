//! Doubly linked sequence backed by a [`NodeArena`], usable as a deque or a
//! stack.
//!
//! Nodes live in the arena and link to their neighbors by `NodeId`, so the
//! chain itself holds no owning pointers: `head` and `tail` are root handles,
//! each node carries a handle toward the head and one toward the tail.
//!
//! ## Architecture
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌────────┬────────────────────────────────────────────┐
//!   │ NodeId │ Node { value, prev, next }                 │
//!   ├────────┼────────────────────────────────────────────┤
//!   │ n_0    │ { value: X, prev: None, next: Some(n_1) }  │
//!   │ n_1    │ { value: Y, prev: Some(n_0), next: n_2 }   │
//!   │ n_2    │ { value: Z, prev: Some(n_1), next: None }  │
//!   └────────┴────────────────────────────────────────────┘
//!
//!   head (front) ─► [n_0] ◄──► [n_1] ◄──► [n_2] ◄─ (back) tail
//! ```
//!
//! ## Operations
//! - `push_front` / `push_back`, `remove_first` / `remove_last`: O(1)
//! - `get` / `set` / `insert` / `remove_at`: O(min(index, len − index)),
//!   scanning from whichever end is nearer
//! - `remove_value`: head→tail scan plus unlink, one operation
//! - `push` / `pop`: stack surface; `push` inserts at the head, `pop` removes
//!   from the tail — the pairing is part of the contract
//!
//! Comparator sort, bulk replacement, descending traversal, positional
//! cursors, and sub-range views are intentionally unsupported and fail with
//! [`UnsupportedError`].
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::cmp::Ordering;
use std::mem;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

use crate::error::{ArgumentError, NoSuchElementError, UnsupportedError};
use crate::seq::node_arena::{NodeArena, NodeId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

fn invalid_index(index: usize, len: usize) -> ArgumentError {
    ArgumentError::new(format!("index {index} out of bounds for length {len}"))
}

fn empty_deque() -> NoSuchElementError {
    NoSuchElementError::new("deque is empty")
}

#[derive(Debug)]
/// Doubly linked sequence with deque and stack surfaces.
pub struct LinkedDeque<T> {
    arena: NodeArena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the chain.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Inserts `value` as the new head.
    pub fn push_front(&mut self, value: T) {
        let id = self.arena.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    /// Inserts `value` as the new tail.
    pub fn push_back(&mut self, value: T) {
        let id = self.arena.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        if let Some(tail) = self.tail {
            if let Some(node) = self.arena.get_mut(tail) {
                node.next = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
    }

    /// Returns the head element, failing on an empty chain.
    pub fn first(&self) -> Result<&T, NoSuchElementError> {
        self.head
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or_else(empty_deque)
    }

    /// Returns the tail element, failing on an empty chain.
    pub fn last(&self) -> Result<&T, NoSuchElementError> {
        self.tail
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or_else(empty_deque)
    }

    /// Returns the head element, or `None` on an empty chain.
    pub fn peek_first(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
    }

    /// Returns the tail element, or `None` on an empty chain.
    pub fn peek_last(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
    }

    /// Unlinks and returns the head element, failing on an empty chain.
    pub fn remove_first(&mut self) -> Result<T, NoSuchElementError> {
        let id = self.head.ok_or_else(empty_deque)?;
        match self.unlink(id) {
            Some(value) => Ok(value),
            None => Err(empty_deque()),
        }
    }

    /// Unlinks and returns the tail element, failing on an empty chain.
    pub fn remove_last(&mut self) -> Result<T, NoSuchElementError> {
        let id = self.tail.ok_or_else(empty_deque)?;
        match self.unlink(id) {
            Some(value) => Ok(value),
            None => Err(empty_deque()),
        }
    }

    /// Unlinks and returns the head element, or `None` on an empty chain.
    pub fn poll_first(&mut self) -> Option<T> {
        let id = self.head?;
        self.unlink(id)
    }

    /// Unlinks and returns the tail element, or `None` on an empty chain.
    pub fn poll_last(&mut self) -> Option<T> {
        let id = self.tail?;
        self.unlink(id)
    }

    /// Returns the element at `index`, scanning from the nearer end.
    pub fn get(&self, index: usize) -> Result<&T, ArgumentError> {
        let id = self
            .node_at(index)
            .ok_or_else(|| invalid_index(index, self.len()))?;
        self.arena
            .get(id)
            .map(|node| &node.value)
            .ok_or_else(|| invalid_index(index, self.len()))
    }

    /// Replaces the element at `index`, returning the displaced element.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArgumentError> {
        let len = self.len();
        let id = self.node_at(index).ok_or_else(|| invalid_index(index, len))?;
        match self.arena.get_mut(id) {
            Some(node) => Ok(mem::replace(&mut node.value, value)),
            None => Err(invalid_index(index, len)),
        }
    }

    /// Inserts `value` before the node at `index`; `index == len` appends at
    /// the tail.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArgumentError> {
        let len = self.len();
        if index > len {
            return Err(invalid_index(index, len));
        }
        if index == len {
            self.push_back(value);
            return Ok(());
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        let at = match self.node_at(index) {
            Some(id) => id,
            None => return Err(invalid_index(index, len)),
        };
        let prev = self.arena.get(at).and_then(|node| node.prev);
        let id = self.arena.alloc(Node {
            value,
            prev,
            next: Some(at),
        });
        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = Some(id);
            }
        }
        if let Some(at_node) = self.arena.get_mut(at) {
            at_node.prev = Some(id);
        }
        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// Removing the sole remaining element succeeds and resets both head and
    /// tail to absent.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ArgumentError> {
        let len = self.len();
        let id = self.node_at(index).ok_or_else(|| invalid_index(index, len))?;
        match self.unlink(id) {
            Some(value) => Ok(value),
            None => Err(invalid_index(index, len)),
        }
    }

    /// Unlinks the first element equal to `value`, scanning head→tail.
    ///
    /// The search and the unlink are one operation; under
    /// [`ConcurrentLinkedDeque`] they share a single write acquisition.
    /// Returns `true` if a match was removed.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(id) = current {
            let (matches, next) = match self.arena.get(id) {
                Some(node) => (node.value == *value, node.next),
                None => return false,
            };
            if matches {
                return self.unlink(id).is_some();
            }
            current = next;
        }
        false
    }

    /// Unlinks the first occurrence of `value` walking from the head.
    pub fn remove_first_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_value(value)
    }

    /// Unlinks the last occurrence of `value` walking from the tail.
    pub fn remove_last_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut current = self.tail;
        while let Some(id) = current {
            let (matches, prev) = match self.arena.get(id) {
                Some(node) => (node.value == *value, node.prev),
                None => return false,
            };
            if matches {
                return self.unlink(id).is_some();
            }
            current = prev;
        }
        false
    }

    /// Returns the index of the first element equal to `value`, scanning
    /// head→tail.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        let mut index = 0;
        while let Some(id) = current {
            let node = self.arena.get(id)?;
            if node.value == *value {
                return Some(index);
            }
            current = node.next;
            index += 1;
        }
        None
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every element of `values` is present.
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|value| self.contains_value(value))
    }

    /// Stack push: inserts at the head.
    pub fn push(&mut self, value: T) {
        self.push_front(value);
    }

    /// Stack pop: unlinks and returns the tail element.
    ///
    /// `push` inserts at the head while `pop` removes from the tail; a single
    /// push followed by a pop returns that element and leaves the deque
    /// empty. The asymmetric pairing is part of the contract.
    pub fn pop(&mut self) -> Result<T, NoSuchElementError> {
        self.remove_last()
    }

    /// Inserts at the head, reporting success instead of failing.
    pub fn offer_first(&mut self, value: T) -> bool {
        self.push_front(value);
        true
    }

    /// Inserts at the tail, reporting success instead of failing.
    pub fn offer_last(&mut self, value: T) -> bool {
        self.push_back(value);
        true
    }

    /// Appends at the tail, reporting success instead of failing.
    pub fn offer(&mut self, value: T) -> bool {
        self.push_back(value);
        true
    }

    /// Unlinks and returns the head element, or `None` on an empty chain.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    /// Returns the head element, or `None` on an empty chain.
    pub fn peek(&self) -> Option<&T> {
        self.peek_first()
    }

    /// Appends every element of `values` at the tail in iteration order.
    ///
    /// Returns `false` if `values` is empty, leaving the chain untouched.
    pub fn append_all(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        let mut changed = false;
        for value in values {
            self.push_back(value);
            changed = true;
        }
        changed
    }

    /// Inserts each element of `values` starting at `index`, advancing the
    /// insertion cursor by one per element.
    ///
    /// Equivalent to a run of single inserts, not a batch splice. Returns
    /// `Ok(false)` if `values` is empty.
    pub fn insert_all(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<bool, ArgumentError> {
        let len = self.len();
        if index > len {
            return Err(invalid_index(index, len));
        }
        let mut cursor = index;
        let mut changed = false;
        for value in values {
            self.insert(cursor, value)?;
            cursor += 1;
            changed = true;
        }
        Ok(changed)
    }

    /// Comparator sort is not implemented by the linked variant.
    pub fn sort_by<F>(&mut self, _compare: F) -> Result<(), UnsupportedError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Err(UnsupportedError::new(
            "comparator sort is not supported on the linked sequence",
        ))
    }

    /// Bulk element replacement is not implemented by the linked variant.
    pub fn replace_all<F>(&mut self, _op: F) -> Result<(), UnsupportedError>
    where
        F: FnMut(&T) -> T,
    {
        Err(UnsupportedError::new(
            "bulk replacement is not supported on the linked sequence",
        ))
    }

    /// Descending traversal is not implemented by the linked variant.
    pub fn iter_descending(&self) -> Result<LinkedDequeIter<'_, T>, UnsupportedError> {
        Err(UnsupportedError::new(
            "descending traversal is not supported on the linked sequence",
        ))
    }

    /// Positional cursors are not implemented by the linked variant.
    pub fn cursor_at(&self, _index: usize) -> Result<LinkedDequeIter<'_, T>, UnsupportedError> {
        Err(UnsupportedError::new(
            "positional cursors are not supported on the linked sequence",
        ))
    }

    /// Sub-range views are not implemented by the linked variant.
    pub fn sub_range(
        &self,
        _from: usize,
        _to: usize,
    ) -> Result<LinkedDequeIter<'_, T>, UnsupportedError> {
        Err(UnsupportedError::new(
            "sub-range views are not supported on the linked sequence",
        ))
    }

    /// Frees every node; the chain is empty afterwards.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns a fresh copy of the elements in head→tail order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a forward cursor starting at the head.
    ///
    /// The cursor follows the toward-tail links and is not restartable.
    pub fn iter(&self) -> LinkedDequeIter<'_, T> {
        LinkedDequeIter {
            deque: self,
            current: self.head,
        }
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        let len = self.len();
        if index >= len {
            return None;
        }
        if index < len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.arena.get(current?)?.next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in index..len - 1 {
                current = self.arena.get(current?)?.prev;
            }
            current
        }
    }

    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        self.arena.free(id).map(|node| node.value)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        // Head→tail walk: acyclic, prev links agree, ends at the tail.
        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert!(seen.insert(id), "cycle in toward-tail links");
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len());

        // Tail→head walk must visit the same count and end at the head.
        let mut back_count = 0usize;
        let mut next = None;
        let mut current = self.tail;
        while let Some(id) = current {
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.next, next);
            next = Some(id);
            current = node.prev;
            back_count += 1;
            assert!(back_count <= count);
        }
        assert_eq!(next, self.head);
        assert_eq!(back_count, count);
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut deque = LinkedDeque::new();
        deque.append_all(values);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedDeque<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Forward cursor over a [`LinkedDeque`], following toward-tail links.
pub struct LinkedDequeIter<'a, T> {
    deque: &'a LinkedDeque<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for LinkedDequeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.deque.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

#[cfg(feature = "concurrency")]
#[derive(Debug)]
/// Thread-safe wrapper around [`LinkedDeque`] using a `parking_lot::RwLock`.
///
/// Reads take a shared acquisition, every structural mutation takes an
/// exclusive one, and composite search-then-mutate operations (the
/// `remove_value` family) run inside a single critical section. Guards are
/// scoped, so the lock is released on every exit path.
pub struct ConcurrentLinkedDeque<T> {
    inner: RwLock<LinkedDeque<T>>,
}

#[cfg(feature = "concurrency")]
impl<T> ConcurrentLinkedDeque<T> {
    /// Creates an empty concurrent deque.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LinkedDeque::new()),
        }
    }

    /// Returns the number of elements in the chain.
    pub fn len(&self) -> usize {
        let deque = self.inner.read();
        deque.len()
    }

    /// Returns `true` if the chain is empty.
    pub fn is_empty(&self) -> bool {
        let deque = self.inner.read();
        deque.is_empty()
    }

    /// Inserts `value` as the new head.
    pub fn push_front(&self, value: T) {
        let mut deque = self.inner.write();
        deque.push_front(value);
    }

    /// Tries to insert at the head without blocking.
    pub fn try_push_front(&self, value: T) -> bool {
        if let Some(mut deque) = self.inner.try_write() {
            deque.push_front(value);
            true
        } else {
            false
        }
    }

    /// Inserts `value` as the new tail.
    pub fn push_back(&self, value: T) {
        let mut deque = self.inner.write();
        deque.push_back(value);
    }

    /// Tries to insert at the tail without blocking.
    pub fn try_push_back(&self, value: T) -> bool {
        if let Some(mut deque) = self.inner.try_write() {
            deque.push_back(value);
            true
        } else {
            false
        }
    }

    /// Runs `f` on a shared reference to the head element.
    pub fn first_with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, NoSuchElementError> {
        let deque = self.inner.read();
        deque.first().map(f)
    }

    /// Tries to run `f` on the head element without blocking.
    pub fn try_first_with<R>(
        &self,
        f: impl FnOnce(&T) -> R,
    ) -> Option<Result<R, NoSuchElementError>> {
        let deque = self.inner.try_read()?;
        Some(deque.first().map(f))
    }

    /// Runs `f` on a shared reference to the tail element.
    pub fn last_with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, NoSuchElementError> {
        let deque = self.inner.read();
        deque.last().map(f)
    }

    /// Tries to run `f` on the tail element without blocking.
    pub fn try_last_with<R>(
        &self,
        f: impl FnOnce(&T) -> R,
    ) -> Option<Result<R, NoSuchElementError>> {
        let deque = self.inner.try_read()?;
        Some(deque.last().map(f))
    }

    /// Runs `f` on the head element, or returns `None` on an empty chain.
    pub fn peek_first_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let deque = self.inner.read();
        deque.peek_first().map(f)
    }

    /// Tries to run `f` on the head element without blocking.
    pub fn try_peek_first_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let deque = self.inner.try_read()?;
        deque.peek_first().map(f)
    }

    /// Runs `f` on the tail element, or returns `None` on an empty chain.
    pub fn peek_last_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let deque = self.inner.read();
        deque.peek_last().map(f)
    }

    /// Tries to run `f` on the tail element without blocking.
    pub fn try_peek_last_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let deque = self.inner.try_read()?;
        deque.peek_last().map(f)
    }

    /// Runs `f` on the head element, or returns `None` on an empty chain.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.peek_first_with(f)
    }

    /// Unlinks and returns the head element, failing on an empty chain.
    pub fn remove_first(&self) -> Result<T, NoSuchElementError> {
        let mut deque = self.inner.write();
        deque.remove_first()
    }

    /// Tries to unlink the head element without blocking.
    pub fn try_remove_first(&self) -> Option<Result<T, NoSuchElementError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_first())
    }

    /// Unlinks and returns the tail element, failing on an empty chain.
    pub fn remove_last(&self) -> Result<T, NoSuchElementError> {
        let mut deque = self.inner.write();
        deque.remove_last()
    }

    /// Tries to unlink the tail element without blocking.
    pub fn try_remove_last(&self) -> Option<Result<T, NoSuchElementError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_last())
    }

    /// Unlinks and returns the head element, or `None` on an empty chain.
    pub fn poll_first(&self) -> Option<T> {
        let mut deque = self.inner.write();
        deque.poll_first()
    }

    /// Tries to unlink the head element without blocking.
    pub fn try_poll_first(&self) -> Option<Option<T>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.poll_first())
    }

    /// Unlinks and returns the tail element, or `None` on an empty chain.
    pub fn poll_last(&self) -> Option<T> {
        let mut deque = self.inner.write();
        deque.poll_last()
    }

    /// Tries to unlink the tail element without blocking.
    pub fn try_poll_last(&self) -> Option<Option<T>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.poll_last())
    }

    /// Runs `f` on a shared reference to the element at `index`.
    pub fn get_with<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Result<R, ArgumentError> {
        let deque = self.inner.read();
        deque.get(index).map(f)
    }

    /// Tries to run `f` on the element at `index` without blocking.
    pub fn try_get_with<R>(
        &self,
        index: usize,
        f: impl FnOnce(&T) -> R,
    ) -> Option<Result<R, ArgumentError>> {
        let deque = self.inner.try_read()?;
        Some(deque.get(index).map(f))
    }

    /// Replaces the element at `index`, returning the displaced element.
    pub fn set(&self, index: usize, value: T) -> Result<T, ArgumentError> {
        let mut deque = self.inner.write();
        deque.set(index, value)
    }

    /// Tries to replace the element at `index` without blocking.
    pub fn try_set(&self, index: usize, value: T) -> Option<Result<T, ArgumentError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.set(index, value))
    }

    /// Inserts `value` before the node at `index`.
    pub fn insert(&self, index: usize, value: T) -> Result<(), ArgumentError> {
        let mut deque = self.inner.write();
        deque.insert(index, value)
    }

    /// Tries to insert `value` at `index` without blocking.
    pub fn try_insert(&self, index: usize, value: T) -> Option<Result<(), ArgumentError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.insert(index, value))
    }

    /// Unlinks and returns the element at `index`.
    pub fn remove_at(&self, index: usize) -> Result<T, ArgumentError> {
        let mut deque = self.inner.write();
        deque.remove_at(index)
    }

    /// Tries to unlink the element at `index` without blocking.
    pub fn try_remove_at(&self, index: usize) -> Option<Result<T, ArgumentError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_at(index))
    }

    /// Unlinks the first element equal to `value`.
    ///
    /// The search and the unlink share one write acquisition, so no other
    /// writer can invalidate the found node between the two steps.
    pub fn remove_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut deque = self.inner.write();
        deque.remove_value(value)
    }

    /// Tries to unlink the first element equal to `value` without blocking.
    pub fn try_remove_value(&self, value: &T) -> Option<bool>
    where
        T: PartialEq,
    {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_value(value))
    }

    /// Unlinks the first occurrence of `value` walking from the head.
    pub fn remove_first_occurrence(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut deque = self.inner.write();
        deque.remove_first_occurrence(value)
    }

    /// Tries to unlink the first occurrence of `value` without blocking.
    pub fn try_remove_first_occurrence(&self, value: &T) -> Option<bool>
    where
        T: PartialEq,
    {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_first_occurrence(value))
    }

    /// Unlinks the last occurrence of `value` walking from the tail.
    pub fn remove_last_occurrence(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut deque = self.inner.write();
        deque.remove_last_occurrence(value)
    }

    /// Tries to unlink the last occurrence of `value` without blocking.
    pub fn try_remove_last_occurrence(&self, value: &T) -> Option<bool>
    where
        T: PartialEq,
    {
        let mut deque = self.inner.try_write()?;
        Some(deque.remove_last_occurrence(value))
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let deque = self.inner.read();
        deque.index_of(value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let deque = self.inner.read();
        deque.contains_value(value)
    }

    /// Returns `true` if every element of `values` is present.
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        let deque = self.inner.read();
        deque.contains_all(values)
    }

    /// Stack push: inserts at the head.
    pub fn push(&self, value: T) {
        let mut deque = self.inner.write();
        deque.push(value);
    }

    /// Tries to push at the head without blocking; `false` if the lock is
    /// held.
    pub fn try_push(&self, value: T) -> bool {
        if let Some(mut deque) = self.inner.try_write() {
            deque.push(value);
            true
        } else {
            false
        }
    }

    /// Stack pop: unlinks and returns the tail element.
    pub fn pop(&self) -> Result<T, NoSuchElementError> {
        let mut deque = self.inner.write();
        deque.pop()
    }

    /// Tries to pop the tail element without blocking.
    pub fn try_pop(&self) -> Option<Result<T, NoSuchElementError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.pop())
    }

    /// Inserts at the head, reporting success instead of failing.
    pub fn offer_first(&self, value: T) -> bool {
        let mut deque = self.inner.write();
        deque.offer_first(value)
    }

    /// Inserts at the tail, reporting success instead of failing.
    pub fn offer_last(&self, value: T) -> bool {
        let mut deque = self.inner.write();
        deque.offer_last(value)
    }

    /// Appends at the tail, reporting success instead of failing.
    pub fn offer(&self, value: T) -> bool {
        let mut deque = self.inner.write();
        deque.offer(value)
    }

    /// Unlinks and returns the head element, or `None` on an empty chain.
    pub fn poll(&self) -> Option<T> {
        let mut deque = self.inner.write();
        deque.poll()
    }

    /// Appends a batch of elements under one write acquisition.
    pub fn append_all(&self, values: impl IntoIterator<Item = T>) -> bool {
        let mut deque = self.inner.write();
        deque.append_all(values)
    }

    /// Tries to append a batch of elements without blocking.
    pub fn try_append_all(&self, values: impl IntoIterator<Item = T>) -> Option<bool> {
        let mut deque = self.inner.try_write()?;
        Some(deque.append_all(values))
    }

    /// Inserts a batch of elements at `index` under one write acquisition.
    pub fn insert_all(
        &self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<bool, ArgumentError> {
        let mut deque = self.inner.write();
        deque.insert_all(index, values)
    }

    /// Tries to insert a batch of elements at `index` without blocking.
    pub fn try_insert_all(
        &self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Option<Result<bool, ArgumentError>> {
        let mut deque = self.inner.try_write()?;
        Some(deque.insert_all(index, values))
    }

    /// Comparator sort is not implemented by the linked variant.
    pub fn sort_by<F>(&self, compare: F) -> Result<(), UnsupportedError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut deque = self.inner.write();
        deque.sort_by(compare)
    }

    /// Bulk element replacement is not implemented by the linked variant.
    pub fn replace_all<F>(&self, op: F) -> Result<(), UnsupportedError>
    where
        F: FnMut(&T) -> T,
    {
        let mut deque = self.inner.write();
        deque.replace_all(op)
    }

    /// Descending traversal is not implemented by the linked variant.
    pub fn iter_descending(&self) -> Result<std::vec::IntoIter<T>, UnsupportedError>
    where
        T: Clone,
    {
        let deque = self.inner.read();
        deque
            .iter_descending()
            .map(|iter| iter.cloned().collect::<Vec<_>>().into_iter())
    }

    /// Positional cursors are not implemented by the linked variant.
    pub fn cursor_at(&self, index: usize) -> Result<std::vec::IntoIter<T>, UnsupportedError>
    where
        T: Clone,
    {
        let deque = self.inner.read();
        deque
            .cursor_at(index)
            .map(|iter| iter.cloned().collect::<Vec<_>>().into_iter())
    }

    /// Sub-range views are not implemented by the linked variant.
    pub fn sub_range(
        &self,
        from: usize,
        to: usize,
    ) -> Result<std::vec::IntoIter<T>, UnsupportedError>
    where
        T: Clone,
    {
        let deque = self.inner.read();
        deque
            .sub_range(from, to)
            .map(|iter| iter.cloned().collect::<Vec<_>>().into_iter())
    }

    /// Frees every node.
    pub fn clear(&self) {
        let mut deque = self.inner.write();
        deque.clear();
    }

    /// Tries to clear without blocking; `false` if the lock is held.
    pub fn try_clear(&self) -> bool {
        if let Some(mut deque) = self.inner.try_write() {
            deque.clear();
            true
        } else {
            false
        }
    }

    /// Returns a snapshot of the elements in head→tail order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let deque = self.inner.read();
        deque.to_vec()
    }

    /// Returns an iterator over a snapshot taken under one read acquisition.
    ///
    /// Traversal happens after the lock is released; later mutation of the
    /// deque does not affect the snapshot.
    pub fn iter(&self) -> std::vec::IntoIter<T>
    where
        T: Clone,
    {
        self.to_vec().into_iter()
    }
}

#[cfg(feature = "concurrency")]
impl<T> Default for ConcurrentLinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}
