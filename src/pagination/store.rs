//! Shared pagination buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::chunking::reconcile_front;
use crate::core::Chunk;

/// Process-wide queue of chunks not yet delivered.
///
/// There is exactly one buffer for the whole process and it is not keyed by
/// caller: every completed query replaces it, and every pagination request
/// drains it, whoever made the query. Each operation runs in a single
/// critical section, so readers never see a partially written buffer.
///
/// # Examples
///
/// ```
/// use cembot_relay::core::Chunk;
/// use cembot_relay::pagination::PaginationStore;
///
/// let store = PaginationStore::new();
/// store.reset(vec![Chunk::from("a\nb"), Chunk::from("b\nc")]);
/// assert_eq!(store.take_next(), Some(Chunk::from("a\nb")));
/// assert_eq!(store.take_next(), Some(Chunk::from("c")));
/// assert_eq!(store.take_next(), None);
/// ```
#[derive(Debug, Default)]
pub struct PaginationStore {
    buffer: Mutex<VecDeque<Chunk>>,
}

impl PaginationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer contents with `chunks`.
    pub fn reset<I>(&self, chunks: I)
    where
        I: IntoIterator<Item = Chunk>,
    {
        let mut buffer = self.lock();
        buffer.clear();
        buffer.extend(chunks);
        tracing::debug!(remaining = buffer.len(), "pagination buffer reset");
    }

    /// Removes and returns the front chunk.
    ///
    /// Before the head is removed, the chunk behind it is reconciled against
    /// it so a repeated boundary line is not served twice.
    pub fn take_next(&self) -> Option<Chunk> {
        let mut buffer = self.lock();
        if reconcile_front(&mut buffer) {
            tracing::debug!("stripped overlapping line from next chunk");
        }
        buffer.pop_front()
    }

    /// Number of chunks waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the waiting chunks, front first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Chunk> {
        self.lock().iter().cloned().collect()
    }

    // A poisoned lock still guards a valid queue.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Chunk>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(items: &[&str]) -> Vec<Chunk> {
        items.iter().copied().map(Chunk::from).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = PaginationStore::new();
        assert!(store.is_empty());
        assert_eq!(store.take_next(), None);
    }

    #[test]
    fn test_take_in_order() {
        let store = PaginationStore::new();
        store.reset(chunks(&["one", "two", "three"]));
        assert_eq!(store.len(), 3);
        assert_eq!(store.take_next(), Some(Chunk::from("one")));
        assert_eq!(store.take_next(), Some(Chunk::from("two")));
        assert_eq!(store.take_next(), Some(Chunk::from("three")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_replaces_contents() {
        let store = PaginationStore::new();
        store.reset(chunks(&["old-1", "old-2"]));
        store.reset(chunks(&["new"]));
        assert_eq!(store.snapshot(), chunks(&["new"]));
    }

    #[test]
    fn test_reset_with_nothing_empties() {
        let store = PaginationStore::new();
        store.reset(chunks(&["left over"]));
        store.reset(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_take_strips_overlap_in_place() {
        let store = PaginationStore::new();
        store.reset(chunks(&["a\nb", "b\nc", "d"]));
        assert_eq!(store.take_next(), Some(Chunk::from("a\nb")));
        assert_eq!(store.snapshot(), chunks(&["c", "d"]));
    }

    #[test]
    fn test_take_removes_vanished_chunk() {
        let store = PaginationStore::new();
        store.reset(chunks(&["a\nb", "b", "e"]));
        assert_eq!(store.take_next(), Some(Chunk::from("a\nb")));
        assert_eq!(store.take_next(), Some(Chunk::from("e")));
        assert_eq!(store.take_next(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        let store = std::sync::Arc::new(PaginationStore::new());
        store.reset((0..100).map(|i| Chunk::from(format!("chunk {i}"))));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    let mut taken = 0;
                    while store.take_next().is_some() {
                        taken += 1;
                    }
                    taken
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 100);
    }
}
