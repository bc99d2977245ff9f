//! Boundary overlap reconciliation.
//!
//! Adjacent chunks can repeat a line across their boundary: the last line of
//! one chunk shows up again as the first line of the next. Before a chunk is
//! delivered the repeated line is stripped from the chunk behind it.

use std::collections::VecDeque;

use crate::core::Chunk;

/// Reconciles `next` against the chunk delivered before it.
///
/// If the trimmed last line of `head` equals the trimmed first line of
/// `next` (case-sensitive), that first line is removed from `next`. Returns
/// `None` when nothing of `next` is left. `head` is never altered and at most
/// one line is removed.
///
/// # Examples
///
/// ```
/// use cembot_relay::chunking::reconcile;
/// use cembot_relay::core::Chunk;
///
/// let head = Chunk::from("one\ntwo");
/// let next = reconcile(&head, Chunk::from("two\nthree"));
/// assert_eq!(next, Some(Chunk::from("three")));
///
/// assert_eq!(reconcile(&head, Chunk::from("two")), None);
/// ```
#[must_use]
pub fn reconcile(head: &Chunk, next: Chunk) -> Option<Chunk> {
    if next.content.trim().is_empty() || head.last_line() != next.first_line() {
        return Some(next);
    }

    let rest = next
        .content
        .split_once('\n')
        .map_or("", |(_, rest)| rest)
        .trim();

    if rest.is_empty() {
        None
    } else {
        Some(Chunk {
            content: rest.to_string(),
            hard_split: next.hard_split,
        })
    }
}

/// Reconciles the first two chunks of `chunks` in place.
///
/// The second chunk is replaced by its reconciled form, or removed if it
/// vanished. Returns `true` if a line was stripped.
pub fn reconcile_front(chunks: &mut VecDeque<Chunk>) -> bool {
    if chunks.len() < 2 {
        return false;
    }
    let Some(next) = chunks.remove(1) else {
        return false;
    };
    let before = next.content.len();

    match reconcile(&chunks[0], next) {
        Some(updated) => {
            let stripped = updated.content.len() != before;
            chunks.insert(1, updated);
            stripped
        }
        None => true,
    }
}
