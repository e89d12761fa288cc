//! Merging many sorted queues into one.
//!
//! A [`QueueGroup`] is a short-lived, ordered collection of [`Queue`]
//! handles over one shared [`Arena`]. Merging relinks elements between
//! the queues' lists; no payload is copied or freed in the process.

use crate::arena::Arena;
use crate::list::List;
use crate::queue::Queue;

/// An ordered collection of queue handles, consumed by
/// [`merge`](QueueGroup::merge).
///
/// Entries are handles, not copies: a queue moved into a group is gone
/// from the caller, so no element can end up owned twice.
///
/// # Example
///
/// ```
/// use textq::{Arena, Queue, QueueGroup};
///
/// let mut arena = Arena::new();
///
/// let mut odds = Queue::new();
/// for v in ["1", "3", "5"] {
///     odds.push_back(&mut arena, v);
/// }
/// let mut evens = Queue::new();
/// for v in ["2", "4"] {
///     evens.push_back(&mut arena, v);
/// }
///
/// let mut group = QueueGroup::new();
/// group.push(odds);
/// group.push(evens);
///
/// let mut merged = group.merge(&mut arena, false).unwrap();
/// assert_eq!(merged.len(), 5);
/// assert_eq!(merged.pop_front(&mut arena).as_deref(), Some("1"));
/// ```
#[derive(Debug, Default)]
pub struct QueueGroup {
    entries: Vec<Queue>,
}

impl QueueGroup {
    /// Creates an empty group.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a queue to the group.
    pub fn push(&mut self, queue: Queue) {
        self.entries.push(queue);
    }

    /// Returns the number of queues in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group holds no queues.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges every queue in the group into one sorted queue.
    ///
    /// Caller contract (unchecked): each entry is already sorted in the
    /// target direction; ascending when `descending` is false. The result
    /// for unsorted inputs is defined only by the pairwise walk below.
    ///
    /// Returns `None` on an empty group. A single-entry group returns
    /// that queue unchanged. Otherwise each pass merges adjacent pairs
    /// until one queue holds every element; emptied handles are
    /// discarded. Elements from the same source queue keep their relative
    /// order, and on equal values the pair's left (earlier) queue wins;
    /// no stability is guaranteed across sources beyond that.
    pub fn merge(mut self, arena: &mut Arena, descending: bool) -> Option<Queue> {
        while self.entries.len() > 1 {
            let round = core::mem::take(&mut self.entries);
            let mut pairs = round.into_iter();
            while let Some(mut left) = pairs.next() {
                if let Some(mut right) = pairs.next() {
                    merge_pair(arena, &mut left, &mut right, descending);
                    // `right` is empty now; its handle is dropped here
                }
                self.entries.push(left);
            }
        }
        self.entries.pop()
    }
}

impl FromIterator<Queue> for QueueGroup {
    fn from_iter<I: IntoIterator<Item = Queue>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Linear two-pointer merge of `right` into `left`.
///
/// Repeatedly relinks the smaller head (larger under `descending`) onto
/// the output tail; ties take `left`'s element. Once either input runs
/// out the remainder splices over in O(1).
fn merge_pair(arena: &mut Arena, left: &mut Queue, right: &mut Queue, descending: bool) {
    let mut out = List::new();

    while !left.list.is_empty() && !right.list.is_empty() {
        let lh = left.list.head();
        let rh = right.list.head();
        let take_left = if descending {
            arena.value(lh) >= arena.value(rh)
        } else {
            arena.value(lh) <= arena.value(rh)
        };
        if take_left {
            left.list.unlink(arena, lh);
            out.link_back(arena, lh);
        } else {
            right.list.unlink(arena, rh);
            out.link_back(arena, rh);
        }
    }

    out.append(arena, &mut left.list);
    out.append(arena, &mut right.list);
    left.list = out;
}
