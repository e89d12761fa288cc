//! Text queue: deque operations plus in-place, order-sensitive
//! transformations.
//!
//! A [`Queue`] is a handle over nodes stored in an [`Arena`]. Several
//! queues can share one arena, which lets the k-way merge in
//! [`crate::group`] move elements between queues by relinking alone.
//!
//! Operations fall into three layers:
//!
//! - basic deque operations (`push_front` .. `pop_back_into`, `len`),
//! - structural transforms that only manipulate links
//!   ([`remove_middle`](Queue::remove_middle) .. [`reverse_chunks`](Queue::reverse_chunks)),
//! - ordering algorithms driven by payload comparison
//!   ([`sort`](Queue::sort), [`retain_ascending`](Queue::retain_ascending),
//!   [`retain_descending`](Queue::retain_descending)).
//!
//! Comparison is always byte-wise lexicographic on the payload.

use crate::arena::{Arena, NIL};
use crate::list::List;

/// An ordered container of text values, rooted in a shared [`Arena`].
///
/// The handle itself is tiny and allocation-free; all element storage is
/// in the arena. A queue exclusively owns the nodes reachable from it,
/// and every operation that removes a node either returns the owned
/// payload or frees it, never both.
///
/// # Example
///
/// ```
/// use textq::{Arena, Queue};
///
/// let mut arena = Arena::new();
/// let mut queue = Queue::new();
///
/// queue.push_back(&mut arena, "delta");
/// queue.push_back(&mut arena, "alpha");
/// queue.push_back(&mut arena, "charlie");
///
/// queue.sort(&mut arena, false);
///
/// assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("alpha"));
/// assert_eq!(queue.pop_back(&mut arena).as_deref(), Some("delta"));
/// ```
#[derive(Debug)]
pub struct Queue {
    pub(crate) list: List,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    // ========================================================================
    // Basic operations
    // ========================================================================

    /// Returns the number of elements, O(1).
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts a copy of `text` at the front.
    pub fn push_front(&mut self, arena: &mut Arena, text: &str) {
        let id = arena.alloc(text);
        self.list.link_front(arena, id);
    }

    /// Inserts a copy of `text` at the back.
    pub fn push_back(&mut self, arena: &mut Arena, text: &str) {
        let id = arena.alloc(text);
        self.list.link_back(arena, id);
    }

    /// Removes the front element, handing its payload to the caller.
    ///
    /// Returns `None` on an empty queue.
    pub fn pop_front(&mut self, arena: &mut Arena) -> Option<String> {
        let id = self.list.take_front(arena)?;
        Some(arena.free(id))
    }

    /// Removes the back element, handing its payload to the caller.
    ///
    /// Returns `None` on an empty queue.
    pub fn pop_back(&mut self, arena: &mut Arena) -> Option<String> {
        let id = self.list.take_back(arena)?;
        Some(arena.free(id))
    }

    /// Removes the front element, copying its payload into `buf`.
    ///
    /// At most `buf.len() - 1` bytes are copied and a NUL terminator is
    /// appended; longer payloads are silently clipped. Nothing is written
    /// to an empty `buf`. Returns `false` on an empty queue, which leaves
    /// `buf` untouched.
    pub fn pop_front_into(&mut self, arena: &mut Arena, buf: &mut [u8]) -> bool {
        match self.pop_front(arena) {
            Some(value) => {
                copy_clipped(&value, buf);
                true
            }
            None => false,
        }
    }

    /// Removes the back element, copying its payload into `buf`.
    ///
    /// Same buffer contract as [`pop_front_into`](Queue::pop_front_into).
    pub fn pop_back_into(&mut self, arena: &mut Arena, buf: &mut [u8]) -> bool {
        match self.pop_back(arena) {
            Some(value) => {
                copy_clipped(&value, buf);
                true
            }
            None => false,
        }
    }

    /// Returns the front payload without removing it.
    pub fn front<'a>(&self, arena: &'a Arena) -> Option<&'a str> {
        if self.list.head() == NIL {
            None
        } else {
            Some(arena.value(self.list.head()))
        }
    }

    /// Returns the back payload without removing it.
    pub fn back<'a>(&self, arena: &'a Arena) -> Option<&'a str> {
        if self.list.tail() == NIL {
            None
        } else {
            Some(arena.value(self.list.tail()))
        }
    }

    /// Returns a double-ended iterator over payloads, front to back.
    pub fn iter<'a>(&self, arena: &'a Arena) -> Iter<'a> {
        Iter {
            arena,
            front: self.list.head(),
            back: self.list.tail(),
        }
    }

    /// Frees every element. The handle survives, empty.
    ///
    /// Dropping a `Queue` without clearing leaves its nodes in the arena;
    /// they are reclaimed when the arena is dropped.
    pub fn clear(&mut self, arena: &mut Arena) {
        self.list.clear(arena);
    }

    // ========================================================================
    // Structural transforms (link manipulation only)
    // ========================================================================

    /// Removes the structural middle element; for even lengths, the one
    /// closer to the tail. Returns `false` on an empty queue.
    ///
    /// Two cursors sweep inward from both ends until they meet (odd
    /// length) or become adjacent (even length).
    pub fn remove_middle(&mut self, arena: &mut Arena) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut first = self.list.head();
        let mut second = self.list.tail();
        while first != second && arena.node(first).next != second {
            first = arena.node(first).next;
            second = arena.node(second).prev;
        }

        // Cursors met on the middle node, or stopped adjacent with
        // `second` the tail-side candidate.
        self.list.unlink(arena, second);
        arena.free(second);
        true
    }

    /// Removes every maximal run of adjacent equal values, keeping only
    /// values that appear exactly once. Returns `false` on an empty queue.
    ///
    /// Caller contract: the queue must already be sorted by value;
    /// on unsorted input only adjacent runs are removed.
    pub fn dedup_sorted(&mut self, arena: &mut Arena) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut run = false;
        let mut cur = self.list.head();
        while cur != NIL {
            let next = arena.node(cur).next;
            let in_run = next != NIL && arena.value(cur) == arena.value(next);
            if in_run || run {
                self.list.unlink(arena, cur);
                arena.free(cur);
            }
            run = in_run;
            cur = next;
        }
        true
    }

    /// Exchanges the link positions of consecutive pairs (1st with 2nd,
    /// 3rd with 4th, ...). An odd final element stays in place. Payloads
    /// are never copied.
    pub fn swap_pairs(&mut self, arena: &mut Arena) {
        let mut cur = self.list.head();
        while cur != NIL {
            let partner = arena.node(cur).next;
            if partner == NIL {
                break;
            }
            self.list.unlink(arena, cur);
            self.list.link_after(arena, partner, cur);
            // `cur` now precedes the next pair
            cur = arena.node(cur).next;
        }
    }

    /// Reverses element order in place, O(n), no allocation.
    pub fn reverse(&mut self, arena: &mut Arena) {
        self.list.reverse(arena);
    }

    /// Reverses each complete run of `k` consecutive elements, keeping
    /// run order; a final shorter run is left untouched.
    ///
    /// `k <= 1` is a no-op; `k == len` reverses the whole queue; `k > len`
    /// reverses nothing. Each full group is cut off the front, reversed
    /// independently, and spliced onto the result, so every group's
    /// reversal stays O(k) link work.
    pub fn reverse_chunks(&mut self, arena: &mut Arena, k: usize) {
        if k <= 1 || self.len() < k {
            return;
        }

        let groups = self.len() / k;
        let mut out = List::new();
        for _ in 0..groups {
            let mut chunk = self.list.cut_front(arena, k);
            chunk.reverse(arena);
            out.append(arena, &mut chunk);
        }
        out.append(arena, &mut self.list);
        self.list = out;
    }

    // ========================================================================
    // Ordering algorithms (payload comparison)
    // ========================================================================

    /// Sorts the queue by payload, ascending when `descending` is false.
    ///
    /// Recursive partition sort: the first element is unlinked as pivot,
    /// the rest are partitioned around it, both partitions sort
    /// recursively, and the pieces splice back as
    /// `before + pivot + after`. The inequality flips under `descending`,
    /// so both directions run the same partition scheme. Not stable
    /// across equal values.
    pub fn sort(&mut self, arena: &mut Arena, descending: bool) {
        sort_list(arena, &mut self.list, descending);
    }

    /// Deletes every element that has a value not exceeded by the nearest
    /// retained element to its right, leaving a strictly increasing
    /// tail-anchored sequence. Returns the resulting length (0 if the
    /// queue was empty).
    pub fn retain_ascending(&mut self, arena: &mut Arena) -> usize {
        self.retain_from_back(arena, true)
    }

    /// Mirror of [`retain_ascending`](Queue::retain_ascending): leaves a
    /// strictly decreasing tail-anchored sequence. Returns the resulting
    /// length.
    pub fn retain_descending(&mut self, arena: &mut Arena) -> usize {
        self.retain_from_back(arena, false)
    }

    /// Backward dominance sweep shared by the two retain operations.
    ///
    /// `right` is the last retained node, `left` the candidate. The
    /// candidate survives iff `value(right) > value(left)` (ascending) or
    /// `value(right) < value(left)` (descending); equal values are always
    /// deleted. On deletion `right` stays fixed and the next candidate is
    /// the node before it.
    fn retain_from_back(&mut self, arena: &mut Arena, ascending: bool) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut right = self.list.tail();
        let mut left = arena.node(right).prev;
        while left != NIL {
            let keep = if ascending {
                arena.value(right) > arena.value(left)
            } else {
                arena.value(right) < arena.value(left)
            };
            if keep {
                right = left;
                left = arena.node(left).prev;
            } else {
                self.list.unlink(arena, left);
                arena.free(left);
                left = arena.node(right).prev;
            }
        }

        self.len()
    }
}

fn sort_list(arena: &mut Arena, list: &mut List, descending: bool) {
    if list.len() < 2 {
        return;
    }

    let Some(pivot) = list.take_front(arena) else {
        return;
    };

    let mut before = List::new();
    let mut after = List::new();
    while let Some(id) = list.take_front(arena) {
        let goes_before = if descending {
            arena.value(id) > arena.value(pivot)
        } else {
            arena.value(id) < arena.value(pivot)
        };
        if goes_before {
            before.link_back(arena, id);
        } else {
            after.link_back(arena, id);
        }
    }

    sort_list(arena, &mut before, descending);
    sort_list(arena, &mut after, descending);

    before.link_back(arena, pivot);
    before.append(arena, &mut after);
    *list = before;
}

/// Copies at most `buf.len() - 1` bytes of `src` into `buf` and appends a
/// NUL terminator. Returns the number of payload bytes copied. Writes
/// nothing to an empty buffer.
fn copy_clipped(src: &str, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let n = src.len().min(buf.len() - 1);
    buf[..n].copy_from_slice(&src.as_bytes()[..n]);
    buf[n] = 0;
    n
}

/// Double-ended iterator over queue payloads. Created by
/// [`Queue::iter`].
pub struct Iter<'a> {
    arena: &'a Arena,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == NIL {
            return None;
        }

        let node = self.arena.node(self.front);
        if self.front == self.back {
            self.front = NIL;
            self.back = NIL;
        } else {
            self.front = node.next;
        }

        Some(node.value.as_str())
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back == NIL {
            return None;
        }

        let node = self.arena.node(self.back);
        if self.front == self.back {
            self.front = NIL;
            self.back = NIL;
        } else {
            self.back = node.prev;
        }

        Some(node.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(arena: &mut Arena, values: &[&str]) -> Queue {
        let mut queue = Queue::new();
        for v in values {
            queue.push_back(arena, v);
        }
        queue
    }

    fn values(queue: &Queue, arena: &Arena) -> Vec<String> {
        queue.iter(arena).map(str::to_owned).collect()
    }

    #[test]
    fn push_pop_fifo() {
        let mut arena = Arena::new();
        let mut queue = Queue::new();

        queue.push_back(&mut arena, "a");
        queue.push_back(&mut arena, "b");
        queue.push_back(&mut arena, "c");
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("a"));
        assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("b"));
        assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("c"));
        assert!(queue.pop_front(&mut arena).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn push_pop_lifo() {
        let mut arena = Arena::new();
        let mut queue = Queue::new();

        for v in ["a", "b", "c"] {
            queue.push_back(&mut arena, v);
        }

        assert_eq!(queue.pop_back(&mut arena).as_deref(), Some("c"));
        assert_eq!(queue.pop_back(&mut arena).as_deref(), Some("b"));
        assert_eq!(queue.pop_back(&mut arena).as_deref(), Some("a"));
        assert!(queue.pop_back(&mut arena).is_none());
    }

    #[test]
    fn push_front_reverses_order() {
        let mut arena = Arena::new();
        let mut queue = Queue::new();

        for v in ["a", "b", "c"] {
            queue.push_front(&mut arena, v);
        }

        assert_eq!(values(&queue, &arena), ["c", "b", "a"]);
        queue.list.audit(&arena);
    }

    #[test]
    fn front_back_peek() {
        let mut arena = Arena::new();
        let queue = queue_of(&mut arena, &["a", "b", "c"]);

        assert_eq!(queue.front(&arena), Some("a"));
        assert_eq!(queue.back(&arena), Some("c"));
        assert_eq!(queue.len(), 3);

        let empty = Queue::new();
        assert_eq!(empty.front(&arena), None);
        assert_eq!(empty.back(&arena), None);
    }

    #[test]
    fn pop_into_copies_and_terminates() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["hello"]);

        let mut buf = [0xffu8; 16];
        assert!(queue.pop_front_into(&mut arena, &mut buf));
        assert_eq!(&buf[..6], b"hello\0");
        assert!(queue.is_empty());
    }

    #[test]
    fn pop_into_clips_long_payload() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["abcdefgh"]);

        let mut buf = [0xffu8; 4];
        assert!(queue.pop_back_into(&mut arena, &mut buf));
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn pop_into_empty_queue_leaves_buffer() {
        let mut arena = Arena::new();
        let mut queue = Queue::new();

        let mut buf = [0xffu8; 4];
        assert!(!queue.pop_front_into(&mut arena, &mut buf));
        assert_eq!(&buf, &[0xff; 4]);
    }

    #[test]
    fn copy_clipped_zero_capacity() {
        let mut buf: [u8; 0] = [];
        assert_eq!(copy_clipped("abc", &mut buf), 0);
    }

    #[test]
    fn iter_both_ends() {
        let mut arena = Arena::new();
        let queue = queue_of(&mut arena, &["a", "b", "c"]);

        let forward: Vec<_> = queue.iter(&arena).collect();
        assert_eq!(forward, ["a", "b", "c"]);

        let backward: Vec<_> = queue.iter(&arena).rev().collect();
        assert_eq!(backward, ["c", "b", "a"]);

        let mut iter = queue.iter(&arena);
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.next(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn clear_releases_all() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "c"]);

        queue.clear(&mut arena);
        assert!(queue.is_empty());
        assert!(arena.is_empty());

        // Cleared handle is reusable.
        queue.push_back(&mut arena, "d");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_middle_odd() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "c", "d", "e"]);

        assert!(queue.remove_middle(&mut arena));
        queue.list.audit(&arena);
        assert_eq!(values(&queue, &arena), ["a", "b", "d", "e"]);
    }

    #[test]
    fn remove_middle_even_takes_tail_side() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "c", "d"]);

        assert!(queue.remove_middle(&mut arena));
        assert_eq!(values(&queue, &arena), ["a", "b", "d"]);

        let mut pair = queue_of(&mut arena, &["x", "y"]);
        assert!(pair.remove_middle(&mut arena));
        assert_eq!(values(&pair, &arena), ["x"]);
    }

    #[test]
    fn remove_middle_singleton_and_empty() {
        let mut arena = Arena::new();

        let mut one = queue_of(&mut arena, &["only"]);
        assert!(one.remove_middle(&mut arena));
        assert!(one.is_empty());

        let mut empty = Queue::new();
        assert!(!empty.remove_middle(&mut arena));
    }

    #[test]
    fn dedup_sorted_removes_whole_runs() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["1", "1", "2", "3", "3"]);

        assert!(queue.dedup_sorted(&mut arena));
        queue.list.audit(&arena);
        assert_eq!(values(&queue, &arena), ["2"]);
    }

    #[test]
    fn dedup_sorted_unique_input_unchanged() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "c"]);

        assert!(queue.dedup_sorted(&mut arena));
        assert_eq!(values(&queue, &arena), ["a", "b", "c"]);

        let mut empty = Queue::new();
        assert!(!empty.dedup_sorted(&mut arena));
    }

    #[test]
    fn dedup_sorted_run_of_three() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "b", "b", "c"]);

        queue.dedup_sorted(&mut arena);
        assert_eq!(values(&queue, &arena), ["a", "c"]);
    }

    #[test]
    fn swap_pairs_even_and_odd() {
        let mut arena = Arena::new();

        let mut even = queue_of(&mut arena, &["1", "2", "3", "4"]);
        even.swap_pairs(&mut arena);
        even.list.audit(&arena);
        assert_eq!(values(&even, &arena), ["2", "1", "4", "3"]);

        let mut odd = queue_of(&mut arena, &["1", "2", "3", "4", "5"]);
        odd.swap_pairs(&mut arena);
        odd.list.audit(&arena);
        assert_eq!(values(&odd, &arena), ["2", "1", "4", "3", "5"]);
    }

    #[test]
    fn swap_pairs_short_queues() {
        let mut arena = Arena::new();

        let mut empty = Queue::new();
        empty.swap_pairs(&mut arena);
        assert!(empty.is_empty());

        let mut one = queue_of(&mut arena, &["a"]);
        one.swap_pairs(&mut arena);
        assert_eq!(values(&one, &arena), ["a"]);
    }

    #[test]
    fn reverse_is_involution() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["a", "b", "c", "d"]);

        queue.reverse(&mut arena);
        assert_eq!(values(&queue, &arena), ["d", "c", "b", "a"]);

        queue.reverse(&mut arena);
        assert_eq!(values(&queue, &arena), ["a", "b", "c", "d"]);
    }

    #[test]
    fn reverse_chunks_leaves_remainder() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["1", "2", "3", "4", "5"]);

        queue.reverse_chunks(&mut arena, 2);
        queue.list.audit(&arena);
        assert_eq!(values(&queue, &arena), ["2", "1", "4", "3", "5"]);
    }

    #[test]
    fn reverse_chunks_whole_queue() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["1", "2", "3"]);

        queue.reverse_chunks(&mut arena, 3);
        assert_eq!(values(&queue, &arena), ["3", "2", "1"]);
    }

    #[test]
    fn reverse_chunks_degenerate_k() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["1", "2", "3"]);

        queue.reverse_chunks(&mut arena, 0);
        queue.reverse_chunks(&mut arena, 1);
        queue.reverse_chunks(&mut arena, 4);
        assert_eq!(values(&queue, &arena), ["1", "2", "3"]);
    }

    #[test]
    fn sort_ascending() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["pear", "apple", "plum", "fig", "apple"]);

        queue.sort(&mut arena, false);
        queue.list.audit(&arena);
        assert_eq!(
            values(&queue, &arena),
            ["apple", "apple", "fig", "pear", "plum"]
        );
    }

    #[test]
    fn sort_descending() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["pear", "apple", "plum", "fig"]);

        queue.sort(&mut arena, true);
        assert_eq!(values(&queue, &arena), ["plum", "pear", "fig", "apple"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["c", "a", "b", "a"]);

        queue.sort(&mut arena, false);
        let once = values(&queue, &arena);
        queue.sort(&mut arena, false);
        assert_eq!(values(&queue, &arena), once);
    }

    #[test]
    fn sort_short_queues() {
        let mut arena = Arena::new();

        let mut empty = Queue::new();
        empty.sort(&mut arena, false);
        assert!(empty.is_empty());

        let mut one = queue_of(&mut arena, &["x"]);
        one.sort(&mut arena, true);
        assert_eq!(values(&one, &arena), ["x"]);
    }

    #[test]
    fn retain_ascending_trace() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["3", "1", "4", "1", "5"]);

        assert_eq!(queue.retain_ascending(&mut arena), 2);
        queue.list.audit(&arena);
        assert_eq!(values(&queue, &arena), ["1", "5"]);
    }

    #[test]
    fn retain_ascending_equal_values_deleted() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["2", "2", "2"]);

        assert_eq!(queue.retain_ascending(&mut arena), 1);
        assert_eq!(values(&queue, &arena), ["2"]);
    }

    #[test]
    fn retain_ascending_increasing_input_is_noop() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["1", "2", "3", "4"]);

        assert_eq!(queue.retain_ascending(&mut arena), 4);
        assert_eq!(values(&queue, &arena), ["1", "2", "3", "4"]);
    }

    #[test]
    fn retain_descending_trace() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["3", "1", "4", "1", "5"]);

        assert_eq!(queue.retain_descending(&mut arena), 1);
        assert_eq!(values(&queue, &arena), ["5"]);
    }

    #[test]
    fn retain_descending_decreasing_input_is_noop() {
        let mut arena = Arena::new();
        let mut queue = queue_of(&mut arena, &["9", "5", "2"]);

        assert_eq!(queue.retain_descending(&mut arena), 3);
        assert_eq!(values(&queue, &arena), ["9", "5", "2"]);
    }

    #[test]
    fn retain_on_empty_returns_zero() {
        let mut arena = Arena::new();
        let mut queue = Queue::new();

        assert_eq!(queue.retain_ascending(&mut arena), 0);
        assert_eq!(queue.retain_descending(&mut arena), 0);
    }
}
