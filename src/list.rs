//! Doubly-linked list handle over arena storage.
//!
//! A [`List`] stores only head, tail, and a cached length; nodes live in
//! the [`Arena`] and embed their own prev/next indices, with [`NIL`]
//! marking the boundary at either end. This gives O(1) insertion and
//! removal at any known node and O(1) splicing of whole lists, without
//! touching payloads.
//!
//! Invariant after every operation here: for each node `n` in the list,
//! `node(n.next).prev == n` and `node(n.prev).next == n`, with the head's
//! `prev` and the tail's `next` equal to `NIL`. An empty list has
//! `head == tail == NIL` and `len == 0`.

use crate::arena::{Arena, NIL};

/// Link-level list handle. Higher-level queue semantics live in
/// [`crate::queue::Queue`]; everything here is pure pointer (index)
/// manipulation.
#[derive(Debug)]
pub(crate) struct List {
    head: usize,
    tail: usize,
    len: usize,
}

impl List {
    /// Creates an empty list.
    pub(crate) const fn new() -> Self {
        Self {
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) const fn tail(&self) -> usize {
        self.tail
    }

    // ========================================================================
    // Link operations (relink only, no alloc/free)
    // ========================================================================

    /// Links an unlinked node at the back.
    pub(crate) fn link_back(&mut self, arena: &mut Arena, id: usize) {
        let node = arena.node_mut(id);
        node.prev = self.tail;
        node.next = NIL;

        if self.tail != NIL {
            arena.node_mut(self.tail).next = id;
        } else {
            self.head = id;
        }

        self.tail = id;
        self.len += 1;
    }

    /// Links an unlinked node at the front.
    pub(crate) fn link_front(&mut self, arena: &mut Arena, id: usize) {
        let node = arena.node_mut(id);
        node.next = self.head;
        node.prev = NIL;

        if self.head != NIL {
            arena.node_mut(self.head).prev = id;
        } else {
            self.tail = id;
        }

        self.head = id;
        self.len += 1;
    }

    /// Links an unlinked node directly after `after`, which must be in
    /// this list.
    pub(crate) fn link_after(&mut self, arena: &mut Arena, after: usize, id: usize) {
        let next = arena.node(after).next;

        let node = arena.node_mut(id);
        node.prev = after;
        node.next = next;

        arena.node_mut(after).next = id;

        if next != NIL {
            arena.node_mut(next).prev = id;
        } else {
            self.tail = id;
        }

        self.len += 1;
    }

    /// Unlinks a node from the list without freeing it. The node's links
    /// are cleared so it can be relinked elsewhere.
    pub(crate) fn unlink(&mut self, arena: &mut Arena, id: usize) {
        let (prev, next) = {
            let node = arena.node(id);
            (node.prev, node.next)
        };

        if prev != NIL {
            arena.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            arena.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        let node = arena.node_mut(id);
        node.prev = NIL;
        node.next = NIL;

        self.len -= 1;
    }

    /// Unlinks and returns the front node's id, or `None` if empty.
    #[inline]
    pub(crate) fn take_front(&mut self, arena: &mut Arena) -> Option<usize> {
        if self.head == NIL {
            return None;
        }
        let id = self.head;
        self.unlink(arena, id);
        Some(id)
    }

    /// Unlinks and returns the back node's id, or `None` if empty.
    #[inline]
    pub(crate) fn take_back(&mut self, arena: &mut Arena) -> Option<usize> {
        if self.tail == NIL {
            return None;
        }
        let id = self.tail;
        self.unlink(arena, id);
        Some(id)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Splices `other` onto the end of this list in O(1), leaving `other`
    /// empty.
    pub(crate) fn append(&mut self, arena: &mut Arena, other: &mut List) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            self.head = other.head;
            self.tail = other.tail;
            self.len = other.len;
        } else {
            arena.node_mut(self.tail).next = other.head;
            arena.node_mut(other.head).prev = self.tail;
            self.tail = other.tail;
            self.len += other.len;
        }

        *other = List::new();
    }

    /// Cuts the first `k` nodes into a new list, O(k). `k` must not
    /// exceed the current length.
    pub(crate) fn cut_front(&mut self, arena: &mut Arena, k: usize) -> List {
        debug_assert!(k <= self.len);

        if k == 0 {
            return List::new();
        }
        if k == self.len {
            return core::mem::replace(self, List::new());
        }

        let mut cut_tail = self.head;
        for _ in 1..k {
            cut_tail = arena.node(cut_tail).next;
        }
        let rest_head = arena.node(cut_tail).next;

        arena.node_mut(cut_tail).next = NIL;
        arena.node_mut(rest_head).prev = NIL;

        let cut = List {
            head: self.head,
            tail: cut_tail,
            len: k,
        };

        self.head = rest_head;
        self.len -= k;

        cut
    }

    /// Reverses the list in place by exchanging each node's links, O(n).
    pub(crate) fn reverse(&mut self, arena: &mut Arena) {
        let mut cur = self.head;
        while cur != NIL {
            let node = arena.node_mut(cur);
            core::mem::swap(&mut node.prev, &mut node.next);
            // prev now holds the old next
            cur = node.prev;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Frees every node in the list. The handle survives, empty.
    pub(crate) fn clear(&mut self, arena: &mut Arena) {
        let mut cur = self.head;
        while cur != NIL {
            let next = arena.node(cur).next;
            arena.free(cur);
            cur = next;
        }
        *self = List::new();
    }

    /// Walks the list and checks every link invariant. Test-only.
    #[cfg(test)]
    pub(crate) fn audit(&self, arena: &Arena) {
        if self.head == NIL {
            assert_eq!(self.tail, NIL);
            assert_eq!(self.len, 0);
            return;
        }

        assert_eq!(arena.node(self.head).prev, NIL);
        assert_eq!(arena.node(self.tail).next, NIL);

        let mut count = 0;
        let mut prev = NIL;
        let mut cur = self.head;
        while cur != NIL {
            assert_eq!(arena.node(cur).prev, prev);
            prev = cur;
            cur = arena.node(cur).next;
            count += 1;
        }

        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);
    }
}
