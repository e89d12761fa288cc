//! Node storage for text queues.
//!
//! Every queue element lives in an [`Arena`]: a slab of nodes with stable
//! indices and slot reuse. Queues themselves are handles into the arena,
//! so moving an element between queues relinks one index; the payload
//! string never moves or reallocates.

use slab::Slab;

/// Sentinel index meaning "no node". Links at list boundaries hold this.
pub(crate) const NIL: usize = usize::MAX;

/// One queue element: an owned text payload plus its list links.
///
/// Nodes are created unlinked (`prev == next == NIL`) and destroyed by
/// exactly one removal path, which either hands the payload to the caller
/// or drops it.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// Shared node storage for any number of queues.
///
/// All queue operations take the arena explicitly. Using a queue handle
/// with a different arena than the one it was built against is a logic
/// error (same discipline as the `slab` crate); indices will refer to
/// unrelated nodes.
///
/// # Example
///
/// ```
/// use textq::{Arena, Queue};
///
/// let mut arena = Arena::new();
/// let mut queue = Queue::new();
///
/// queue.push_back(&mut arena, "hello");
/// assert_eq!(arena.len(), 1);
///
/// assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("hello"));
/// assert!(arena.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Slab<Node>,
}

impl Arena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Creates an arena with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Returns the number of live nodes across all queues.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no queue owns any node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates an unlinked node holding a copy of `text`.
    ///
    /// The caller's buffer is never aliased; the payload is owned by the
    /// node from this point on.
    #[inline]
    pub(crate) fn alloc(&mut self, text: &str) -> usize {
        self.nodes.insert(Node {
            value: text.to_owned(),
            prev: NIL,
            next: NIL,
        })
    }

    /// Frees a node, returning its payload. The slot becomes reusable.
    #[inline]
    pub(crate) fn free(&mut self, id: usize) -> String {
        self.nodes.remove(id).value
    }

    #[inline]
    pub(crate) fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: usize) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Returns the payload of a live node.
    #[inline]
    pub(crate) fn value(&self, id: usize) -> &str {
        &self.nodes[id].value
    }
}
