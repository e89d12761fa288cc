//! Ordered text queues over shared slab storage.
//!
//! This crate provides a deque of owned text values built on a
//! doubly-linked list whose nodes live in a shared [`Arena`], plus a set
//! of in-place, order-sensitive transformations: reversal, grouped
//! reversal, sorted-run deduplication, dominance filtering, partition
//! sort, and k-way merge of sorted queues.
//!
//! # Design
//!
//! The queue separates storage from structure: the [`Arena`] owns the
//! nodes (payload plus prev/next indices, backed by `slab`), while a
//! [`Queue`] is a small handle tracking head, tail, and length. Because
//! many queues can share one arena, moving an element between queues —
//! during merge, sort partitioning, or grouped reversal — relinks a pair
//! of indices and never copies or reallocates the payload.
//!
//! Every operation takes the arena explicitly; `&mut` receivers make the
//! single-owner discipline a compile-time guarantee rather than a
//! documentation note.
//!
//! # Quick start
//!
//! ```
//! use textq::{Arena, Queue};
//!
//! let mut arena = Arena::new();
//! let mut queue = Queue::new();
//!
//! queue.push_back(&mut arena, "delta");
//! queue.push_back(&mut arena, "alpha");
//! queue.push_back(&mut arena, "charlie");
//!
//! queue.sort(&mut arena, false);
//! assert_eq!(queue.iter(&arena).collect::<Vec<_>>(), ["alpha", "charlie", "delta"]);
//!
//! queue.reverse(&mut arena);
//! assert_eq!(queue.pop_front(&mut arena).as_deref(), Some("delta"));
//! ```
//!
//! # Merging sorted queues
//!
//! ```
//! use textq::{Arena, Queue, QueueGroup};
//!
//! let mut arena = Arena::new();
//! let mut group = QueueGroup::new();
//!
//! for chunk in [["ant", "fox"], ["bee", "owl"]] {
//!     let mut queue = Queue::new();
//!     for v in chunk {
//!         queue.push_back(&mut arena, v);
//!     }
//!     group.push(queue);
//! }
//!
//! let merged = group.merge(&mut arena, false).unwrap();
//! assert_eq!(
//!     merged.iter(&arena).collect::<Vec<_>>(),
//!     ["ant", "bee", "fox", "owl"],
//! );
//! ```

#![warn(missing_docs)]

pub mod arena;
pub mod group;
mod list;
pub mod queue;

pub use arena::Arena;
pub use group::QueueGroup;
pub use queue::{Iter, Queue};
