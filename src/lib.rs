//! Slot-backed container data structures.
//!
//! The core of this crate is a doubly-linked list built on the idea of
//! separating storage from structure:
//!
//! ```text
//! Vec<T>         - owns values, indices unstable on removal
//! LinkedList<T>  - owns nodes, pointers invisible, no cross-list moves
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Storage (slot table) - owns nodes, provides stable keys
//! List                 - coordinates keys, doesn't own data
//! ```
//!
//! Benefits:
//! - **Stable keys**: remove from the middle without invalidating other keys
//! - **Zero-copy transfer**: nodes move between lists sharing one storage
//!   without being freed or reallocated
//! - **O(1) primitives**: link/unlink from anywhere given a key
//! - **Splice sorting**: in-place quicksort over the links; keys stay
//!   bound to their values through the sort
//!
//! # Quick Start
//!
//! ```
//! use scds::{List, SlotListStorage};
//!
//! // Storage owns the nodes; the list coordinates keys into it
//! let mut storage: SlotListStorage<u64> = SlotListStorage::with_capacity(16);
//! let mut list: List<u64, SlotListStorage<u64>> = List::new();
//!
//! let key = list.try_push_back(&mut storage, 42).unwrap();
//!
//! assert_eq!(list.get(&storage, key), Some(&42));
//! assert_eq!(list.remove(&mut storage, key), Some(42));
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a list must use the same storage instance, and
//! lists exchanging nodes must share it. This is the caller's
//! responsibility (same discipline as the `slab` crate).
//!
//! # Feature Flags
//!
//! - `slab` - [`Storage`] impl for `slab::Slab` (growable, insertion
//!   never reports [`Full`])
//!
//! A small [`Map`] utility over `std::collections::HashMap` rounds out
//! the crate; it is intentionally not an engineered subsystem.

#![warn(missing_docs)]

pub mod key;
pub mod list;
pub mod map;
pub mod storage;

pub use key::Key;
pub use list::{Iter, IterMut, Keys, List, ListError, ListNode, SlotListStorage};
pub use map::Map;
pub use storage::{Full, SlotStorage, Storage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
