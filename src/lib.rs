//! This crate provides a doubly-linked sequence container with owned nodes,
//! implemented as a ring closed by a ghost node.
//!
//! The [`List`] allows pushing and popping elements at both ends in constant
//! time, and removing the first element equal to a value in linear time.
//! Accessing an empty list through [`front`], [`back`], [`pop_front`] or
//! [`pop_back`] is a programming error and panics.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sequence_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! list.push_back(5);
//! assert_eq!(list.front(), &0);
//! assert_eq!(list.back(), &5);
//!
//! assert!(list.remove(&3)); // removes the first 3
//! assert_eq!(list, List::from([0, 1, 2, 4, 5]));
//!
//! let doubled = list.map(|x| x * 2);
//! assert_eq!(doubled, List::from([0, 2, 4, 8, 10]));
//!
//! assert_eq!(list.pop_back(), 5);
//! assert_eq!(list.len(), 4);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node;
//! - a length field `len`, so [`List::len`] takes constant time.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list, except
//!   the ghost node.
//!
//! Note that the ghost node has *NO* payload.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself. The ghost node is both the "one past the end" position
//! of forward traversal and the "one before the start" position of backward
//! traversal.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use sequence_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`RevCursor`] observe one position of a list at a
//! time. A [`Cursor`] walks from the head towards the tail, and a [`RevCursor`]
//! walks from the tail towards the head. Both stop at the terminal sentinel,
//! and advancing past it is a programming error and panics.
//!
//! Cursors borrow the list, so the list cannot be mutated while a cursor is
//! alive.
//!
//! ## Examples
//!
//! ```
//! use sequence_list::List;
//!
//! let list = List::from([1, 2, 3]);
//!
//! let mut cursor = list.rev_cursor_start();
//! assert_eq!(cursor.current(), Some(&3));
//! cursor.move_next();
//! assert_eq!(cursor.current(), Some(&2));
//!
//! // A cursor iterates the rest of the list in its own direction.
//! assert_eq!(Vec::from_iter(cursor), vec![&2, &1]);
//! assert_eq!(Vec::from_iter(list.cursor_start()), vec![&1, &2, &3]);
//! ```
//!
//! # Branded lists
//!
//! The [`branded`] module provides [`GhostList`], a list written in safe Rust
//! on top of `ghost-cell` and `static-rc`.
//!
//! [`front`]: crate::List::front
//! [`back`]: crate::List::back
//! [`pop_front`]: crate::List::pop_front
//! [`pop_back`]: crate::List::pop_back
//! [`GhostList`]: crate::branded::GhostList

#[doc(inline)]
pub use list::cursor::{Cursor, RevCursor};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod branded;
pub mod list;
