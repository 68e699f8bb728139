//! This crate provides a doubly-linked sequence container, [`List`], together
//! with the adapter types built on it: [`Queue`] (first-in first-out) and
//! [`Stack`] (last-in first-out). [`Pair`] is a small two-field value type
//! with lexicographic ordering, handy as a list element.
//!
//! The [`List`] allows inserting and removing elements at any cursor position
//! in constant time. In compromise, reaching a position takes *O*(*n*) time;
//! there is no random access.
//!
//! A quick example:
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3, and remove it
//! assert_eq!(cursor.remove(), Some(3));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! Every list owns one **sentinel node** for its whole lifetime, allocated on
//! construction and freed on drop. The sentinel stores no value; its `next`
//! link points at the first element and its `prev` link at the last, so the
//! chain is cyclic and every node always has two live neighbours:
//!
//! ```text
//!     ┌──→ [sentinel] ──→ [node 0] ──→ [node 1] ──→ ┄┄ ──→ [node n-1] ──┐
//!     │                                                                 │
//!     └─────────────────────────────────────────────────────────────────┘
//!                       (prev links mirror next links)
//! ```
//!
//! An empty list is the sentinel linked to itself. This gives `push_front`
//! and `push_back` a stable anchor with no null links and no per-push
//! sentinel churn.
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] are double-ended, fused iterators over the
//! elements, excluding the sentinel. [`IntoIter`] consumes the list.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are non-owning positions in a list. A list of
//! length *n* has *n* + 1 cursor positions: one per element plus the **end
//! position** (the sentinel). Dereferencing the end position yields `None`,
//! and the checked movement methods refuse to step across it, so the
//! traversal range `[start, end)` stays half-open.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut cursor = list.cursor_start();
//! assert_eq!(cursor.current(), Some(&1));
//!
//! cursor.seek_forward(2).unwrap();
//! assert_eq!(cursor.current(), Some(&3));
//!
//! cursor.move_next().unwrap(); // now at the end position
//! assert_eq!(cursor.current(), None);
//! assert!(cursor.move_next().is_err()); // refuses to wrap
//! ```
//!
//! [`CursorMut`] additionally edits the list at its position: [`insert`],
//! [`insert_after`], [`remove`], [`backspace`], [`split`], [`splice`].
//!
//! # Algorithms
//!
//! [`List::sort`] orders elements ascending by `<` through pairwise
//! compare-and-swap (quadratic, no stability guarantee), and
//! [`List::reverse`] flips the sequence in place by swapping values from
//! both ends inward. Both operate directly on the node chain.
//!
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{Drain, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use pair::Pair;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;

pub mod list;
pub mod pair;
pub mod queue;
pub mod stack;

mod experiments;
