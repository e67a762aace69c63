//! This crate provides a singly-linked list with owned nodes, anchored by a
//! ghost node.
//!
//! The [`List`] allows inserting and removing elements at the front in constant
//! time, and inserting after any node a cursor points to. In compromise, it only
//! moves forward: accessing an element at a given index takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//!
//! // Literal sequences are pushed to the front one by one.
//! let mut list = List::from([3, 2, 1]);
//! assert_eq!(list.front(), Some(&1));
//!
//! let mut cursor = list.begin_mut();
//! cursor.insert_after(5); // insert 5 after the first element
//! assert_eq!(cursor.peek_next(), Some(&5));
//! assert_eq!(cursor.view(), &List::from([3, 2, 5, 1]));
//!
//! // Split the list at the first element equal to 2.
//! let suffix = list.split_when(|&x| x == 2);
//! assert_eq!(list, List::from([5, 1]));
//! assert_eq!(suffix, List::from([3, 2]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ┌───────────┐           ┌───────────┐           ┌───────────┐
//!    │   next    │ ────────→ │   next    │ ────────→ │   next    │ ──→ ┄┄ ──→ None
//!    ├╌╌╌╌╌╌╌╌╌╌╌┤           ├───────────┤           ├───────────┤
//!    ┊No payload ┊           │ payload T │           │ payload T │
//!    └╌╌╌╌╌╌╌╌╌╌╌┘           └───────────┘           └───────────┘
//!     Ghost Node                Node 0                  Node 1
//!          ↑
//!    ╔═══════════╗
//!    ║   ghost   ║
//!    ╟───────────╢
//!    ║    len    ║
//!    ╚═══════════╝
//!        List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node, which has *NO* payload,
//!   and whose `next` pointer points to the first node (or is `None` in an
//!   empty list);
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next node (or is `None` if it is the
//!   last node in the list), which owns that node;
//! - the actual payload `T` that depends on the element type of the list.
//!
//! The ghost node is allocated on heap as well, so inserting at the front is the
//! same operation as inserting after any other node.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1. The ghost node sits before index 0 ("before begin"), and the end of
//! the list is indexed by *n*. Together they form the [`Position`]s of a list.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! forward, exact-size and fused iterators. [`IterMut`] provides mutability of
//! the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([3, 2, 1]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! In a list with length *n*, there are *n* + 2 valid locations for a cursor:
//! the ghost node, the nodes 0, 1, ..., *n* - 1, and the end. A cursor borrows
//! the list, so it can never outlive a node it points to. To remember a place
//! after the borrow ends, take its [`Position`].
//!
//! Cursors can also be used as iterators via [`CursorIter`], yielding the
//! elements from the cursor to the end.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let list = List::from([3, 2, 1]);
//! // Create a cursor iterator
//! let mut cursor_iter = list.begin().into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), None);
//! assert_eq!(cursor_iter.next(), None); // Fused
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides constant time ways to mutate the list after the cursor.
//! - [`insert_after`]: insert a new item right after the cursor;
//! - [`split_after`]: split the list into a new one, from the node after the
//!   cursor to the end.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([4, 3, 2, 1]);
//!
//! let mut cursor = list.before_begin_mut();
//!
//! cursor.insert_after(0); // becomes [0, 1, 2, 3, 4], stays before begin
//! assert_eq!(cursor.peek_next(), Some(&0));
//!
//! assert!(cursor.seek_forward(3).is_ok());
//! assert_eq!(cursor.current(), Some(&2));
//!
//! let tail = cursor.split_after(); // becomes [0, 1, 2]
//! assert_eq!(Vec::from_iter(tail), vec![3, 4]);
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Algorithms
//!
//! - [`split_when`]: split the list at the first element satisfying a predicate;
//! - [`assign`]: replace the contents in the order of a sequence, reusing nodes;
//! - [`resize`]: grow or shrink the list at the back.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Position`]: crate::Position
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorIter`]: crate::list::cursor::CursorIter
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`split_after`]: crate::list::cursor::CursorMut::split_after
//! [`split_when`]: crate::List::split_when
//! [`assign`]: crate::List::assign
//! [`resize`]: crate::List::resize

#[doc(inline)]
pub use list::cursor::Position;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;
