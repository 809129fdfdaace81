//! # Forward List
//!
//! A singly linked list of owned values with a before-begin sentinel, so that
//! insertion and removal take O(1) *after* any position, front included.
//!
//! ## Core Components
//!
//! - [`ForwardList`]: the container. It owns every node and keeps its length
//!   in sync with the chain.
//! - [`Cursor`]: a read-only position (before-begin, an element, or end) that
//!   can be copied and compared.
//! - [`CursorMut`]: a position that can read and write values and insert or
//!   erase after itself.
//! - [`Iter`], [`IterMut`], [`IntoIter`]: the usual iterators.
//!
//! ## Contract violations
//!
//! Positions borrow their list, so they can never dangle. The remaining misuse
//! panics: inserting after the end, erasing after the last element, advancing
//! past the end, or reading the value of a non-element position.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list = ForwardList::from([2, 3]);
//! list.push_front(1);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert_after(9);
//! assert_eq!(cursor.peek_next(), Some(&2));
//!
//! assert_eq!(list, ForwardList::from([1, 9, 2, 3]));
//! assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]));
//! ```

mod traits;
mod node;
mod list;
mod cursor;
mod iter;
mod ops;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;
pub use ops::swap;

#[cfg(test)]
mod tests;
