//! Linked list containers.
//!
//! # Examples
//!
//! ```
//! use forward_list::linked_list::forward::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! // The before-begin position anchors edits at the front.
//! let mut cursor = list.cursor_before_begin_mut();
//! assert_eq!(cursor.erase_after(), 1);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert_after(9);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![2, 9, 3]);
//! ```
pub mod forward;
