//! A singly linked forward list with a before-begin sentinel.
//!
//! See [`linked_list::forward`] for the container and its cursors.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{Error, Result};
pub use linked_list::forward::{ForwardList, swap};
