use core::{fmt, ptr, ptr::NonNull};

use super::{
    list::ForwardList,
    node::{Head, ListNode},
    traits::{Link, Node},
};
use crate::error::Result;

/// Where a cursor points: the sentinel, a node, or past the end.
///
/// The sentinel is its own case rather than an address so that moving the
/// list never invalidates a before-begin position.
pub(crate) enum Position<T> {
    BeforeBegin,
    At(NonNull<ListNode<T>>),
    End,
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::BeforeBegin, Position::BeforeBegin) => true,
            (Position::At(a), Position::At(b)) => a == b,
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> Position<T> {
    #[inline]
    pub(crate) fn from_link(link: Option<NonNull<ListNode<T>>>) -> Self {
        link.map_or(Position::End, Position::At)
    }

    /// The node following this position, if any.
    ///
    /// # Safety
    ///
    /// `head` must be the sentinel of the list this position belongs to.
    unsafe fn next_link(self, head: &Head<T>) -> Option<NonNull<ListNode<T>>> {
        match self {
            Position::BeforeBegin => head.next(),
            // SAFETY: guaranteed by the caller.
            Position::At(node) => unsafe { node.as_ref().next() },
            Position::End => None,
        }
    }

    /// # Safety
    ///
    /// Same as [`Position::next_link`].
    unsafe fn successor(self, head: &Head<T>) -> Self {
        assert!(
            self != Position::End,
            "cannot advance a forward list cursor past the end"
        );
        // SAFETY: guaranteed by the caller.
        Position::from_link(unsafe { self.next_link(head) })
    }
}

/// A read-only position in a [`ForwardList`].
///
/// Cursors are cheap to copy and compare equal when they point at the same
/// node of the same list. Any two end positions compare equal.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>, position: Position<T>) -> Self {
        Self { list, position }
    }

    pub fn is_before_begin(&self) -> bool {
        self.position == Position::BeforeBegin
    }

    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }

    /// The element at this position, or `None` at before-begin and end.
    pub fn get(&self) -> Option<&'a T> {
        match self.position {
            // SAFETY: the node is owned by the list borrowed for `'a`.
            Position::At(node) => Some(unsafe { node.as_ref() }.data()),
            _ => None,
        }
    }

    /// The element at this position.
    ///
    /// # Panics
    ///
    /// Panics at the before-begin and end positions.
    pub fn value(&self) -> &'a T {
        match self.get() {
            Some(value) => value,
            None => panic!("cannot read a value at a forward list's before-begin or end position"),
        }
    }

    /// Advance to the following position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        // SAFETY: `self.position` belongs to `self.list`.
        self.position = unsafe { self.position.successor(self.list.head()) };
    }

    /// A copy of this cursor advanced by one.
    pub fn next_position(&self) -> Self {
        let mut next = *self;
        next.move_next();
        next
    }

    /// The element after this position without moving, `None` if there is none.
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: `self.position` belongs to `self.list`, which outlives `'a`.
        unsafe { self.position.next_link(self.list.head()) }
            .map(|node| unsafe { node.as_ref() }.data())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.position, other.position) {
            (Position::End, Position::End) => true,
            (a, b) => ptr::eq(self.list, other.list) && a == b,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::BeforeBegin => f.write_str("Cursor(BeforeBegin)"),
            Position::End => f.write_str("Cursor(End)"),
            Position::At(_) => f.debug_tuple("Cursor").field(&self.value()).finish(),
        }
    }
}

/// A position in a [`ForwardList`] that can edit the list around it.
///
/// Values can be read and written through the cursor, and nodes can be
/// inserted or erased after it. Links are never exposed.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    position: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>, position: Position<T>) -> Self {
        Self { list, position }
    }

    pub fn is_before_begin(&self) -> bool {
        self.position == Position::BeforeBegin
    }

    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }

    pub fn get(&self) -> Option<&T> {
        self.as_cursor().get()
    }

    /// Mutable access to the element at this position.
    pub fn current(&mut self) -> Option<&mut T> {
        match self.position {
            // SAFETY: the node is owned by the exclusively borrowed list.
            Position::At(mut node) => Some(unsafe { node.as_mut() }.data_mut()),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// Panics at the before-begin and end positions.
    pub fn value_mut(&mut self) -> &mut T {
        match self.current() {
            Some(value) => value,
            None => panic!("cannot read a value at a forward list's before-begin or end position"),
        }
    }

    /// Advance to the following position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        // SAFETY: `self.position` belongs to `self.list`.
        self.position = unsafe { self.position.successor(self.list.head()) };
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `self.position` belongs to the exclusively borrowed list.
        unsafe { self.position.next_link(self.list.head()) }
            .map(|mut node| unsafe { node.as_mut() }.data_mut())
    }

    /// Insert `value` right after this position in O(1) and move the cursor
    /// onto the new element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn insert_after(&mut self, value: T) {
        self.assert_not_end("insert_after");
        let node = ListNode::alloc(value);
        self.link(node);
    }

    /// Like [`insert_after`](Self::insert_after), but reports allocation
    /// failure. The list and the cursor are unchanged on error.
    pub fn try_insert_after(&mut self, value: T) -> Result<()> {
        self.assert_not_end("try_insert_after");
        let node = ListNode::try_alloc(value)?;
        self.link(node);
        Ok(())
    }

    /// Remove the element after this position in O(1) and return it.
    ///
    /// The cursor stays put; its successor is now the element that followed
    /// the removed one, or the end.
    ///
    /// # Panics
    ///
    /// Panics if there is no element after the cursor.
    pub fn erase_after(&mut self) -> T {
        // SAFETY: `self.position` belongs to `self.list`.
        match unsafe { self.list.unlink_after(self.position) } {
            Some(value) => value,
            None => panic!("erase_after called on a forward list cursor with no successor"),
        }
    }

    /// A read-only view of this position, e.g. for comparing against
    /// [`ForwardList::end`].
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.position)
    }

    fn link(&mut self, node: NonNull<ListNode<T>>) {
        // SAFETY: the position is not the end and belongs to `self.list`.
        unsafe { self.list.link_after(self.position, node) };
        self.position = Position::At(node);
    }

    fn assert_not_end(&self, operation: &str) {
        assert!(
            !self.is_end(),
            "{operation} called on a forward list cursor at the end position"
        );
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_cursor(), f)
    }
}
