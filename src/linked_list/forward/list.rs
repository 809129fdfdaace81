use alloc::boxed::Box;
use core::{fmt, marker::PhantomData, mem, ptr::NonNull};

use super::{
    cursor::{Cursor, CursorMut, Position},
    iter::{IntoIter, Iter, IterMut},
    node::{Head, ListNode},
    traits::{Link, Node},
};
use crate::error::Result;

/// A singly linked list of owned values with a before-begin sentinel.
pub struct ForwardList<T> {
    head: Head<T>,
    len: usize,
    _marker: PhantomData<Box<ListNode<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        ForwardList {
            head: Head::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Builds a list from `iter`, reporting allocation failure instead of
    /// aborting. Nodes built before the failure are freed.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        let mut tail = Position::BeforeBegin;
        for value in iter {
            let node = ListNode::try_alloc(value)?;
            // SAFETY: `tail` is the sentinel or the last node of `list`.
            unsafe { list.link_after(tail, node) };
            tail = Position::At(node);
        }
        log::trace!("built forward list of {} nodes", list.len);
        Ok(list)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: nodes reachable from the sentinel are owned by `self`.
        self.head.next().map(|node| unsafe { node.as_ref().data() })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `front`, and `&mut self` guarantees exclusivity.
        self.head
            .next()
            .map(|mut node| unsafe { node.as_mut().data_mut() })
    }

    /// Inserts `value` as the new first element in O(1).
    pub fn push_front(&mut self, value: T) {
        let node = ListNode::alloc(value);
        // SAFETY: the sentinel always belongs to `self`.
        unsafe { self.link_after(Position::BeforeBegin, node) };
    }

    /// Like [`push_front`](Self::push_front), but reports allocation failure.
    /// The list is left unchanged on error.
    pub fn try_push_front(&mut self, value: T) -> Result<()> {
        let node = ListNode::try_alloc(value)?;
        // SAFETY: the sentinel always belongs to `self`.
        unsafe { self.link_after(Position::BeforeBegin, node) };
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: the sentinel always belongs to `self`.
        unsafe { self.unlink_after(Position::BeforeBegin) }
    }

    /// Drops every element. Runs iteratively, so arbitrarily long lists are fine.
    ///
    /// If an element's destructor panics, the remaining elements are still
    /// dropped and the list ends up empty.
    pub fn clear(&mut self) {
        struct DropGuard<'a, T>(&'a mut ForwardList<T>);

        impl<T> Drop for DropGuard<'_, T> {
            fn drop(&mut self) {
                while self.0.pop_front().is_some() {}
            }
        }

        if self.len > 0 {
            log::trace!("clearing forward list of {} nodes", self.len);
        }
        while let Some(node) = self.head.next() {
            // SAFETY: `node` is the first node and the sentinel is its parent.
            // The node is unlinked and counted out before its value drops.
            let value = unsafe {
                ListNode::detach(node, &mut self.head);
                self.len -= 1;
                ListNode::free(node)
            };
            let guard = DropGuard(self);
            drop(value);
            mem::forget(guard);
        }
    }

    /// Exchanges the contents of two lists in O(1) without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        log::trace!("swapping forward lists of {} and {} nodes", self.len, other.len);
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Position of the sentinel, valid even when the list is empty.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin)
    }

    /// Position of the first element, or [`end`](Self::end) if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from_link(self.head.next()))
    }

    /// The past-the-end position.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// A mutable cursor at the sentinel, used to insert or erase at the front.
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::BeforeBegin)
    }

    /// A mutable cursor at the first element, or at the end if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let position = Position::from_link(self.head.next());
        CursorMut::new(self, position)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.next(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.next(), self.len)
    }

    /// Fallible deep copy. See [`try_from_iter`](Self::try_from_iter).
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        Self::try_from_iter(self.iter().cloned())
    }

    #[inline]
    pub(crate) fn head(&self) -> &Head<T> {
        &self.head
    }

    /// Link `node` directly after `position`.
    ///
    /// # Safety
    ///
    /// `position` must be the sentinel or a node of `self`, and `node` must be
    /// a freshly allocated, unlinked node.
    pub(crate) unsafe fn link_after(&mut self, position: Position<T>, node: NonNull<ListNode<T>>) {
        // SAFETY: guaranteed by the caller.
        unsafe {
            match position {
                Position::BeforeBegin => ListNode::attach_after(node, &mut self.head),
                Position::At(anchor) => ListNode::attach_after(node, &mut *anchor.as_ptr()),
                Position::End => unreachable!("link_after called with the end position"),
            }
        }
        self.len += 1;
    }

    /// Unlink and free the successor of `position`, returning its value.
    /// Returns `None` when `position` has no successor.
    ///
    /// # Safety
    ///
    /// `position` must be the sentinel or a node of `self`.
    pub(crate) unsafe fn unlink_after(&mut self, position: Position<T>) -> Option<T> {
        // SAFETY: guaranteed by the caller; the successor is owned by `self`
        // and its parent is the anchor at `position`.
        unsafe {
            let removed = match position {
                Position::BeforeBegin => {
                    let node = self.head.next()?;
                    ListNode::detach(node, &mut self.head);
                    node
                }
                Position::At(anchor) => {
                    let node = anchor.as_ref().next()?;
                    ListNode::detach(node, &mut *anchor.as_ptr());
                    node
                }
                Position::End => return None,
            };
            self.len -= 1;
            Some(ListNode::free(removed))
        }
    }

    /// Walk to the last node, or the sentinel if the list is empty.
    fn tail(&self) -> Position<T> {
        let mut tail = Position::BeforeBegin;
        let mut current = self.head.next();
        while let Some(node) = current {
            tail = Position::At(node);
            // SAFETY: nodes reachable from the sentinel are owned by `self`.
            current = unsafe { node.as_ref().next() };
        }
        tail
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds a full copy of `source` first and only then swaps it in, so a
    /// panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        log::trace!("built forward list of {} nodes", list.len);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends in source order after the current last element.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            let node = ListNode::alloc(value);
            // SAFETY: `tail` is the sentinel or the last node of `self`.
            unsafe { self.link_after(tail, node) };
            tail = Position::At(node);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for ForwardList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}
