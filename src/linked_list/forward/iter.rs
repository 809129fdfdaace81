use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    list::ForwardList,
    node::ListNode,
    traits::{Link, Node},
};

/// An iterator over shared references to the elements of a [`ForwardList`].
pub struct Iter<'a, T> {
    current: Option<NonNull<ListNode<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a ListNode<T>>,
}

impl<T> Iter<'_, T> {
    pub(crate) fn new(first: Option<NonNull<ListNode<T>>>, len: usize) -> Self {
        Self {
            current: first,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.current.map(|node| {
            // SAFETY: the list is borrowed for `'a`, so every node reachable
            // from `current` stays alive and unmodified.
            let node = unsafe { node.as_ref() };
            self.current = node.next();
            self.remaining -= 1;
            node.data()
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An iterator over mutable references to the elements of a [`ForwardList`].
pub struct IterMut<'a, T> {
    current: Option<NonNull<ListNode<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut ListNode<T>>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(first: Option<NonNull<ListNode<T>>>, len: usize) -> Self {
        Self {
            current: first,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.current.map(|mut node| {
            // SAFETY: the list is mutably borrowed for `'a` and each node is
            // yielded at most once.
            let node = unsafe { node.as_mut() };
            self.current = node.next();
            self.remaining -= 1;
            node.data_mut()
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`ForwardList`].
///
/// Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ForwardList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
