use alloc::{alloc::handle_alloc_error, boxed::Box};
use core::{alloc::Layout, ptr::NonNull};

use super::traits::{Link, Node};
use crate::error::{Error, Result};

/// A heap node of a [`ForwardList`](super::ForwardList).
pub(crate) struct ListNode<T> {
    next: Option<NonNull<ListNode<T>>>,
    data: T,
}

/// The before-begin sentinel. It carries a link but never a value.
pub(crate) struct Head<T> {
    next: Option<NonNull<ListNode<T>>>,
}

impl<T> Head<T> {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}

impl<T> ListNode<T> {
    /// Allocate an unlinked node, aborting through the global allocation
    /// error handler if memory is exhausted.
    pub(crate) fn alloc(data: T) -> NonNull<Self> {
        match Self::try_alloc(data) {
            Ok(node) => node,
            Err(Error::Alloc { layout }) => handle_alloc_error(layout),
        }
    }

    /// Allocate an unlinked node, reporting exhaustion instead of aborting.
    /// `data` is dropped on failure.
    pub(crate) fn try_alloc(data: T) -> Result<NonNull<Self>> {
        let layout = Layout::new::<Self>();
        // SAFETY: the layout always covers `next`, so it is never zero-sized.
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
        let Some(node) = NonNull::new(raw) else {
            log::warn!("allocation of a {} byte list node failed", layout.size());
            return Err(Error::Alloc { layout });
        };
        // SAFETY: freshly allocated with the layout of `Self`.
        unsafe { node.as_ptr().write(Self { next: None, data }) };
        Ok(node)
    }

    /// Free a node that is no longer linked and hand back its value.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::alloc`] or [`ListNode::try_alloc`],
    /// must be detached, and must not be used afterwards.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        // SAFETY: allocated by the global allocator with `Layout::new::<Self>()`,
        // which is exactly what `Box` expects.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.data
    }
}

impl<T> Link for Head<T> {
    type Target = ListNode<T>;

    #[inline]
    fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.next = next;
    }
}

impl<T> Link for ListNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl<T> Node for ListNode<T> {
    type Data = T;

    #[inline]
    unsafe fn attach_after<L>(this: NonNull<Self>, anchor: &mut L)
    where
        L: Link<Target = Self>,
    {
        // SAFETY: guaranteed by the caller. Only the `next` field is written.
        unsafe { (*this.as_ptr()).next = anchor.next() };
        anchor.set_next(Some(this));
    }

    #[inline]
    unsafe fn detach<L>(this: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(parent.next(), Some(this));
        // SAFETY: guaranteed by the caller. Only the `next` field is written.
        let next = unsafe { (*this.as_ptr()).next.take() };
        parent.set_next(next);
    }

    #[inline]
    fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
