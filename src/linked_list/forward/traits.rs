use core::ptr::NonNull;

/// Something that owns a `next` link: the list sentinel or a node.
///
/// Treating the sentinel as a plain link lets every insert and erase be
/// expressed as "after this link", front of the list included.
pub(crate) trait Link {
    /// The node type the link points at.
    type Target;

    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A node that can be spliced into a chain after any [`Link`].
pub(crate) trait Node: Link<Target = Self> + Sized {
    /// The type of data stored in the node.
    type Data;

    /// Link `this` directly after `anchor`, taking over its old successor.
    ///
    /// `anchor` stores `this` itself, so the pointer the caller keeps and
    /// the one reachable from the chain are the same.
    ///
    /// # Safety
    ///
    /// `this` must point at a live, unlinked node with no outstanding
    /// references to it.
    unsafe fn attach_after<L>(this: NonNull<Self>, anchor: &mut L)
    where
        L: Link<Target = Self>;

    /// Unlink `this` from its parent.
    ///
    /// # Safety
    ///
    /// `parent.next()` must be `this`. The node is left unreachable and the
    /// caller becomes responsible for freeing it.
    unsafe fn detach<L>(this: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>;

    fn data(&self) -> &Self::Data;

    fn data_mut(&mut self) -> &mut Self::Data;
}
