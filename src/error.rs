use core::alloc::Layout;

/// Errors reported by the fallible list operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The global allocator could not provide memory for a node.
    #[error("failed to allocate list node ({} bytes, align {})", .layout.size(), .layout.align())]
    Alloc { layout: Layout },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
