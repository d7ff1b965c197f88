//! Errors returned by list operations.

/// Errors returned by [`SList`](crate::SList) operations.
///
/// None of these errors leave a list in a partially linked state. The only
/// operations that may leave *any* work behind on failure are
/// [`SList::try_extend`](crate::SList::try_extend),
/// [`SList::copy_into`](crate::SList::copy_into), and
/// [`SList::duplicate_into`](crate::SList::duplicate_into), which keep the
/// prefix they managed to allocate. That prefix is an ordinary list and is
/// released like any other.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The allocator could not provide memory for a new node.
    #[error("out of memory while allocating a list node")]
    OutOfMemory,

    /// An insertion position was past the end of the list.
    #[error("cannot insert at position {pos}: the list is shorter than that")]
    InvalidPosition {
        /// The requested position.
        pos: usize,
    },

    /// An operation needed a node from a source list, and the source list
    /// was empty.
    #[error("the source list is empty")]
    EmptySource,

    /// There is no element at the requested position.
    #[error("no element at position {pos}")]
    NotFound {
        /// The requested position.
        pos: usize,
    },
}

impl From<allocator_api2::alloc::AllocError> for Error {
    fn from(_: allocator_api2::alloc::AllocError) -> Self {
        Self::OutOfMemory
    }
}
