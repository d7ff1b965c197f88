//! Shallow copies (views) and deep duplicates of lists.
use super::SList;
use crate::Error;
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator + Clone> SList<T, A> {
    /// Returns a shallow copy of this list: a new chain of nodes, allocated
    /// from this list's allocator, holding references to this list's items.
    ///
    /// Releasing the view never touches the items it refers to, and the
    /// source list cannot be mutated or dropped while the view exists. To
    /// get a list that owns its own copies of the items, use
    /// [`duplicate`](Self::duplicate).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. Any
    /// nodes allocated before the failure are released.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::SList;
    ///
    /// let names = SList::try_from_iter_in(
    ///     [String::from("foo"), String::from("bar")],
    ///     slist::Global,
    /// )?;
    /// let mut view = names.copy()?;
    /// assert!(core::ptr::eq(*view.get(1).unwrap(), names.get(1).unwrap()));
    ///
    /// // Clearing the view only frees its own nodes.
    /// view.clear();
    /// assert_eq!(names.get(0).map(String::as_str), Some("foo"));
    /// # Ok::<(), slist::Error>(())
    /// ```
    pub fn copy(&self) -> Result<SList<&T, A>, Error> {
        let mut view = SList::new_in(self.alloc.clone());
        self.copy_into(&mut view)?;
        Ok(view)
    }

    /// Replaces the contents of `dest` with a shallow copy of this list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. In
    /// that case `dest` holds a copy of the prefix of this list that was
    /// linked before the failure; it is a complete, valid list.
    pub fn copy_into<'list>(&'list self, dest: &mut SList<&'list T, A>) -> Result<(), Error> {
        test_trace!(?self.head, ?dest.head, "SList::copy_into");
        dest.clear();
        dest.try_extend(self.items())
    }

    /// Returns a deep duplicate of this list: new nodes holding clones of
    /// this list's items, allocated from this list's allocator.
    ///
    /// The duplicate is fully independent of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. Any
    /// nodes (and cloned items) created before the failure are released.
    pub fn duplicate(&self) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut dup = Self::new_in(self.alloc.clone());
        self.duplicate_into(&mut dup)?;
        Ok(dup)
    }

    /// Replaces the contents of `dest` with a deep duplicate of this list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. In
    /// that case `dest` holds duplicates of the prefix of this list that was
    /// linked before the failure; it is a complete, valid list.
    pub fn duplicate_into(&self, dest: &mut Self) -> Result<(), Error>
    where
        T: Clone,
    {
        test_trace!(?self.head, ?dest.head, "SList::duplicate_into");
        dest.clear();
        dest.try_extend(self.items().cloned())
    }
}

impl<'list, T: Clone, A: Allocator + Clone> SList<&'list T, A> {
    /// Turns a shallow copy into an owning list by cloning every item it
    /// refers to.
    ///
    /// `copy()` followed by `cloned()` produces the same list as
    /// [`duplicate`](SList::duplicate), in two passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated.
    pub fn cloned(&self) -> Result<SList<T, A>, Error> {
        SList::try_from_iter_in(self.items().copied().cloned(), self.alloc.clone())
    }
}
