//! An owning, singly-linked list.
//!
//! See the [`SList`] type for details.
use crate::Error;
use allocator_api2::alloc::{Allocator, Global};
use core::{alloc::Layout, fmt, marker::PhantomData, mem, ptr::NonNull};

mod copy;
mod sort;

/// An owning, singly-linked list.
///
/// An `SList` is a handle to a chain of heap-allocated nodes, each of which
/// owns one item. All *O*(1) operations act on the head of the list:
/// [`push`](Self::push), [`pop`](Self::pop), and
/// [`move_front_from`](Self::move_front_from). Positional operations
/// ([`get`](Self::get), [`insert_at`](Self::insert_at),
/// [`remove_at`](Self::remove_at)) walk the chain from the head and are
/// *O*(_n_) in the position. The length is not cached, so [`len`](Self::len)
/// is also *O*(_n_).
///
/// # Ownership transfer
///
/// Operations that relocate nodes from one list to another never allocate
/// and consume their source where the whole chain moves:
///
/// - [`join`](Self::join) takes the appended list by value,
/// - [`split`](Self::split) consumes the list and returns both halves,
/// - [`merge_by`](Self::merge_by) consumes both inputs,
/// - [`move_front_from`](Self::move_front_from) leaves the rest of the source
///   list in place.
///
/// # Shallow and deep copies
///
/// [`copy`](Self::copy) builds a *view*: an `SList<&T, A>` whose nodes are new
/// but whose items are borrowed from the source. Clearing or dropping a view
/// releases only its nodes, and the borrow checker guarantees the source
/// outlives it. [`duplicate`](Self::duplicate) builds an `SList<T, A>` of
/// cloned items that is fully independent of the source.
///
/// # Allocation failure
///
/// Nodes are allocated through an [`Allocator`]. When the allocator refuses a
/// request, allocating operations return [`Error::OutOfMemory`] rather than
/// aborting, and the list is left unchanged (or, for the bulk operations,
/// holding the prefix that was successfully linked). Each node remembers the
/// allocator handle that produced it and is freed through that handle, so
/// nodes may be moved freely between lists.
///
/// # Examples
///
/// ```
/// use slist::SList;
///
/// let mut list = SList::new();
/// for key in [5, 3, 8, 1] {
///     list.push(key)?;
/// }
///
/// // `push` prepends, so the list is in reverse push order.
/// assert_eq!(list.get(0), Some(&1));
/// assert_eq!(list.get(3), Some(&5));
///
/// list.sort();
/// let sorted = list.fold(Vec::new(), |mut keys, &key| {
///     keys.push(key);
///     keys
/// });
/// assert_eq!(sorted, [1, 3, 5, 8]);
/// # Ok::<(), slist::Error>(())
/// ```
pub struct SList<T, A: Allocator + Clone = Global> {
    head: Link<T, A>,
    alloc: A,
    _owns: PhantomData<Node<T, A>>,
}

struct Node<T, A> {
    next: Link<T, A>,
    item: T,
    /// The allocator this node must be freed with.
    alloc: A,
}

type Link<T, A> = Option<NonNull<Node<T, A>>>;

/// Iterates over the items of a list by reference.
///
/// This stays private: callers visit items through [`SList::visit`] and
/// friends.
struct Items<'list, T, A> {
    curr: Link<T, A>,
    _list: PhantomData<&'list Node<T, A>>,
}

// === impl Node ===

impl<T, A: Allocator> Node<T, A> {
    const LAYOUT: Layout = Layout::new::<Self>();

    fn alloc(item: T, next: Link<T, A>, alloc: A) -> Result<NonNull<Self>, Error> {
        let ptr = alloc.allocate(Self::LAYOUT)?.cast::<Self>();
        unsafe {
            // Safety: `allocate` returned a block that fits `Self::LAYOUT`.
            ptr.as_ptr().write(Self { next, item, alloc });
        }
        Ok(ptr)
    }

    /// Frees a node, returning its item and the link it held.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`Node::alloc`] and not freed since,
    /// and the caller must unlink it from whatever chain pointed to it.
    unsafe fn free(ptr: NonNull<Self>) -> (T, Link<T, A>) {
        let Node { next, item, alloc } = ptr.as_ptr().read();
        alloc.deallocate(ptr.cast(), Self::LAYOUT);
        (item, next)
    }
}

// === impl SList ===

impl<T> SList<T> {
    /// Returns a new empty list that allocates nodes from the [`Global`]
    /// allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: Allocator + Clone> SList<T, A> {
    /// Returns a new empty list that allocates nodes from `alloc`.
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self::from_head(None, alloc)
    }

    /// Builds a list in `alloc` holding `items` in iteration order.
    pub fn try_from_iter_in<I>(items: I, alloc: A) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new_in(alloc);
        list.try_extend(items)?;
        Ok(list)
    }

    const fn from_head(head: Link<T, A>, alloc: A) -> Self {
        Self {
            head,
            alloc,
            _owns: PhantomData,
        }
    }

    /// Returns a reference to the allocator new nodes are allocated from.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns `true` if this list has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of items in the list.
    ///
    /// The length is not cached; this walks the whole chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Prepends `item` as the new head of the list.
    ///
    /// This is an *O*(1) operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. The
    /// list is unchanged and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        let node = Node::alloc(item, self.head, self.alloc.clone())?;
        test_trace!(?node, ?self.head, "SList::push");
        self.head = Some(node);
        Ok(())
    }

    /// Removes the head of the list and returns its item, or `None` if the
    /// list is empty.
    ///
    /// This is an *O*(1) operation.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head.take()?;
        // Safety: `head` was linked into this list, and we just unlinked it.
        let (item, next) = unsafe { Node::free(head) };
        test_trace!(?head, ?next, "SList::pop");
        self.head = next;
        Some(item)
    }

    /// Returns a reference to the item at the head of the list.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the item at the head of the list.
    #[inline]
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the item at the end of the list.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let node = self.last_node()?;
        Some(unsafe { &node.as_ref().item })
    }

    /// Unlinks the head node of `src` and links it in as the head of `self`.
    ///
    /// The node itself moves; nothing is allocated or freed. This is an
    /// *O*(1) operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySource`] if `src` is empty. Both lists are
    /// unchanged.
    pub fn move_front_from(&mut self, src: &mut Self) -> Result<(), Error> {
        let node = src.head.ok_or(Error::EmptySource)?;
        test_trace!(?node, ?self.head, "SList::move_front_from");
        unsafe {
            // Safety: `node` is the head of `src`, which we have exclusive
            // access to.
            let node = &mut *node.as_ptr();
            src.head = mem::replace(&mut node.next, self.head);
        }
        self.head = Some(node);
        Ok(())
    }

    /// Reverses the order of the list in place.
    ///
    /// This moves every node onto a fresh accumulator list with
    /// [`move_front_from`](Self::move_front_from), so it never allocates and
    /// cannot fail.
    pub fn reverse(&mut self) {
        let mut reversed = Self::new_in(self.alloc.clone());
        while reversed.move_front_from(self).is_ok() {}
        mem::swap(&mut self.head, &mut reversed.head);
    }

    /// Returns the node reached by skipping `pos` nodes from the head.
    fn sub(&self, pos: usize) -> Link<T, A> {
        let mut curr = self.head;
        for _ in 0..pos {
            // Safety: every link reachable from `head` points at a live node.
            curr = unsafe { curr?.as_ref().next };
        }
        curr
    }

    fn last_node(&self) -> Link<T, A> {
        let mut curr = self.head?;
        // Safety: every link reachable from `head` points at a live node.
        while let Some(next) = unsafe { curr.as_ref().next } {
            curr = next;
        }
        Some(curr)
    }

    /// Inserts `item` so that it ends up at position `pos`.
    ///
    /// Inserting at position 0 is the same as [`push`](Self::push), and
    /// inserting at `self.len()` appends to the end of the list.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `pos` is greater than the length of
    ///   the list.
    /// - [`Error::OutOfMemory`] if a node could not be allocated.
    ///
    /// In both cases the list is unchanged.
    pub fn insert_at(&mut self, pos: usize, item: T) -> Result<(), Error> {
        let Some(prev_pos) = pos.checked_sub(1) else {
            return self.push(item);
        };
        let prev = self.sub(prev_pos).ok_or(Error::InvalidPosition { pos })?;
        test_trace!(pos, ?prev, "SList::insert_at");
        unsafe {
            // Safety: `prev` is linked into this list, and we have exclusive
            // access to it.
            let prev = &mut *prev.as_ptr();
            prev.next = Some(Node::alloc(item, prev.next, self.alloc.clone())?);
        }
        Ok(())
    }

    /// Removes the item at position `pos` and returns it.
    ///
    /// Removing position 0 is the same as [`pop`](Self::pop).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the list has no item at `pos`.
    pub fn remove_at(&mut self, pos: usize) -> Result<T, Error> {
        let not_found = Error::NotFound { pos };
        let Some(prev_pos) = pos.checked_sub(1) else {
            return self.pop().ok_or(not_found);
        };
        let prev = self.sub(prev_pos).ok_or(not_found)?;
        unsafe {
            // Safety: `prev` is linked into this list, and we have exclusive
            // access to it and to the node after it.
            let prev = &mut *prev.as_ptr();
            let target = prev.next.ok_or(not_found)?;
            test_trace!(pos, ?prev.next, "SList::remove_at");
            let (item, next) = Node::free(target);
            prev.next = next;
            Ok(item)
        }
    }

    /// Returns a reference to the item at position `pos`, or `None` if the
    /// list is not that long.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&T> {
        let node = self.sub(pos)?;
        Some(unsafe { &node.as_ref().item })
    }

    /// Returns a mutable reference to the item at position `pos`, or `None`
    /// if the list is not that long.
    #[must_use]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        let mut node = self.sub(pos)?;
        Some(unsafe { &mut node.as_mut().item })
    }

    /// Appends every node of `other` to the end of this list.
    ///
    /// If this list is empty, it simply takes over `other`'s chain. No nodes
    /// are allocated; this walks to the end of `self`, so it is *O*(_n_) in
    /// the length of `self`.
    pub fn join(&mut self, mut other: Self) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        test_trace!(?self.head, ?other_head, "SList::join");
        match self.last_node() {
            // Safety: `last` is the final node of this list, which we have
            // exclusive access to.
            Some(last) => unsafe { (*last.as_ptr()).next = Some(other_head) },
            None => self.head = Some(other_head),
        }
    }

    /// Appends `items` to the end of the list, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a node could not be allocated. Every
    /// item appended before the failure stays in the list.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail: *mut Link<T, A> = &mut self.head;
        unsafe {
            // Safety: `tail` always points at the `next` link of the last
            // node of this list (or at `head`), which we have exclusive
            // access to.
            while let Some(node) = *tail {
                tail = &mut (*node.as_ptr()).next;
            }
            for item in items {
                let node = Node::alloc(item, None, self.alloc.clone())?;
                *tail = Some(node);
                tail = &mut (*node.as_ptr()).next;
            }
        }
        Ok(())
    }

    /// Releases every node in the list, dropping the items they hold.
    ///
    /// For a view produced by [`copy`](Self::copy), the items are references,
    /// so this releases the view's nodes and leaves the source list's items
    /// untouched.
    pub fn clear(&mut self) {
        test_trace!(?self.head, "SList::clear");
        while self.pop().is_some() {}
    }

    /// Calls `f` on each item, in order.
    pub fn visit(&self, f: impl FnMut(&T)) {
        self.items().for_each(f)
    }

    /// Calls `f` on a mutable reference to each item, in order.
    pub fn visit_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let mut curr = self.head;
        while let Some(node) = curr {
            unsafe {
                // Safety: `node` is linked into this list, and we have
                // exclusive access to it.
                let node = &mut *node.as_ptr();
                f(&mut node.item);
                curr = node.next;
            }
        }
    }

    /// Visits each item in order, combining the results of `f` into an
    /// accumulator that starts at `init`.
    pub fn fold<B>(&self, init: B, f: impl FnMut(B, &T) -> B) -> B {
        self.items().fold(init, f)
    }

    /// Returns the number of items for which `predicate` returns `true`.
    pub fn count_matching(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.fold(0, |count, item| count + usize::from(predicate(item)))
    }

    /// Returns `true` if following `next` links from the head reaches the
    /// end of the list.
    ///
    /// This is Floyd's tortoise-and-hare cycle check. None of the list's
    /// operations can introduce a cycle, so this only returns `false` if the
    /// list's internals were corrupted.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        loop {
            unsafe {
                // Safety: every link reachable from `head` points at a live
                // node.
                let Some(hare) = fast else { return true };
                let Some(hare) = hare.as_ref().next else {
                    return true;
                };
                fast = hare.as_ref().next;
                if let Some(tortoise) = slow {
                    slow = tortoise.as_ref().next;
                }
            }
            if fast.is_some() && fast == slow {
                return false;
            }
        }
    }

    /// Asserts as many of the list's invariants as possible.
    #[track_caller]
    pub fn assert_valid(&self) {
        assert!(
            self.is_acyclic(),
            "a list's chain of nodes must end; this one loops back on itself"
        );
    }

    fn items(&self) -> Items<'_, T, A> {
        Items {
            curr: self.head,
            _list: PhantomData,
        }
    }
}

impl<T, A: Allocator + Clone> Drop for SList<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for SList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

impl<T, A, B> PartialEq<SList<T, B>> for SList<T, A>
where
    T: PartialEq,
    A: Allocator + Clone,
    B: Allocator + Clone,
{
    fn eq(&self, other: &SList<T, B>) -> bool {
        self.items().eq(other.items())
    }
}

impl<T: Eq, A: Allocator + Clone> Eq for SList<T, A> {}

/// # Safety
///
/// An `SList` owns its nodes and items, so moving it to another thread moves
/// the `T`s and the allocator handles along with it.
unsafe impl<T: Send, A: Allocator + Clone + Send> Send for SList<T, A> {}

/// # Safety
///
/// A shared `SList` only hands out shared references to its items and its
/// allocator.
unsafe impl<T: Sync, A: Allocator + Clone + Sync> Sync for SList<T, A> {}

// === impl Items ===

impl<'list, T, A> Iterator for Items<'list, T, A> {
    type Item = &'list T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        unsafe {
            // Safety: the list this iterator borrows keeps `node` alive for
            // `'list`.
            let node = node.as_ref();
            self.curr = node.next;
            Some(&node.item)
        }
    }
}
