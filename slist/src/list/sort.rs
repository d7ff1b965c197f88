//! Splitting, merging, and merge-sorting lists.
use super::{Link, SList};
use allocator_api2::alloc::Allocator;
use core::{cmp::Ordering, mem};

impl<T, A: Allocator + Clone> SList<T, A> {
    /// Splits the list into a front half and a back half, consuming it.
    ///
    /// The midpoint is found in a single pass with the tortoise-and-hare
    /// technique: a "hare" advances two nodes for every node the "tortoise"
    /// advances, so when the hare runs off the end, the tortoise is at the
    /// last node of the front half. For a list of length _n_, the front half
    /// holds the first ⌈_n_/2⌉ nodes and the back half holds the remaining
    /// ⌊_n_/2⌋. No nodes are allocated or freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::SList;
    ///
    /// let list = SList::try_from_iter_in([1, 2, 3, 4, 5], slist::Global)?;
    /// let (front, back) = list.split();
    /// assert_eq!(format!("{front:?}"), "[1, 2, 3]");
    /// assert_eq!(format!("{back:?}"), "[4, 5]");
    /// # Ok::<(), slist::Error>(())
    /// ```
    #[must_use]
    pub fn split(mut self) -> (Self, Self) {
        let front = self.head.take();
        let mut back = None;
        if let Some(head) = front {
            unsafe {
                // Safety: we own every node reachable from `head`.
                let mut tortoise = head;
                let mut hare = head.as_ref().next;
                while let Some(node) = hare {
                    hare = node.as_ref().next;
                    if let Some(node) = hare {
                        hare = node.as_ref().next;
                        tortoise = tortoise
                            .as_ref()
                            .next
                            .expect("the tortoise can never pass the hare");
                    }
                }
                back = (*tortoise.as_ptr()).next.take();
            }
        }
        test_trace!(?front, ?back, "SList::split");
        (
            Self::from_head(front, self.alloc.clone()),
            Self::from_head(back, self.alloc.clone()),
        )
    }

    /// Merges two lists into one, consuming both.
    ///
    /// If `a` and `b` are each sorted with respect to `cmp`, the merged list
    /// is sorted as well. At each step, the head of `a` is taken unless `cmp`
    /// says it is [`Greater`](Ordering::Greater) than the head of `b`, so
    /// items that compare equal keep `a`'s items ahead of `b`'s. Once either
    /// list runs out, the remainder of the other one is linked on in a single
    /// step.
    ///
    /// The merged list allocates new nodes from `a`'s allocator.
    pub fn merge_by<F>(mut a: Self, mut b: Self, mut cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        test_trace!(?a.head, ?b.head, "SList::merge_by");
        // The merged prefix is owned by `merged` the whole time, so if `cmp`
        // panics, every node is still owned by exactly one of the three lists.
        let mut merged = Self::new_in(a.alloc.clone());
        let mut tail: *mut Link<T, A> = &mut merged.head;
        while let (Some(x), Some(y)) = (a.head, b.head) {
            // Safety: `x` and `y` are the heads of `a` and `b`, which we own.
            let take_b = unsafe { cmp(&x.as_ref().item, &y.as_ref().item) } == Ordering::Greater;
            let (node, src) = if take_b { (y, &mut b) } else { (x, &mut a) };
            unsafe {
                // Safety: `node` is the head of `src`, and `tail` points at
                // the last link of `merged`; we own both.
                let node_ref = &mut *node.as_ptr();
                src.head = node_ref.next.take();
                *tail = Some(node);
                tail = &mut node_ref.next;
            }
        }

        // At most one of these is non-empty.
        let rest = a.head.take().or_else(|| b.head.take());
        unsafe {
            // Safety: `tail` still points at the last link of `merged`.
            *tail = rest;
        }
        merged
    }

    /// Sorts the list with the comparator `cmp`, using merge sort.
    ///
    /// The sort is stable: items that compare [`Equal`](Ordering::Equal)
    /// keep their relative order. It performs *O*(_n_ log _n_) comparisons,
    /// never allocates, and recurses *O*(log _n_) deep.
    ///
    /// If `cmp` does not implement a total order, the resulting order is
    /// unspecified, but the list still holds exactly the same items.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.merge_sort(&mut cmp);
    }

    /// Sorts the list by the key `f` extracts from each item.
    ///
    /// The sort is stable. `f` is called twice per comparison.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }

    fn merge_sort<F>(&mut self, cmp: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        // Lists of zero or one nodes are already sorted.
        let Some(head) = self.head else { return };
        if unsafe { head.as_ref().next.is_none() } {
            return;
        }

        let empty = Self::new_in(self.alloc.clone());
        let (mut front, mut back) = mem::replace(self, empty).split();
        front.merge_sort(cmp);
        back.merge_sort(cmp);
        *self = Self::merge_by(front, back, &mut *cmp);
    }
}

impl<T: Ord, A: Allocator + Clone> SList<T, A> {
    /// Sorts the list in ascending order.
    ///
    /// This is [`sort_by`](Self::sort_by) with [`Ord::cmp`], and is stable.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }

    /// Merges two lists sorted in ascending order into one sorted list,
    /// consuming both.
    ///
    /// This is [`merge_by`](Self::merge_by) with [`Ord::cmp`].
    #[must_use]
    pub fn merge(a: Self, b: Self) -> Self {
        Self::merge_by(a, b, T::cmp)
    }
}
