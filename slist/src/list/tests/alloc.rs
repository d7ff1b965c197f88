use super::*;

#[test]
fn push_out_of_memory_leaves_list_unchanged() {
    let _trace = trace_init();

    let budget = Budget::new(2);
    let mut list = SList::new_in(&budget);
    list.push(1).unwrap();
    list.push(2).unwrap();

    assert_eq!(list.push(3), Err(Error::OutOfMemory));
    assert_eq!(collect_vals(&list), [2, 1]);
    assert_eq!(budget.live(), 2);
    list.assert_valid();

    drop(list);
    assert_eq!(budget.live(), 0);
}

#[test]
fn insert_out_of_memory_leaves_list_unchanged() {
    let _trace = trace_init();

    let budget = Budget::new(3);
    let mut list = SList::try_from_iter_in([1, 2, 3], &budget).unwrap();

    assert_eq!(list.insert_at(1, 9), Err(Error::OutOfMemory));
    assert_eq!(list.insert_at(0, 9), Err(Error::OutOfMemory));
    assert_eq!(collect_vals(&list), [1, 2, 3]);
    assert_eq!(budget.live(), 3);

    // positions are validated before allocating
    assert_eq!(list.insert_at(5, 9), Err(Error::InvalidPosition { pos: 5 }));
}

#[test]
fn try_extend_keeps_linked_prefix() {
    let _trace = trace_init();

    let budget = Budget::new(3);
    let mut list = SList::new_in(&budget);
    list.push(0).unwrap();

    assert_eq!(list.try_extend(1..10), Err(Error::OutOfMemory));
    assert_eq!(collect_vals(&list), [0, 1, 2]);
    list.assert_valid();

    budget.refill(2);
    list.try_extend([3, 4]).unwrap();
    assert_eq!(collect_vals(&list), [0, 1, 2, 3, 4]);
}

#[test]
fn removals_free_nodes() {
    let _trace = trace_init();

    let budget = Budget::unlimited();
    let mut list = SList::try_from_iter_in(0..5, &budget).unwrap();
    assert_eq!(budget.live(), 5);

    assert_eq!(list.pop(), Some(0));
    assert_eq!(list.remove_at(2), Ok(3));
    assert_eq!(budget.live(), 3);

    list.clear();
    assert_eq!(budget.live(), 0);
}

#[test]
fn structural_moves_do_not_allocate() {
    let _trace = trace_init();

    let budget = Budget::new(8);
    let mut list = SList::try_from_iter_in([4, 1, 3, 2, 8, 6, 5, 7], &budget).unwrap();

    // every allocation has been spent, so any of these allocating would fail
    list.reverse();
    list.sort();
    let (mut front, back) = list.split();
    let mut other = SList::new_in(&budget);
    other.move_front_from(&mut front).unwrap();
    front.join(back);
    let merged = SList::merge(other, front);

    assert_eq!(merged.len(), 8);
    assert_eq!(budget.live(), 8);
    merged.assert_valid();
}

#[test]
fn nodes_are_freed_by_their_own_allocator() {
    let _trace = trace_init();

    let first = Budget::unlimited();
    let second = Budget::unlimited();

    let mut a = SList::try_from_iter_in([1, 2], &first).unwrap();
    let b = SList::try_from_iter_in([3, 4, 5], &second).unwrap();
    a.join(b);
    a.push(0).unwrap();
    assert_eq!(first.live(), 3);
    assert_eq!(second.live(), 3);

    assert_eq!(a.remove_at(4), Ok(4));
    assert_eq!(second.live(), 2);

    drop(a);
    assert_eq!(first.live(), 0);
    assert_eq!(second.live(), 0);
}
