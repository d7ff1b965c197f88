use super::*;
use core::cmp::Ordering;

/// An item ordered only by `key`, so that `seq` exposes how ties were
/// broken.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Keyed {
    key: u8,
    seq: usize,
}

fn by_key(a: &Keyed, b: &Keyed) -> Ordering {
    a.key.cmp(&b.key)
}

#[test]
fn split_halves() {
    let _trace = trace_init();

    for len in 0..10 {
        let vals: Vec<i32> = (0..len).collect();
        let (front, back) = list_of(&vals).split();
        front.assert_valid();
        back.assert_valid();

        let len = len as usize;
        assert_eq!(front.len(), (len + 1) / 2, "front of a {len}-item list");
        assert_eq!(back.len(), len / 2, "back of a {len}-item list");

        let mut rejoined = collect_vals(&front);
        rejoined.extend(collect_vals(&back));
        assert_eq!(rejoined, vals);
    }
}

#[test]
fn merge_sorted_lists() {
    let _trace = trace_init();

    let a = list_of(&[1, 4, 5, 9]);
    let b = list_of(&[2, 3, 6, 10, 11]);
    let merged = SList::merge(a, b);
    assert_eq!(collect_vals(&merged), [1, 2, 3, 4, 5, 6, 9, 10, 11]);
    merged.assert_valid();

    let merged = SList::merge(SList::new(), list_of(&[1, 2]));
    assert_eq!(collect_vals(&merged), [1, 2]);
    let merged = SList::merge(list_of(&[1, 2]), SList::new());
    assert_eq!(collect_vals(&merged), [1, 2]);
    assert!(SList::<i32>::merge(SList::new(), SList::new()).is_empty());
}

#[test]
fn merge_ties_favor_first_list() {
    let _trace = trace_init();

    let a = SList::try_from_iter_in(
        [Keyed { key: 1, seq: 0 }, Keyed { key: 2, seq: 1 }],
        Global,
    )
    .unwrap();
    let b = SList::try_from_iter_in(
        [Keyed { key: 1, seq: 2 }, Keyed { key: 2, seq: 3 }],
        Global,
    )
    .unwrap();

    let merged = SList::merge_by(a, b, by_key);
    let seqs = merged.fold(Vec::new(), |mut seqs, item| {
        seqs.push(item.seq);
        seqs
    });
    assert_eq!(seqs, [0, 2, 1, 3]);
}

#[test]
fn sort_pushed_keys() {
    let _trace = trace_init();

    let mut list = SList::new();
    for key in [5, 3, 8, 1] {
        list.push(key).unwrap();
    }
    assert_eq!(collect_vals(&list), [1, 8, 3, 5]);

    list.sort_by(|a: &i32, b: &i32| a.cmp(b));
    let sorted: Vec<i32> = (0..4).map(|pos| *list.get(pos).unwrap()).collect();
    assert_eq!(sorted, [1, 3, 5, 8]);
    list.assert_valid();
}

#[test]
fn sort_is_stable() {
    let _trace = trace_init();

    let keys = [3, 1, 2, 3, 1, 2, 1, 3];
    let items: Vec<Keyed> = keys
        .iter()
        .enumerate()
        .map(|(seq, &key)| Keyed { key, seq })
        .collect();

    let mut list = SList::try_from_iter_in(items.iter().copied(), Global).unwrap();
    list.sort_by(by_key);

    let mut expected = items;
    expected.sort_by(by_key);
    assert_eq!(collect_vals(&list), expected);
}

#[test]
fn sort_descending_and_by_key() {
    let mut list = list_of(&[4, -7, 2, 9, 0]);

    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(collect_vals(&list), [9, 4, 2, 0, -7]);

    list.sort_by_key(|val| val.abs());
    assert_eq!(collect_vals(&list), [0, 2, 4, -7, 9]);

    list.sort();
    assert_eq!(collect_vals(&list), [-7, 0, 2, 4, 9]);
}

#[test]
fn inconsistent_comparator_keeps_every_item() {
    let _trace = trace_init();

    let vals: Vec<i32> = (0..33).collect();
    let mut list = list_of(&vals);

    let mut flip = false;
    list.sort_by(|_, _| {
        flip = !flip;
        if flip {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });
    list.assert_valid();

    let mut after = collect_vals(&list);
    after.sort();
    assert_eq!(after, vals);
}
