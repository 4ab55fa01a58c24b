use growvec::{Cursor, RandomAccess, Span, Vector};

#[test]
fn test_iterator_populated_vector() {
    let v = Vector::from([1, 2, 3]);

    let items: Vec<_> = v.iter().collect();
    assert_eq!(items, [&1, &2, &3]);
}

#[test]
fn test_iterator_empty_vector() {
    let v: Vector<i32> = Vector::new();

    assert_eq!(v.iter().count(), 0);
    assert!(v.begin() == v.end());
}

#[test]
fn test_for_loop_over_reference() {
    let v = Vector::from(["a", "b"]);
    let mut joined = String::new();
    for item in &v {
        joined.push_str(item);
    }
    assert_eq!(joined, "ab");
}

#[test]
fn test_for_loop_over_mutable_reference() {
    let mut v = Vector::from([1, 2, 3]);
    for item in &mut v {
        *item *= 10;
    }
    assert_eq!(v, [10, 20, 30]);
}

#[test]
fn test_iterator_size_hint() {
    let v = Vector::from([1, 2, 3, 4]);
    let mut iter = v.iter();

    assert_eq!(iter.size_hint(), (4, Some(4)));
    iter.next();
    assert_eq!(iter.len(), 3);
    iter.next_back();
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_iterator_both_ends() {
    let v = Vector::from([1, 2, 3, 4]);
    let mut iter = v.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iterator_nth() {
    let v: Vector<i32> = (0..10).collect();
    let mut iter = v.iter();

    assert_eq!(iter.nth(3), Some(&3));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.nth(100), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_clone_is_independent() {
    let v = Vector::from([1, 2, 3]);
    let mut iter = v.iter();
    iter.next();

    let copy = iter.clone();
    assert_eq!(iter.count(), 2);
    assert_eq!(copy.copied().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_into_iter_by_value() {
    let v = Vector::from([String::from("x"), String::from("y"), String::from("z")]);
    let mut iter = v.into_iter();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back().as_deref(), Some("z"));
    assert_eq!(iter.next().as_deref(), Some("x"));
    // The remaining "y" is dropped with the iterator.
}

#[test]
fn test_cursor_dereference_and_index() {
    let v = Vector::from([10, 20, 30, 40]);
    let it = v.begin();

    assert_eq!(*it, 10);
    assert_eq!(it[0], 10);
    assert_eq!(it[3], 40);
    assert_eq!(*(it + 2), 30);
    assert_eq!((v.end() - 1)[0], 40);
    assert_eq!((v.end() - 1)[-3], 10);
}

#[test]
fn test_cursor_increment_decrement() {
    let v = Vector::from([1, 2, 3]);
    let mut it = v.begin();

    assert_eq!(**it.inc(), 2);
    let previous = it.post_inc();
    assert_eq!(*previous, 2);
    assert_eq!(*it, 3);
    it.dec();
    assert_eq!(*it, 2);
    let previous = it.post_dec();
    assert_eq!(*previous, 2);
    assert_eq!(*it, 1);
}

#[test]
fn test_cursor_arithmetic() {
    let v: Vector<i32> = (0..6).collect();
    let mut it = v.begin();

    it += 4;
    assert_eq!(*it, 4);
    it -= 3;
    assert_eq!(*it, 1);
    assert_eq!(it - v.begin(), 1);
    assert_eq!(v.begin() - it, -1);
    assert_eq!(v.end() - v.begin(), 6);
    assert!((v.begin() + 6) == v.end());
}

#[test]
fn test_cursor_ordering() {
    let v = Vector::from([1, 2, 3]);
    let first = v.begin();
    let second = v.begin() + 1;

    assert!(first < second);
    assert!(first <= second);
    assert!(second > first);
    assert!(second >= first);
    assert!(first != second);
    assert!(first <= v.begin());
}

#[test]
fn test_cursor_positions_outside_range() {
    let v = Vector::from([1, 2, 3]);
    let before = v.begin() - 1;
    let past = v.end() + 5;

    assert_eq!(before.position(), -1);
    assert_eq!(past.position(), 8);
    assert_eq!(before.get(), None);
    assert_eq!(past.get(), None);
    assert_eq!(*(past - 6), 3);
}

#[test]
#[should_panic(expected = "not dereferenceable")]
fn test_dereference_end_panics() {
    let v = Vector::from([1, 2, 3]);
    let _value = *v.end();
}

#[test]
#[should_panic(expected = "not dereferenceable")]
fn test_dereference_before_begin_panics() {
    let v = Vector::from([1, 2, 3]);
    let _value = (v.begin() - 1)[0];
}

#[test]
fn test_cursors_of_different_vectors() {
    let a = Vector::from([1, 2]);
    let b = Vector::from([1, 2]);

    assert!(a.begin() != b.begin());
    assert_eq!(a.begin().partial_cmp(&b.begin()), None);
}

#[test]
fn test_mutable_cursor_writes() {
    let mut v = Vector::from([1, 2, 3, 4]);
    let mut it = v.begin_mut();

    *it = 100;
    it += 2;
    it[1] = 400;
    *it += 1;
    it.dec();
    assert_eq!(*it, 2);

    assert_eq!(v, [100, 2, 4, 400]);
}

#[test]
fn test_mutable_cursor_from_end() {
    let mut v = Vector::from([1, 2, 3]);
    let mut it = v.end_mut() - 1;
    *it = 30;
    assert_eq!(v, [1, 2, 30]);
}

#[test]
fn test_mutable_cursor_converts_to_const() {
    let mut v = Vector::from([5, 6, 7]);
    let it = v.begin_mut() + 1;
    assert_eq!(*it.as_cursor(), 6);

    let read_only: Cursor<'_, i32> = Cursor::from(it);
    assert_eq!(read_only.get(), Some(&6));
    assert_eq!(*(read_only + 1), 7);
}

#[test]
fn test_mutable_cursor_into_mut() {
    let mut v = Vector::from([1, 2]);
    if let Some(slot) = (v.begin_mut() + 1).into_mut() {
        *slot = 20;
    }
    assert_eq!((v.end_mut()).into_mut(), None);
    assert_eq!(v, [1, 20]);
}

#[test]
fn test_span_between_cursors() {
    let v: Vector<i32> = (1..=6).collect();

    let inner: Vec<i32> = Span::new(v.begin() + 2, v.begin() + 4).copied().collect();
    assert_eq!(inner, [3, 4]);

    let empty = Span::new(v.end(), v.end());
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_from_span() {
    let v = Vector::from([1, 2, 3, 4, 5]);

    let copy = Vector::from_span(v.begin() + 1, v.end());
    assert_eq!(copy, [2, 3, 4, 5]);
    assert_eq!(copy.capacity(), 4);

    let reversed = Vector::from_span(v.rbegin(), v.rend());
    assert_eq!(reversed, [5, 4, 3, 2, 1]);
}

#[test]
fn test_std_algorithms_over_iterators() {
    let v = Vector::from([3, 1, 4, 1, 5, 9, 2, 6]);

    assert_eq!(v.iter().max(), Some(&9));
    assert_eq!(v.iter().filter(|&&x| x == 1).count(), 2);
    assert_eq!(v.iter().position(|&x| x == 5), Some(4));
    assert_eq!(v.iter().rev().next(), Some(&6));
    assert_eq!(v.iter().sum::<i32>(), 31);
}
