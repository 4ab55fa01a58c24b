use growvec::{Span, Vector};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize, i32),
    Reserve(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (any::<usize>(), any::<i32>()).prop_map(|(at, value)| Op::Insert(at, value)),
        any::<usize>().prop_map(Op::Erase),
        (0..64usize, any::<i32>()).prop_map(|(len, value)| Op::Resize(len, value)),
        (0..128usize).prop_map(Op::Reserve),
    ]
}

proptest! {
    #[test]
    fn len_tracks_pushes_and_capacity_covers_len(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut v = Vector::new();
        for (count, value) in values.iter().enumerate() {
            v.push_back(*value);
            prop_assert_eq!(v.len(), count + 1);
            prop_assert!(v.capacity() >= v.len());
        }
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn reallocation_at_least_doubles(count in 1..500usize) {
        let mut v = Vector::new();
        let mut previous = 0;
        for i in 0..count {
            v.push_back(i);
            if v.capacity() != previous {
                if previous == 0 {
                    prop_assert_eq!(v.capacity(), 1);
                } else {
                    prop_assert!(v.capacity() >= previous * 2);
                }
                previous = v.capacity();
            }
        }
    }

    #[test]
    fn behaves_like_std_vec(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut v = Vector::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Op::Push(value) => {
                    v.push_back(value);
                    model.push(value);
                }
                Op::Pop => {
                    prop_assert_eq!(v.pop_back(), model.pop());
                }
                Op::Insert(at, value) => {
                    let index = at % (model.len() + 1);
                    v.insert(index, value);
                    model.insert(index, value);
                }
                Op::Erase(at) => {
                    if !model.is_empty() {
                        let index = at % model.len();
                        v.erase(index);
                        model.remove(index);
                    }
                }
                Op::Resize(len, value) => {
                    v.resize(len, value);
                    model.resize(len, value);
                }
                Op::Reserve(capacity) => {
                    v.reserve(capacity);
                    prop_assert!(v.capacity() >= capacity);
                }
            }
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert!(v.capacity() >= v.len());
        }
    }

    #[test]
    fn insert_then_erase_is_identity(
        values in prop::collection::vec(any::<u16>(), 0..50),
        at in any::<usize>(),
        value in any::<u16>(),
    ) {
        let original: Vector<u16> = values.iter().copied().collect();
        let mut v = original.clone();
        let index = at % (v.len() + 1);
        v.insert(index, value);
        v.erase(index);
        prop_assert_eq!(v, original);
    }

    #[test]
    fn reverse_traversal_mirrors_forward(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let v: Vector<i32> = values.iter().copied().collect();
        let forward: Vec<i32> = v.iter().copied().collect();
        let mut backward: Vec<i32> = v.iter_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);

        let n = isize::try_from(v.len()).unwrap();
        prop_assert_eq!(v.end() - v.begin(), n);
        prop_assert_eq!(v.rend() - v.rbegin(), -n);
        prop_assert_eq!(Span::new(v.rbegin(), v.rend()).count(), v.len());
    }

    #[test]
    fn ordering_matches_slices(
        a in prop::collection::vec(0..4u8, 0..6),
        b in prop::collection::vec(0..4u8, 0..6),
    ) {
        let va: Vector<u8> = a.iter().copied().collect();
        let vb: Vector<u8> = b.iter().copied().collect();
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }

    #[test]
    fn sort_orders_ascending(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut v: Vector<i32> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        v.sort();
        prop_assert_eq!(v.as_slice(), expected.as_slice());
    }

    #[test]
    fn text_output_reads_back(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let v: Vector<i64> = values.iter().copied().collect();
        let text = v.to_string();
        prop_assert!(text.starts_with("{ "), "missing opening brace in {:?}", text);
        prop_assert!(text.ends_with('}'), "missing closing brace in {:?}", text);

        let mut copy = Vector::from_elem(v.len(), 0i64);
        copy.read_from_str(&text[1..text.len() - 1]).unwrap();
        prop_assert_eq!(copy, v);
    }
}
