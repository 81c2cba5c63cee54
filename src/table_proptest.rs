#![cfg(test)]

// Property tests for ChainedTable kept inside the crate so they can check
// bucket-level bookkeeping that the public API does not expose.

use crate::error::TableError;
use crate::hasher::KeyHasher;
use crate::table::ChainedTable;
use core::ops::ControlFlow;
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Iterate,
    StopAfter(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[A-Z0-9]{0,7}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => idx.clone().prop_map(Op::Remove),
            1 => idx.clone().prop_map(Op::Get),
            1 => prop_oneof![contains_pool, "[A-Z0-9]{0,7}".prop_map(|s| s)].prop_map(Op::Contains),
            1 => Just(Op::Iterate),
            1 => (1usize..8).prop_map(Op::StopAfter),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_bookkeeping<V, S>(t: &ChainedTable<V, S>) -> Result<(), TestCaseError> {
    let chained: usize = t
        .buckets
        .slots()
        .iter()
        .flatten()
        .map(|b| b.iter().count())
        .sum();
    prop_assert_eq!(chained, t.len(), "count must equal the sum of bucket sizes");
    prop_assert!(t.capacity() >= 3);
    prop_assert!(t.occupied_buckets() <= t.capacity());
    let allocated = t.buckets.slots().iter().filter(|s| s.is_some()).count();
    prop_assert_eq!(allocated, t.occupied_buckets());
    prop_assert!(t.load_percent() < 75, "load must stay below the growth threshold");
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// - insert replaces in place and releases the superseded value exactly once;
// - remove reports NotFound for absent keys and leaves the table untouched;
// - both traversals observe every live key exactly once, in the same order;
// - stopping the internal walk after n calls returns min(n, len);
// - bucket bookkeeping (count, occupied, load) stays consistent.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let released = Rc::new(RefCell::new(Vec::<i32>::new()));
        let sink = released.clone();
        let mut sut: ChainedTable<i32> =
            ChainedTable::with_destructor(move |v| sink.borrow_mut().push(v), 3).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut expected_released: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = &pool[i];
                    sut.insert(k, v).unwrap();
                    if let Some(old) = model.insert(k.clone(), v) {
                        expected_released.push(old);
                    }
                }
                Op::Remove(i) => {
                    let k = &pool[i];
                    match model.remove(k) {
                        Some(old) => {
                            prop_assert_eq!(sut.remove(k), Ok(()));
                            expected_released.push(old);
                        }
                        None => {
                            let before = sut.len();
                            prop_assert_eq!(sut.remove(k), Err(TableError::NotFound));
                            prop_assert_eq!(sut.len(), before);
                        }
                    }
                }
                Op::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                Op::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                Op::Iterate => {
                    let mut pushed = Vec::new();
                    let n = sut.for_each_key(|_, k| {
                        pushed.push(k.to_string());
                        ControlFlow::Continue(())
                    });
                    prop_assert_eq!(n, model.len());
                    let pulled: Vec<String> = sut.keys().map(str::to_string).collect();
                    prop_assert_eq!(&pulled, &pushed);
                    let unique: BTreeSet<String> = pulled.into_iter().collect();
                    prop_assert_eq!(unique.len(), model.len());
                    let want: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(unique, want);
                }
                Op::StopAfter(limit) => {
                    let mut calls = 0usize;
                    let n = sut.for_each_key(|_, _| {
                        calls += 1;
                        if calls == limit { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
                    });
                    prop_assert_eq!(n, limit.min(model.len()));
                    prop_assert_eq!(n, calls);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(&*released.borrow(), &expected_released);
            check_bookkeeping(&sut)?;
        }

        let live: BTreeSet<i32> = model.values().copied().collect();
        let live_count = model.len();
        drop(sut);
        let after_drop = released.borrow();
        prop_assert_eq!(after_drop.len(), expected_released.len() + live_count);
        let tail: BTreeSet<i32> = after_drop[expected_released.len()..].iter().copied().collect();
        prop_assert_eq!(tail, live);
    }
}

// Property: with a colliding hasher every key shares one bucket; lookups
// still resolve by key equality and the table never grows.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_single_chain(keys in proptest::collection::btree_set("[a-z]{1,6}", 1..40)) {
        #[derive(Clone, Copy)]
        struct Collide;
        impl KeyHasher for Collide {
            fn hash_key(&self, _key: &str) -> usize { 7 }
        }

        let mut t = ChainedTable::<usize>::builder().hasher(Collide).build().unwrap();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i).unwrap();
        }
        prop_assert_eq!(t.capacity(), 3);
        prop_assert_eq!(t.occupied_buckets(), 1);
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.get(k), Some(&i));
        }
        // chain order is insertion order
        let order: Vec<&str> = t.keys().collect();
        let want: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(order, want);
        check_bookkeeping(&t)?;
    }
}
