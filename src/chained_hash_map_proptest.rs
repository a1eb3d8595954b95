#![cfg(test)]

// Property tests that need the crate-private placement hooks, so they live
// inside the crate.

use crate::chained_hash_map::ChainedHashMap;
use crate::error::MapError;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, i32),
    Remove(u16),
    Clear,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        8 => (any::<u16>(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => any::<u16>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..400)
}

// Property: after every operation, including ones that grew the table,
// every entry sits in bucket `bucket_index(key, capacity())`, chain lengths
// add up to `len()`, and capacity never decreases.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_placement_survives_growth(initial in 1usize..16, ops in arb_ops()) {
        let mut sut: ChainedHashMap<u16, i32> = ChainedHashMap::with_capacity(initial);
        let mut model: HashMap<u16, i32> = HashMap::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let res = sut.insert(k, v);
                    if model.contains_key(&k) {
                        prop_assert_eq!(res, Err(MapError::DuplicateKey));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.insert(k, v);
                    }
                }
                Op::Remove(k) => {
                    let res = sut.remove(&k);
                    prop_assert_eq!(res.ok(), model.remove(&k));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), last_capacity);
                }
            }

            prop_assert!(sut.capacity() >= last_capacity);
            last_capacity = sut.capacity();
            prop_assert!(sut.load_factor() < crate::MAX_LOAD_FACTOR);
            prop_assert!(sut.placement_holds());
            prop_assert_eq!(sut.chain_lens().iter().sum::<usize>(), sut.len());
            prop_assert_eq!(sut.len(), model.len());
        }

        let cap = sut.capacity();
        let lens = sut.chain_lens();
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Ok(v));
            prop_assert!(lens[sut.bucket_index(k, cap)] > 0);
        }
    }
}
