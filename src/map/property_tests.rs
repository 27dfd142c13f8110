//! Property-Based Tests for Map Module
//!
//! Uses proptest to check the FIFO store against a simple reference model.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::map::{BoundedMap, FifoStore, TRACKER_SLACK};

// == Strategies ==
/// Small key space so that overwrites and re-inserts happen often
fn small_key_strategy() -> impl Strategy<Value = String> {
    "[a-f]".prop_map(|s| s)
}

fn unique_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,16}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum MapOp {
    Store { key: String, value: u32 },
    Load { key: String },
    Delete { key: String },
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        3 => (small_key_strategy(), any::<u32>())
            .prop_map(|(key, value)| MapOp::Store { key, value }),
        1 => small_key_strategy().prop_map(|key| MapOp::Load { key }),
        1 => small_key_strategy().prop_map(|key| MapOp::Delete { key }),
    ]
}

// == Reference Model ==
/// Exact FIFO over live keys: deletes remove from the order, overwrites keep it.
struct Model {
    values: HashMap<String, u32>,
    order: VecDeque<String>,
    max_entries: usize,
}

impl Model {
    fn new(max_entries: usize) -> Self {
        Self {
            values: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
        }
    }

    fn store(&mut self, key: String, value: u32) -> bool {
        if let Some(current) = self.values.get_mut(&key) {
            *current = value;
            return true;
        }
        if self.max_entries == 0 {
            return false;
        }
        if self.values.len() >= self.max_entries {
            if let Some(oldest) = self.order.pop_front() {
                self.values.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.values.insert(key, value);
        true
    }

    fn delete(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any sequence of operations leaves the store identical to the model,
    // and the live count never exceeds capacity.
    #[test]
    fn prop_matches_fifo_model(
        max_entries in 0usize..5,
        ops in prop::collection::vec(map_op_strategy(), 1..80)
    ) {
        let mut store = FifoStore::new(max_entries);
        let mut model = Model::new(max_entries);

        for op in ops {
            match op {
                MapOp::Store { key, value } => {
                    let expected_ok = model.store(key.clone(), value);
                    prop_assert_eq!(store.store(key, value).is_ok(), expected_ok);
                }
                MapOp::Load { key } => {
                    prop_assert_eq!(store.load(&key), model.values.get(&key));
                }
                MapOp::Delete { key } => {
                    model.delete(&key);
                    store.delete(&key);
                }
            }

            prop_assert!(store.len() <= max_entries, "len {} exceeds {}", store.len(), max_entries);
            prop_assert!(store.tracked() <= max_entries * TRACKER_SLACK);
            prop_assert!(store.len() <= store.tracked());
            prop_assert_eq!(store.len(), model.values.len());
        }

        for (key, value) in &model.values {
            prop_assert_eq!(store.load(key), Some(value));
        }
    }

    // Filling to capacity with distinct keys and storing one more evicts
    // exactly the first key.
    #[test]
    fn prop_fifo_eviction_order(
        initial_keys in prop::collection::vec(unique_key_strategy(), 1..10),
        new_key in unique_key_strategy(),
    ) {
        let unique_keys: Vec<String> = {
            let mut seen = HashSet::new();
            initial_keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
        };
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let map = BoundedMap::new(capacity);
        for (i, key) in unique_keys.iter().enumerate() {
            map.store(key.clone(), i).unwrap();
        }
        prop_assert_eq!(map.len(), capacity);

        map.store(new_key.clone(), capacity).unwrap();

        prop_assert_eq!(map.len(), capacity);
        prop_assert_eq!(map.load(&unique_keys[0]), None);
        prop_assert_eq!(map.load(&new_key), Some(capacity));
        for (i, key) in unique_keys.iter().enumerate().skip(1) {
            prop_assert_eq!(map.load(key), Some(i));
        }
    }

    // Overwriting a key changes its value but not the live count.
    #[test]
    fn prop_overwrite_semantics(
        key in unique_key_strategy(),
        value1 in any::<u32>(),
        value2 in any::<u32>(),
    ) {
        let map = BoundedMap::new(4);

        map.store(key.clone(), value1).unwrap();
        map.store(key.clone(), value2).unwrap();

        prop_assert_eq!(map.load(&key), Some(value2));
        prop_assert_eq!(map.len(), 1);
    }

    // Deleting twice is the same as deleting once.
    #[test]
    fn prop_delete_idempotent(
        keys in prop::collection::vec(small_key_strategy(), 0..6),
        target in small_key_strategy(),
    ) {
        let map = BoundedMap::new(3);
        for key in keys {
            map.store(key, 0u8).unwrap();
        }

        map.delete(&target);
        let len_once = map.len();
        map.delete(&target);

        prop_assert_eq!(map.len(), len_once);
        prop_assert!(!map.contains_key(&target));
    }
}
