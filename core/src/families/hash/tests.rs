#[cfg(test)]
mod tests {
  use std::collections::{HashMap, HashSet};
  use std::sync::Arc;
  use std::thread;

  use crate::collections::{HashMultiMap, HashMultiSet};
  use crate::families::{HashAdapter, HashAssociativeOps};
  use crate::guarded::Guarded;

  #[test]
  fn test_map_insert_item_does_not_overwrite() {
    let mut map = HashMap::from([(1, "one")]);
    assert!(!map.insert_item((1, "uno")));
    assert_eq!(map.find(&1), Some((1, "one")));
    assert_eq!(map.equal_range(&2), vec![]);
    assert_eq!(map.remove_key(&1), 1);
    assert_eq!(map.remove_key(&1), 0);
  }

  #[test]
  fn test_rehash_grows_and_shrinks() {
    let mut set = (0..4).collect::<HashSet<u32>>();
    HashAssociativeOps::rehash(&mut set, 1024);
    assert!(HashAssociativeOps::capacity(&set) >= 1024);
    HashAssociativeOps::rehash(&mut set, 0);
    assert!(HashAssociativeOps::capacity(&set) >= 4);
    assert!(HashAssociativeOps::capacity(&set) < 1024);
    assert_eq!(set.len(), 4);
  }

  #[test]
  fn test_adapter_concurrent_inserts_are_not_lost() {
    let threads = 8;
    let per_thread = 500;
    let set = Arc::new(Guarded::<HashSet<u32>>::new());
    let handles = (0..threads)
      .map(|t| {
        let set = set.clone();
        thread::spawn(move || {
          for i in 0..per_thread {
            assert!(set.insert_item(t * per_thread + i));
          }
        })
      })
      .collect::<Vec<_>>();
    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(set.len(), (threads * per_thread) as usize);
    assert!((0..threads * per_thread).all(|k| set.contains_key(&k)));
  }

  #[test]
  fn test_adapter_load_factor() {
    let map = Guarded::<HashMap<u8, u8>>::new();
    assert_eq!(map.load_factor(), 0.0);
    map.reserve(16);
    assert!(map.capacity() >= 16);
    assert_eq!(map.extend_items([(1, 1), (2, 2), (1, 3)]), 2);
    let load = map.load_factor();
    assert!(load > 0.0 && load <= 1.0);
    map.retain_keys(|k| *k == 2);
    assert_eq!(map.items(), vec![(2, 2)]);
  }

  #[test]
  fn test_multi_load_factor_counts_distinct_keys() {
    let map = Guarded::<HashMultiMap<u8, u32>>::new();
    assert_eq!(map.extend_items((0..64).map(|v| (1, v))), 64);
    assert_eq!(map.len(), 64);
    let load = map.load_factor();
    assert!(load > 0.0 && load <= 1.0, "load factor {}", load);

    let set = Guarded::<HashMultiSet<u8>>::new();
    set.extend_items(std::iter::repeat(7).take(32));
    assert_eq!(set.len(), 32);
    assert_eq!(set.with_read(|s| s.slot_len()), 1);
    assert!(set.load_factor() <= 1.0);
  }
}
