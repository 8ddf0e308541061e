#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::thread;

  use synced_collections_utils_rs::CollectionError;

  use crate::collections::{GuardedHashMap, GuardedHashMultiMap};
  use crate::families::HashAdapter;

  #[test]
  fn test_no_lost_updates_under_concurrent_insert() {
    let threads = 8u32;
    let total = 8000u32;
    let map = Arc::new(GuardedHashMap::<u32, String>::new());
    let handles = (0..threads)
      .map(|t| {
        let map = map.clone();
        thread::spawn(move || {
          let per_thread = total / threads;
          for key in t * per_thread..(t + 1) * per_thread {
            assert_eq!(map.insert(key, key.to_string()), None);
          }
        })
      })
      .collect::<Vec<_>>();
    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(map.len(), total as usize);
    for key in 0..total {
      assert_eq!(map.get(&key), Some(key.to_string()));
    }
  }

  #[test]
  fn test_access_and_rehash() {
    let map = GuardedHashMap::<String, i32>::new();
    assert_eq!(map.get_or_default("x".to_string()), 0);
    assert_eq!(map.upsert("x".to_string(), |v| {
      *v += 2;
      *v
    }), 2);
    assert_eq!(map.at(&"y".to_string()), Err(CollectionError::KeyNotFound));
    map.rehash(256);
    assert!(map.capacity() >= 256);
    assert_eq!(map.at(&"x".to_string()), Ok(2));
    assert_eq!(map.update(&"x".to_string(), |v| std::mem::take(v)), Some(2));
    assert_eq!(map.remove(&"x".to_string()), Some(0));
  }

  #[test]
  fn test_multimap() {
    let map = GuardedHashMultiMap::<&str, u8>::new();
    map.insert("k", 1);
    map.insert("k", 2);
    map.insert("j", 3);
    assert_eq!(map.get_all(&"k"), vec![1, 2]);
    assert_eq!(map.count_key(&"k"), 2);
    assert_eq!(map.len(), 3);
    assert_eq!(map.remove_all(&"k"), vec![1, 2]);
    assert_eq!(map.items(), vec![("j", 3)]);
  }
}
