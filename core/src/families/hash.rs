use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use synced_collections_utils_rs::GuardBackend;

use super::ContainerOps;
use crate::guarded::Guarded;

/// A hash-based associative container: map, multimap, set or multiset.<br/>
/// ハッシュによる連想コンテナ。
///
/// Growth and rehashing always happen inside the caller's critical section.
pub trait HashAssociativeOps: ContainerOps {
  type Key: Eq + Hash;

  /// Inserts `item` unless a unique-key container already holds its key.
  fn insert_item(&mut self, item: Self::Item) -> bool;

  fn remove_key(&mut self, key: &Self::Key) -> usize;

  fn count_key(&self, key: &Self::Key) -> usize;

  fn contains_key(&self, key: &Self::Key) -> bool {
    self.count_key(key) > 0
  }

  fn find(&self, key: &Self::Key) -> Option<Self::Item>;

  /// Every element stored under `key`.
  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item>;

  /// All elements in unspecified order.
  fn items(&self) -> Vec<Self::Item>;

  fn retain_keys(&mut self, f: impl FnMut(&Self::Key) -> bool);

  fn extend_items(&mut self, items: Vec<Self::Item>) -> usize {
    let mut inserted = 0;
    for item in items {
      if self.insert_item(item) {
        inserted += 1;
      }
    }
    inserted
  }

  fn reserve(&mut self, additional: usize);

  fn shrink_to(&mut self, min_capacity: usize);

  fn capacity(&self) -> usize;

  /// Number of occupied table slots. Multi containers store one slot per distinct key.
  fn slot_len(&self) -> usize {
    self.len()
  }

  /// Resizes the table so that it can hold at least `capacity` elements without
  /// growing, shrinking it when it is larger than needed.<br/>
  /// 指定容量に合わせてテーブルを再構築します。
  fn rehash(&mut self, capacity: usize) {
    let len = self.len();
    if capacity > self.capacity() {
      self.reserve(capacity - len);
    } else {
      self.shrink_to(capacity.max(len));
    }
  }
}

impl<K, V, S> HashAssociativeOps for HashMap<K, V, S>
where
  K: Eq + Hash + Clone,
  V: Clone,
  S: BuildHasher,
{
  type Key = K;

  fn insert_item(&mut self, (key, value): (K, V)) -> bool {
    match self.entry(key) {
      Entry::Vacant(entry) => {
        entry.insert(value);
        true
      }
      Entry::Occupied(_) => false,
    }
  }

  fn remove_key(&mut self, key: &K) -> usize {
    usize::from(HashMap::remove(self, key).is_some())
  }

  fn count_key(&self, key: &K) -> usize {
    usize::from(HashMap::contains_key(self, key))
  }

  fn find(&self, key: &K) -> Option<(K, V)> {
    self.get_key_value(key).map(|(k, v)| (k.clone(), v.clone()))
  }

  fn equal_range(&self, key: &K) -> Vec<(K, V)> {
    self.find(key).into_iter().collect()
  }

  fn items(&self) -> Vec<(K, V)> {
    self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  fn retain_keys(&mut self, mut f: impl FnMut(&K) -> bool) {
    HashMap::retain(self, |k, _| f(k));
  }

  fn reserve(&mut self, additional: usize) {
    HashMap::reserve(self, additional);
  }

  fn shrink_to(&mut self, min_capacity: usize) {
    HashMap::shrink_to(self, min_capacity);
  }

  fn capacity(&self) -> usize {
    HashMap::capacity(self)
  }
}

impl<K, S> HashAssociativeOps for HashSet<K, S>
where
  K: Eq + Hash + Clone,
  S: BuildHasher,
{
  type Key = K;

  fn insert_item(&mut self, item: K) -> bool {
    HashSet::insert(self, item)
  }

  fn remove_key(&mut self, key: &K) -> usize {
    usize::from(HashSet::remove(self, key))
  }

  fn count_key(&self, key: &K) -> usize {
    usize::from(HashSet::contains(self, key))
  }

  fn find(&self, key: &K) -> Option<K> {
    HashSet::get(self, key).cloned()
  }

  fn equal_range(&self, key: &K) -> Vec<K> {
    self.find(key).into_iter().collect()
  }

  fn items(&self) -> Vec<K> {
    self.iter().cloned().collect()
  }

  fn retain_keys(&mut self, f: impl FnMut(&K) -> bool) {
    HashSet::retain(self, f);
  }

  fn reserve(&mut self, additional: usize) {
    HashSet::reserve(self, additional);
  }

  fn shrink_to(&mut self, min_capacity: usize) {
    HashSet::shrink_to(self, min_capacity);
  }

  fn capacity(&self) -> usize {
    HashSet::capacity(self)
  }
}

/// Locked surface of every [`HashAssociativeOps`] container.<br/>
/// ハッシュ連想コンテナに対するロック付き操作。
pub trait HashAdapter {
  type Key: Eq + Hash;
  type Item;

  fn insert_item(&self, item: Self::Item) -> bool;

  fn remove_key(&self, key: &Self::Key) -> usize;

  fn count_key(&self, key: &Self::Key) -> usize;

  fn contains_key(&self, key: &Self::Key) -> bool;

  fn find(&self, key: &Self::Key) -> Option<Self::Item>;

  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item>;

  fn items(&self) -> Vec<Self::Item>;

  fn retain_keys(&self, f: impl FnMut(&Self::Key) -> bool);

  /// Bulk insert applied in one critical section.
  fn extend_items(&self, items: impl IntoIterator<Item = Self::Item>) -> usize;

  fn reserve(&self, additional: usize);

  fn shrink_to(&self, min_capacity: usize);

  fn capacity(&self) -> usize;

  fn rehash(&self, capacity: usize);

  /// Occupied slots per allocated slot, never above `1.0`; `0.0` for a table that has not allocated yet.
  fn load_factor(&self) -> f64;
}

impl<C, B> HashAdapter for Guarded<C, B>
where
  C: HashAssociativeOps,
  B: GuardBackend<C>,
{
  type Item = C::Item;
  type Key = C::Key;

  fn insert_item(&self, item: Self::Item) -> bool {
    self.with_write(|c| c.insert_item(item))
  }

  fn remove_key(&self, key: &Self::Key) -> usize {
    self.with_write(|c| c.remove_key(key))
  }

  fn count_key(&self, key: &Self::Key) -> usize {
    self.with_read(|c| c.count_key(key))
  }

  fn contains_key(&self, key: &Self::Key) -> bool {
    self.with_read(|c| c.contains_key(key))
  }

  fn find(&self, key: &Self::Key) -> Option<Self::Item> {
    self.with_read(|c| c.find(key))
  }

  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item> {
    self.with_read(|c| c.equal_range(key))
  }

  fn items(&self) -> Vec<Self::Item> {
    self.with_read(|c| c.items())
  }

  fn retain_keys(&self, f: impl FnMut(&Self::Key) -> bool) {
    self.with_write(|c| c.retain_keys(f));
  }

  fn extend_items(&self, items: impl IntoIterator<Item = Self::Item>) -> usize {
    let items = items.into_iter().collect::<Vec<_>>();
    self.with_write(|c| c.extend_items(items))
  }

  fn reserve(&self, additional: usize) {
    self.with_write(|c| c.reserve(additional));
  }

  fn shrink_to(&self, min_capacity: usize) {
    self.with_write(|c| c.shrink_to(min_capacity));
  }

  fn capacity(&self) -> usize {
    self.with_read(|c| c.capacity())
  }

  fn rehash(&self, capacity: usize) {
    tracing::debug!("rehash: id = {}, capacity = {}", self.id(), capacity);
    self.with_write(|c| c.rehash(capacity));
  }

  fn load_factor(&self) -> f64 {
    self.with_read(|c| match c.capacity() {
      0 => 0.0,
      capacity => c.slot_len() as f64 / capacity as f64,
    })
  }
}

#[cfg(test)]
mod tests;
