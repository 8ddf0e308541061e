use std::collections::HashMap;
use std::hash::Hash;
use std::iter;

use crate::families::{ContainerOps, HashAssociativeOps};

/// A hash multimap: every key maps to the values inserted under it, in insertion order.<br/>
/// 1つのキーに複数の値を持てるハッシュマップ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMultiMap<K, V>
where
  K: Eq + Hash, {
  entries: HashMap<K, Vec<V>>,
  len: usize,
}

impl<K, V> HashMultiMap<K, V>
where
  K: Eq + Hash,
{
  pub fn new() -> Self {
    Self {
      entries: HashMap::new(),
      len: 0,
    }
  }

  pub fn insert(&mut self, key: K, value: V) {
    self.entries.entry(key).or_default().push(value);
    self.len += 1;
  }

  /// Values stored under `key`, oldest first.
  pub fn get_all(&self, key: &K) -> &[V] {
    self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn remove_all(&mut self, key: &K) -> Vec<V> {
    let removed = self.entries.remove(key).unwrap_or_default();
    self.len -= removed.len();
    removed
  }

  pub fn count(&self, key: &K) -> usize {
    self.entries.get(key).map_or(0, Vec::len)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn clear(&mut self) {
    self.entries.clear();
    self.len = 0;
  }

  /// Number of distinct keys.
  pub fn key_len(&self) -> usize {
    self.entries.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
    self
      .entries
      .iter()
      .flat_map(|(key, values)| iter::repeat(key).zip(values.iter()))
  }
}

impl<K, V> Default for HashMultiMap<K, V>
where
  K: Eq + Hash,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> FromIterator<(K, V)> for HashMultiMap<K, V>
where
  K: Eq + Hash,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut map = Self::new();
    for (key, value) in iter {
      map.insert(key, value);
    }
    map
  }
}

impl<K, V> ContainerOps for HashMultiMap<K, V>
where
  K: Eq + Hash,
{
  type Item = (K, V);

  fn len(&self) -> usize {
    self.len
  }

  fn clear(&mut self) {
    HashMultiMap::clear(self);
  }
}

impl<K, V> HashAssociativeOps for HashMultiMap<K, V>
where
  K: Eq + Hash + Clone,
  V: Clone,
{
  type Key = K;

  fn insert_item(&mut self, (key, value): (K, V)) -> bool {
    self.insert(key, value);
    true
  }

  fn remove_key(&mut self, key: &K) -> usize {
    self.remove_all(key).len()
  }

  fn count_key(&self, key: &K) -> usize {
    self.count(key)
  }

  fn find(&self, key: &K) -> Option<(K, V)> {
    self
      .entries
      .get_key_value(key)
      .and_then(|(k, values)| values.first().map(|v| (k.clone(), v.clone())))
  }

  fn equal_range(&self, key: &K) -> Vec<(K, V)> {
    match self.entries.get_key_value(key) {
      Some((k, values)) => values.iter().map(|v| (k.clone(), v.clone())).collect(),
      None => Vec::new(),
    }
  }

  fn items(&self) -> Vec<(K, V)> {
    self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  fn retain_keys(&mut self, mut f: impl FnMut(&K) -> bool) {
    self.entries.retain(|k, _| f(k));
    self.len = self.entries.values().map(Vec::len).sum();
  }

  fn reserve(&mut self, additional: usize) {
    self.entries.reserve(additional);
  }

  fn shrink_to(&mut self, min_capacity: usize) {
    self.entries.shrink_to(min_capacity);
  }

  fn capacity(&self) -> usize {
    self.entries.capacity()
  }

  fn slot_len(&self) -> usize {
    self.entries.len()
  }

  fn rehash(&mut self, capacity: usize) {
    let keys = self.entries.len();
    if capacity > self.entries.capacity() {
      self.entries.reserve(capacity - keys);
    } else {
      self.entries.shrink_to(capacity.max(keys));
    }
  }
}
