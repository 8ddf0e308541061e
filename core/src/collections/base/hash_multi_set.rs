use std::collections::HashMap;
use std::hash::Hash;
use std::iter;

use crate::families::{ContainerOps, HashAssociativeOps};

/// A hash multiset storing each distinct key once with its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMultiSet<K>
where
  K: Eq + Hash, {
  counts: HashMap<K, usize>,
  len: usize,
}

impl<K> HashMultiSet<K>
where
  K: Eq + Hash,
{
  pub fn new() -> Self {
    Self {
      counts: HashMap::new(),
      len: 0,
    }
  }

  pub fn insert(&mut self, key: K) {
    *self.counts.entry(key).or_insert(0) += 1;
    self.len += 1;
  }

  /// Removes one occurrence of `key`; returns whether there was one.
  pub fn remove_one(&mut self, key: &K) -> bool {
    match self.counts.get_mut(key) {
      Some(count) if *count > 1 => {
        *count -= 1;
      }
      Some(_) => {
        self.counts.remove(key);
      }
      None => return false,
    }
    self.len -= 1;
    true
  }

  pub fn remove_all(&mut self, key: &K) -> usize {
    let removed = self.counts.remove(key).unwrap_or(0);
    self.len -= removed;
    removed
  }

  pub fn count(&self, key: &K) -> usize {
    self.counts.get(key).copied().unwrap_or(0)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn clear(&mut self) {
    self.counts.clear();
    self.len = 0;
  }

  pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
    self
      .counts
      .iter()
      .flat_map(|(key, count)| iter::repeat(key).take(*count))
  }
}

impl<K> Default for HashMultiSet<K>
where
  K: Eq + Hash,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K> FromIterator<K> for HashMultiSet<K>
where
  K: Eq + Hash,
{
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut set = Self::new();
    for key in iter {
      set.insert(key);
    }
    set
  }
}

impl<K> ContainerOps for HashMultiSet<K>
where
  K: Eq + Hash,
{
  type Item = K;

  fn len(&self) -> usize {
    self.len
  }

  fn clear(&mut self) {
    HashMultiSet::clear(self);
  }
}

impl<K> HashAssociativeOps for HashMultiSet<K>
where
  K: Eq + Hash + Clone,
{
  type Key = K;

  fn insert_item(&mut self, item: K) -> bool {
    self.insert(item);
    true
  }

  fn remove_key(&mut self, key: &K) -> usize {
    self.remove_all(key)
  }

  fn count_key(&self, key: &K) -> usize {
    self.count(key)
  }

  fn find(&self, key: &K) -> Option<K> {
    self.counts.get_key_value(key).map(|(k, _)| k.clone())
  }

  fn equal_range(&self, key: &K) -> Vec<K> {
    match self.counts.get_key_value(key) {
      Some((k, count)) => iter::repeat(k.clone()).take(*count).collect(),
      None => Vec::new(),
    }
  }

  fn items(&self) -> Vec<K> {
    self.iter().cloned().collect()
  }

  fn retain_keys(&mut self, mut f: impl FnMut(&K) -> bool) {
    self.counts.retain(|k, _| f(k));
    self.len = self.counts.values().sum();
  }

  fn reserve(&mut self, additional: usize) {
    self.counts.reserve(additional);
  }

  fn shrink_to(&mut self, min_capacity: usize) {
    self.counts.shrink_to(min_capacity);
  }

  fn capacity(&self) -> usize {
    self.counts.capacity()
  }

  fn slot_len(&self) -> usize {
    self.counts.len()
  }

  fn rehash(&mut self, capacity: usize) {
    let keys = self.counts.len();
    if capacity > self.counts.capacity() {
      self.counts.reserve(capacity - keys);
    } else {
      self.counts.shrink_to(capacity.max(keys));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::HashMultiSet;
  use crate::families::HashAssociativeOps;

  #[test]
  fn test_multiplicity() {
    let mut set = ["x", "y", "x"].into_iter().collect::<HashMultiSet<_>>();
    assert_eq!(set.count(&"x"), 2);
    assert_eq!(set.equal_range(&"x"), vec!["x", "x"]);
    assert!(set.remove_one(&"x"));
    assert_eq!(set.count(&"x"), 1);
    assert!(set.remove_one(&"x"));
    assert!(!set.contains_key(&"x"));
    assert_eq!(set.len(), 1);
  }
}
