use std::collections::BTreeMap;
use std::iter;
use std::ops::Bound;

use crate::families::{ContainerOps, KeyBounds, OrderedAssociativeOps};

/// An ordered multiset: keys in ascending order, each stored with its multiplicity.<br/>
/// 重複を許す順序付き集合。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BTreeMultiSet<K> {
  counts: BTreeMap<K, usize>,
  len: usize,
}

impl<K: Ord> BTreeMultiSet<K> {
  pub fn new() -> Self {
    Self {
      counts: BTreeMap::new(),
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

  /// Removes every occurrence of `key`; returns how many there were.
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

  /// Number of distinct keys.
  pub fn distinct_len(&self) -> usize {
    self.counts.len()
  }

  /// Every occurrence in ascending order.
  pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
    self
      .counts
      .iter()
      .flat_map(|(key, count)| iter::repeat(key).take(*count))
  }

  fn expand<'a>(entries: impl Iterator<Item = (&'a K, &'a usize)>) -> Vec<K>
  where
    K: Clone + 'a, {
    entries
      .flat_map(|(key, count)| iter::repeat(key.clone()).take(*count))
      .collect()
  }

  fn pop_entry(&mut self, key: K) -> K
  where
    K: Clone, {
    self.remove_one(&key);
    key
  }
}

impl<K: Ord> Default for BTreeMultiSet<K> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Ord> FromIterator<K> for BTreeMultiSet<K> {
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut set = Self::new();
    for key in iter {
      set.insert(key);
    }
    set
  }
}

impl<K: Ord> ContainerOps for BTreeMultiSet<K> {
  type Item = K;

  fn len(&self) -> usize {
    self.len
  }

  fn clear(&mut self) {
    BTreeMultiSet::clear(self);
  }
}

impl<K: Ord + Clone> OrderedAssociativeOps for BTreeMultiSet<K> {
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

  fn lower_bound(&self, key: &K) -> Option<K> {
    self
      .counts
      .range((Bound::Included(key), Bound::Unbounded))
      .next()
      .map(|(k, _)| k.clone())
  }

  fn upper_bound(&self, key: &K) -> Option<K> {
    self
      .counts
      .range((Bound::Excluded(key), Bound::Unbounded))
      .next()
      .map(|(k, _)| k.clone())
  }

  fn range_items(&self, range: KeyBounds<'_, K>) -> Vec<K> {
    if !crate::families::is_valid_range(&range) {
      return Vec::new();
    }
    Self::expand(self.counts.range(range))
  }

  fn remove_key_range(&mut self, range: KeyBounds<'_, K>) -> usize {
    if !crate::families::is_valid_range(&range) {
      return 0;
    }
    let keys = self.counts.range(range).map(|(k, _)| k.clone()).collect::<Vec<_>>();
    keys.iter().map(|key| self.remove_all(key)).sum()
  }

  fn first(&self) -> Option<K> {
    self.counts.keys().next().cloned()
  }

  fn last(&self) -> Option<K> {
    self.counts.keys().next_back().cloned()
  }

  fn pop_first(&mut self) -> Option<K> {
    let key = self.counts.keys().next().cloned()?;
    Some(self.pop_entry(key))
  }

  fn pop_last(&mut self) -> Option<K> {
    let key = self.counts.keys().next_back().cloned()?;
    Some(self.pop_entry(key))
  }

  fn items(&self) -> Vec<K> {
    Self::expand(self.counts.iter())
  }

  fn retain_keys(&mut self, mut f: impl FnMut(&K) -> bool) {
    self.counts.retain(|k, _| f(k));
    self.len = self.counts.values().sum();
  }
}
