use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Bound, RangeBounds};

use synced_collections_utils_rs::GuardBackend;

use super::ContainerOps;
use crate::guarded::Guarded;

/// A key range as handed to [`OrderedAssociativeOps::range_items`].
pub type KeyBounds<'a, K> = (Bound<&'a K>, Bound<&'a K>);

/// Returns `false` for bounds the std tree range functions would reject with a panic,
/// i.e. an inverted range or an empty range excluded on both sides.
pub(crate) fn is_valid_range<K: Ord>(range: &KeyBounds<'_, K>) -> bool {
  match range {
    (Bound::Included(lo), Bound::Included(hi)) => lo <= hi,
    (Bound::Included(lo), Bound::Excluded(hi)) | (Bound::Excluded(lo), Bound::Included(hi)) => lo <= hi,
    (Bound::Excluded(lo), Bound::Excluded(hi)) => lo < hi,
    _ => true,
  }
}

/// An ordered associative container: map, set or multiset kept sorted by key.<br/>
/// キーの順序で要素を保持する連想コンテナ。
///
/// Lookups return owned items so that implementations storing keys and values apart can
/// still answer with a single `Item`.
pub trait OrderedAssociativeOps: ContainerOps {
  type Key: Ord;

  /// Inserts `item` unless a unique-key container already holds its key.<br/>
  /// 挿入できた場合は `true` を返します。
  fn insert_item(&mut self, item: Self::Item) -> bool;

  /// Removes every element with `key`; returns how many were removed.
  fn remove_key(&mut self, key: &Self::Key) -> usize;

  fn count_key(&self, key: &Self::Key) -> usize;

  fn contains_key(&self, key: &Self::Key) -> bool {
    self.count_key(key) > 0
  }

  fn find(&self, key: &Self::Key) -> Option<Self::Item>;

  /// First element whose key is not less than `key`.<br/>
  /// `key` 以上の最初の要素。
  fn lower_bound(&self, key: &Self::Key) -> Option<Self::Item>;

  /// First element whose key is greater than `key`.<br/>
  /// `key` より大きい最初の要素。
  fn upper_bound(&self, key: &Self::Key) -> Option<Self::Item>;

  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item> {
    self.range_items((Bound::Included(key), Bound::Included(key)))
  }

  /// Elements within `range`, in key order. An inverted range yields nothing.
  fn range_items(&self, range: KeyBounds<'_, Self::Key>) -> Vec<Self::Item>;

  /// Removes every element within `range`; returns how many were removed.
  fn remove_key_range(&mut self, range: KeyBounds<'_, Self::Key>) -> usize;

  fn first(&self) -> Option<Self::Item>;

  fn last(&self) -> Option<Self::Item>;

  fn pop_first(&mut self) -> Option<Self::Item>;

  fn pop_last(&mut self) -> Option<Self::Item>;

  fn items(&self) -> Vec<Self::Item>;

  fn retain_keys(&mut self, f: impl FnMut(&Self::Key) -> bool);

  /// Inserts every item in order; returns how many were actually inserted.
  fn extend_items(&mut self, items: Vec<Self::Item>) -> usize {
    let mut inserted = 0;
    for item in items {
      if self.insert_item(item) {
        inserted += 1;
      }
    }
    inserted
  }
}

impl<K, V> OrderedAssociativeOps for BTreeMap<K, V>
where
  K: Ord + Clone,
  V: Clone,
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
    usize::from(BTreeMap::remove(self, key).is_some())
  }

  fn count_key(&self, key: &K) -> usize {
    usize::from(BTreeMap::contains_key(self, key))
  }

  fn find(&self, key: &K) -> Option<(K, V)> {
    self.get_key_value(key).map(|(k, v)| (k.clone(), v.clone()))
  }

  fn lower_bound(&self, key: &K) -> Option<(K, V)> {
    self
      .range((Bound::Included(key), Bound::Unbounded))
      .next()
      .map(|(k, v)| (k.clone(), v.clone()))
  }

  fn upper_bound(&self, key: &K) -> Option<(K, V)> {
    self
      .range((Bound::Excluded(key), Bound::Unbounded))
      .next()
      .map(|(k, v)| (k.clone(), v.clone()))
  }

  fn range_items(&self, range: KeyBounds<'_, K>) -> Vec<(K, V)> {
    if !is_valid_range(&range) {
      return Vec::new();
    }
    self.range(range).map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  fn remove_key_range(&mut self, range: KeyBounds<'_, K>) -> usize {
    if !is_valid_range(&range) {
      return 0;
    }
    let keys = self.range(range).map(|(k, _)| k.clone()).collect::<Vec<_>>();
    for key in &keys {
      BTreeMap::remove(self, key);
    }
    keys.len()
  }

  fn first(&self) -> Option<(K, V)> {
    self.first_key_value().map(|(k, v)| (k.clone(), v.clone()))
  }

  fn last(&self) -> Option<(K, V)> {
    self.last_key_value().map(|(k, v)| (k.clone(), v.clone()))
  }

  fn pop_first(&mut self) -> Option<(K, V)> {
    BTreeMap::pop_first(self)
  }

  fn pop_last(&mut self) -> Option<(K, V)> {
    BTreeMap::pop_last(self)
  }

  fn items(&self) -> Vec<(K, V)> {
    self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  fn retain_keys(&mut self, mut f: impl FnMut(&K) -> bool) {
    BTreeMap::retain(self, |k, _| f(k));
  }
}

impl<K> OrderedAssociativeOps for BTreeSet<K>
where
  K: Ord + Clone,
{
  type Key = K;

  fn insert_item(&mut self, item: K) -> bool {
    BTreeSet::insert(self, item)
  }

  fn remove_key(&mut self, key: &K) -> usize {
    usize::from(BTreeSet::remove(self, key))
  }

  fn count_key(&self, key: &K) -> usize {
    usize::from(BTreeSet::contains(self, key))
  }

  fn find(&self, key: &K) -> Option<K> {
    BTreeSet::get(self, key).cloned()
  }

  fn lower_bound(&self, key: &K) -> Option<K> {
    self.range((Bound::Included(key), Bound::Unbounded)).next().cloned()
  }

  fn upper_bound(&self, key: &K) -> Option<K> {
    self.range((Bound::Excluded(key), Bound::Unbounded)).next().cloned()
  }

  fn range_items(&self, range: KeyBounds<'_, K>) -> Vec<K> {
    if !is_valid_range(&range) {
      return Vec::new();
    }
    self.range(range).cloned().collect()
  }

  fn remove_key_range(&mut self, range: KeyBounds<'_, K>) -> usize {
    if !is_valid_range(&range) {
      return 0;
    }
    let keys = self.range(range).cloned().collect::<Vec<_>>();
    for key in &keys {
      BTreeSet::remove(self, key);
    }
    keys.len()
  }

  fn first(&self) -> Option<K> {
    BTreeSet::first(self).cloned()
  }

  fn last(&self) -> Option<K> {
    BTreeSet::last(self).cloned()
  }

  fn pop_first(&mut self) -> Option<K> {
    BTreeSet::pop_first(self)
  }

  fn pop_last(&mut self) -> Option<K> {
    BTreeSet::pop_last(self)
  }

  fn items(&self) -> Vec<K> {
    self.iter().cloned().collect()
  }

  fn retain_keys(&mut self, f: impl FnMut(&K) -> bool) {
    BTreeSet::retain(self, f);
  }
}

/// Locked surface of every [`OrderedAssociativeOps`] container.<br/>
/// 順序付き連想コンテナに対するロック付き操作。
pub trait OrderedAdapter {
  type Key: Ord;
  type Item;

  fn insert_item(&self, item: Self::Item) -> bool;

  fn remove_key(&self, key: &Self::Key) -> usize;

  fn count_key(&self, key: &Self::Key) -> usize;

  fn contains_key(&self, key: &Self::Key) -> bool;

  fn find(&self, key: &Self::Key) -> Option<Self::Item>;

  fn lower_bound(&self, key: &Self::Key) -> Option<Self::Item>;

  fn upper_bound(&self, key: &Self::Key) -> Option<Self::Item>;

  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item>;

  fn range_items(&self, range: impl RangeBounds<Self::Key>) -> Vec<Self::Item>;

  fn remove_key_range(&self, range: impl RangeBounds<Self::Key>) -> usize;

  fn first(&self) -> Option<Self::Item>;

  fn last(&self) -> Option<Self::Item>;

  fn pop_first(&self) -> Option<Self::Item>;

  fn pop_last(&self) -> Option<Self::Item>;

  /// All elements in key order, copied under one acquisition.
  fn items(&self) -> Vec<Self::Item>;

  fn retain_keys(&self, f: impl FnMut(&Self::Key) -> bool);

  /// Bulk insert applied in one critical section.
  fn extend_items(&self, items: impl IntoIterator<Item = Self::Item>) -> usize;

  /// The ordering the container sorts its keys by.
  fn key_comparator(&self) -> fn(&Self::Key, &Self::Key) -> Ordering {
    Ord::cmp
  }
}

impl<C, B> OrderedAdapter for Guarded<C, B>
where
  C: OrderedAssociativeOps,
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

  fn lower_bound(&self, key: &Self::Key) -> Option<Self::Item> {
    self.with_read(|c| c.lower_bound(key))
  }

  fn upper_bound(&self, key: &Self::Key) -> Option<Self::Item> {
    self.with_read(|c| c.upper_bound(key))
  }

  fn equal_range(&self, key: &Self::Key) -> Vec<Self::Item> {
    self.with_read(|c| c.equal_range(key))
  }

  fn range_items(&self, range: impl RangeBounds<Self::Key>) -> Vec<Self::Item> {
    self.with_read(|c| c.range_items((range.start_bound(), range.end_bound())))
  }

  fn remove_key_range(&self, range: impl RangeBounds<Self::Key>) -> usize {
    self.with_write(|c| c.remove_key_range((range.start_bound(), range.end_bound())))
  }

  fn first(&self) -> Option<Self::Item> {
    self.with_read(|c| c.first())
  }

  fn last(&self) -> Option<Self::Item> {
    self.with_read(|c| c.last())
  }

  fn pop_first(&self) -> Option<Self::Item> {
    self.with_write(|c| c.pop_first())
  }

  fn pop_last(&self) -> Option<Self::Item> {
    self.with_write(|c| c.pop_last())
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
}

#[cfg(test)]
mod tests;
