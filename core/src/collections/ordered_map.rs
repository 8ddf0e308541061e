use std::collections::BTreeMap;

use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, GuardBackend};

use super::base::BTreeMultiSet;
use crate::guarded::Guarded;

/// An ordered map behind one guard.
pub type GuardedBTreeMap<K, V, B = ExclusiveGuard<BTreeMap<K, V>>> = Guarded<BTreeMap<K, V>, B>;

/// An ordered multiset behind one guard.
pub type GuardedBTreeMultiSet<K, B = ExclusiveGuard<BTreeMultiSet<K>>> = Guarded<BTreeMultiSet<K>, B>;

impl<K, V, B> Guarded<BTreeMap<K, V>, B>
where
  K: Ord,
  B: GuardBackend<BTreeMap<K, V>>,
{
  /// Inserts or overwrites; returns the previous value.
  pub fn insert(&self, key: K, value: V) -> Option<V> {
    self.with_write(|m| m.insert(key, value))
  }

  pub fn get(&self, key: &K) -> Option<V>
  where
    V: Clone, {
    self.with_read(|m| m.get(key).cloned())
  }

  /// # Errors
  /// `KeyNotFound` when `key` is absent.
  pub fn at(&self, key: &K) -> Result<V, CollectionError>
  where
    V: Clone, {
    self.get(key).ok_or(CollectionError::KeyNotFound)
  }

  /// Index access: inserts `V::default()` when `key` is absent, then returns the value.
  pub fn get_or_default(&self, key: K) -> V
  where
    V: Clone + Default, {
    self.with_write(|m| m.entry(key).or_default().clone())
  }

  /// Runs `f` on the value for `key` inside the critical section.
  pub fn update<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
    self.with_write(|m| m.get_mut(key).map(f))
  }

  /// Runs `f` on the value for `key`, inserting `V::default()` first when absent.
  pub fn upsert<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
  where
    V: Default, {
    self.with_write(|m| f(m.entry(key).or_default()))
  }

  pub fn remove(&self, key: &K) -> Option<V> {
    self.with_write(|m| m.remove(key))
  }

  pub fn keys(&self) -> Vec<K>
  where
    K: Clone, {
    self.with_read(|m| m.keys().cloned().collect())
  }

  pub fn values(&self) -> Vec<V>
  where
    V: Clone, {
    self.with_read(|m| m.values().cloned().collect())
  }
}

impl<K, B> Guarded<BTreeMultiSet<K>, B>
where
  K: Ord,
  B: GuardBackend<BTreeMultiSet<K>>,
{
  pub fn insert(&self, key: K) {
    self.with_write(|s| s.insert(key));
  }

  pub fn remove_one(&self, key: &K) -> bool {
    self.with_write(|s| s.remove_one(key))
  }

  pub fn count(&self, key: &K) -> usize {
    self.with_read(|s| s.count(key))
  }
}
