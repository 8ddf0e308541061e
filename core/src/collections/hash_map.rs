use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, GuardBackend};

use super::base::HashMultiMap;
use crate::guarded::Guarded;

/// A hash map behind one guard.
pub type GuardedHashMap<K, V, B = ExclusiveGuard<HashMap<K, V>>> = Guarded<HashMap<K, V>, B>;

/// A hash multimap behind one guard.
pub type GuardedHashMultiMap<K, V, B = ExclusiveGuard<HashMultiMap<K, V>>> = Guarded<HashMultiMap<K, V>, B>;

impl<K, V, S, B> Guarded<HashMap<K, V, S>, B>
where
  K: Eq + Hash,
  S: BuildHasher,
  B: GuardBackend<HashMap<K, V, S>>,
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

  pub fn update<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
    self.with_write(|m| m.get_mut(key).map(f))
  }

  pub fn upsert<R>(&self, key: K, f: impl FnOnce(&mut V) -> R) -> R
  where
    V: Default, {
    self.with_write(|m| f(m.entry(key).or_default()))
  }

  pub fn remove(&self, key: &K) -> Option<V> {
    self.with_write(|m| m.remove(key))
  }
}

impl<K, V, B> Guarded<HashMultiMap<K, V>, B>
where
  K: Eq + Hash,
  B: GuardBackend<HashMultiMap<K, V>>,
{
  pub fn insert(&self, key: K, value: V) {
    self.with_write(|m| m.insert(key, value));
  }

  /// Copies of every value stored under `key`, oldest first.
  pub fn get_all(&self, key: &K) -> Vec<V>
  where
    V: Clone, {
    self.with_read(|m| m.get_all(key).to_vec())
  }

  pub fn remove_all(&self, key: &K) -> Vec<V> {
    self.with_write(|m| m.remove_all(key))
  }
}

#[cfg(test)]
mod tests;
