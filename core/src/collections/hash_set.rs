use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use super::base::HashMultiSet;
use crate::guarded::Guarded;

/// A hash set behind one guard.
pub type GuardedHashSet<K, B = ExclusiveGuard<HashSet<K>>> = Guarded<HashSet<K>, B>;

/// A hash multiset behind one guard.
pub type GuardedHashMultiSet<K, B = ExclusiveGuard<HashMultiSet<K>>> = Guarded<HashMultiSet<K>, B>;

impl<K, S, B> Guarded<HashSet<K, S>, B>
where
  K: Eq + Hash,
  S: BuildHasher,
  B: GuardBackend<HashSet<K, S>>,
{
  pub fn insert(&self, key: K) -> bool {
    self.with_write(|s| s.insert(key))
  }

  pub fn remove(&self, key: &K) -> bool {
    self.with_write(|s| s.remove(key))
  }

  pub fn contains(&self, key: &K) -> bool {
    self.with_read(|s| s.contains(key))
  }

  pub fn union_with(&self, other: &Self)
  where
    K: Clone,
    S: Clone, {
    self.with_pair_from(other, |s, o| s.extend(o.iter().cloned()));
  }

  pub fn intersect_with(&self, other: &Self)
  where
    K: Clone,
    S: Clone, {
    self.with_pair_from(other, |s, o| s.retain(|k| o.contains(k)));
  }

  pub fn difference_with(&self, other: &Self)
  where
    K: Clone,
    S: Clone, {
    self.with_pair_from(other, |s, o| s.retain(|k| !o.contains(k)));
  }

  pub fn symmetric_difference_with(&self, other: &Self)
  where
    K: Clone,
    S: Clone, {
    self.with_pair_from(other, |s, o| {
      let (keep, add): (Vec<K>, Vec<K>) = (
        s.iter().filter(|k| !o.contains(*k)).cloned().collect(),
        o.iter().filter(|k| !s.contains(*k)).cloned().collect(),
      );
      s.clear();
      s.extend(keep);
      s.extend(add);
    });
  }

  pub fn is_subset(&self, other: &Self) -> bool {
    self.with_pair(other, |s, o| s.is_subset(o))
  }
}

impl<K, B> Guarded<HashMultiSet<K>, B>
where
  K: Eq + Hash,
  B: GuardBackend<HashMultiSet<K>>,
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
