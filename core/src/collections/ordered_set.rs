use std::collections::BTreeSet;

use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use crate::guarded::Guarded;

/// An ordered set behind one guard.
pub type GuardedBTreeSet<K, B = ExclusiveGuard<BTreeSet<K>>> = Guarded<BTreeSet<K>, B>;

impl<K, B> Guarded<BTreeSet<K>, B>
where
  K: Ord,
  B: GuardBackend<BTreeSet<K>>,
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

  /// Adds every key of `other`; both guards are held for the whole update.
  pub fn union_with(&self, other: &Self)
  where
    K: Clone, {
    self.with_pair_from(other, |s, o| s.extend(o.iter().cloned()));
  }

  pub fn intersect_with(&self, other: &Self)
  where
    K: Clone, {
    self.with_pair_from(other, |s, o| s.retain(|k| o.contains(k)));
  }

  pub fn difference_with(&self, other: &Self)
  where
    K: Clone, {
    self.with_pair_from(other, |s, o| s.retain(|k| !o.contains(k)));
  }

  pub fn symmetric_difference_with(&self, other: &Self)
  where
    K: Clone, {
    self.with_pair_from(other, |s, o| {
      *s = s.symmetric_difference(o).cloned().collect();
    });
  }

  pub fn is_subset(&self, other: &Self) -> bool {
    self.with_pair(other, |s, o| s.is_subset(o))
  }

  pub fn is_disjoint(&self, other: &Self) -> bool {
    self.with_pair(other, |s, o| s.is_disjoint(o))
  }
}

#[cfg(test)]
mod tests {
  use std::sync::mpsc;
  use std::sync::Arc;
  use std::thread;
  use std::time::Duration;

  use rstest::rstest;

  use crate::collections::GuardedBTreeSet;
  use crate::families::OrderedAdapter;

  fn set_of(keys: &[u8]) -> GuardedBTreeSet<u8> {
    keys.iter().copied().collect()
  }

  #[rstest(op, expected)]
  #[case("union", vec![1, 2, 3, 4])]
  #[case("intersect", vec![2, 3])]
  #[case("difference", vec![1])]
  #[case("symmetric", vec![1, 4])]
  fn test_set_combination(op: &str, expected: Vec<u8>) {
    let left = set_of(&[1, 2, 3]);
    let right = set_of(&[2, 3, 4]);
    match op {
      "union" => left.union_with(&right),
      "intersect" => left.intersect_with(&right),
      "difference" => left.difference_with(&right),
      _ => left.symmetric_difference_with(&right),
    }
    assert_eq!(left.items(), expected);
    assert_eq!(right.items(), vec![2, 3, 4]);
  }

  #[test]
  fn test_combining_with_itself() {
    let set = set_of(&[1, 2]);
    set.union_with(&set);
    assert_eq!(set.items(), vec![1, 2]);
    set.symmetric_difference_with(&set);
    assert!(set.is_empty());
    assert!(set.is_subset(&set));
  }

  #[test]
  fn test_opposite_unions_complete() {
    let a = Arc::new(set_of(&[1]));
    let b = Arc::new(set_of(&[2]));
    let (tx, rx) = mpsc::channel();
    for (left, right) in [(a.clone(), b.clone()), (b.clone(), a.clone())] {
      let tx = tx.clone();
      thread::spawn(move || {
        for _ in 0..1000 {
          left.union_with(&right);
        }
        tx.send(()).unwrap();
      });
    }
    for _ in 0..2 {
      rx.recv_timeout(Duration::from_secs(30)).expect("union deadlocked");
    }
    assert_eq!(a.items(), vec![1, 2]);
    assert_eq!(b.items(), vec![1, 2]);
    assert!(!a.is_disjoint(&b));
    assert!(a.contains(&2) && b.insert(3));
  }
}
