use std::cmp::Reverse;
use std::collections::BinaryHeap;

use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use crate::guarded::Guarded;

/// A max-heap behind one guard: `pop` returns the greatest element.
pub type GuardedPriorityQueue<T, B = ExclusiveGuard<BinaryHeap<T>>> = Guarded<BinaryHeap<T>, B>;

/// A min-heap behind one guard, storing elements as [`Reverse`].
pub type GuardedMinPriorityQueue<T, B = ExclusiveGuard<BinaryHeap<Reverse<T>>>> = Guarded<BinaryHeap<Reverse<T>>, B>;

impl<T, B> Guarded<BinaryHeap<T>, B>
where
  T: Ord,
  B: GuardBackend<BinaryHeap<T>>,
{
  /// The element `pop` would return next.
  pub fn top(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|heap| heap.peek().cloned())
  }

  /// Replaces the top with `item` in one critical section, returning the old top.
  pub fn replace_top(&self, item: T) -> Option<T> {
    self.with_write(|heap| {
      let old = heap.pop();
      heap.push(item);
      old
    })
  }
}

impl<T, B> Guarded<BinaryHeap<Reverse<T>>, B>
where
  T: Ord,
  B: GuardBackend<BinaryHeap<Reverse<T>>>,
{
  pub fn push_min(&self, item: T) {
    self.with_write(|heap| heap.push(Reverse(item)));
  }

  /// Removes the least element.
  pub fn pop_min(&self) -> Option<T> {
    self.with_write(|heap| heap.pop().map(|Reverse(item)| item))
  }

  pub fn min(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|heap| heap.peek().map(|Reverse(item)| item.clone()))
  }
}
