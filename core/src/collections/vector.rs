use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use crate::guarded::Guarded;

/// A growable array behind one guard.
pub type GuardedVec<T, B = ExclusiveGuard<Vec<T>>> = Guarded<Vec<T>, B>;

impl<T, B> Guarded<Vec<T>, B>
where
  B: GuardBackend<Vec<T>>,
{
  /// Reserves room for `additional` more elements; any reallocation happens under the guard.
  pub fn reserve(&self, additional: usize) {
    self.with_write(|v| v.reserve(additional));
  }

  pub fn capacity(&self) -> usize {
    self.with_read(|v| v.capacity())
  }

  pub fn shrink_to_fit(&self) {
    self.with_write(|v| v.shrink_to_fit());
  }

  /// Sorts in place with one acquisition.
  pub fn sort(&self)
  where
    T: Ord, {
    self.with_write(|v| v.sort());
  }

  pub fn dedup(&self)
  where
    T: PartialEq, {
    self.with_write(|v| v.dedup());
  }
}
