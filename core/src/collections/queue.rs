use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use super::base::Queue;
use crate::guarded::Guarded;

/// A FIFO queue behind one guard; use the push/pop surface plus `front`/`back`.
pub type GuardedQueue<T, B = ExclusiveGuard<Queue<T>>> = Guarded<Queue<T>, B>;

impl<T, B> Guarded<Queue<T>, B>
where
  B: GuardBackend<Queue<T>>,
{
  pub fn front(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|q| q.front().cloned())
  }

  pub fn back(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|q| q.back().cloned())
  }
}
