use std::collections::VecDeque;

use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, GuardBackend};

use crate::guarded::Guarded;

/// A double-ended queue behind one guard.
pub type GuardedDeque<T, B = ExclusiveGuard<VecDeque<T>>> = Guarded<VecDeque<T>, B>;

impl<T, B> Guarded<VecDeque<T>, B>
where
  B: GuardBackend<VecDeque<T>>,
{
  pub fn reserve(&self, additional: usize) {
    self.with_write(|d| d.reserve(additional));
  }

  pub fn capacity(&self) -> usize {
    self.with_read(|d| d.capacity())
  }

  pub fn shrink_to_fit(&self) {
    self.with_write(|d| d.shrink_to_fit());
  }

  /// Rotates `n` places toward the front.
  ///
  /// # Errors
  /// `OutOfRange` when `n > len`.
  pub fn rotate_left(&self, n: usize) -> Result<(), CollectionError> {
    self.with_write(|d| -> Result<(), CollectionError> {
      CollectionError::check_position(n, d.len())?;
      d.rotate_left(n);
      Ok(())
    })
  }

  pub fn rotate_right(&self, n: usize) -> Result<(), CollectionError> {
    self.with_write(|d| -> Result<(), CollectionError> {
      CollectionError::check_position(n, d.len())?;
      d.rotate_right(n);
      Ok(())
    })
  }
}
