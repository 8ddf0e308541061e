use std::ops::{Deref, DerefMut};

/// ガードオブジェクトをラップするハンドル
///
/// A held guard exposed as a scoped accessor. Anything borrowed through the handle
/// is tied to its lifetime, so no reference into the protected value can survive
/// the release of the lock.
#[derive(Debug)]
pub struct GuardHandle<G> {
  guard: G,
}

impl<G> GuardHandle<G> {
  pub fn new(guard: G) -> Self {
    Self { guard }
  }

  pub fn into_inner(self) -> G {
    self.guard
  }
}

impl<G: Deref> Deref for GuardHandle<G> {
  type Target = G::Target;

  fn deref(&self) -> &Self::Target {
    &self.guard
  }
}

impl<G: DerefMut> DerefMut for GuardHandle<G> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.guard
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::GuardHandle;

  #[test]
  fn test_handle_derefs_to_protected_value() {
    let mutex = Mutex::new(vec![1, 2]);
    {
      let mut handle = GuardHandle::new(mutex.lock().unwrap());
      handle.push(3);
      assert_eq!(handle.len(), 3);
    }
    assert!(mutex.try_lock().is_ok());
  }

  #[test]
  fn test_into_inner_keeps_lock_held() {
    let mutex = Mutex::new(1_u8);
    let guard = GuardHandle::new(mutex.lock().unwrap()).into_inner();
    assert!(mutex.try_lock().is_err());
    drop(guard);
    assert!(mutex.try_lock().is_ok());
  }
}
