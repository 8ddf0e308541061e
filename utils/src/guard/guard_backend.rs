use std::fmt::{Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// ガードバックエンドのトレイト
///
/// 1つの値を保護する排他制御プリミティブを抽象化します。ロックは
/// 返されたガードのスコープでのみ保持され、ガードの破棄時に必ず解放されます。
///
/// A backend that owns exactly one protected value. The lock is held for as long
/// as the returned guard lives and is released on every exit path, including
/// unwinding.
pub trait GuardBackend<T> {
  /// 読み取りロックを取得した際に返されるガード型
  type ReadGuard<'a>: Deref<Target = T> + 'a
  where
    Self: 'a;

  /// 書き込みロックを取得した際に返されるガード型
  type WriteGuard<'a>: Deref<Target = T> + DerefMut + 'a
  where
    Self: 'a;

  /// 指定された値で新しいバックエンドを作成します。
  fn new(value: T) -> Self
  where
    Self: Sized;

  /// Acquires the guard for reading, blocking the calling thread while it is contended.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Acquires the guard for writing, blocking the calling thread while it is contended.
  fn write(&self) -> Self::WriteGuard<'_>;

  /// Accesses the value without locking; `&mut self` already proves exclusivity.
  fn get_mut(&mut self) -> &mut T;

  fn into_inner(self) -> T
  where
    Self: Sized;
}

fn recover<G>(err: PoisonError<G>, kind: &'static str) -> G {
  tracing::warn!("guard poisoned by a panicking holder, recovering: kind = {}", kind);
  err.into_inner()
}

/// `std::sync::Mutex` を使用した排他制御バックエンド実装
///
/// Reads and writes take the same exclusive lock.
pub struct ExclusiveGuard<T> {
  inner: Mutex<T>,
}

impl<T> GuardBackend<T> for ExclusiveGuard<T> {
  type ReadGuard<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;
  type WriteGuard<'a>
    = MutexGuard<'a, T>
  where
    Self: 'a;

  fn new(value: T) -> Self {
    Self {
      inner: Mutex::new(value),
    }
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.inner.lock().unwrap_or_else(|err| recover(err, "exclusive"))
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.inner.lock().unwrap_or_else(|err| recover(err, "exclusive"))
  }

  fn get_mut(&mut self) -> &mut T {
    self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
  }

  fn into_inner(self) -> T {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T: Default> Default for ExclusiveGuard<T> {
  fn default() -> Self {
    <Self as GuardBackend<T>>::new(T::default())
  }
}

impl<T> Debug for ExclusiveGuard<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ExclusiveGuard").finish_non_exhaustive()
  }
}

/// `std::sync::RwLock` を使用した読み書きロックバックエンド実装
///
/// 複数の読み取りアクセスまたは単一の書き込みアクセスを提供します。
pub struct SharedExclusiveGuard<T> {
  inner: RwLock<T>,
}

impl<T> GuardBackend<T> for SharedExclusiveGuard<T> {
  type ReadGuard<'a>
    = RwLockReadGuard<'a, T>
  where
    Self: 'a;
  type WriteGuard<'a>
    = RwLockWriteGuard<'a, T>
  where
    Self: 'a;

  fn new(value: T) -> Self {
    Self {
      inner: RwLock::new(value),
    }
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.inner.read().unwrap_or_else(|err| recover(err, "shared"))
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.inner.write().unwrap_or_else(|err| recover(err, "shared"))
  }

  fn get_mut(&mut self) -> &mut T {
    self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
  }

  fn into_inner(self) -> T {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T: Default> Default for SharedExclusiveGuard<T> {
  fn default() -> Self {
    <Self as GuardBackend<T>>::new(T::default())
  }
}

impl<T> Debug for SharedExclusiveGuard<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SharedExclusiveGuard").finish_non_exhaustive()
  }
}
