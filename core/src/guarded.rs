use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::str::FromStr;

use synced_collections_utils_rs::{
  read_pair, write_pair, write_read_pair, CollectionError, ExclusiveGuard, GuardBackend, GuardHandle, InstanceId,
};

use crate::families::ContainerOps;

/// A base container paired with the single guard that protects it.
///
/// Every operation acquires the guard, runs against the container and releases the
/// guard before returning, so each call is atomic with respect to every other call
/// on the same instance. Nothing is atomic across calls: "check then insert" written
/// as two calls can still race. Use [`Guarded::with_write`] to run such a sequence
/// inside one critical section.
///
/// No reference into the container escapes a call. Reads hand out owned copies;
/// anything borrowed lives only inside a closure or a [`GuardHandle`].
///
/// # Type parameters
///
/// * `C` - the unsynchronized base container
/// * `B` - the guard backend; [`ExclusiveGuard`] by default, or
///   [`SharedExclusiveGuard`](synced_collections_utils_rs::SharedExclusiveGuard)
///   to let readers overlap
pub struct Guarded<C, B = ExclusiveGuard<C>>
where
  B: GuardBackend<C>, {
  id: InstanceId,
  backend: B,
  _marker: PhantomData<fn() -> C>,
}

impl<C, B> Guarded<C, B>
where
  B: GuardBackend<C>,
{
  pub fn new() -> Self
  where
    C: Default, {
    Self::from_container(C::default())
  }

  pub fn from_container(container: C) -> Self {
    Self {
      id: InstanceId::next(),
      backend: B::new(container),
      _marker: PhantomData,
    }
  }

  pub fn id(&self) -> InstanceId {
    self.id
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  /// Runs `f` against the container while holding the guard for reading.
  pub fn with_read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
    let guard = self.backend.read();
    f(&*guard)
  }

  /// Runs `f` against the container while holding the guard for writing.
  ///
  /// Calling any method of the same instance from inside `f` blocks forever.
  pub fn with_write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
    let mut guard = self.backend.write();
    f(&mut *guard)
  }

  /// Holds the guard until the returned handle is dropped.
  pub fn lock(&self) -> GuardHandle<B::WriteGuard<'_>> {
    GuardHandle::new(self.backend.write())
  }

  pub fn read_lock(&self) -> GuardHandle<B::ReadGuard<'_>> {
    GuardHandle::new(self.backend.read())
  }

  /// Clones the whole container under one acquisition.
  pub fn snapshot(&self) -> C
  where
    C: Clone, {
    self.with_read(C::clone)
  }

  pub fn replace(&self, container: C) -> C {
    self.with_write(|c| mem::replace(c, container))
  }

  pub fn take(&self) -> C
  where
    C: Default, {
    self.with_write(mem::take)
  }

  pub fn get_mut(&mut self) -> &mut C {
    self.backend.get_mut()
  }

  pub fn into_inner(self) -> C {
    self.backend.into_inner()
  }

  fn pair(&self) -> (InstanceId, &B) {
    (self.id, &self.backend)
  }

  /// Exchanges the contents of two instances. Swapping an instance with itself does nothing.
  pub fn swap_with(&self, other: &Self) {
    if let Ok((mut l, mut r)) = write_pair::<C, C, B, B>(self.pair(), other.pair()) {
      tracing::debug!("swap_with: left = {}, right = {}", self.id, other.id);
      mem::swap(&mut *l, &mut *r);
    }
  }

  /// Replaces the contents of `self` with a copy of `source`.
  pub fn assign_from(&self, source: &Self)
  where
    C: Clone, {
    if let Ok((mut l, r)) = write_read_pair::<C, C, B, B>(self.pair(), source.pair()) {
      tracing::debug!("assign_from: target = {}, source = {}", self.id, source.id);
      l.clone_from(&*r);
    }
  }

  /// Reads both containers in one combined critical section.
  ///
  /// When `other` is `self` the guard is taken once and `f` sees the same container twice.
  pub fn with_pair<R>(&self, other: &Self, f: impl FnOnce(&C, &C) -> R) -> R {
    match read_pair::<C, C, B, B>(self.pair(), other.pair()) {
      Ok((l, r)) => f(&*l, &*r),
      Err(_) => self.with_read(|c| f(c, c)),
    }
  }

  /// Mutates both containers in one combined critical section.
  ///
  /// # Errors
  /// `CollectionError::SameInstance` if `other` is `self`.
  pub fn with_pair_mut<R>(&self, other: &Self, f: impl FnOnce(&mut C, &mut C) -> R) -> Result<R, CollectionError> {
    let (mut l, mut r) = write_pair::<C, C, B, B>(self.pair(), other.pair())?;
    Ok(f(&mut *l, &mut *r))
  }

  /// Mutates `self` while reading `source`.
  ///
  /// When `source` is `self`, `f` receives a copy of the container taken inside the
  /// same critical section.
  pub fn with_pair_from<R>(&self, source: &Self, f: impl FnOnce(&mut C, &C) -> R) -> R
  where
    C: Clone, {
    match write_read_pair::<C, C, B, B>(self.pair(), source.pair()) {
      Ok((mut l, r)) => f(&mut *l, &*r),
      Err(_) => self.with_write(|c| {
        let copy = c.clone();
        f(c, &copy)
      }),
    }
  }
}

impl<C, B> Guarded<C, B>
where
  C: ContainerOps,
  B: GuardBackend<C>,
{
  pub fn len(&self) -> usize {
    self.with_read(|c| c.len())
  }

  pub fn is_empty(&self) -> bool {
    self.with_read(|c| c.is_empty())
  }

  pub fn max_size(&self) -> usize {
    self.with_read(|c| c.max_size())
  }

  pub fn clear(&self) {
    self.with_write(|c| c.clear());
  }
}

impl<C, B> Clone for Guarded<C, B>
where
  C: Clone,
  B: GuardBackend<C>,
{
  fn clone(&self) -> Self {
    Self::from_container(self.snapshot())
  }
}

impl<C, B> PartialEq for Guarded<C, B>
where
  C: PartialEq,
  B: GuardBackend<C>,
{
  fn eq(&self, other: &Self) -> bool {
    self.with_pair(other, |l, r| l == r)
  }
}

impl<C, B> Eq for Guarded<C, B>
where
  C: Eq,
  B: GuardBackend<C>,
{
}

impl<C, B> Default for Guarded<C, B>
where
  C: Default,
  B: GuardBackend<C>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<C, B> From<C> for Guarded<C, B>
where
  B: GuardBackend<C>,
{
  fn from(container: C) -> Self {
    Self::from_container(container)
  }
}

impl<A, C, B> FromIterator<A> for Guarded<C, B>
where
  C: FromIterator<A>,
  B: GuardBackend<C>,
{
  fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
    Self::from_container(iter.into_iter().collect())
  }
}

impl<C, B> FromStr for Guarded<C, B>
where
  C: FromStr,
  B: GuardBackend<C>,
{
  type Err = C::Err;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    C::from_str(s).map(Self::from_container)
  }
}

impl<C, B> Debug for Guarded<C, B>
where
  C: Debug,
  B: GuardBackend<C>,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.with_read(|c| f.debug_struct("Guarded").field("id", &self.id).field("inner", c).finish())
  }
}

impl<C, B> Display for Guarded<C, B>
where
  C: Display,
  B: GuardBackend<C>,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.with_read(|c| Display::fmt(c, f))
  }
}

#[cfg(test)]
mod tests;
