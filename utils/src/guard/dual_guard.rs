//! Two-guard acquisition in a global order.
//!
//! Both guards are always taken in ascending [`InstanceId`] order, whichever side is
//! the caller and whichever is the argument. Two threads running `a.swap(b)` and
//! `b.swap(a)` therefore contend on the same first guard instead of each holding one
//! and waiting for the other. The guards come back in caller/argument position.

use crate::error::CollectionError;
use crate::guard::{GuardBackend, InstanceId};

fn ensure_distinct(left: InstanceId, right: InstanceId) -> Result<(), CollectionError> {
  if left == right {
    Err(CollectionError::SameInstance)
  } else {
    Ok(())
  }
}

/// Acquires write guards on both backends.
///
/// # Errors
/// `CollectionError::SameInstance` when both ids are equal; acquiring the same guard
/// twice would block forever.
pub fn write_pair<'a, T, U, L, R>(
  left: (InstanceId, &'a L),
  right: (InstanceId, &'a R),
) -> Result<(L::WriteGuard<'a>, R::WriteGuard<'a>), CollectionError>
where
  L: GuardBackend<T>,
  R: GuardBackend<U>, {
  ensure_distinct(left.0, right.0)?;
  tracing::trace!("write_pair: left = {}, right = {}", left.0, right.0);
  if left.0 < right.0 {
    let l = left.1.write();
    let r = right.1.write();
    Ok((l, r))
  } else {
    let r = right.1.write();
    let l = left.1.write();
    Ok((l, r))
  }
}

/// Acquires read guards on both backends; see [`write_pair`] for the ordering rule.
pub fn read_pair<'a, T, U, L, R>(
  left: (InstanceId, &'a L),
  right: (InstanceId, &'a R),
) -> Result<(L::ReadGuard<'a>, R::ReadGuard<'a>), CollectionError>
where
  L: GuardBackend<T>,
  R: GuardBackend<U>, {
  ensure_distinct(left.0, right.0)?;
  tracing::trace!("read_pair: left = {}, right = {}", left.0, right.0);
  if left.0 < right.0 {
    let l = left.1.read();
    let r = right.1.read();
    Ok((l, r))
  } else {
    let r = right.1.read();
    let l = left.1.read();
    Ok((l, r))
  }
}

/// Acquires a write guard on `left` and a read guard on `right`.
pub fn write_read_pair<'a, T, U, L, R>(
  left: (InstanceId, &'a L),
  right: (InstanceId, &'a R),
) -> Result<(L::WriteGuard<'a>, R::ReadGuard<'a>), CollectionError>
where
  L: GuardBackend<T>,
  R: GuardBackend<U>, {
  ensure_distinct(left.0, right.0)?;
  tracing::trace!("write_read_pair: left = {}, right = {}", left.0, right.0);
  if left.0 < right.0 {
    let l = left.1.write();
    let r = right.1.read();
    Ok((l, r))
  } else {
    let r = right.1.read();
    let l = left.1.write();
    Ok((l, r))
  }
}

#[cfg(test)]
mod tests;
