use std::cmp::Ordering;
use std::collections::LinkedList;
use std::mem;
use std::ops::Range;

use synced_collections_utils_rs::{CollectionError, ExclusiveGuard, GuardBackend};

use crate::guarded::Guarded;

/// A doubly linked list behind one guard.
pub type GuardedList<T, B = ExclusiveGuard<LinkedList<T>>> = Guarded<LinkedList<T>, B>;

fn merge_sorted<T>(target: &mut LinkedList<T>, source: &mut LinkedList<T>, mut cmp: impl FnMut(&T, &T) -> Ordering) {
  let mut left = mem::take(target);
  let mut right = mem::take(source);
  loop {
    let take_right = match (left.front(), right.front()) {
      (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
      _ => break,
    };
    let next = if take_right { right.pop_front() } else { left.pop_front() };
    target.extend(next);
  }
  target.append(&mut left);
  target.append(&mut right);
}

fn rebuild<T>(list: &mut LinkedList<T>, f: impl FnOnce(Vec<T>) -> Vec<T>) {
  let items = mem::take(list).into_iter().collect::<Vec<_>>();
  *list = f(items).into_iter().collect();
}

fn splice_into<T>(target: &mut LinkedList<T>, pos: usize, mut moved: LinkedList<T>) {
  let mut tail = target.split_off(pos);
  target.append(&mut moved);
  target.append(&mut tail);
}

impl<T, B> Guarded<LinkedList<T>, B>
where
  B: GuardBackend<LinkedList<T>>,
{
  /// Moves every element of `other` into `self` before position `pos`, leaving `other` empty.
  ///
  /// # Errors
  /// `SameInstance` if `other` is `self`, `OutOfRange` if `pos > len`.
  pub fn splice_all(&self, pos: usize, other: &Self) -> Result<(), CollectionError> {
    self.with_pair_mut(other, |target, source| -> Result<(), CollectionError> {
      CollectionError::check_position(pos, target.len())?;
      splice_into(target, pos, mem::take(source));
      Ok(())
    })?
  }

  /// Moves the element at `index` of `other` into `self` before position `pos`.
  ///
  /// # Errors
  /// `SameInstance` if `other` is `self`, `OutOfRange` if `pos > len` or `index >= other.len()`.
  pub fn splice_one(&self, pos: usize, other: &Self, index: usize) -> Result<(), CollectionError> {
    self.with_pair_mut(other, |target, source| -> Result<(), CollectionError> {
      CollectionError::check_position(pos, target.len())?;
      CollectionError::check_index(index, source.len())?;
      let mut moved = source.split_off(index);
      let mut rest = moved.split_off(1);
      source.append(&mut rest);
      splice_into(target, pos, moved);
      Ok(())
    })?
  }

  /// Moves the elements of `other` in `range` into `self` before position `pos`.
  pub fn splice_range(&self, pos: usize, other: &Self, range: Range<usize>) -> Result<(), CollectionError> {
    self.with_pair_mut(other, |target, source| -> Result<(), CollectionError> {
      CollectionError::check_position(pos, target.len())?;
      CollectionError::check_range(range.start, range.end, source.len())?;
      let mut moved = source.split_off(range.start);
      let mut rest = moved.split_off(range.end - range.start);
      source.append(&mut rest);
      splice_into(target, pos, moved);
      Ok(())
    })?
  }

  /// Merges the sorted `other` into the sorted `self`; equal elements of `self` come first.
  /// `other` is left empty. Merging an instance with itself does nothing.
  pub fn merge(&self, other: &Self)
  where
    T: Ord, {
    self.merge_by(other, T::cmp);
  }

  pub fn merge_by(&self, other: &Self, cmp: impl FnMut(&T, &T) -> Ordering) {
    if let Err(err) = self.with_pair_mut(other, |target, source| merge_sorted(target, source, cmp)) {
      tracing::debug!("merge skipped: id = {}, reason = {}", self.id(), err);
    }
  }

  /// Stable sort.
  pub fn sort(&self)
  where
    T: Ord, {
    self.sort_by(T::cmp);
  }

  pub fn sort_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) {
    self.with_write(|list| rebuild(list, |mut items| {
      items.sort_by(cmp);
      items
    }));
  }

  /// Collapses runs of equal neighbours; returns how many elements were removed.
  pub fn unique(&self) -> usize
  where
    T: PartialEq, {
    self.unique_by(|a, b| a == b)
  }

  pub fn unique_by(&self, mut same: impl FnMut(&T, &T) -> bool) -> usize {
    self.with_write(|list| {
      let before = list.len();
      rebuild(list, |mut items| {
        items.dedup_by(|later, earlier| same(earlier, later));
        items
      });
      before - list.len()
    })
  }

  pub fn remove_value(&self, value: &T) -> usize
  where
    T: PartialEq, {
    self.remove_if(|item| item == value)
  }

  /// Removes every element matching `pred`; returns how many were removed.
  pub fn remove_if(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
    self.with_write(|list| {
      let before = list.len();
      *list = mem::take(list).into_iter().filter(|item| !pred(item)).collect();
      before - list.len()
    })
  }

  pub fn reverse(&self) {
    self.with_write(|list| {
      *list = mem::take(list).into_iter().rev().collect();
    });
  }
}
