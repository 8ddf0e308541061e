use std::collections::{LinkedList, VecDeque};
use std::iter;
use std::mem;
use std::ops::Range;

use synced_collections_utils_rs::{CollectionError, GuardBackend};

use super::ContainerOps;
use crate::guarded::Guarded;

/// A positional sequence: growable array, deque or linked list.<br/>
/// 位置でアクセスできるシーケンス。
///
/// Positional operations validate their index and fail with
/// `CollectionError::OutOfRange` / `CollectionError::InvalidRange` instead of panicking.
pub trait SequenceOps: ContainerOps {
  fn get(&self, index: usize) -> Option<&Self::Item>;

  fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

  fn front(&self) -> Option<&Self::Item> {
    self.get(0)
  }

  fn back(&self) -> Option<&Self::Item>;

  fn push_back(&mut self, item: Self::Item);

  fn pop_back(&mut self) -> Option<Self::Item>;

  /// Inserts `item` before position `index`; `index == len` appends.<br/>
  /// `index` の位置に要素を挿入します。
  fn insert_at(&mut self, index: usize, item: Self::Item) -> Result<(), CollectionError>;

  fn remove_at(&mut self, index: usize) -> Result<Self::Item, CollectionError>;

  /// Inserts all `items`, in order, before position `index`.<br/>
  /// 複数の要素を `index` の位置に順番どおり挿入します。
  fn insert_all_at(&mut self, index: usize, items: Vec<Self::Item>) -> Result<(), CollectionError>;

  /// Removes and returns the elements in `range`.<br/>
  /// 範囲内の要素を削除して返します。
  fn remove_range(&mut self, range: Range<usize>) -> Result<Vec<Self::Item>, CollectionError>;

  fn extend_back(&mut self, items: Vec<Self::Item>);

  /// Replaces the whole contents with `items`.<br/>
  /// 内容全体を `items` で置き換えます。
  fn assign(&mut self, items: Vec<Self::Item>) {
    self.clear();
    self.extend_back(items);
  }

  fn truncate(&mut self, len: usize);

  fn resize(&mut self, len: usize, value: Self::Item)
  where
    Self::Item: Clone;

  fn retain(&mut self, f: impl FnMut(&Self::Item) -> bool);

  fn contains(&self, item: &Self::Item) -> bool
  where
    Self::Item: PartialEq;

  fn for_each(&self, f: impl FnMut(&Self::Item));
}

/// A sequence that also grows and shrinks at the front.<br/>
/// 先頭側でも追加・削除ができるシーケンス。
pub trait DoubleEndedOps: SequenceOps {
  fn push_front(&mut self, item: Self::Item);

  fn pop_front(&mut self) -> Option<Self::Item>;
}

impl<T> SequenceOps for Vec<T> {
  fn get(&self, index: usize) -> Option<&T> {
    self.as_slice().get(index)
  }

  fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.as_mut_slice().get_mut(index)
  }

  fn back(&self) -> Option<&T> {
    self.as_slice().last()
  }

  fn push_back(&mut self, item: T) {
    self.push(item);
  }

  fn pop_back(&mut self) -> Option<T> {
    self.pop()
  }

  fn insert_at(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
    CollectionError::check_position(index, Vec::len(self))?;
    Vec::insert(self, index, item);
    Ok(())
  }

  fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
    CollectionError::check_index(index, Vec::len(self))?;
    Ok(Vec::remove(self, index))
  }

  fn insert_all_at(&mut self, index: usize, items: Vec<T>) -> Result<(), CollectionError> {
    CollectionError::check_position(index, Vec::len(self))?;
    self.splice(index..index, items);
    Ok(())
  }

  fn remove_range(&mut self, range: Range<usize>) -> Result<Vec<T>, CollectionError> {
    CollectionError::check_range(range.start, range.end, Vec::len(self))?;
    Ok(self.drain(range).collect())
  }

  fn extend_back(&mut self, items: Vec<T>) {
    Extend::extend(self, items);
  }

  fn truncate(&mut self, len: usize) {
    Vec::truncate(self, len);
  }

  fn resize(&mut self, len: usize, value: T)
  where
    T: Clone, {
    Vec::resize(self, len, value);
  }

  fn retain(&mut self, f: impl FnMut(&T) -> bool) {
    Vec::retain(self, f);
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.as_slice().contains(item)
  }

  fn for_each(&self, f: impl FnMut(&T)) {
    self.iter().for_each(f);
  }
}

impl<T> SequenceOps for VecDeque<T> {
  fn get(&self, index: usize) -> Option<&T> {
    VecDeque::get(self, index)
  }

  fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    VecDeque::get_mut(self, index)
  }

  fn front(&self) -> Option<&T> {
    VecDeque::front(self)
  }

  fn back(&self) -> Option<&T> {
    VecDeque::back(self)
  }

  fn push_back(&mut self, item: T) {
    VecDeque::push_back(self, item);
  }

  fn pop_back(&mut self) -> Option<T> {
    VecDeque::pop_back(self)
  }

  fn insert_at(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
    CollectionError::check_position(index, VecDeque::len(self))?;
    VecDeque::insert(self, index, item);
    Ok(())
  }

  fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
    let len = VecDeque::len(self);
    VecDeque::remove(self, index).ok_or_else(|| CollectionError::out_of_range(index, len))
  }

  fn insert_all_at(&mut self, index: usize, items: Vec<T>) -> Result<(), CollectionError> {
    CollectionError::check_position(index, VecDeque::len(self))?;
    let tail = self.split_off(index);
    Extend::extend(self, items);
    Extend::extend(self, tail);
    Ok(())
  }

  fn remove_range(&mut self, range: Range<usize>) -> Result<Vec<T>, CollectionError> {
    CollectionError::check_range(range.start, range.end, VecDeque::len(self))?;
    Ok(self.drain(range).collect())
  }

  fn extend_back(&mut self, items: Vec<T>) {
    Extend::extend(self, items);
  }

  fn truncate(&mut self, len: usize) {
    VecDeque::truncate(self, len);
  }

  fn resize(&mut self, len: usize, value: T)
  where
    T: Clone, {
    VecDeque::resize(self, len, value);
  }

  fn retain(&mut self, f: impl FnMut(&T) -> bool) {
    VecDeque::retain(self, f);
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    VecDeque::contains(self, item)
  }

  fn for_each(&self, f: impl FnMut(&T)) {
    self.iter().for_each(f);
  }
}

impl<T> DoubleEndedOps for VecDeque<T> {
  fn push_front(&mut self, item: T) {
    VecDeque::push_front(self, item);
  }

  fn pop_front(&mut self) -> Option<T> {
    VecDeque::pop_front(self)
  }
}

impl<T> SequenceOps for LinkedList<T> {
  fn get(&self, index: usize) -> Option<&T> {
    self.iter().nth(index)
  }

  fn get_mut(&mut self, index: usize) -> Option<&mut T> {
    self.iter_mut().nth(index)
  }

  fn front(&self) -> Option<&T> {
    LinkedList::front(self)
  }

  fn back(&self) -> Option<&T> {
    LinkedList::back(self)
  }

  fn push_back(&mut self, item: T) {
    LinkedList::push_back(self, item);
  }

  fn pop_back(&mut self) -> Option<T> {
    LinkedList::pop_back(self)
  }

  fn insert_at(&mut self, index: usize, item: T) -> Result<(), CollectionError> {
    CollectionError::check_position(index, LinkedList::len(self))?;
    let mut tail = self.split_off(index);
    LinkedList::push_back(self, item);
    self.append(&mut tail);
    Ok(())
  }

  fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
    let len = LinkedList::len(self);
    CollectionError::check_index(index, len)?;
    let mut tail = self.split_off(index);
    let item = tail.pop_front();
    self.append(&mut tail);
    item.ok_or_else(|| CollectionError::out_of_range(index, len))
  }

  fn insert_all_at(&mut self, index: usize, items: Vec<T>) -> Result<(), CollectionError> {
    CollectionError::check_position(index, LinkedList::len(self))?;
    let mut tail = self.split_off(index);
    Extend::extend(self, items);
    self.append(&mut tail);
    Ok(())
  }

  fn remove_range(&mut self, range: Range<usize>) -> Result<Vec<T>, CollectionError> {
    CollectionError::check_range(range.start, range.end, LinkedList::len(self))?;
    let mut removed = self.split_off(range.start);
    let mut rest = removed.split_off(range.end - range.start);
    self.append(&mut rest);
    Ok(removed.into_iter().collect())
  }

  fn extend_back(&mut self, items: Vec<T>) {
    Extend::extend(self, items);
  }

  fn truncate(&mut self, len: usize) {
    if len < LinkedList::len(self) {
      self.split_off(len);
    }
  }

  fn resize(&mut self, len: usize, value: T)
  where
    T: Clone, {
    let current = LinkedList::len(self);
    if len <= current {
      SequenceOps::truncate(self, len);
    } else {
      Extend::extend(self, iter::repeat(value).take(len - current));
    }
  }

  fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
    let old = mem::take(self);
    *self = old.into_iter().filter(|item| f(item)).collect();
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    LinkedList::contains(self, item)
  }

  fn for_each(&self, f: impl FnMut(&T)) {
    self.iter().for_each(f);
  }
}

impl<T> DoubleEndedOps for LinkedList<T> {
  fn push_front(&mut self, item: T) {
    LinkedList::push_front(self, item);
  }

  fn pop_front(&mut self) -> Option<T> {
    LinkedList::pop_front(self)
  }
}

/// Locked surface of every [`SequenceOps`] container.<br/>
/// [`SequenceOps`] コンテナに対するロック付き操作。
///
/// Each method is one critical section. Element reads return clones.
pub trait SequenceAdapter {
  type Item;

  fn get(&self, index: usize) -> Option<Self::Item>
  where
    Self::Item: Clone;

  /// Bounds-checked read.
  ///
  /// # Errors
  /// `CollectionError::OutOfRange` when `index >= len`.
  fn at(&self, index: usize) -> Result<Self::Item, CollectionError>
  where
    Self::Item: Clone;

  /// Overwrites the element at `index`, returning the previous one.
  fn set(&self, index: usize, value: Self::Item) -> Result<Self::Item, CollectionError>;

  /// Runs `f` on the element at `index` without copying it out.
  fn update_at<R>(&self, index: usize, f: impl FnOnce(&mut Self::Item) -> R) -> Result<R, CollectionError>;

  fn front(&self) -> Option<Self::Item>
  where
    Self::Item: Clone;

  fn back(&self) -> Option<Self::Item>
  where
    Self::Item: Clone;

  fn push_back(&self, item: Self::Item);

  fn pop_back(&self) -> Option<Self::Item>;

  fn insert_at(&self, index: usize, item: Self::Item) -> Result<(), CollectionError>;

  fn remove_at(&self, index: usize) -> Result<Self::Item, CollectionError>;

  /// Range insert. `items` is collected before the guard is taken; the insertion
  /// itself is one critical section.
  fn insert_all_at(&self, index: usize, items: impl IntoIterator<Item = Self::Item>) -> Result<(), CollectionError>;

  fn remove_range(&self, range: Range<usize>) -> Result<Vec<Self::Item>, CollectionError>;

  fn extend_back(&self, items: impl IntoIterator<Item = Self::Item>);

  /// Replaces the whole contents; readers see either the old or the new contents.
  fn assign(&self, items: impl IntoIterator<Item = Self::Item>);

  fn assign_repeat(&self, count: usize, value: Self::Item)
  where
    Self::Item: Clone;

  fn truncate(&self, len: usize);

  fn resize(&self, len: usize, value: Self::Item)
  where
    Self::Item: Clone;

  fn retain(&self, f: impl FnMut(&Self::Item) -> bool);

  fn contains(&self, item: &Self::Item) -> bool
  where
    Self::Item: PartialEq;

  fn to_vec(&self) -> Vec<Self::Item>
  where
    Self::Item: Clone;

  /// Visits every element with the guard held for the whole traversal.
  fn for_each(&self, f: impl FnMut(&Self::Item));
}

impl<C, B> SequenceAdapter for Guarded<C, B>
where
  C: SequenceOps,
  B: GuardBackend<C>,
{
  type Item = C::Item;

  fn get(&self, index: usize) -> Option<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| c.get(index).cloned())
  }

  fn at(&self, index: usize) -> Result<Self::Item, CollectionError>
  where
    Self::Item: Clone, {
    self.with_read(|c| {
      c.get(index)
        .cloned()
        .ok_or_else(|| CollectionError::out_of_range(index, c.len()))
    })
  }

  fn set(&self, index: usize, value: Self::Item) -> Result<Self::Item, CollectionError> {
    self.update_at(index, |slot| mem::replace(slot, value))
  }

  fn update_at<R>(&self, index: usize, f: impl FnOnce(&mut Self::Item) -> R) -> Result<R, CollectionError> {
    self.with_write(|c| {
      let len = c.len();
      c.get_mut(index)
        .map(f)
        .ok_or_else(|| CollectionError::out_of_range(index, len))
    })
  }

  fn front(&self) -> Option<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| c.front().cloned())
  }

  fn back(&self) -> Option<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| c.back().cloned())
  }

  fn push_back(&self, item: Self::Item) {
    self.with_write(|c| c.push_back(item));
  }

  fn pop_back(&self) -> Option<Self::Item> {
    self.with_write(|c| c.pop_back())
  }

  fn insert_at(&self, index: usize, item: Self::Item) -> Result<(), CollectionError> {
    self.with_write(|c| c.insert_at(index, item))
  }

  fn remove_at(&self, index: usize) -> Result<Self::Item, CollectionError> {
    self.with_write(|c| c.remove_at(index))
  }

  fn insert_all_at(&self, index: usize, items: impl IntoIterator<Item = Self::Item>) -> Result<(), CollectionError> {
    let items = items.into_iter().collect::<Vec<_>>();
    self.with_write(|c| c.insert_all_at(index, items))
  }

  fn remove_range(&self, range: Range<usize>) -> Result<Vec<Self::Item>, CollectionError> {
    self.with_write(|c| c.remove_range(range))
  }

  fn extend_back(&self, items: impl IntoIterator<Item = Self::Item>) {
    let items = items.into_iter().collect::<Vec<_>>();
    self.with_write(|c| c.extend_back(items));
  }

  fn assign(&self, items: impl IntoIterator<Item = Self::Item>) {
    let items = items.into_iter().collect::<Vec<_>>();
    self.with_write(|c| c.assign(items));
  }

  fn assign_repeat(&self, count: usize, value: Self::Item)
  where
    Self::Item: Clone, {
    self.assign(iter::repeat(value).take(count));
  }

  fn truncate(&self, len: usize) {
    self.with_write(|c| c.truncate(len));
  }

  fn resize(&self, len: usize, value: Self::Item)
  where
    Self::Item: Clone, {
    self.with_write(|c| c.resize(len, value));
  }

  fn retain(&self, f: impl FnMut(&Self::Item) -> bool) {
    self.with_write(|c| c.retain(f));
  }

  fn contains(&self, item: &Self::Item) -> bool
  where
    Self::Item: PartialEq, {
    self.with_read(|c| c.contains(item))
  }

  fn to_vec(&self) -> Vec<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| {
      let mut out = Vec::with_capacity(c.len());
      c.for_each(|item| out.push(item.clone()));
      out
    })
  }

  fn for_each(&self, f: impl FnMut(&Self::Item)) {
    self.with_read(|c| c.for_each(f));
  }
}

/// Locked front-end operations of every [`DoubleEndedOps`] container.
pub trait DoubleEndedAdapter: SequenceAdapter {
  fn push_front(&self, item: Self::Item);

  fn pop_front(&self) -> Option<Self::Item>;
}

impl<C, B> DoubleEndedAdapter for Guarded<C, B>
where
  C: DoubleEndedOps,
  B: GuardBackend<C>,
{
  fn push_front(&self, item: Self::Item) {
    self.with_write(|c| c.push_front(item));
  }

  fn pop_front(&self) -> Option<Self::Item> {
    self.with_write(|c| c.pop_front())
  }
}

#[cfg(test)]
mod tests;
