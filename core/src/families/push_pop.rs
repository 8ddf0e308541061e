use std::collections::BinaryHeap;

use synced_collections_utils_rs::GuardBackend;

use super::ContainerOps;
use crate::guarded::Guarded;

/// A container used only through one insertion point and one removal point:
/// stack, queue or heap.<br/>
/// 一方向からの追加と取り出しのみを行うコンテナ。
pub trait PushPopOps: ContainerOps {
  fn push(&mut self, item: Self::Item);

  /// Removes the next element in the container's removal order.
  fn pop(&mut self) -> Option<Self::Item>;

  /// The element the next `pop` would return.
  fn peek(&self) -> Option<&Self::Item>;

  fn push_all(&mut self, items: Vec<Self::Item>) {
    for item in items {
      self.push(item);
    }
  }

  /// Pops until empty; the result is in removal order.
  fn drain_all(&mut self) -> Vec<Self::Item> {
    let mut out = Vec::with_capacity(self.len());
    while let Some(item) = self.pop() {
      out.push(item);
    }
    out
  }
}

/// A heap popping its greatest element first.
pub trait PriorityOps: PushPopOps {
  /// All elements in ascending order, leaving the heap untouched.
  fn sorted_items(&self) -> Vec<Self::Item>
  where
    Self::Item: Clone;
}

impl<T: Ord> PushPopOps for BinaryHeap<T> {
  fn push(&mut self, item: T) {
    BinaryHeap::push(self, item);
  }

  fn pop(&mut self) -> Option<T> {
    BinaryHeap::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    BinaryHeap::peek(self)
  }

  fn push_all(&mut self, items: Vec<T>) {
    Extend::extend(self, items);
  }
}

impl<T: Ord> PriorityOps for BinaryHeap<T> {
  fn sorted_items(&self) -> Vec<T>
  where
    T: Clone, {
    self.clone().into_sorted_vec()
  }
}

/// Locked surface of every [`PushPopOps`] container.<br/>
/// [`PushPopOps`] コンテナに対するロック付き操作。
pub trait PushPopAdapter {
  type Item;

  fn push(&self, item: Self::Item);

  fn pop(&self) -> Option<Self::Item>;

  fn peek(&self) -> Option<Self::Item>
  where
    Self::Item: Clone;

  /// Runs `f` on the next element without copying it out.
  fn peek_with<R>(&self, f: impl FnOnce(&Self::Item) -> R) -> Option<R>;

  fn push_all(&self, items: impl IntoIterator<Item = Self::Item>);

  fn drain_all(&self) -> Vec<Self::Item>;
}

impl<C, B> PushPopAdapter for Guarded<C, B>
where
  C: PushPopOps,
  B: GuardBackend<C>,
{
  type Item = C::Item;

  fn push(&self, item: Self::Item) {
    self.with_write(|c| c.push(item));
  }

  fn pop(&self) -> Option<Self::Item> {
    self.with_write(|c| c.pop())
  }

  fn peek(&self) -> Option<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| c.peek().cloned())
  }

  fn peek_with<R>(&self, f: impl FnOnce(&Self::Item) -> R) -> Option<R> {
    self.with_read(|c| c.peek().map(f))
  }

  fn push_all(&self, items: impl IntoIterator<Item = Self::Item>) {
    let items = items.into_iter().collect::<Vec<_>>();
    self.with_write(|c| c.push_all(items));
  }

  fn drain_all(&self) -> Vec<Self::Item> {
    self.with_write(|c| c.drain_all())
  }
}

/// Locked reads specific to heaps.
pub trait PriorityAdapter: PushPopAdapter {
  fn sorted_items(&self) -> Vec<Self::Item>
  where
    Self::Item: Clone;
}

impl<C, B> PriorityAdapter for Guarded<C, B>
where
  C: PriorityOps,
  B: GuardBackend<C>,
{
  fn sorted_items(&self) -> Vec<Self::Item>
  where
    Self::Item: Clone, {
    self.with_read(|c| c.sorted_items())
  }
}

#[cfg(test)]
mod tests {
  use std::cmp::Reverse;
  use std::collections::BinaryHeap;

  use super::*;

  #[test]
  fn test_heap_pops_greatest_first() {
    let heap = Guarded::<BinaryHeap<i32>>::new();
    heap.push_all([3, 9, 1, 7]);
    assert_eq!(heap.peek(), Some(9));
    assert_eq!(heap.peek_with(|top| top * 2), Some(18));
    assert_eq!(heap.sorted_items(), vec![1, 3, 7, 9]);
    assert_eq!(heap.pop(), Some(9));
    assert_eq!(heap.drain_all(), vec![7, 3, 1]);
    assert_eq!(heap.pop(), None);
  }

  #[test]
  fn test_reverse_heap_pops_least_first() {
    let heap = Guarded::<BinaryHeap<Reverse<u8>>>::new();
    heap.push_all([5, 2, 8].map(Reverse));
    assert_eq!(heap.pop(), Some(Reverse(2)));
    assert_eq!(heap.len(), 2);
  }
}
