use std::collections::VecDeque;

use crate::families::{ContainerOps, PushPopOps};

/// A first-in first-out queue: pushes at the back, pops at the front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
  items: VecDeque<T>,
}

impl<T> Queue<T> {
  pub fn new() -> Self {
    Queue { items: VecDeque::new() }
  }

  pub fn push(&mut self, item: T) {
    self.items.push_back(item);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// The oldest element, the next one to be popped.
  pub fn front(&self) -> Option<&T> {
    self.items.front()
  }

  /// The newest element.
  pub fn back(&self) -> Option<&T> {
    self.items.back()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
    self.items.iter()
  }
}

impl<T> Default for Queue<T> {
  fn default() -> Self {
    Queue::new()
  }
}

impl<T> FromIterator<T> for Queue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Queue {
      items: iter.into_iter().collect(),
    }
  }
}

impl<T> ContainerOps for Queue<T> {
  type Item = T;

  fn len(&self) -> usize {
    Queue::len(self)
  }

  fn clear(&mut self) {
    Queue::clear(self);
  }
}

impl<T> PushPopOps for Queue<T> {
  fn push(&mut self, item: T) {
    Queue::push(self, item);
  }

  fn pop(&mut self) -> Option<T> {
    Queue::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    self.front()
  }

  fn push_all(&mut self, items: Vec<T>) {
    self.items.extend(items);
  }
}
