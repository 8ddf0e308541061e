use crate::families::{ContainerOps, PushPopOps};

/// A last-in first-out stack over a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  items: Vec<T>,
}

impl<T> Stack<T> {
  pub fn new() -> Self {
    Stack { items: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Stack {
      items: Vec::with_capacity(capacity),
    }
  }

  pub fn push(&mut self, item: T) {
    self.items.push(item);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  pub fn peek(&self) -> Option<&T> {
    self.items.last()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Iterates from the bottom of the stack to the top.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Stack::new()
  }
}

impl<T> FromIterator<T> for Stack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Stack {
      items: iter.into_iter().collect(),
    }
  }
}

impl<T> ContainerOps for Stack<T> {
  type Item = T;

  fn len(&self) -> usize {
    Stack::len(self)
  }

  fn clear(&mut self) {
    Stack::clear(self);
  }
}

impl<T> PushPopOps for Stack<T> {
  fn push(&mut self, item: T) {
    Stack::push(self, item);
  }

  fn pop(&mut self) -> Option<T> {
    Stack::pop(self)
  }

  fn peek(&self) -> Option<&T> {
    Stack::peek(self)
  }

  fn push_all(&mut self, items: Vec<T>) {
    self.items.extend(items);
  }
}

#[cfg(test)]
mod tests {
  use super::Stack;

  #[test]
  fn test_lifo_order() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.len(), 1);
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
  }
}
