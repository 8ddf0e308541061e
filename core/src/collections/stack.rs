use synced_collections_utils_rs::{ExclusiveGuard, GuardBackend};

use super::base::Stack;
use crate::guarded::Guarded;

/// A LIFO stack over a single-ended `Vec`, behind one guard.
pub type GuardedStack<T, B = ExclusiveGuard<Stack<T>>> = Guarded<Stack<T>, B>;

impl<T, B> Guarded<Stack<T>, B>
where
  B: GuardBackend<Stack<T>>,
{
  /// The element `pop` would return next.
  pub fn top(&self) -> Option<T>
  where
    T: Clone, {
    self.with_read(|s| s.peek().cloned())
  }

  /// Pops only when the top satisfies `pred`, atomically with the check.
  pub fn pop_if(&self, pred: impl FnOnce(&T) -> bool) -> Option<T> {
    self.with_write(|s| {
      if s.peek().is_some_and(pred) {
        s.pop()
      } else {
        None
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;
  use std::thread;

  use crate::collections::GuardedStack;
  use crate::families::PushPopAdapter;

  #[test]
  fn test_lifo() {
    let stack = GuardedStack::<i32>::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.top(), Some(2));
    assert_eq!(stack.pop_if(|top| *top > 5), None);
    assert_eq!(stack.pop_if(|top| *top == 2), Some(2));
    assert_eq!(stack.drain_all(), vec![1]);
    assert_eq!(stack.top(), None);
  }

  #[test]
  fn test_concurrent_pops_never_duplicate() {
    let stack = Arc::new((0..2000).collect::<GuardedStack<usize>>());
    let popped = Arc::new(AtomicUsize::new(0));
    let handles = (0..4)
      .map(|_| {
        let stack = stack.clone();
        let popped = popped.clone();
        thread::spawn(move || {
          let mut sum = 0;
          while let Some(v) = stack.pop() {
            popped.fetch_add(1, Ordering::SeqCst);
            sum += v;
          }
          sum
        })
      })
      .collect::<Vec<_>>();
    let sum: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(popped.load(Ordering::SeqCst), 2000);
    assert_eq!(sum, (0..2000).sum::<usize>());
  }
}
