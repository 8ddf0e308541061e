#[cfg(test)]
mod tests {
  use std::env;
  use std::mem;
  use std::sync::mpsc;
  use std::sync::Arc;
  use std::thread;
  use std::time::Duration;

  use tracing_subscriber::EnvFilter;

  use crate::error::CollectionError;
  use crate::guard::{read_pair, write_pair, write_read_pair, ExclusiveGuard, GuardBackend, InstanceId};

  struct Slot {
    id: InstanceId,
    backend: ExclusiveGuard<Vec<u32>>,
  }

  impl Slot {
    fn new(values: Vec<u32>) -> Self {
      Self {
        id: InstanceId::next(),
        backend: ExclusiveGuard::new(values),
      }
    }

    fn pair(&self) -> (InstanceId, &ExclusiveGuard<Vec<u32>>) {
      (self.id, &self.backend)
    }
  }

  #[test]
  fn test_write_pair_returns_guards_in_argument_position() {
    let first = Slot::new(vec![1]);
    let second = Slot::new(vec![2, 2]);

    let (l, r) = write_pair(second.pair(), first.pair()).unwrap();
    assert_eq!(l.len(), 2);
    assert_eq!(r.len(), 1);
  }

  #[test]
  fn test_same_instance_is_rejected() {
    let slot = Slot::new(vec![]);
    assert_eq!(write_pair(slot.pair(), slot.pair()).err(), Some(CollectionError::SameInstance));
    assert_eq!(read_pair(slot.pair(), slot.pair()).err(), Some(CollectionError::SameInstance));
    assert_eq!(
      write_read_pair(slot.pair(), slot.pair()).err(),
      Some(CollectionError::SameInstance)
    );
  }

  #[test]
  fn test_write_read_pair_copies_source() {
    let target = Slot::new(vec![]);
    let source = Slot::new(vec![4, 5]);
    {
      let (mut l, r) = write_read_pair(target.pair(), source.pair()).unwrap();
      l.clone_from(&r);
    }
    assert_eq!(*target.backend.read(), vec![4, 5]);
  }

  #[test]
  fn test_opposite_order_swaps_complete() {
    env::set_var("RUST_LOG", "debug");
    let _ = tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .try_init();

    let a = Arc::new(Slot::new(vec![1]));
    let b = Arc::new(Slot::new(vec![2]));
    let (done_tx, done_rx) = mpsc::channel();

    for forward in [true, false] {
      let a = a.clone();
      let b = b.clone();
      let done_tx = done_tx.clone();
      thread::spawn(move || {
        for _ in 0..10_000 {
          let (x, y) = if forward { (&a, &b) } else { (&b, &a) };
          let (mut l, mut r) = write_pair(x.pair(), y.pair()).unwrap();
          mem::swap(&mut *l, &mut *r);
        }
        done_tx.send(()).unwrap();
      });
    }

    for _ in 0..2 {
      done_rx
        .recv_timeout(Duration::from_secs(30))
        .expect("opposite-order swaps deadlocked");
    }
    let mut values = vec![a.backend.read()[0], b.backend.read()[0]];
    values.sort();
    assert_eq!(values, vec![1, 2]);
  }
}
