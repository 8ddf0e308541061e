#[cfg(test)]
mod tests {
  use std::env;
  use std::panic::{self, AssertUnwindSafe};
  use std::sync::Arc;
  use std::thread;
  use std::time::Duration;

  use static_assertions::assert_impl_all;
  use synced_collections_utils_rs::{CollectionError, GuardBackend, SharedExclusiveGuard};
  use tracing_subscriber::EnvFilter;

  use crate::collections::{GuardedBTreeMap, GuardedHashSet, GuardedVec};
  use crate::families::SequenceAdapter;
  use crate::guarded::Guarded;

  assert_impl_all!(GuardedVec<String>: Send, Sync);
  assert_impl_all!(GuardedBTreeMap<u32, String>: Send, Sync);
  assert_impl_all!(Guarded<Vec<u8>, SharedExclusiveGuard<Vec<u8>>>: Send, Sync);

  fn init_logger() {
    env::set_var("RUST_LOG", "debug");
    let _ = tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .try_init();
  }

  #[test]
  fn test_scoped_access() {
    let vec = GuardedVec::<i32>::new();
    vec.with_write(|v| v.extend([1, 2, 3]));
    assert_eq!(vec.with_read(|v| v.iter().sum::<i32>()), 6);

    {
      let mut handle = vec.lock();
      handle.push(4);
    }
    assert_eq!(vec.read_lock().len(), 4);
    assert_eq!(vec.len(), 4);
  }

  #[test]
  fn test_replace_and_take() {
    let vec = GuardedVec::<i32>::from_container(vec![1, 2]);
    assert_eq!(vec.replace(vec![9]), vec![1, 2]);
    assert_eq!(vec.take(), vec![9]);
    assert!(vec.is_empty());
  }

  #[test]
  fn test_clone_gets_fresh_identity() {
    let original = GuardedVec::<i32>::from_container(vec![1, 2, 3]);
    let copy = original.clone();
    assert_ne!(original.id(), copy.id());
    assert_eq!(original, copy);
    copy.push_back(4);
    assert_ne!(original, copy);
  }

  #[test]
  fn test_clone_is_consistent_under_concurrent_mutation() {
    let source = Arc::new(GuardedVec::<u32>::new());
    let writer = {
      let source = source.clone();
      thread::spawn(move || {
        for i in 0..20_000 {
          source.push_back(i);
        }
      })
    };

    while !writer.is_finished() {
      let copy = (*source).clone().into_inner();
      assert!(copy.iter().copied().eq(0..copy.len() as u32));
    }
    writer.join().unwrap();
    assert_eq!(source.len(), 20_000);
  }

  #[test]
  fn test_assign_from_copies_source() {
    let target = GuardedVec::<i32>::from_container(vec![1]);
    let source = GuardedVec::<i32>::from_container(vec![7, 8, 9]);
    target.assign_from(&source);
    assert_eq!(target.snapshot(), vec![7, 8, 9]);
    assert_eq!(source.len(), 3);
  }

  #[test]
  fn test_same_instance_operations() {
    let vec = GuardedVec::<i32>::from_container(vec![1, 2]);
    vec.swap_with(&vec);
    vec.assign_from(&vec);
    assert!(vec == vec);
    assert_eq!(vec.snapshot(), vec![1, 2]);
    assert_eq!(vec.with_pair_mut(&vec, |_, _| ()), Err(CollectionError::SameInstance));
    assert_eq!(vec.with_pair_from(&vec, |l, r| {
      l.extend(r.iter().copied());
      l.len()
    }), 4);
  }

  #[test]
  fn test_swap_exchanges_contents() {
    let a = GuardedHashSet::<i32>::from_iter([1, 2]);
    let b = GuardedHashSet::<i32>::from_iter([3]);
    b.swap_with(&a);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_opposite_swaps_finish_within_timeout() {
    init_logger();
    let a = Arc::new(GuardedVec::<i32>::from_container(vec![1, 1, 1]));
    let b = Arc::new(GuardedVec::<i32>::from_container(vec![2]));

    let forward = {
      let (a, b) = (a.clone(), b.clone());
      tokio::task::spawn_blocking(move || {
        for _ in 0..10_000 {
          a.swap_with(&b);
        }
      })
    };
    let backward = {
      let (a, b) = (a.clone(), b.clone());
      tokio::task::spawn_blocking(move || {
        for _ in 0..10_000 {
          b.swap_with(&a);
        }
      })
    };

    let finished = tokio::time::timeout(Duration::from_secs(30), async move {
      forward.await.unwrap();
      backward.await.unwrap();
    })
    .await;
    assert!(finished.is_ok(), "opposite-order swaps deadlocked");

    let mut lens = vec![a.len(), b.len()];
    lens.sort();
    assert_eq!(lens, vec![1, 3]);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_opposite_comparisons_and_assignments_finish() {
    let a = Arc::new(GuardedVec::<i32>::from_container(vec![5]));
    let b = Arc::new(GuardedVec::<i32>::from_container(vec![5]));

    let left = {
      let (a, b) = (a.clone(), b.clone());
      tokio::task::spawn_blocking(move || {
        for _ in 0..5_000 {
          assert!(*a == *b);
          a.assign_from(&b);
        }
      })
    };
    let right = {
      let (a, b) = (a.clone(), b.clone());
      tokio::task::spawn_blocking(move || {
        for _ in 0..5_000 {
          assert!(*b == *a);
          b.assign_from(&a);
        }
      })
    };

    let finished = tokio::time::timeout(Duration::from_secs(30), async move {
      left.await.unwrap();
      right.await.unwrap();
    })
    .await;
    assert!(finished.is_ok());
  }

  #[test]
  fn test_guard_released_when_operation_panics() {
    let vec = GuardedVec::<i32>::from_container(vec![1, 2, 3]);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
      vec.with_write(|v| {
        v.push(4);
        v.remove(10);
      })
    }));
    assert!(outcome.is_err());

    vec.push_back(5);
    assert_eq!(vec.snapshot(), vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn test_failed_operation_leaves_guard_free() {
    let vec = GuardedVec::<i32>::from_container(vec![1]);
    assert_eq!(vec.at(3), Err(CollectionError::OutOfRange { index: 3, len: 1 }));
    assert!(vec.backend().read().len() == 1);
  }

  // Copies taken out of the adapter are detached from it: a concurrent erase is not
  // reflected in a snapshot, and nothing borrowed can outlive the call that produced it.
  #[test]
  fn test_snapshot_detached_from_concurrent_erase() {
    let vec = Arc::new(GuardedVec::<i32>::from_container(vec![10, 20, 30]));
    let snapshot = vec.to_vec();

    let eraser = {
      let vec = vec.clone();
      thread::spawn(move || vec.remove_at(1))
    };
    assert_eq!(eraser.join().unwrap(), Ok(20));

    assert_eq!(snapshot, vec![10, 20, 30]);
    assert_eq!(vec.to_vec(), vec![10, 30]);
  }

  #[test]
  fn test_shared_exclusive_backend() {
    let vec: Guarded<Vec<i32>, SharedExclusiveGuard<Vec<i32>>> = Guarded::from_container(vec![1, 2]);
    let first = vec.read_lock();
    let second = vec.read_lock();
    assert_eq!(first.len(), second.len());
    drop((first, second));

    vec.push_back(3);
    let copy = vec.clone();
    assert_eq!(copy.to_vec(), vec![1, 2, 3]);
  }

  #[test]
  fn test_debug_and_display() {
    let vec = GuardedVec::<i32>::from_container(vec![1]);
    let debug = format!("{:?}", vec);
    assert!(debug.contains("inner: [1]"));

    let bits = "1010".parse::<crate::collections::GuardedBitSet<4>>().unwrap();
    assert_eq!(bits.to_string(), "1010");
  }
}
