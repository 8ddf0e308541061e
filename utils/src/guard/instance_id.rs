use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one guarded instance.
///
/// Ids are handed out in increasing order and never reused, so they give every pair
/// of live instances a stable total order for two-guard acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
  pub fn next() -> Self {
    Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
  }

  pub fn value(&self) -> u64 {
    self.0
  }
}

impl Display for InstanceId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;
  use std::thread;

  use super::InstanceId;

  #[test]
  fn test_ids_are_increasing() {
    let a = InstanceId::next();
    let b = InstanceId::next();
    assert!(a < b);
  }

  #[test]
  fn test_ids_are_unique_across_threads() {
    let handles = (0..4)
      .map(|_| thread::spawn(|| (0..250).map(|_| InstanceId::next()).collect::<Vec<_>>()))
      .collect::<Vec<_>>();
    let mut seen = HashSet::new();
    for handle in handles {
      for id in handle.join().unwrap() {
        assert!(seen.insert(id));
      }
    }
    assert_eq!(seen.len(), 1000);
  }
}
