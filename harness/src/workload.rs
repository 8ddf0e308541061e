use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::io;
use std::ops::Range;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use synced_collections_core_rs::{
  BTreeMultiSet, BitVectorOps, ContainerOps, FixedBitSet, Guarded, HashAssociativeOps, HashMultiMap, HashMultiSet,
  OrderedAssociativeOps, PushPopOps, Queue, SequenceOps, Stack,
};
use thiserror::Error;

use crate::{Category, Config, WorkloadReport};

/// Width of the bit set driven by [`Category::BitSet`]; every inserted key becomes one bit.
pub const BIT_SET_WIDTH: usize = 1 << 16;

#[derive(Debug, Error)]
pub enum WorkloadError {
  #[error("failed to spawn a worker thread: {0}")]
  Spawn(#[from] io::Error),
  #[error("a {category} worker panicked")]
  WorkerPanicked { category: Category },
  #[error("{category} finished with {guarded} elements guarded and {baseline} unguarded, expected {expected}")]
  Inconsistent {
    category: Category,
    expected: usize,
    guarded: usize,
    baseline: usize,
  },
  #[error("{category} holds at most {capacity} elements, the workload needs {requested}")]
  CapacityExceeded {
    category: Category,
    capacity: usize,
    requested: usize,
  },
}

/// The three steps every worker drives against a container, keyed by `u64`.
///
/// Positional and push/pop containers ignore the key when erasing and drop
/// whichever element their discipline yields next.
pub trait WorkloadSubject {
  fn insert(&mut self, key: u64);
  fn read(&self, key: u64) -> bool;
  fn erase(&mut self, key: u64) -> bool;
  fn size(&self) -> usize;
}

macro_rules! sequence_subject {
  ($($ty:ty),* $(,)?) => {
    $(
      impl WorkloadSubject for $ty {
        fn insert(&mut self, key: u64) {
          SequenceOps::push_back(self, key);
        }

        fn read(&self, key: u64) -> bool {
          let len = ContainerOps::len(self);
          len > 0 && SequenceOps::get(self, key as usize % len).is_some()
        }

        fn erase(&mut self, _key: u64) -> bool {
          SequenceOps::pop_back(self).is_some()
        }

        fn size(&self) -> usize {
          ContainerOps::len(self)
        }
      }
    )*
  };
}

macro_rules! push_pop_subject {
  ($($ty:ty),* $(,)?) => {
    $(
      impl WorkloadSubject for $ty {
        fn insert(&mut self, key: u64) {
          PushPopOps::push(self, key);
        }

        fn read(&self, _key: u64) -> bool {
          PushPopOps::peek(self).is_some()
        }

        fn erase(&mut self, _key: u64) -> bool {
          PushPopOps::pop(self).is_some()
        }

        fn size(&self) -> usize {
          ContainerOps::len(self)
        }
      }
    )*
  };
}

macro_rules! keyed_subject {
  ($family:ident: $($ty:ty => |$key:ident| $item:expr),* $(,)?) => {
    $(
      impl WorkloadSubject for $ty {
        fn insert(&mut self, $key: u64) {
          $family::insert_item(self, $item);
        }

        fn read(&self, key: u64) -> bool {
          $family::contains_key(self, &key)
        }

        fn erase(&mut self, key: u64) -> bool {
          $family::remove_key(self, &key) > 0
        }

        fn size(&self) -> usize {
          ContainerOps::len(self)
        }
      }
    )*
  };
}

sequence_subject!(Vec<u64>, VecDeque<u64>, LinkedList<u64>);
push_pop_subject!(Queue<u64>, Stack<u64>, BinaryHeap<u64>);
keyed_subject!(OrderedAssociativeOps:
  BTreeMap<u64, u64> => |key| (key, key),
  BTreeSet<u64> => |key| key,
  BTreeMultiSet<u64> => |key| key,
);
keyed_subject!(HashAssociativeOps:
  HashMap<u64, u64> => |key| (key, key),
  HashMultiMap<u64, u64> => |key| (key, key),
  HashSet<u64> => |key| key,
  HashMultiSet<u64> => |key| key,
);

impl<const N: usize> WorkloadSubject for FixedBitSet<N> {
  fn insert(&mut self, key: u64) {
    let _ = BitVectorOps::set(self, key as usize, true);
  }

  fn read(&self, key: u64) -> bool {
    BitVectorOps::test(self, key as usize).unwrap_or(false)
  }

  fn erase(&mut self, key: u64) -> bool {
    let was_set = self.read(key);
    let _ = BitVectorOps::reset(self, key as usize);
    was_set
  }

  fn size(&self) -> usize {
    BitVectorOps::count_ones(self)
  }
}

/// The disjoint key range owned by one worker.
pub fn key_range(worker: usize, elements_per_thread: usize) -> Range<u64> {
  let start = (worker * elements_per_thread) as u64;
  start..start + elements_per_thread as u64
}

fn drive_guarded<C>(target: &Guarded<C>, keys: Range<u64>) -> usize
where
  C: WorkloadSubject, {
  let erase_count = (keys.end - keys.start) as usize / 2;
  for key in keys.clone() {
    target.with_write(|c| c.insert(key));
  }
  let hits = keys.clone().filter(|key| target.with_read(|c| c.read(*key))).count();
  for key in keys.take(erase_count) {
    target.with_write(|c| c.erase(key));
  }
  hits
}

fn drive_local<C>(target: &mut C, keys: Range<u64>)
where
  C: WorkloadSubject, {
  let erase_count = (keys.end - keys.start) as usize / 2;
  for key in keys.clone() {
    target.insert(key);
  }
  for key in keys.clone() {
    target.read(key);
  }
  for key in keys.take(erase_count) {
    target.erase(key);
  }
}

fn run<C>(category: Category, config: &Config) -> Result<WorkloadReport, WorkloadError>
where
  C: WorkloadSubject + Default + Send + 'static, {
  let elements = config.elements_per_thread;
  let shared = Arc::new(Guarded::<C>::new());

  let started = Instant::now();
  let handles = (0..config.thread_count)
    .map(|worker| {
      let shared = shared.clone();
      thread::Builder::new()
        .name(format!("{}-{}", category, worker))
        .spawn(move || drive_guarded(&shared, key_range(worker, elements)))
    })
    .collect::<Result<Vec<_>, _>>()?;
  for handle in handles {
    let hits = handle.join().map_err(|_| WorkloadError::WorkerPanicked { category })?;
    tracing::debug!("{} worker read back {} of {} elements", category, hits, elements);
  }
  let guarded_elapsed = started.elapsed();
  let guarded_len = shared.with_read(|c| c.size());

  let started = Instant::now();
  let mut baseline = C::default();
  for worker in 0..config.thread_count {
    drive_local(&mut baseline, key_range(worker, elements));
  }
  let baseline_elapsed = started.elapsed();
  let baseline_len = baseline.size();

  let expected = config.expected_len();
  if guarded_len != expected || baseline_len != expected {
    return Err(WorkloadError::Inconsistent {
      category,
      expected,
      guarded: guarded_len,
      baseline: baseline_len,
    });
  }

  Ok(WorkloadReport {
    category,
    thread_count: config.thread_count,
    elements_per_thread: elements,
    expected_len: expected,
    guarded_len,
    baseline_len,
    guarded_elapsed,
    baseline_elapsed,
  })
}

/// Runs the workload for one category and verifies both final lengths.
pub fn run_category(category: Category, config: &Config) -> Result<WorkloadReport, WorkloadError> {
  tracing::info!(
    "running {} with {} threads x {} elements",
    category,
    config.thread_count,
    config.elements_per_thread
  );
  let report = match category {
    Category::Vec => run::<Vec<u64>>(category, config),
    Category::List => run::<LinkedList<u64>>(category, config),
    Category::Deque => run::<VecDeque<u64>>(category, config),
    Category::Queue => run::<Queue<u64>>(category, config),
    Category::Stack => run::<Stack<u64>>(category, config),
    Category::PriorityQueue => run::<BinaryHeap<u64>>(category, config),
    Category::BTreeMap => run::<BTreeMap<u64, u64>>(category, config),
    Category::BTreeSet => run::<BTreeSet<u64>>(category, config),
    Category::BTreeMultiSet => run::<BTreeMultiSet<u64>>(category, config),
    Category::HashMap => run::<HashMap<u64, u64>>(category, config),
    Category::HashMultiMap => run::<HashMultiMap<u64, u64>>(category, config),
    Category::HashSet => run::<HashSet<u64>>(category, config),
    Category::HashMultiSet => run::<HashMultiSet<u64>>(category, config),
    Category::BitSet => {
      if config.total_elements() > BIT_SET_WIDTH {
        return Err(WorkloadError::CapacityExceeded {
          category,
          capacity: BIT_SET_WIDTH,
          requested: config.total_elements(),
        });
      }
      run::<FixedBitSet<BIT_SET_WIDTH>>(category, config)
    }
  }?;
  tracing::info!("finished {} in {:?}", category, report.guarded_elapsed);
  Ok(report)
}

/// Runs every configured category in order, stopping at the first failure.
pub fn run_all(config: &Config) -> Result<Vec<WorkloadReport>, WorkloadError> {
  config
    .categories
    .iter()
    .map(|category| run_category(*category, config))
    .collect()
}
