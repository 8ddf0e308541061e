use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::Serialize;

use crate::Category;

/// The outcome of one category run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadReport {
  pub category: Category,
  pub thread_count: usize,
  pub elements_per_thread: usize,
  pub expected_len: usize,
  pub guarded_len: usize,
  pub baseline_len: usize,
  pub guarded_elapsed: Duration,
  pub baseline_elapsed: Duration,
}

impl WorkloadReport {
  pub fn is_consistent(&self) -> bool {
    self.guarded_len == self.expected_len && self.baseline_len == self.expected_len
  }

  /// How many times longer the guarded run took than the single-threaded baseline.
  pub fn slowdown(&self) -> f64 {
    let baseline = self.baseline_elapsed.as_secs_f64();
    if baseline == 0.0 {
      0.0
    } else {
      self.guarded_elapsed.as_secs_f64() / baseline
    }
  }
}

impl Display for WorkloadReport {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{:<16} threads={} elements={} len={} guarded={} baseline={} ({:.2}x)",
      self.category.to_string(),
      self.thread_count,
      self.elements_per_thread,
      self.guarded_len,
      humantime::format_duration(self.guarded_elapsed),
      humantime::format_duration(self.baseline_elapsed),
      self.slowdown()
    )
  }
}
