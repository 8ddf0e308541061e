use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ConfigOption;

/// Every container category the harness knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  Vec,
  List,
  Deque,
  Queue,
  Stack,
  PriorityQueue,
  #[strum(to_string = "btree-map")]
  #[serde(rename = "btree-map")]
  BTreeMap,
  #[strum(to_string = "btree-set")]
  #[serde(rename = "btree-set")]
  BTreeSet,
  #[strum(to_string = "btree-multi-set")]
  #[serde(rename = "btree-multi-set")]
  BTreeMultiSet,
  HashMap,
  HashMultiMap,
  HashSet,
  HashMultiSet,
  BitSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub thread_count: usize,
  pub elements_per_thread: usize,
  pub categories: Vec<Category>,
  pub output_format: OutputFormat,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      thread_count: 7,
      elements_per_thread: 1000,
      categories: Category::iter().collect(),
      output_format: OutputFormat::Text,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let options = options.into_iter().collect::<Vec<_>>();
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Elements still present once every worker has erased its half.
  pub fn expected_len(&self) -> usize {
    self.thread_count * (self.elements_per_thread - self.elements_per_thread / 2)
  }

  pub fn total_elements(&self) -> usize {
    self.thread_count * self.elements_per_thread
  }
}
