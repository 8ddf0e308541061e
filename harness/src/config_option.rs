use crate::{Category, Config, OutputFormat};

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetThreadCount(usize),
  SetElementCount(usize),
  SetCategories(Vec<Category>),
  SetOutputFormat(OutputFormat),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetThreadCount(count) => {
        config.thread_count = (*count).max(1);
      }
      ConfigOption::SetElementCount(count) => {
        config.elements_per_thread = *count;
      }
      ConfigOption::SetCategories(categories) => {
        config.categories = categories.clone();
      }
      ConfigOption::SetOutputFormat(format) => {
        config.output_format = *format;
      }
    }
  }

  pub fn with_thread_count(count: usize) -> ConfigOption {
    ConfigOption::SetThreadCount(count)
  }

  pub fn with_element_count(count: usize) -> ConfigOption {
    ConfigOption::SetElementCount(count)
  }

  pub fn with_categories(categories: Vec<Category>) -> ConfigOption {
    ConfigOption::SetCategories(categories)
  }

  pub fn with_output_format(format: OutputFormat) -> ConfigOption {
    ConfigOption::SetOutputFormat(format)
  }
}
