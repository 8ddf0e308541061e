use std::env;
use std::error::Error;

use clap::Parser;
use synced_collections_harness_rs::{run_all, Category, Config, ConfigOption, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  #[clap(long, default_value = "7")]
  threads: usize,
  #[clap(long, default_value = "1000")]
  elements: usize,
  /// Comma separated categories, e.g. `vec,hash-map`. Every category when omitted.
  #[clap(long, value_delimiter = ',')]
  categories: Vec<Category>,
  #[clap(long, default_value = "text")]
  format: OutputFormat,
}

fn main() -> Result<(), Box<dyn Error>> {
  if env::var_os("RUST_LOG").is_none() {
    env::set_var("RUST_LOG", "synced_collections_harness_rs=info");
  }
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let mut options = vec![
    ConfigOption::with_thread_count(args.threads),
    ConfigOption::with_element_count(args.elements),
    ConfigOption::with_output_format(args.format),
  ];
  if !args.categories.is_empty() {
    options.push(ConfigOption::with_categories(args.categories));
  }
  let config = Config::from(options);
  tracing::info!("config = {:?}", config);

  let reports = run_all(&config)?;
  match config.output_format {
    OutputFormat::Text => {
      for report in &reports {
        println!("{}", report);
      }
    }
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
  }
  Ok(())
}
