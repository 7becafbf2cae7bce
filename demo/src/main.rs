use std::error::Error;
use std::io;

use tracing::debug;

use safeval_core::app::env;
use safeval_core::app::panic_handler::install_panic_handler;
use safeval_core::app::storage::Storage;
use safeval_core::app::tracing::AppTracingBuilder;

use crate::report::ReportFormat;

mod mock;
mod report;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let storage = Storage::new("demo");
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(storage.local_data_file("log.txt"))
    .build();
  install_panic_handler();

  let format: ReportFormat = env::var_or("SAFEVAL_DEMO_REPORT", "pretty").parse()?;
  debug!(?format, "running scenarios");
  let report = report::run()?;
  report.write(format, io::stdout().lock())?;

  Ok(())
}
