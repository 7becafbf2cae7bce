use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the global tracing subscriber: a console layer on stderr, and optionally a file layer.
///
/// Filters default to the `CONSOLE_LOG` and `FILE_LOG` environment variables, using `EnvFilter` directive syntax.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the subscriber globally. The returned [`AppTracing`] must be kept alive for file logging to be flushed.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env("CONSOLE_LOG"));
    let file_filter = self.file_filter;
    let file = self.log_file_path.as_deref().map(|p| (p, file_filter.unwrap_or_else(|| filter_from_env("FILE_LOG"))));
    AppTracing::new(console_filter, file)
  }
}

fn filter_from_env(var: &str) -> EnvFilter {
  EnvFilter::try_from_env(var).unwrap_or_default()
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(&Path, EnvFilter)>) -> Self {
    use std::io;

    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")] let _file_tracing = if let Some((file_path, filter)) = file {
      use std::fs::{create_dir_all, File};
      use std::io::BufWriter;

      let result = (|| {
        if let Some(parent) = file_path.parent() {
          create_dir_all(parent)?;
        }
        File::create(file_path)
      })();
      match result {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          FileTracing::default()
        }
        Ok(log_file) => {
          let writer = BufWriter::new(log_file);
          let (non_blocking, guard) = tracing_appender::non_blocking(writer);
          let layered = layered.with(
            tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(filter)
          );
          layered.init();
          FileTracing(Some(guard))
        }
      }
    } else {
      layered.init();
      FileTracing::default()
    };
    #[cfg(not(feature = "app_tracing_file"))] let _file_tracing = {
      if let Some((file_path, _)) = file {
        layered.init();
        tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
      } else {
        layered.init();
      }
      FileTracing
    };

    Self { _file_tracing }
  }
}
