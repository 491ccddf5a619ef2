use crate::error::PubSubCmdError;
use pubsub_sdk::cli_command::PRINT_TARGET;
use std::fs::File;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{self, EnvFilter, LevelFilter},
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Keeps the non-blocking writers alive, pending lines are flushed on drop.
pub(crate) struct Logging {
    _guards: Vec<WorkerGuard>,
}

impl Logging {
    /// Command output goes to stdout unless `quiet` is set. With a `debug`
    /// path every event down to trace level (or whatever `RUST_LOG` selects)
    /// is written to that file, which is truncated first.
    pub(crate) fn init(quiet: bool, debug: Option<&Path>) -> Result<Self, PubSubCmdError> {
        let mut guards = Vec::new();
        let mut layers = Vec::new();

        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(stdout_guard);
        let output_level = match quiet {
            true => LevelFilter::OFF,
            false => LevelFilter::INFO,
        };
        layers.push(
            fmt::layer()
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_writer(stdout_writer)
                .with_filter(output_level)
                .with_filter(filter::filter_fn(|metadata| {
                    metadata.target() == PRINT_TARGET
                }))
                .boxed(),
        );

        if let Some(path) = debug {
            let file = File::create(path).map_err(|source| PubSubCmdError::DebugLogFile {
                path: path.to_path_buf(),
                source,
            })?;
            let (file_writer, file_guard) = tracing_appender::non_blocking(file);
            guards.push(file_guard);
            let file_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
            layers.push(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(file_writer)
                    .with_filter(file_filter)
                    .boxed(),
            );
        }

        tracing_subscriber::registry().with(layers).try_init()?;

        Ok(Self { _guards: guards })
    }
}
