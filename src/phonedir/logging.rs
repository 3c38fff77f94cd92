//! Logging collaborator and file logger bootstrap.
//!
//! Library code never touches a global logger directly. It reports conditions
//! (corrupt data, validation failures, unknown fields) and notable events
//! (records added or edited) through an injected [`EventLog`]. The binary wires
//! [`LogFacade`], which forwards to the `log` crate after [`init_file_logging`]
//! has started `flexi_logger`. Tests inject a recording implementation instead.

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::error::Error;
use std::path::Path;

/// Sink for conditions the core reports but does not act on.
pub trait EventLog {
    /// Record a notable, successful event.
    fn info(&self, message: &str);

    /// Record an error condition.
    fn error(&self, message: &str);

    /// Record an error condition together with the error that caused it.
    fn exception(&self, message: &str, err: &dyn Error);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl EventLog for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }

    fn exception(&self, message: &str, err: &dyn Error) {
        log::error!("{}: {}", message, err);
    }
}

/// Starts appending log lines to `log_file` at `level`.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn init_file_logging(level: &str, log_file: &Path) -> Result<LoggerHandle, String> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                parent.display()
            )
        })?;
    }

    let spec = file_spec(log_file)?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(spec)
        .append()
        .write_mode(WriteMode::Direct)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    log::debug!(
        "event=app_start version={} log_file={}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    );

    Ok(handle)
}

/// A bare file name lands in the working directory.
fn file_spec(log_file: &Path) -> Result<FileSpec, String> {
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let basename = log_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("invalid log file `{}`", log_file.display()))?;
    let suffix = log_file.extension().and_then(|s| s.to_str());

    Ok(FileSpec::default()
        .directory(directory)
        .basename(basename)
        .o_suffix(suffix)
        .suppress_timestamp())
}
