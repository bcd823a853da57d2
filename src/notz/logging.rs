//! File logging bootstrap for the binary.
//!
//! Core modules only emit through the `log` facade; wiring a backend
//! is the binary's job. Initialization is fail-open: a broken logger
//! must never stop the CLI from running.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::Path;

const LOG_BASENAME: &str = "notz";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts a rotating file logger under `log_dir`.
///
/// The level comes from `RUST_LOG` when set, defaulting to `warn`.
/// Returns `None` when the logger cannot be started; callers keep the
/// handle alive for the process lifetime.
pub fn init(log_dir: &Path) -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .ok()?
        .log_to_file(FileSpec::default().directory(log_dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .start()
        .ok()
}
