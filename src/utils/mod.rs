//! Process-level helpers shared by both binaries.

pub mod logging;

pub use logging::{init_file_logging, init_stderr_logging, log_dir, LOG_ENV_VAR};
