//! Logging abstractions
//!
//! Loggers are injected as `SharedLogger` handles; nothing in this crate
//! installs a global logger.

mod traits;
mod noop;
mod console;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::{ConsoleLogger, DEBUG_ENV_VAR};
