//! Console logger implementation

use std::env;

use super::traits::Logger;

/// Environment variable that turns on debug output
pub const DEBUG_ENV_VAR: &str = "VAULT_SEED_DEBUG";

/// A logger that writes to stderr
///
/// Debug lines are suppressed unless `VAULT_SEED_DEBUG` is `1` or `true`
/// when the logger is created, or `with_debug(true)` is used.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    debug_enabled: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_prefix("[VaultSeed]")
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let debug_enabled = env::var(DEBUG_ENV_VAR)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            prefix: prefix.into(),
            debug_enabled,
        }
    }

    /// Force debug output on or off
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.debug_enabled {
            eprintln!("{}", self.line("DEBUG", message));
        }
    }

    fn info(&self, message: &str) {
        eprintln!("{}", self.line("INFO", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.line("WARN", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.line("ERROR", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[VaultSeed]");
        assert_eq!(logger.line("INFO", "seeded"), "[VaultSeed] INFO: seeded");

        let custom = ConsoleLogger::with_prefix("[Harness]");
        assert_eq!(custom.line("WARN", "x"), "[Harness] WARN: x");
    }

    #[test]
    fn test_console_logger_debug_toggle() {
        let logger = ConsoleLogger::new().with_debug(true);
        assert!(logger.debug_enabled());
        assert!(!logger.with_debug(false).debug_enabled());
    }

    #[test]
    fn test_console_logger_debug_from_env() {
        env::set_var(DEBUG_ENV_VAR, "true");
        assert!(ConsoleLogger::new().debug_enabled());

        env::set_var(DEBUG_ENV_VAR, "1");
        assert!(ConsoleLogger::with_prefix("[Harness]").debug_enabled());

        env::set_var(DEBUG_ENV_VAR, "0");
        assert!(!ConsoleLogger::new().debug_enabled());

        env::remove_var(DEBUG_ENV_VAR);
        assert!(!ConsoleLogger::new().debug_enabled());
    }

    #[test]
    fn test_console_logger_logs() {
        // Only checks that nothing panics
        let logger = ConsoleLogger::new().with_debug(true);
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
