//! Logger setup for the demo binary.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr at `spec` (a level such as `"info"` or a full
/// flexi_logger spec such as `"warn, gridpath=trace"`).
///
/// Keep the returned handle alive for as long as logging is wanted.
pub fn init(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(spec)?.log_to_stderr().start()?;
    log::debug!("logging initialised at {spec:?}");
    Ok(handle)
}
