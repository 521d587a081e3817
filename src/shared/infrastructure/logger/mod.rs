// Level-filtered line logger for Lambda handlers.
//
// Purpose
// - Decide whether a message at a given severity is emitted for the configured threshold.
// - Write one line per message, either as a JSON object or as plain text, so CloudWatch
//   receives a predictable shape.
//
// Every emitted line is also forwarded to `tracing`, so a subscriber installed by the
// shell sees the same events.

pub mod level;

pub use level::{LogLevel, LogType, ParseLogSettingError};

use serde_json::json;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

pub struct Logger {
    level: LogLevel,
    log_type: LogType,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    pub fn new(level: LogLevel, log_type: LogType) -> Self {
        Self::with_writer(level, log_type, io::stdout())
    }

    pub fn with_writer(
        level: LogLevel,
        log_type: LogType,
        writer: impl Write + Send + 'static,
    ) -> Self {
        Self {
            level,
            log_type,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// True when a message at `level` passes the configured threshold.
    pub fn is_logged(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn current_log_level(&self) -> LogLevel {
        self.level
    }

    pub fn log_type(&self) -> LogType {
        self.log_type
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.is_logged(level) {
            return;
        }
        forward_to_tracing(level, message);

        let line = match self.log_type {
            LogType::Json => json!({ "level": level, "message": message }).to_string(),
            LogType::Text => message.to_string(),
        };
        self.write_line(&line);
    }

    /// Log an error together with its `source()` chain.
    pub fn log_error(&self, level: LogLevel, error: &dyn Error) {
        if !self.is_logged(level) {
            return;
        }

        let message = error.to_string();
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        forward_to_tracing(level, &message);

        let line = match self.log_type {
            LogType::Json => json!({
                "level": level,
                "message": message,
                "causes": causes,
            })
            .to_string(),
            LogType::Text => causes
                .iter()
                .fold(message, |acc, cause| format!("{acc}\ncaused by: {cause}")),
        };
        self.write_line(&line);
    }

    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn write_line(&self, line: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(sink, "{line}").and_then(|_| sink.flush()) {
            tracing::warn!(error = %e, "failed to write log line");
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("log_type", &self.log_type)
            .finish_non_exhaustive()
    }
}

fn forward_to_tracing(level: LogLevel, message: &str) {
    match level {
        LogLevel::Trace => tracing::trace!("{message}"),
        LogLevel::Debug => tracing::debug!("{message}"),
        LogLevel::Info => tracing::info!("{message}"),
        LogLevel::Warn => tracing::warn!("{message}"),
        LogLevel::Error => tracing::error!("{message}"),
    }
}
