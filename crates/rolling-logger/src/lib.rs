//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and mirrors every record to a [`Sink`] (the browser console in the app).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Default number of lines kept in the ring buffer
pub const DEFAULT_CAPACITY: usize = 200;

static INSTALLED: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Logger settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggerConfig {
    /// Records above this verbosity are dropped
    pub level: LevelFilter,
    /// Maximum number of formatted lines kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Destination for formatted log lines
pub trait Sink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Writes to `console.*`, picking the method by level
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: Level, line: &str) {
        use web_sys::console;
        match level {
            Level::Error => console::error_1(&line.into()),
            Level::Warn => console::warn_1(&line.into()),
            Level::Info => console::info_1(&line.into()),
            Level::Debug | Level::Trace => console::debug_1(&line.into()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: Level, line: &str) {
        eprintln!("{}", line);
    }
}

/// Ring-buffered logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
    sink: Option<Box<dyn Sink>>,
}

impl RollingLogger {
    /// Create a logger that only buffers
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            capacity: config.capacity,
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity)),
            sink: None,
        }
    }

    /// Also forward every accepted record to `sink`
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "[{} {:<5} {}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if let Some(sink) = &self.sink {
            sink.write(record.level(), &line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install a console-backed rolling logger as the global `log` backend.
///
/// Fails if a logger was already installed.
pub fn init(config: LoggerConfig) -> Result<(), String> {
    let logger: &'static RollingLogger =
        Box::leak(Box::new(RollingLogger::new(config).with_sink(ConsoleSink)));
    log::set_logger(logger).map_err(|e| e.to_string())?;
    log::set_max_level(config.level);
    let _ = INSTALLED.set(logger);
    Ok(())
}

/// Lines held by the installed logger (empty before [`init`])
pub fn snapshot() -> Vec<String> {
    INSTALLED.get().map(|logger| logger.snapshot()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct MemorySink(Arc<Mutex<Vec<(Level, String)>>>);

    impl Sink for MemorySink {
        fn write(&self, level: Level, line: &str) {
            self.0.lock().unwrap().push((level, line.to_string()));
        }
    }

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("posts")
                .build(),
        );
    }

    #[test]
    fn test_filters_by_level() {
        let logger = RollingLogger::new(LoggerConfig {
            level: LevelFilter::Warn,
            capacity: 10,
        });
        emit(&logger, Level::Info, "dropped");
        emit(&logger, Level::Debug, "dropped too");
        emit(&logger, Level::Error, "kept");

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].ends_with("kept"));
    }

    #[test]
    fn test_ring_buffer_keeps_newest() {
        let logger = RollingLogger::new(LoggerConfig {
            level: LevelFilter::Trace,
            capacity: 3,
        });
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.snapshot();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_zero_capacity_buffers_nothing() {
        let sink = MemorySink::default();
        let logger = RollingLogger::new(LoggerConfig {
            level: LevelFilter::Info,
            capacity: 0,
        })
        .with_sink(sink.clone());
        emit(&logger, Level::Info, "hello");

        assert!(logger.snapshot().is_empty());
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_sink_receives_level_and_target() {
        let sink = MemorySink::default();
        let logger = RollingLogger::new(LoggerConfig::default()).with_sink(sink.clone());
        emit(&logger, Level::Warn, "careful");

        let written = sink.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, Level::Warn);
        assert!(written[0].1.contains("posts]"));
        assert!(written[0].1.ends_with("careful"));
    }
}
