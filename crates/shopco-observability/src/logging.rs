//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Log level for structured logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Position of this entry in the session's log stream.
    pub seq: u64,
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Emitting component (e.g. "cart", "pricing").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] #{} {}", self.level, self.seq, self.message);

        if let Some(component) = &self.component {
            s.push_str(&format!(" ({})", component));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Look up a structured field.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// In-memory capture of log entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Captured entries whose message matches exactly.
    pub fn with_message(&self, message: &str) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }

    fn push(&self, entry: LogEntry) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Receives each formatted line with its level.
pub type LineCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync>;

/// Where formatted entries go.
#[derive(Clone, Default)]
pub enum LogSink {
    /// Write to stderr.
    #[default]
    Stderr,
    /// Hand formatted lines to a callback (e.g. the browser console).
    Callback(LineCallback),
    /// Keep entries in memory.
    Memory(MemorySink),
}

impl LogSink {
    /// Wrap a closure as a callback sink.
    pub fn callback(f: impl Fn(LogLevel, &str) + Send + Sync + 'static) -> Self {
        LogSink::Callback(Arc::new(f))
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::Stderr => f.write_str("Stderr"),
            LogSink::Callback(_) => f.write_str("Callback(..)"),
            LogSink::Memory(memory) => f.debug_tuple("Memory").field(memory).finish(),
        }
    }
}

/// Keys written by `LogEntry` itself; user fields with these names are prefixed.
const RESERVED_KEYS: [&str; 5] = ["seq", "level", "message", "session_id", "component"];

fn field_key(key: &str) -> String {
    if RESERVED_KEYS.contains(&key) {
        format!("field_{}", key)
    } else {
        key.to_string()
    }
}

/// Structured logger bound to one shopping session.
///
/// Clones share the sequence counter, so entries emitted through any clone
/// stay totally ordered.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: String,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
    seq: Arc<AtomicU64>,
}

impl SessionLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// A logger for a sub-component sharing this logger's stream.
    pub fn scoped(&self, component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..self.clone()
        }
    }

    /// Check whether a level would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            level,
            message: message.to_string(),
            session_id: self.session_id.clone(),
            component: self.component.clone(),
            fields,
        };

        match &self.sink {
            LogSink::Stderr => eprintln!("{}", self.render(&entry)),
            LogSink::Callback(callback) => callback(level, &self.render(&entry)),
            LogSink::Memory(memory) => memory.push(entry),
        }
    }

    fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        }
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a SessionLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a SessionLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(field_key(key), serde_json::json!(value.into()));
        self
    }

    /// Add an unsigned integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(field_key(key), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(field_key(key), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl SessionLogger {
    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(level: LogLevel) -> (SessionLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = SessionLogger::new("sess-1")
            .with_min_level(level)
            .with_sink(LogSink::Memory(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_level_filtering() {
        let (logger, sink) = captured(LogLevel::Info);
        logger.debug("hidden");
        logger.info("shown");
        logger.warn("also shown");

        let messages: Vec<String> = sink.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["shown", "also shown"]);
    }

    #[test]
    fn test_builder_fields() {
        let (logger, sink) = captured(LogLevel::Debug);
        logger
            .debug_builder("item added")
            .field("product_id", "3")
            .field_u64("quantity", 2)
            .field_bool("merged", false)
            .emit();

        let entry = &sink.entries()[0];
        assert_eq!(entry.level, LogLevel::Debug);
        assert_eq!(entry.field("product_id"), Some(&serde_json::json!("3")));
        assert_eq!(entry.field("quantity"), Some(&serde_json::json!(2)));
        assert_eq!(entry.field("merged"), Some(&serde_json::json!(false)));
    }

    #[test]
    fn test_scoped_loggers_share_sequence() {
        let (logger, sink) = captured(LogLevel::Info);
        let cart = logger.scoped("cart");
        let pricing = logger.scoped("pricing");

        cart.info("first");
        pricing.info("second");
        cart.info("third");

        let entries = sink.entries();
        let seqs: Vec<u64> = entries.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(entries[1].component.as_deref(), Some("pricing"));
        assert!(entries.iter().all(|e| e.session_id == "sess-1"));
        assert_eq!(cart.session_id(), "sess-1");
    }

    #[test]
    fn test_json_format() {
        let entry = LogEntry {
            seq: 4,
            level: LogLevel::Warn,
            message: "promo rejected".to_string(),
            session_id: "sess-1".to_string(),
            component: Some("pricing".to_string()),
            fields: BTreeMap::from([("code".to_string(), serde_json::json!("WRONG"))]),
        };

        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["code"], "WRONG");
        assert_eq!(value["component"], "pricing");
        assert_eq!(value["seq"], 4);
    }

    #[test]
    fn test_human_format() {
        let entry = LogEntry {
            seq: 0,
            level: LogLevel::Info,
            message: "promo applied".to_string(),
            session_id: "sess-1".to_string(),
            component: None,
            fields: BTreeMap::from([("percent".to_string(), serde_json::json!(20))]),
        };

        assert_eq!(entry.to_human(), "[INFO] #0 promo applied | percent=20");
    }

    #[test]
    fn test_level_deserializes_from_lowercase() {
        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
        let format: LogFormat = serde_json::from_str("\"human\"").unwrap();
        assert_eq!(format, LogFormat::Human);
    }

    #[test]
    fn test_callback_sink_receives_formatted_lines() {
        let lines: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
        let captured = Arc::clone(&lines);
        let logger = SessionLogger::new("sess-1")
            .with_format(LogFormat::Human)
            .with_sink(LogSink::callback(move |level, line| {
                captured.lock().unwrap().push((level, line.to_string()));
            }));

        logger.debug("hidden");
        logger.warn_builder("promo rejected").field("code", "WRONG").emit();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, LogLevel::Warn);
        assert_eq!(lines[0].1, "[WARN] #0 promo rejected | code=\"WRONG\"");
    }

    #[test]
    fn test_reserved_field_names_are_prefixed() {
        let (logger, sink) = captured(LogLevel::Info);
        logger
            .info_builder("cart item added")
            .field("message", "shadow")
            .field_u64("seq", 99)
            .emit();

        let entry = &sink.entries()[0];
        assert_eq!(entry.message, "cart item added");
        assert_eq!(entry.field("field_message"), Some(&serde_json::json!("shadow")));
        assert_eq!(entry.field("field_seq"), Some(&serde_json::json!(99)));

        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["seq"], 0);
        assert_eq!(value["message"], "cart item added");
    }
}
