//! Tracing setup for the `bjlite` binary, plus a capturing layer tests use to
//! assert on engine and command events.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Fails only when a global subscriber is already set.
pub fn init_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish()
        .try_init()
}

/// One captured event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Shared buffer of events recorded by a [`CaptureLayer`].
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn layer<S>(&self) -> CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        CaptureLayer {
            capture: self.clone(),
            _phantom: PhantomData,
        }
    }
}

/// Layer that copies each event's level, target, message and fields into a
/// [`LogCapture`]. Spans are ignored; the engine and commands only emit events.
pub struct CaptureLayer<S> {
    capture: LogCapture,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut entry = LogEntry {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut entry);
        if let Ok(mut entries) = self.capture.entries.lock() {
            entries.push(entry);
        }
    }
}

impl LogEntry {
    fn push(&mut self, name: &str, value: String) {
        if name == "message" {
            self.message = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }
}

impl tracing::field::Visit for LogEntry {
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push(field.name(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push(field.name(), value.to_string());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field.name(), format!("{:?}", value));
    }
}
