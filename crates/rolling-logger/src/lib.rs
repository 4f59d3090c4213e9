//! Rolling Logger
//!
//! A `tracing` layer that formats each event as one line, forwards it to the
//! browser console and keeps the newest lines in a bounded in-memory buffer.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Fixed-capacity FIFO of log lines; pushing past capacity evicts the oldest
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Collects the `message` field and any other fields as `key=value`
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Format an event as `HH:MM:SS LEVEL target: message key=value`
fn format_line(timestamp: &str, level: &Level, target: &str, visitor: &LineVisitor) -> String {
    format!("{} {:<5} {}: {}{}", timestamp, level, target, visitor.message, visitor.fields)
}

/// Layer writing to the console and the shared buffer
pub struct RollingLayer {
    buffer: Arc<Mutex<RingBuffer>>,
}

impl RollingLayer {
    pub fn new(buffer: Arc<Mutex<RingBuffer>>) -> Self {
        Self { buffer }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let line = format_line(&timestamp, meta.level(), meta.target(), &visitor);

        write_console(meta.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: &Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

static BUFFER: OnceLock<Arc<Mutex<RingBuffer>>> = OnceLock::new();

/// Install the layer as the global subscriber. Later calls do nothing.
pub fn init(capacity: usize) {
    let mut installed = false;
    let buffer = BUFFER.get_or_init(|| {
        installed = true;
        Arc::new(Mutex::new(RingBuffer::new(capacity)))
    });
    if installed {
        let _ = tracing_subscriber::registry()
            .with(RollingLayer::new(buffer.clone()))
            .try_init();
    }
}

/// Snapshot of buffered lines, oldest first. Empty before `init`.
pub fn recent() -> Vec<String> {
    BUFFER
        .get()
        .and_then(|b| b.lock().ok().map(|b| b.snapshot()))
        .unwrap_or_default()
}
