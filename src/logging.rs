//! Log sink for the dashboard.
//!
//! While the alternate screen is active nothing may be written to the
//! terminal directly, so `env_logger` is piped into an in-memory ring of
//! recent lines that the dashboard renders in its log panel.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;

use chrono::Local;
use env_logger::{Env, Target};
use log::SetLoggerError;
use parking_lot::Mutex;

/// Lines kept in memory when no capacity is given
pub const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Default)]
struct LogLines {
    lines: VecDeque<String>,
    /// Bytes of a line that has not been terminated yet
    pending: String,
}

/// Bounded, shareable buffer of formatted log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<LogLines>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LogLines::default())),
            capacity: capacity.max(1),
        }
    }

    /// Up to `count` most recent complete lines, oldest first
    pub fn recent(&self, count: usize) -> Vec<String> {
        let inner = self.inner.lock();
        let skip = inner.lines.len().saturating_sub(count);
        inner.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock();
        inner.pending.push_str(&String::from_utf8_lossy(buf));

        while let Some(newline) = inner.pending.find('\n') {
            let line: String = inner.pending.drain(..=newline).collect();
            inner.lines.push_back(line.trim_end().to_string());
            if inner.lines.len() > self.capacity {
                inner.lines.pop_front();
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Initialize logging into `buffer`.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logging(buffer: &LogBuffer) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", Local::now().format("%H:%M:%S"), record.args())
        })
        .target(Target::Pipe(Box::new(buffer.clone())))
        .try_init()
}
