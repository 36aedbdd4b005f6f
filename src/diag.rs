// CLASSIFICATION: COMMUNITY
// Filename: diag.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! In-memory diagnostic sink.
//!
//! Boot negotiation reports through the `log` facade. [`BufferLogger`] keeps
//! those records so they can be embedded in a dry-run report or inspected by
//! tests. The buffer keeps the newest [`MAX_RECORDS`] records; older ones are
//! dropped when nobody drains it.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// A captured log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub level: Level,
    pub message: String,
}

/// Errors returned by the diagnostic buffer.
#[derive(Debug, Error)]
pub enum DiagError {
    #[error("a global logger is already installed")]
    AlreadyInstalled,
    #[error("diagnostic buffer lock poisoned")]
    LockPoisoned,
}

/// Records retained before the oldest ones are discarded.
pub const MAX_RECORDS: usize = 1024;

static BUFFER: Lazy<Mutex<VecDeque<DiagnosticRecord>>> = Lazy::new(|| Mutex::new(VecDeque::new()));
static LOGGER: BufferLogger = BufferLogger;

/// `log` backend appending every record to the bounded global buffer.
pub struct BufferLogger;

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut buf) = BUFFER.lock() {
            if buf.len() >= MAX_RECORDS {
                buf.pop_front();
            }
            buf.push_back(DiagnosticRecord {
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

/// Install [`BufferLogger`] as the global logger.
pub fn install(level: LevelFilter) -> Result<(), DiagError> {
    log::set_logger(&LOGGER).map_err(|_| DiagError::AlreadyInstalled)?;
    log::set_max_level(level);
    Ok(())
}

/// Take every captured record, leaving the buffer empty.
pub fn drain() -> Result<Vec<DiagnosticRecord>, DiagError> {
    let mut buf = BUFFER.lock().map_err(|_| DiagError::LockPoisoned)?;
    Ok(buf.drain(..).collect())
}

/// Discard captured records.
pub fn clear() -> Result<(), DiagError> {
    BUFFER.lock().map_err(|_| DiagError::LockPoisoned)?.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so no other test drains the shared buffer concurrently.
    #[test]
    fn captures_drains_and_caps() {
        let _ = install(LevelFilter::Trace);
        log::set_max_level(LevelFilter::Trace);
        clear().unwrap();
        log::warn!("diag marker {}", 0x7f3a);
        let records = drain().unwrap();
        assert!(records
            .iter()
            .any(|r| r.level == Level::Warn && r.message == "diag marker 32570"));
        assert!(drain().unwrap().iter().all(|r| r.message != "diag marker 32570"));

        for n in 0..MAX_RECORDS + 16 {
            log::info!("diag flood {}", n);
        }
        let records = drain().unwrap();
        assert!(records.len() <= MAX_RECORDS);
        assert!(records.iter().all(|r| r.message != "diag flood 0"));
        let last = format!("diag flood {}", MAX_RECORDS + 15);
        assert!(records.iter().any(|r| r.message == last));
    }
}
