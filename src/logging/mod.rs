//! Audit sink seam for backend diagnostics.
//!
//! The filesystem contract folds every failure to a single bit, which is what
//! its callers want. A driver debugging a best-effort recursive removal
//! wants to know *which* entry refused to go. The host backend reports those
//! per-entry details through an [`AuditSink`] chosen at construction. The
//! default sink discards everything, so wiring nothing keeps the layer
//! silent.

use log::Level;

/// Receiver for human-readable backend diagnostics.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards all diagnostics. The default for every backend.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards diagnostics to the `log` facade.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{msg}");
    }
}
