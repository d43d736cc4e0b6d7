//! The logging capability the provider reports through.
//!
//! Initialization and `print_config` never log directly: they go through a
//! [`LogSink`] handed in by the caller, so the one warning init may emit can
//! be observed in tests. [`TracingSink`] is the production sink.

use std::fmt;

use tracing::Level;

/// Receives the provider's warning and info messages.
pub trait LogSink {
    fn log(&self, level: Level, message: fmt::Arguments<'_>);
}

/// Forwards every message to the `tracing` macros at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        match level {
            Level::ERROR => tracing::error!("{}", message),
            Level::WARN => tracing::warn!("{}", message),
            Level::INFO => tracing::info!("{}", message),
            Level::DEBUG => tracing::debug!("{}", message),
            _ => tracing::trace!("{}", message),
        }
    }
}
