//! Pre-initialization logging
//!
//! Messages logged before [`super::init`] are queued here and
//! emitted once the logger exists.

// Imports
use {
	std::{mem, sync::Mutex},
	tracing::Level,
};

/// Queued messages
static QUEUED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Queues a debug message
pub fn debug(msg: impl Into<String>) {
	self::push(Level::DEBUG, msg.into());
}

/// Queues an info message
pub fn info(msg: impl Into<String>) {
	self::push(Level::INFO, msg.into());
}

/// Queues a warning message
pub fn warn(msg: impl Into<String>) {
	self::push(Level::WARN, msg.into());
}

fn push(level: Level, msg: String) {
	self::lock().push((level, msg));
}

/// Emits all queued messages
pub(super) fn flush() {
	let queued = mem::take(&mut *self::lock());
	for (level, msg) in queued {
		match level {
			Level::TRACE => tracing::trace!("{msg}"),
			Level::DEBUG => tracing::debug!("{msg}"),
			Level::INFO => tracing::info!("{msg}"),
			Level::WARN => tracing::warn!("{msg}"),
			_ => tracing::error!("{msg}"),
		}
	}
}

fn lock() -> std::sync::MutexGuard<'static, Vec<(Level, String)>> {
	// Note: Nothing we do while holding the lock can leave the queue in a bad state
	QUEUED.lock().unwrap_or_else(|err| err.into_inner())
}
