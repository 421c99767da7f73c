// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Level-filtered logger

use std::sync::atomic::{AtomicU8, Ordering};

use tidlog_runtime::clock::Clock;
use tracing::{debug, trace};

use crate::{
	LogLevel, Origin, Result, TransactionId,
	emitter::{Emitter, Sink, SinkGuard},
	marker::LogMarker,
};

/// Filters calls against a verbosity threshold and forwards the survivors to
/// its [`Emitter`].
///
/// A call at level `L` is written iff `L >= verbosity`. The threshold starts
/// at [`LogLevel::Info`]. Share a logger by reference or `Arc`; there is no
/// global instance.
pub struct Logger {
	verbosity: AtomicU8,
	emitter: Emitter,
}

impl Logger {
	pub fn new(emitter: Emitter) -> Self {
		Self::with_verbosity(emitter, LogLevel::default())
	}

	pub fn with_verbosity(emitter: Emitter, verbosity: LogLevel) -> Self {
		Self {
			verbosity: AtomicU8::new(verbosity.into()),
			emitter,
		}
	}

	pub fn verbosity(&self) -> LogLevel {
		LogLevel::try_from(self.verbosity.load(Ordering::Relaxed)).unwrap_or_default()
	}

	pub fn set_verbosity(&self, level: LogLevel) {
		let previous = self.verbosity.swap(level.into(), Ordering::Relaxed);
		debug!(from = previous, to = %level, "log verbosity changed");
	}

	pub fn is_enabled(&self, level: LogLevel) -> bool {
		level.passes(self.verbosity())
	}

	pub fn emitter(&self) -> &Emitter {
		&self.emitter
	}

	pub fn clock(&self) -> &Clock {
		self.emitter.clock()
	}

	/// Shorthand for [`Emitter::redirect`].
	pub fn redirect(&self, sink: Sink) -> SinkGuard<'_> {
		self.emitter.redirect(sink)
	}

	pub fn log(
		&self,
		level: LogLevel,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: &TransactionId,
		marker: Option<&LogMarker>,
	) -> Result<()> {
		if !self.is_enabled(level) {
			trace!(%level, "log call below verbosity");
			return Ok(());
		}
		self.emitter.emit(level, transaction_id, origin, message, marker)
	}

	pub fn debug<'a>(
		&self,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: impl Into<Option<&'a TransactionId>>,
	) -> Result<()> {
		self.log_with(LogLevel::Debug, origin, message, transaction_id.into())
	}

	pub fn info<'a>(
		&self,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: impl Into<Option<&'a TransactionId>>,
	) -> Result<()> {
		self.log_with(LogLevel::Info, origin, message, transaction_id.into())
	}

	pub fn warn<'a>(
		&self,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: impl Into<Option<&'a TransactionId>>,
	) -> Result<()> {
		self.log_with(LogLevel::Warn, origin, message, transaction_id.into())
	}

	pub fn error<'a>(
		&self,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: impl Into<Option<&'a TransactionId>>,
	) -> Result<()> {
		self.log_with(LogLevel::Error, origin, message, transaction_id.into())
	}

	fn log_with(
		&self,
		level: LogLevel,
		origin: &(impl Origin + ?Sized),
		message: &str,
		transaction_id: Option<&TransactionId>,
	) -> Result<()> {
		match transaction_id {
			Some(transaction_id) => self.log(level, origin, message, transaction_id, None),
			None => self.log(level, origin, message, &TransactionId::unknown(), None),
		}
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new(Emitter::default())
	}
}
