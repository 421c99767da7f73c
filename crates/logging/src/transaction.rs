// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Transaction identifiers and the start/finish timing helpers built on them.

use std::fmt;

use chrono::{DateTime, Utc};
use tidlog_runtime::clock::Clock;

use crate::{
	LogLevel, Logger, Origin, Result,
	marker::{LogMarker, LogMarkerToken},
};

/// Correlation token attached to every line of one logical request.
///
/// The identifier is opaque; it is written verbatim. The start instant is the
/// reference point for the `delta_to_transaction_start` of every marker
/// emitted under this transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId {
	id: String,
	start: DateTime<Utc>,
}

impl TransactionId {
	/// Identifier whose transaction starts now on the system clock. Use
	/// [`TransactionId::begin`] to read the start from another clock.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			start: Clock::Real.now(),
		}
	}

	/// Numbered identifier rendered as `#tid_<n>`.
	pub fn from_number(id: u64) -> Self {
		Self::new(format!("#tid_{id}"))
	}

	/// Sentinel for lines not tied to any transaction. It has no start of its
	/// own, so its deltas count from the Unix epoch.
	pub fn unknown() -> Self {
		Self::from_number(0).with_start(DateTime::default())
	}

	/// Identifier whose transaction starts now.
	pub fn begin(id: impl Into<String>, clock: &Clock) -> Self {
		Self::new(id).with_start(clock.now())
	}

	pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
		self.start = start;
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn start(&self) -> DateTime<Utc> {
		self.start
	}

	pub fn is_unknown(&self) -> bool {
		self.id == Self::unknown().id
	}

	/// Milliseconds from the transaction start to `now`.
	pub fn delta_to_start(&self, now: DateTime<Utc>) -> u64 {
		millis_between(self.start, now)
	}

	/// Log the start of a measured section at `Debug`.
	pub fn started(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		token: LogMarkerToken,
		message: &str,
	) -> Result<StartMarker> {
		self.started_with_level(logger, origin, token, message, LogLevel::Debug)
	}

	pub fn started_with_level(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		token: LogMarkerToken,
		message: &str,
		level: LogLevel,
	) -> Result<StartMarker> {
		let now = logger.clock().now();
		let marker = LogMarker::new(token, self.delta_to_start(now), None);
		logger.log(level, origin, message, self, Some(&marker))?;

		Ok(StartMarker {
			start: now,
			token: marker.token,
		})
	}

	/// Log the successful end of a measured section at `Info`.
	pub fn finished(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		start: &StartMarker,
		message: &str,
	) -> Result<()> {
		self.finished_with_level(logger, origin, start, message, LogLevel::Info)
	}

	pub fn finished_with_level(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		start: &StartMarker,
		message: &str,
		level: LogLevel,
	) -> Result<()> {
		self.close(logger, origin, start, start.token.as_finish(), message, level)
	}

	/// Log the failed end of a measured section at `Warn`.
	pub fn failed(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		start: &StartMarker,
		message: &str,
	) -> Result<()> {
		self.failed_with_level(logger, origin, start, message, LogLevel::Warn)
	}

	pub fn failed_with_level(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		start: &StartMarker,
		message: &str,
		level: LogLevel,
	) -> Result<()> {
		self.close(logger, origin, start, start.token.as_error(), message, level)
	}

	/// Log a point event, such as a cache hit, at `Info`.
	pub fn mark(&self, logger: &Logger, origin: &(impl Origin + ?Sized), token: LogMarkerToken, message: &str) -> Result<()> {
		self.mark_with_level(logger, origin, token, message, LogLevel::Info)
	}

	pub fn mark_with_level(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		token: LogMarkerToken,
		message: &str,
		level: LogLevel,
	) -> Result<()> {
		let now = logger.clock().now();
		let marker = LogMarker::new(token, self.delta_to_start(now), None);
		logger.log(level, origin, message, self, Some(&marker))
	}

	fn close(
		&self,
		logger: &Logger,
		origin: &(impl Origin + ?Sized),
		start: &StartMarker,
		token: LogMarkerToken,
		message: &str,
		level: LogLevel,
	) -> Result<()> {
		let now = logger.clock().now();
		let marker = LogMarker::new(token, self.delta_to_start(now), Some(start.delta_to(now)));
		logger.log(level, origin, message, self, Some(&marker))
	}
}

impl Default for TransactionId {
	fn default() -> Self {
		Self::unknown()
	}
}

impl fmt::Display for TransactionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.id)
	}
}

/// Opening side of a measured section, handed back to `finished`/`failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMarker {
	pub start: DateTime<Utc>,
	pub token: LogMarkerToken,
}

impl StartMarker {
	/// Milliseconds from this marker to `now`.
	pub fn delta_to(&self, now: DateTime<Utc>) -> u64 {
		millis_between(self.start, now)
	}
}

// saturates at zero when the clock reads earlier than `from`
fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
	(to - from).num_milliseconds().max(0) as u64
}
