// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log record and its single-line rendering

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{LogLevel, TransactionId, marker::LogMarker};

/// `yyyy-MM-ddTHH:mm:ss.SSSZ`, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One log line before it is written. Built per call, never stored.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
	pub timestamp: DateTime<Utc>,
	pub level: LogLevel,
	pub transaction_id: &'a TransactionId,
	pub origin: &'a str,
	pub message: &'a str,
	pub marker: Option<&'a LogMarker>,
}

impl fmt::Display for Record<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"[{}] [{}] [{}] [{}]",
			self.timestamp.format(TIMESTAMP_FORMAT),
			self.level,
			self.transaction_id,
			self.origin
		)?;

		let message = normalize_message(self.message);
		if !message.is_empty() {
			write!(f, " [{}]", message)?;
		}

		if let Some(marker) = self.marker {
			write!(f, " {}", marker)?;
		}

		Ok(())
	}
}

/// Collapse a multi-line message onto one line: every line is trimmed and the
/// lines are joined with single spaces. Blank lines at either end leave no
/// separator behind.
pub fn normalize_message(message: &str) -> String {
	message.lines().map(str::trim).collect::<Vec<_>>().join(" ").trim().to_string()
}
