// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log severity levels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Log severity levels, ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum LogLevel {
	Debug = 0,
	#[default]
	Info = 1,
	Warn = 2,
	Error = 3,
}

impl LogLevel {
	pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
		}
	}

	/// Whether a message at `self` passes a verbosity threshold.
	pub fn passes(&self, threshold: LogLevel) -> bool {
		*self >= threshold
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<u8> for LogLevel {
	type Error = Error;

	fn try_from(value: u8) -> Result<Self, Error> {
		match value {
			0 => Ok(LogLevel::Debug),
			1 => Ok(LogLevel::Info),
			2 => Ok(LogLevel::Warn),
			3 => Ok(LogLevel::Error),
			other => Err(Error::InvalidSeverity(other.to_string())),
		}
	}
}

impl From<LogLevel> for u8 {
	fn from(level: LogLevel) -> Self {
		level as u8
	}
}

impl FromStr for LogLevel {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"DEBUG" => Ok(LogLevel::Debug),
			"INFO" => Ok(LogLevel::Info),
			"WARN" | "WARNING" => Ok(LogLevel::Warn),
			"ERROR" => Ok(LogLevel::Error),
			_ => Err(Error::InvalidSeverity(s.to_string())),
		}
	}
}

impl TryFrom<String> for LogLevel {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Error> {
		value.parse()
	}
}

impl From<LogLevel> for String {
	fn from(level: LogLevel) -> Self {
		level.as_str().to_string()
	}
}
