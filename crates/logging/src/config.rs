// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Declarative logging configuration

use std::env::{self, VarError};

use serde::{Deserialize, Serialize};

use crate::{Error, LogLevel, Result};

/// Standard stream a console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
	#[default]
	Stdout,
	Stderr,
}

/// Logger settings that can be read from JSON or the environment.
///
/// ```json
/// { "verbosity": "WARN", "target": "stderr" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	pub verbosity: LogLevel,
	pub target: Target,
}

impl LoggingConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
	}

	/// Default configuration with the verbosity taken from `var`, if set.
	pub fn from_env(var: &str) -> Result<Self> {
		match env::var(var) {
			Ok(value) => Self::with_verbosity_text(Some(&value)),
			Err(VarError::NotPresent) => Self::with_verbosity_text(None),
			Err(e) => Err(Error::Config(format!("{var}: {e}"))),
		}
	}

	fn with_verbosity_text(text: Option<&str>) -> Result<Self> {
		let verbosity = match text {
			Some(text) => text.parse()?,
			None => LogLevel::default(),
		};
		Ok(Self {
			verbosity,
			..Self::default()
		})
	}
}
