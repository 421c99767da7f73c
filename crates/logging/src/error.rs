// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The output sink refused the line.
	#[error("failed to write log line: {0}")]
	Io(#[from] io::Error),

	#[error("invalid severity `{0}`, expected one of DEBUG, INFO, WARN, ERROR")]
	InvalidSeverity(String),

	#[error("invalid log marker `{0}`")]
	InvalidMarker(String),

	#[error("invalid logging configuration: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
