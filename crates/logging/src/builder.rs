// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builders for configuring a logger

use std::io;

use tidlog_runtime::clock::Clock;

use crate::{
	LogLevel, Logger,
	config::{LoggingConfig, Target},
	emitter::{Emitter, Sink},
};

/// Builder for configuring the console sink with fluent API
#[derive(Debug, Clone)]
pub struct ConsoleBuilder {
	target: Target,
}

impl ConsoleBuilder {
	/// Create a new console builder writing to stdout
	pub fn new() -> Self {
		Self {
			target: Target::Stdout,
		}
	}

	/// Write to stderr instead of stdout
	///
	/// # Example
	/// ```
	/// # use tidlog_logging::ConsoleBuilder;
	/// ConsoleBuilder::new().stderr(true);
	/// ```
	pub fn stderr(mut self, enabled: bool) -> Self {
		self.target = if enabled {
			Target::Stderr
		} else {
			Target::Stdout
		};
		self
	}

	pub fn target(mut self, target: Target) -> Self {
		self.target = target;
		self
	}

	pub(crate) fn build(self) -> Sink {
		match self.target {
			Target::Stdout => Box::new(io::stdout()),
			Target::Stderr => Box::new(io::stderr()),
		}
	}
}

impl Default for ConsoleBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Builder for configuring a [`Logger`]
///
/// Without an explicit sink the logger writes to the console, stdout by
/// default.
pub struct LoggerBuilder {
	verbosity: LogLevel,
	clock: Clock,
	sink: Option<Sink>,
	console: ConsoleBuilder,
}

impl LoggerBuilder {
	/// Create a new logger builder with default settings
	pub fn new() -> Self {
		Self {
			verbosity: LogLevel::default(),
			clock: Clock::Real,
			sink: None,
			console: ConsoleBuilder::new(),
		}
	}

	pub fn from_config(config: LoggingConfig) -> Self {
		Self::new().verbosity(config.verbosity).with_console(|console| console.target(config.target))
	}

	pub fn verbosity(mut self, verbosity: LogLevel) -> Self {
		self.verbosity = verbosity;
		self
	}

	pub fn clock(mut self, clock: Clock) -> Self {
		self.clock = clock;
		self
	}

	/// Write to `sink` instead of the console
	pub fn sink(mut self, sink: Sink) -> Self {
		self.sink = Some(sink);
		self
	}

	/// Configure the console sink
	pub fn with_console<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(ConsoleBuilder) -> ConsoleBuilder,
	{
		self.console = configurator(self.console);
		self
	}

	pub fn build(self) -> Logger {
		let sink = match self.sink {
			Some(sink) => sink,
			None => self.console.build(),
		};
		Logger::with_verbosity(Emitter::new(sink, self.clock), self.verbosity)
	}
}

impl Default for LoggerBuilder {
	fn default() -> Self {
		Self::new()
	}
}
