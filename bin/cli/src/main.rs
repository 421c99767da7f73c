// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod command;

use std::io;

use clap::{Parser, Subcommand};
use tidlog_logging::{LogLevel, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tidlog", version, about = "Write and inspect transaction-tagged log lines")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Write one log line to stdout
	Emit {
		/// Severity of the line
		#[arg(short, long, default_value = "info")]
		level: LogLevel,
		/// Component the line comes from
		#[arg(short, long)]
		origin: String,
		/// Transaction identifier, the unknown sentinel when omitted
		#[arg(short, long)]
		tid: Option<String>,
		/// Minimum severity that is written
		#[arg(long, env = "TIDLOG_LEVEL", default_value = "info")]
		verbosity: LogLevel,
		/// Marker as `token:delta[:delta]`
		#[arg(short, long)]
		marker: Option<String>,
		/// Message words, joined with spaces
		message: Vec<String>,
	},
	/// Print the markers found in log lines read from stdin
	Extract,
	/// List the well-known marker tokens
	Catalog,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.init();

	match Cli::parse().command {
		Command::Emit {
			level,
			origin,
			tid,
			verbosity,
			marker,
			message,
		} => command::emit(
			Box::new(io::stdout()),
			command::EmitArgs {
				level,
				origin,
				tid,
				verbosity,
				marker,
				message: message.join(" "),
			},
		),
		Command::Extract => {
			let count = command::extract(io::stdin().lock(), io::stdout().lock())?;
			tracing::debug!(count, "markers extracted");
			Ok(())
		}
		Command::Catalog => command::catalog(io::stdout().lock()),
	}
}
