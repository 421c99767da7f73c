// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{BufRead, Write};

use tidlog_logging::{LogLevel, LogMarker, LoggerBuilder, Result, Sink, TransactionId, marker::catalog};

pub struct EmitArgs {
	pub level: LogLevel,
	pub origin: String,
	pub tid: Option<String>,
	pub verbosity: LogLevel,
	pub marker: Option<String>,
	pub message: String,
}

pub fn emit(sink: Sink, args: EmitArgs) -> Result<()> {
	let logger = LoggerBuilder::new().verbosity(args.verbosity).sink(sink).build();
	let tid = args.tid.map(TransactionId::new).unwrap_or_default();
	let marker = match args.marker {
		Some(text) => Some(format!("[{}:{}]", tidlog_logging::marker::KEYWORD, text).parse::<LogMarker>()?),
		None => None,
	};
	logger.log(args.level, args.origin.as_str(), &args.message, &tid, marker.as_ref())
}

/// Writes `token<TAB>delta[<TAB>delta]` for every line carrying a marker and
/// returns how many were found. Bytes that are not UTF-8 are replaced, so one
/// garbled line does not end the scan.
pub fn extract(mut reader: impl BufRead, mut writer: impl Write) -> Result<usize> {
	let mut count = 0;
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		let Some(marker) = LogMarker::extract(&String::from_utf8_lossy(&buf)) else {
			continue;
		};
		match marker.delta_to_marker_start {
			Some(delta) => writeln!(writer, "{}\t{}\t{}", marker.token, marker.delta_to_transaction_start, delta)?,
			None => writeln!(writer, "{}\t{}", marker.token, marker.delta_to_transaction_start)?,
		}
		count += 1;
	}
	Ok(count)
}

pub fn catalog(mut writer: impl Write) -> Result<()> {
	for token in catalog::all() {
		writeln!(writer, "{}", token)?;
	}
	Ok(())
}
