// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shape checks for emitted log lines whose timestamp is not known upfront.

use regex::Regex;

/// `yyyy-MM-ddTHH:mm:ss.SSSZ`
pub const TIMESTAMP_PATTERN: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z";

/// Regex matching a whole line with any timestamp and the given groups.
///
/// `rest` is the literal text following the origin group (including its
/// leading space), or `None` when the line must end right after the origin.
pub fn line_pattern(level: &str, transaction_id: &str, origin: &str, rest: Option<&str>) -> Regex {
	let pattern = format!(
		r"^\[{}\] \[{}\] \[{}\] \[{}\]{}$",
		TIMESTAMP_PATTERN,
		regex::escape(level),
		regex::escape(transaction_id),
		regex::escape(origin),
		regex::escape(rest.unwrap_or_default()),
	);
	Regex::new(&pattern).expect("escaped line pattern is valid")
}

/// Panics with the offending line when it does not match [`line_pattern`].
pub fn assert_line_shape(line: &str, level: &str, transaction_id: &str, origin: &str, rest: Option<&str>) {
	let pattern = line_pattern(level, transaction_id, origin, rest);
	assert!(pattern.is_match(line), "line `{line}` does not match `{pattern}`");
}
