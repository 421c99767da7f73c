// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Timing markers attached to log lines.
//!
//! A [`LogMarkerToken`] names an instrumentation point as
//! `component_action_state`. A [`LogMarker`] is one measurement at that point:
//! the token plus the milliseconds elapsed since the transaction started and,
//! for finish/error markers, since the matching start marker.
//!
//! ```text
//! [marker:invoker_activationRun_start:3]
//! [marker:invoker_activationRun_finish:1250:1247]
//! ```

pub mod catalog;

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Keyword opening the bracketed marker group of a log line.
pub const KEYWORD: &str = "marker";

/// Identifier of an instrumentation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogMarkerToken {
	component: Cow<'static, str>,
	action: Cow<'static, str>,
	state: Cow<'static, str>,
}

impl LogMarkerToken {
	pub fn new(
		component: impl Into<Cow<'static, str>>,
		action: impl Into<Cow<'static, str>>,
		state: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			component: component.into(),
			action: action.into(),
			state: state.into(),
		}
	}

	/// Const constructor for catalog entries.
	pub const fn from_static(component: &'static str, action: &'static str, state: &'static str) -> Self {
		Self {
			component: Cow::Borrowed(component),
			action: Cow::Borrowed(action),
			state: Cow::Borrowed(state),
		}
	}

	pub fn component(&self) -> &str {
		&self.component
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn state(&self) -> &str {
		&self.state
	}

	/// Same instrumentation point in another lifecycle state.
	pub fn with_state(&self, state: impl Into<Cow<'static, str>>) -> Self {
		Self {
			component: self.component.clone(),
			action: self.action.clone(),
			state: state.into(),
		}
	}

	pub fn as_finish(&self) -> Self {
		self.with_state(catalog::FINISH)
	}

	pub fn as_error(&self) -> Self {
		self.with_state(catalog::ERROR)
	}
}

impl fmt::Display for LogMarkerToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}_{}_{}", self.component, self.action, self.state)
	}
}

impl FromStr for LogMarkerToken {
	type Err = Error;

	/// The component runs up to the first `_` and the state starts after the
	/// last one; whatever lies between is the action.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || Error::InvalidMarker(s.to_string());

		let (component, rest) = s.split_once('_').ok_or_else(invalid)?;
		let (action, state) = rest.rsplit_once('_').ok_or_else(invalid)?;
		if component.is_empty() || action.is_empty() || state.is_empty() {
			return Err(invalid());
		}

		Ok(Self::new(component.to_string(), action.to_string(), state.to_string()))
	}
}

/// One measurement taken at an instrumentation point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogMarker {
	pub token: LogMarkerToken,
	/// Milliseconds since the transaction started.
	pub delta_to_transaction_start: u64,
	/// Milliseconds since the matching start marker, for finish/error markers.
	pub delta_to_marker_start: Option<u64>,
}

impl LogMarker {
	pub fn new(token: LogMarkerToken, delta_to_transaction_start: u64, delta_to_marker_start: Option<u64>) -> Self {
		Self {
			token,
			delta_to_transaction_start,
			delta_to_marker_start,
		}
	}

	/// Find the marker group at the end of an emitted log line.
	pub fn extract(line: &str) -> Option<LogMarker> {
		let line = line.trim_end();
		let start = line.rfind(&format!("[{KEYWORD}:"))?;
		line[start..].parse().ok()
	}
}

impl fmt::Display for LogMarker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}:{}:{}", KEYWORD, self.token, self.delta_to_transaction_start)?;
		if let Some(delta) = self.delta_to_marker_start {
			write!(f, ":{}", delta)?;
		}
		f.write_str("]")
	}
}

impl FromStr for LogMarker {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || Error::InvalidMarker(s.to_string());

		let inner = s
			.strip_prefix('[')
			.and_then(|rest| rest.strip_suffix(']'))
			.and_then(|rest| rest.strip_prefix(KEYWORD))
			.and_then(|rest| rest.strip_prefix(':'))
			.ok_or_else(invalid)?;

		let mut parts = inner.split(':');
		let token = parts.next().ok_or_else(invalid)?.parse::<LogMarkerToken>()?;
		let delta_to_transaction_start =
			parts.next().ok_or_else(invalid)?.parse::<u64>().map_err(|_| invalid())?;
		let delta_to_marker_start = match parts.next() {
			Some(delta) => Some(delta.parse::<u64>().map_err(|_| invalid())?),
			None => None,
		};
		if parts.next().is_some() {
			return Err(invalid());
		}

		Ok(Self::new(token, delta_to_transaction_start, delta_to_marker_start))
	}
}

#[cfg(test)]
mod tests {
	mod token {
		use crate::{Error, marker::LogMarkerToken};

		#[test]
		fn test_display() {
			let token = LogMarkerToken::new("database", "cacheHit", "count");
			assert_eq!(token.to_string(), "database_cacheHit_count");
		}

		#[test]
		fn test_state_conversions() {
			let start = LogMarkerToken::from_static("invoker", "activationRun", "start");
			assert_eq!(start.as_finish().to_string(), "invoker_activationRun_finish");
			assert_eq!(start.as_error().to_string(), "invoker_activationRun_error");
			assert_eq!(start.with_state("count").state(), "count");
			assert_eq!(start.state(), "start");
		}

		#[test]
		fn test_parse() {
			let token: LogMarkerToken = "invoker_docker.run_start".parse().unwrap();
			assert_eq!(token.component(), "invoker");
			assert_eq!(token.action(), "docker.run");
			assert_eq!(token.state(), "start");
			assert_eq!(token, LogMarkerToken::new("invoker", "docker.run", "start"));
		}

		#[test]
		fn test_parse_action_with_underscore() {
			let token: LogMarkerToken = "controller_blocking_activation_start".parse().unwrap();
			assert_eq!(token.action(), "blocking_activation");
		}

		#[test]
		fn test_parse_invalid() {
			for text in ["", "controller", "controller_start", "_activation_start", "controller__start", "a_b_"] {
				assert!(
					matches!(text.parse::<LogMarkerToken>(), Err(Error::InvalidMarker(_))),
					"{text} should not parse"
				);
			}
		}
	}

	mod marker {
		use crate::{
			Error,
			marker::{LogMarker, LogMarkerToken},
		};

		fn token() -> LogMarkerToken {
			LogMarkerToken::new("controller", "activation", "start")
		}

		#[test]
		fn test_display_single_delta() {
			let marker = LogMarker::new(token(), 42, None);
			assert_eq!(marker.to_string(), "[marker:controller_activation_start:42]");
		}

		#[test]
		fn test_display_both_deltas() {
			let marker = LogMarker::new(token().as_finish(), 42, Some(17));
			assert_eq!(marker.to_string(), "[marker:controller_activation_finish:42:17]");
		}

		#[test]
		fn test_parse() {
			let marker: LogMarker = "[marker:controller_activation_finish:42:17]".parse().unwrap();
			assert_eq!(marker, LogMarker::new(token().as_finish(), 42, Some(17)));

			let marker: LogMarker = "[marker:controller_activation_start:0]".parse().unwrap();
			assert_eq!(marker, LogMarker::new(token(), 0, None));
		}

		#[test]
		fn test_parse_invalid() {
			for text in [
				"marker:controller_activation_start:1",
				"[marker:controller_activation_start]",
				"[marker:controller_activation_start:x]",
				"[marker:controller_activation_start:1:2:3]",
				"[mark:controller_activation_start:1]",
				"[marker:controller:1]",
			] {
				assert!(matches!(text.parse::<LogMarker>(), Err(Error::InvalidMarker(_))), "{text} should not parse");
			}
		}

		#[test]
		fn test_extract_from_line() {
			let line = "[2024-01-02T03:04:05.678Z] [INFO] [#tid_7] [Invoker] [done] [marker:invoker_activation_finish:90:30]\n";
			let marker = LogMarker::extract(line).unwrap();
			assert_eq!(marker.token.to_string(), "invoker_activation_finish");
			assert_eq!(marker.delta_to_transaction_start, 90);
			assert_eq!(marker.delta_to_marker_start, Some(30));
		}

		#[test]
		fn test_extract_without_marker() {
			assert_eq!(LogMarker::extract("[2024-01-02T03:04:05.678Z] [INFO] [#tid_7] [Invoker] [done]"), None);
		}
	}
}
