// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Wall-clock source.
//!
//! Everything that stamps or measures time reads the current instant through
//! a [`Clock`], so tests can swap in a [`MockClock`] and get deterministic
//! timestamps and durations.

use std::{
	sync::{
		Arc,
		atomic::{AtomicI64, Ordering},
	},
	time::Duration,
};

use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
#[derive(Debug, Clone, Default)]
pub enum Clock {
	/// System wall clock.
	#[default]
	Real,
	/// Manually driven clock, shared between all of its clones.
	Mock(MockClock),
}

impl Clock {
	pub fn now(&self) -> DateTime<Utc> {
		match self {
			Clock::Real => Utc::now(),
			Clock::Mock(mock) => mock.now(),
		}
	}

	/// Milliseconds since the Unix epoch.
	pub fn now_millis(&self) -> i64 {
		self.now().timestamp_millis()
	}
}

impl From<MockClock> for Clock {
	fn from(mock: MockClock) -> Self {
		Clock::Mock(mock)
	}
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
	millis: Arc<AtomicI64>,
}

impl MockClock {
	/// Create a mock clock reading `millis` milliseconds after the Unix epoch.
	pub fn new(millis: i64) -> Self {
		Self {
			millis: Arc::new(AtomicI64::new(millis)),
		}
	}

	/// Create a mock clock reading the given instant.
	pub fn at(instant: DateTime<Utc>) -> Self {
		Self::new(instant.timestamp_millis())
	}

	pub fn now(&self) -> DateTime<Utc> {
		DateTime::from_timestamp_millis(self.millis.load(Ordering::Acquire)).unwrap_or_default()
	}

	pub fn set(&self, millis: i64) {
		self.millis.store(millis, Ordering::Release);
	}

	pub fn advance(&self, duration: Duration) {
		self.advance_millis(duration.as_millis() as i64);
	}

	pub fn advance_millis(&self, millis: i64) {
		self.millis.fetch_add(millis, Ordering::AcqRel);
	}
}
