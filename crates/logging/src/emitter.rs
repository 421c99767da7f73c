// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Line emitter writing rendered records to a swappable sink.

use std::io::{self, Write};

use parking_lot::Mutex;
use tidlog_runtime::clock::Clock;
use tracing::debug;

use crate::{LogLevel, Origin, Result, TransactionId, marker::LogMarker, record::Record};

/// Destination of emitted lines.
pub type Sink = Box<dyn Write + Send>;

/// Renders one record per call and writes it as a single line.
///
/// The sink can be replaced at any time. Each line is written with one
/// `write_all` under the sink lock, so lines from concurrent callers never
/// interleave within the same emitter.
pub struct Emitter {
	slot: Mutex<SinkSlot>,
	clock: Clock,
}

// Active sink plus one frame per live `SinkGuard`, oldest first. Each frame
// holds the sink that was current when its guard was created.
struct SinkSlot {
	current: Sink,
	redirects: Vec<(u64, Sink)>,
	next_redirect: u64,
}

impl Emitter {
	pub fn new(sink: Sink, clock: Clock) -> Self {
		Self {
			slot: Mutex::new(SinkSlot {
				current: sink,
				redirects: Vec::new(),
				next_redirect: 0,
			}),
			clock,
		}
	}

	/// Emitter writing to standard output with the system clock.
	pub fn stdout() -> Self {
		Self::new(Box::new(io::stdout()), Clock::Real)
	}

	pub fn clock(&self) -> &Clock {
		&self.clock
	}

	pub fn emit(
		&self,
		level: LogLevel,
		transaction_id: &TransactionId,
		origin: &(impl Origin + ?Sized),
		message: &str,
		marker: Option<&LogMarker>,
	) -> Result<()> {
		let record = Record {
			timestamp: self.clock.now(),
			level,
			transaction_id,
			origin: origin.origin_name(),
			message,
			marker,
		};

		let mut line = record.to_string();
		line.push('\n');

		let mut slot = self.slot.lock();
		slot.current.write_all(line.as_bytes())?;
		slot.current.flush()?;
		Ok(())
	}

	/// Install `sink` and return the one it replaces.
	pub fn set_output(&self, sink: Sink) -> Sink {
		let previous = std::mem::replace(&mut self.slot.lock().current, sink);
		debug!("log sink replaced");
		previous
	}

	/// Install `sink` until the returned guard is dropped, then restore the
	/// current one. Restoration also happens when the scope unwinds.
	///
	/// Guards may be dropped in any order. Dropping an inner guard restores the
	/// sink it replaced; dropping an outer guard first hands its saved sink to
	/// the next guard, so the last one dropped always restores the sink that
	/// was active before the first redirect.
	pub fn redirect(&self, sink: Sink) -> SinkGuard<'_> {
		let mut slot = self.slot.lock();
		let id = slot.next_redirect;
		slot.next_redirect += 1;
		let previous = std::mem::replace(&mut slot.current, sink);
		slot.redirects.push((id, previous));
		debug!(redirect = id, "log sink redirected");

		SinkGuard {
			emitter: self,
			id,
		}
	}

	fn restore(&self, id: u64) {
		let mut guard = self.slot.lock();
		let slot = &mut *guard;
		let Some(position) = slot.redirects.iter().position(|(frame, _)| *frame == id) else {
			return;
		};
		let (_, previous) = slot.redirects.remove(position);
		match slot.redirects.get_mut(position) {
			// a later redirect is still active, it now falls back to our sink
			Some((_, newer_previous)) => *newer_previous = previous,
			None => slot.current = previous,
		}
		debug!(redirect = id, "log sink restored");
	}
}

impl Default for Emitter {
	fn default() -> Self {
		Self::stdout()
	}
}

/// Scoped sink replacement created by [`Emitter::redirect`].
#[must_use = "the previous sink is restored as soon as the guard is dropped"]
pub struct SinkGuard<'a> {
	emitter: &'a Emitter,
	id: u64,
}

impl Drop for SinkGuard<'_> {
	fn drop(&mut self) {
		self.emitter.restore(self.id);
	}
}
