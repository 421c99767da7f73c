// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory output sinks.

use std::{
	io::{self, Write},
	sync::Arc,
};

use parking_lot::Mutex;

/// Clonable in-memory sink. All clones append to the same buffer, so a test
/// can hand one clone to the code under test and read from another.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
	buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far, lossily decoded as UTF-8.
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.buffer.lock()).into_owned()
	}

	/// Written lines without their terminators.
	pub fn lines(&self) -> Vec<String> {
		self.contents().lines().map(str::to_string).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.lock().is_empty()
	}

	pub fn clear(&self) {
		self.buffer.lock().clear();
	}
}

impl Write for CaptureSink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Sink whose every write fails with the configured error kind.
#[derive(Debug, Clone, Copy)]
pub struct FailingSink {
	kind: io::ErrorKind,
}

impl FailingSink {
	pub fn new(kind: io::ErrorKind) -> Self {
		Self {
			kind,
		}
	}
}

impl Default for FailingSink {
	fn default() -> Self {
		Self::new(io::ErrorKind::BrokenPipe)
	}
}

impl Write for FailingSink {
	fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
		Err(io::Error::new(self.kind, "sink closed"))
	}

	fn flush(&mut self) -> io::Result<()> {
		Err(io::Error::new(self.kind, "sink closed"))
	}
}

#[cfg(test)]
mod tests {
	use std::io::{ErrorKind, Write};

	use super::{CaptureSink, FailingSink};

	#[test]
	fn test_clones_share_buffer() {
		let sink = CaptureSink::new();
		let mut writer = sink.clone();

		writer.write_all(b"first\nsecond\n").unwrap();

		assert_eq!(sink.lines(), vec!["first", "second"]);
		assert_eq!(sink.contents(), "first\nsecond\n");
	}

	#[test]
	fn test_clear() {
		let sink = CaptureSink::new();
		sink.clone().write_all(b"line\n").unwrap();
		assert!(!sink.is_empty());

		sink.clear();
		assert!(sink.is_empty());
		assert!(sink.lines().is_empty());
	}

	#[test]
	fn test_failing_sink() {
		let mut sink = FailingSink::new(ErrorKind::PermissionDenied);
		let err = sink.write_all(b"x").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::PermissionDenied);
	}
}
