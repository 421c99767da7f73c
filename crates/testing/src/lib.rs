// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test utilities for capturing and checking emitted log lines.

pub mod line;
pub mod sink;

pub use line::{TIMESTAMP_PATTERN, assert_line_shape, line_pattern};
pub use sink::{CaptureSink, FailingSink};
