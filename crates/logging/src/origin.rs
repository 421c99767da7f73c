// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, sync::Arc};

/// Something that can name the component a log line comes from.
///
/// Plain strings name themselves. Components that log a lot usually
/// implement this once and pass `self`:
///
/// ```
/// # use tidlog_logging::Origin;
/// struct Invoker;
///
/// impl Origin for Invoker {
/// 	fn origin_name(&self) -> &str {
/// 		"Invoker"
/// 	}
/// }
/// ```
pub trait Origin {
	fn origin_name(&self) -> &str;
}

impl Origin for str {
	fn origin_name(&self) -> &str {
		self
	}
}

impl Origin for String {
	fn origin_name(&self) -> &str {
		self.as_str()
	}
}

impl Origin for Cow<'_, str> {
	fn origin_name(&self) -> &str {
		self.as_ref()
	}
}

impl<T: Origin + ?Sized> Origin for &T {
	fn origin_name(&self) -> &str {
		(**self).origin_name()
	}
}

impl<T: Origin + ?Sized> Origin for Arc<T> {
	fn origin_name(&self) -> &str {
		(**self).origin_name()
	}
}
