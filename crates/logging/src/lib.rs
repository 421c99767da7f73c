// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Leveled single-line logging tagged with transaction identifiers and timing
//! markers.
//!
//! Every emitted line has the shape
//!
//! ```text
//! [2024-05-06T07:08:09.012Z] [INFO] [#tid_42] [Invoker] [message] [marker:invoker_activation_finish:30:20]
//! ```
//!
//! where the message group is left out for empty messages and the marker
//! group only appears when a marker was supplied.
//!
//! ```
//! use tidlog_logging::{LogLevel, LoggerBuilder, TransactionId, marker::catalog};
//!
//! let logger = LoggerBuilder::new().verbosity(LogLevel::Debug).build();
//! let tid = TransactionId::begin("#tid_1", logger.clock());
//!
//! let start = tid.started(&logger, "Invoker", catalog::INVOKER_ACTIVATION_RUN, "running").unwrap();
//! tid.finished(&logger, "Invoker", &start, "done").unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod emitter;
mod error;
pub mod level;
pub mod logger;
pub mod marker;
pub mod origin;
pub mod record;
pub mod transaction;

pub use builder::{ConsoleBuilder, LoggerBuilder};
pub use config::{LoggingConfig, Target};
pub use emitter::{Emitter, Sink, SinkGuard};
pub use error::{Error, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use marker::{LogMarker, LogMarkerToken};
pub use origin::Origin;
pub use record::Record;
pub use transaction::{StartMarker, TransactionId};
