// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use tidlog_logging::{
	LogLevel, LogMarker, Logger, LoggerBuilder, Origin, TransactionId,
	marker::catalog,
};
use tidlog_runtime::clock::{Clock, MockClock};
use tidlog_testing::{CaptureSink, assert_line_shape};

struct Controller;

impl Origin for Controller {
	fn origin_name(&self) -> &str {
		"Controller"
	}
}

struct Invoker {
	logger: Arc<Logger>,
	clock: MockClock,
}

impl Origin for Invoker {
	fn origin_name(&self) -> &str {
		"Invoker"
	}
}

impl Invoker {
	fn run(&self, tid: &TransactionId, succeed: bool) {
		let docker = tid.started(&self.logger, self, catalog::invoker_docker_cmd("run"), "docker run").unwrap();
		self.clock.advance_millis(80);
		if succeed {
			tid.finished(&self.logger, self, &docker, "container ready").unwrap();
		} else {
			tid.failed(&self.logger, self, &docker, "docker run\nexited with 125").unwrap();
		}
	}
}

fn setup() -> (Arc<Logger>, MockClock, CaptureSink) {
	let clock = MockClock::new(1_714_982_400_000);
	let sink = CaptureSink::new();
	let logger = LoggerBuilder::new()
		.verbosity(LogLevel::Debug)
		.clock(Clock::Mock(clock.clone()))
		.sink(Box::new(sink.clone()))
		.build();
	(Arc::new(logger), clock, sink)
}

#[test]
fn test_activation_lifecycle() {
	let (logger, clock, sink) = setup();
	let invoker = Invoker {
		logger: Arc::clone(&logger),
		clock: clock.clone(),
	};

	let tid = TransactionId::begin("#tid_42", logger.clock());
	clock.advance_millis(5);
	let activation = tid.started(&logger, &Controller, catalog::CONTROLLER_ACTIVATION, "posting activation").unwrap();
	clock.advance_millis(15);
	invoker.run(&tid, true);
	clock.advance_millis(5);
	tid.finished(&logger, &Controller, &activation, "activation complete").unwrap();

	assert_eq!(
		sink.lines(),
		vec![
			"[2024-05-06T08:00:00.005Z] [DEBUG] [#tid_42] [Controller] [posting activation] [marker:controller_activation_start:5]",
			"[2024-05-06T08:00:00.020Z] [DEBUG] [#tid_42] [Invoker] [docker run] [marker:invoker_docker.run_start:20]",
			"[2024-05-06T08:00:00.100Z] [INFO] [#tid_42] [Invoker] [container ready] [marker:invoker_docker.run_finish:100:80]",
			"[2024-05-06T08:00:00.105Z] [INFO] [#tid_42] [Controller] [activation complete] [marker:controller_activation_finish:105:100]",
		]
	);
}

#[test]
fn test_latencies_extracted_from_output() {
	let (logger, clock, sink) = setup();
	let invoker = Invoker {
		logger: Arc::clone(&logger),
		clock: clock.clone(),
	};

	let tid = TransactionId::begin("#tid_7", logger.clock());
	invoker.run(&tid, false);
	logger.info(&Controller, "no marker here", &tid).unwrap();

	let markers: Vec<LogMarker> = sink.lines().iter().filter_map(|line| LogMarker::extract(line)).collect();
	assert_eq!(markers.len(), 2);
	assert_eq!(markers[0].token, catalog::invoker_docker_cmd("run"));
	assert_eq!(markers[1].token.to_string(), "invoker_docker.run_error");
	assert_eq!(markers[1].delta_to_marker_start, Some(80));

	let failed = &sink.lines()[1];
	assert!(failed.contains("[WARN] [#tid_7] [Invoker] [docker run exited with 125]"), "{failed}");
}

#[test]
fn test_threshold_scenario_with_real_clock() {
	let sink = CaptureSink::new();
	let logger = LoggerBuilder::new().sink(Box::new(sink.clone())).build();
	logger.set_verbosity(LogLevel::Warn);

	logger.info(&Controller, "hello", None).unwrap();
	logger.error(&Controller, "boom", &TransactionId::new("tid-1")).unwrap();

	let lines = sink.lines();
	assert_eq!(lines.len(), 1);
	assert_line_shape(&lines[0], "ERROR", "tid-1", "Controller", Some(" [boom]"));
}

#[test]
fn test_scoped_capture_of_shared_logger() {
	let (logger, _clock, original) = setup();
	let captured = CaptureSink::new();

	{
		let _guard = logger.redirect(Box::new(captured.clone()));
		logger.warn("Scheduler", "captured line", None).unwrap();
	}
	logger.warn("Scheduler", "back to original", None).unwrap();

	assert_eq!(captured.lines().len(), 1);
	assert_eq!(original.lines().len(), 1);
	assert!(original.lines()[0].ends_with("[back to original]"));
}
