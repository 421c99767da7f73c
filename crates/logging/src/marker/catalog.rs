// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Well-known instrumentation points.

use super::LogMarkerToken;

pub const START: &str = "start";
pub const FINISH: &str = "finish";
pub const ERROR: &str = "error";
pub const COUNT: &str = "count";

const CONTROLLER: &str = "controller";
const LOADBALANCER: &str = "loadbalancer";
const INVOKER: &str = "invoker";
const DATABASE: &str = "database";

const ACTIVATION: &str = "activation";

// Controller: from receiving an activation until it is handed to the message bus
pub const CONTROLLER_ACTIVATION: LogMarkerToken = LogMarkerToken::from_static(CONTROLLER, ACTIVATION, START);
pub const CONTROLLER_BLOCKING_ACTIVATION: LogMarkerToken =
	LogMarkerToken::from_static(CONTROLLER, "blockingActivation", START);
pub const CONTROLLER_LOADBALANCER: LogMarkerToken = LogMarkerToken::from_static(CONTROLLER, LOADBALANCER, START);
pub const CONTROLLER_KAFKA: LogMarkerToken = LogMarkerToken::from_static(CONTROLLER, "kafka", START);

// Load balancer
pub const LOADBALANCER_ACTIVATION_START: LogMarkerToken =
	LogMarkerToken::from_static(LOADBALANCER, "activationStarted", COUNT);
pub const LOADBALANCER_INVOKER_OFFLINE: LogMarkerToken =
	LogMarkerToken::from_static(LOADBALANCER, "invokerOffline", COUNT);

// Invoker
pub const INVOKER_ACTIVATION: LogMarkerToken = LogMarkerToken::from_static(INVOKER, ACTIVATION, START);
pub const INVOKER_ACTIVATION_RUN: LogMarkerToken = LogMarkerToken::from_static(INVOKER, "activationRun", START);
pub const INVOKER_ACTIVATION_INIT: LogMarkerToken = LogMarkerToken::from_static(INVOKER, "activationInit", START);
pub const INVOKER_COLLECT_LOGS: LogMarkerToken = LogMarkerToken::from_static(INVOKER, "collectLogs", START);

/// Time spent in one container-engine command, e.g. `invoker_docker.run_start`.
pub fn invoker_docker_cmd(cmd: &str) -> LogMarkerToken {
	LogMarkerToken::new(INVOKER, format!("docker.{cmd}"), START)
}

/// Time spent in one container-runtime command, e.g. `invoker_runc.pause_start`.
pub fn invoker_runc_cmd(cmd: &str) -> LogMarkerToken {
	LogMarkerToken::new(INVOKER, format!("runc.{cmd}"), START)
}

// Database
pub const DATABASE_CACHE_HIT: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "cacheHit", COUNT);
pub const DATABASE_CACHE_MISS: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "cacheMiss", COUNT);
pub const DATABASE_SAVE_DOCUMENT: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "saveDocument", START);
pub const DATABASE_BULK_SAVE: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "saveDocumentBulk", START);
pub const DATABASE_DELETE_DOCUMENT: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "deleteDocument", START);
pub const DATABASE_GET_DOCUMENT: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "getDocument", START);
pub const DATABASE_QUERY: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "queryView", START);
pub const DATABASE_ATT_GET: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "getDocumentAttachment", START);
pub const DATABASE_ATT_SAVE: LogMarkerToken = LogMarkerToken::from_static(DATABASE, "saveDocumentAttachment", START);

/// Every fixed catalog entry, grouped by component.
pub fn all() -> Vec<LogMarkerToken> {
	vec![
		CONTROLLER_ACTIVATION,
		CONTROLLER_BLOCKING_ACTIVATION,
		CONTROLLER_LOADBALANCER,
		CONTROLLER_KAFKA,
		LOADBALANCER_ACTIVATION_START,
		LOADBALANCER_INVOKER_OFFLINE,
		INVOKER_ACTIVATION,
		INVOKER_ACTIVATION_RUN,
		INVOKER_ACTIVATION_INIT,
		INVOKER_COLLECT_LOGS,
		DATABASE_CACHE_HIT,
		DATABASE_CACHE_MISS,
		DATABASE_SAVE_DOCUMENT,
		DATABASE_BULK_SAVE,
		DATABASE_DELETE_DOCUMENT,
		DATABASE_GET_DOCUMENT,
		DATABASE_QUERY,
		DATABASE_ATT_GET,
		DATABASE_ATT_SAVE,
	]
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_fixed_tokens() {
		assert_eq!(CONTROLLER_ACTIVATION.to_string(), "controller_activation_start");
		assert_eq!(INVOKER_ACTIVATION_RUN.to_string(), "invoker_activationRun_start");
		assert_eq!(DATABASE_CACHE_HIT.to_string(), "database_cacheHit_count");
		assert_eq!(DATABASE_QUERY.to_string(), "database_queryView_start");
	}

	#[test]
	fn test_parameterized_tokens() {
		assert_eq!(invoker_docker_cmd("run").to_string(), "invoker_docker.run_start");
		assert_eq!(invoker_docker_cmd("pull").as_finish().to_string(), "invoker_docker.pull_finish");
		assert_eq!(invoker_runc_cmd("pause").to_string(), "invoker_runc.pause_start");
	}

	#[test]
	fn test_catalog_is_unique_and_well_formed() {
		let tokens = all();
		let names: HashSet<String> = tokens.iter().map(ToString::to_string).collect();
		assert_eq!(names.len(), tokens.len());

		for token in tokens {
			assert!([START, FINISH, ERROR, COUNT].contains(&token.state()), "{token}");
			assert_eq!(token.to_string().parse::<LogMarkerToken>().unwrap(), token);
		}
	}
}
