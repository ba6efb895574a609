//! Canonical structured event names used across `safe-route`.

// Registration lifecycle events.
pub const REGISTER_START: &str = "route_register_start";
pub const INPUT_REJECTED: &str = "route_input_rejected";
pub const SNAPSHOT_CAPTURED: &str = "route_table_snapshot_captured";
pub const CANDIDATE_SKIPPED: &str = "route_candidate_skipped";
pub const REGISTER_NOOP: &str = "route_register_noop";
pub const COMMIT_OK: &str = "route_commit_ok";
pub const COMMIT_FAILED: &str = "route_commit_failed";
