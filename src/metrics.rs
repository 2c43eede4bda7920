// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for the search client.
//!
//! Uses the `metrics` crate for backend-agnostic metrics collection.
//! The host application is responsible for choosing the exporter (Prometheus, OTEL, etc.)
//!
//! # Metric Naming Convention
//! - `ftsearch_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Labels
//! - `command`: FT.CREATE, FT.DROPINDEX, FT.SEARCH, ...
//! - `status`: success, error, unexpected_reply, decode_error (one per operation)

use metrics::{counter, histogram};
use std::time::Duration;

/// Record a command execution outcome
pub fn record_command(command: &str, status: &str) {
    counter!(
        "ftsearch_commands_total",
        "command" => command.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record round-trip latency of a command
pub fn record_command_latency(command: &str, duration: Duration) {
    histogram!(
        "ftsearch_command_seconds",
        "command" => command.to_string()
    )
    .record(duration.as_secs_f64());
}

/// Record number of documents returned by a search
pub fn record_search_results(count: usize) {
    histogram!("ftsearch_search_results").record(count as f64);
}
