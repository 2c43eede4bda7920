// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Configuration for the search client.
//!
//! # Example
//!
//! ```
//! use ftsearch::ClientConfig;
//!
//! // Minimal config (uses defaults)
//! let config = ClientConfig::default();
//! assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
//!
//! // Explicit config
//! let config = ClientConfig {
//!     redis_url: "redis://search.internal:6379".into(),
//!     response_timeout_ms: Some(500),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

use serde::Deserialize;

/// Connection settings handed to the redis client.
///
/// Timeouts are applied by the connection manager; this crate adds no
/// deadline or retry handling of its own.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Redis connection string (e.g., "redis://localhost:6379")
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Per-command response timeout (unset = wait forever)
    #[serde(default)]
    pub response_timeout_ms: Option<u64>,

    /// Connection establishment timeout
    #[serde(default)]
    pub connection_timeout_ms: Option<u64>,
}

fn default_redis_url() -> String { "redis://127.0.0.1:6379".to_string() }

impl ClientConfig {
    pub fn response_timeout(&self) -> Option<Duration> {
        self.response_timeout_ms.map(Duration::from_millis)
    }

    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
            response_timeout_ms: None,
            connection_timeout_ms: None,
        }
    }
}
