// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Redis transport.
//!
//! Commands go out through a shared `ConnectionManager`, which owns
//! reconnection and multiplexing. Nothing here retries.
//!
//! ```text
//! FT.CREATE idx ON JSON PREFIX 1 users: SCHEMA $.name AS name TEXT
//! FT.SEARCH idx '@name:Alice'
//! ```

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{Client, Value};
use tracing::debug;

use super::traits::SearchTransport;
use crate::command::SearchCommand;
use crate::config::ClientConfig;
use crate::error::SearchError;

#[derive(Clone)]
pub struct RedisTransport {
    connection: ConnectionManager,
}

impl RedisTransport {
    /// Open a managed connection using `config`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use ftsearch::{ClientConfig, transport::RedisTransport};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let transport = RedisTransport::connect(&ClientConfig::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &ClientConfig) -> Result<Self, SearchError> {
        let client = Client::open(config.redis_url.as_str())?;

        let mut manager_config = ConnectionManagerConfig::new();
        if let Some(timeout) = config.response_timeout() {
            manager_config = manager_config.set_response_timeout(timeout);
        }
        if let Some(timeout) = config.connection_timeout() {
            manager_config = manager_config.set_connection_timeout(timeout);
        }

        let connection = ConnectionManager::new_with_config(client, manager_config).await?;
        debug!(url = %config.redis_url, "Connected to redis");

        Ok(Self { connection })
    }

    /// Wrap a connection manager the caller already owns.
    pub fn from_connection(connection: ConnectionManager) -> Self {
        Self { connection }
    }

    /// Get a clone of the connection manager (for sharing with other clients)
    pub fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

#[async_trait]
impl SearchTransport for RedisTransport {
    async fn execute(&self, command: &SearchCommand) -> Result<Value, SearchError> {
        let mut conn = self.connection.clone();
        let reply: Value = command.to_cmd().query_async(&mut conn).await?;
        Ok(reply)
    }
}
