// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Search client
//!
//! Renders builders, hands them to the transport, and reshapes the replies.
//!
//! # Architecture
//!
//! ```text
//! create_index(name, IndexOptions) ─→ FT.CREATE    ─┐
//! drop_index(DropIndex)            ─→ FT.DROPINDEX ├─→ transport.execute()
//! search(QueryOptions)             ─→ FT.SEARCH    ─┘          │
//!                                                              ▼
//!                                  QueryResults::decode(reply, query)
//! ```

use std::time::Instant;

use redis::Value;
use tracing::{debug, info, warn};

use crate::command::SearchCommand;
use crate::config::ClientConfig;
use crate::error::SearchError;
use crate::metrics;
use crate::search::{DropIndex, IndexOptions, QueryOptions, QueryResults};
use crate::transport::{RedisTransport, SearchTransport};

pub struct SearchClient<T = RedisTransport> {
    transport: T,
}

impl SearchClient<RedisTransport> {
    /// Connect to redis and build a client on top of the connection.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use ftsearch::{ClientConfig, SearchClient};
    /// # use ftsearch::search::{IndexOptions, TextAttribute};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SearchClient::connect(&ClientConfig::default()).await?;
    ///
    /// let options = IndexOptions::new()
    ///     .on_json()
    ///     .add_attribute(TextAttribute::new("$.name").with_alias("name"));
    /// client.create_index("idx:users", &options).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &ClientConfig) -> Result<Self, SearchError> {
        Ok(Self::new(RedisTransport::connect(config).await?))
    }
}

impl<T: SearchTransport> SearchClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an index with `FT.CREATE`.
    pub async fn create_index(&self, index: &str, options: &IndexOptions) -> Result<(), SearchError> {
        let command = options.create_command(index);
        let result = self.execute(&command).await.and_then(|reply| expect_ok(&command, &reply));
        record_outcome(&command, &result);
        result?;

        info!(index = %index, attributes = options.schema.len(), "Search index created");
        Ok(())
    }

    /// Drop an index with `FT.DROPINDEX`.
    pub async fn drop_index(&self, drop: &DropIndex) -> Result<(), SearchError> {
        let command = drop.command();
        let result = self.execute(&command).await.and_then(|reply| expect_ok(&command, &reply));
        record_outcome(&command, &result);
        result?;

        info!(index = %drop.index, delete_documents = drop.delete_documents, "Search index dropped");
        Ok(())
    }

    /// Drop `index` (keeping documents) and create it again from `options`.
    ///
    /// A failed drop is ignored, so this also works for an index that does not
    /// exist yet.
    pub async fn reindex(&self, index: &str, options: &IndexOptions) -> Result<(), SearchError> {
        if let Err(e) = self.drop_index(&DropIndex::new(index)).await {
            warn!(index = %index, error = %e, "Drop before reindex failed, continuing");
        }
        self.create_index(index, options).await
    }

    /// Run `FT.SEARCH` and decode the reply using the query's flags.
    ///
    /// The command counts as a success only once the reply has decoded.
    pub async fn search(&self, query: &QueryOptions) -> Result<QueryResults, SearchError> {
        let command = query.search_command();
        let result = self
            .execute(&command)
            .await
            .and_then(|reply| QueryResults::decode(&reply, query).map_err(SearchError::from));
        record_outcome(&command, &result);

        match result {
            Ok(results) => {
                metrics::record_search_results(results.len());
                debug!(index = %query.index, total = results.total, returned = results.len(), "Search decoded");
                Ok(results)
            }
            Err(SearchError::Decode(e)) => {
                warn!(index = %query.index, stride = query.stride(), error = %e, "Search reply did not match query");
                Err(e.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Send a command and return the raw reply, unmodified.
    pub async fn execute_raw(&self, command: &SearchCommand) -> Result<Value, SearchError> {
        let result = self.execute(command).await;
        record_outcome(command, &result);
        result
    }

    /// Round trip through the transport. Records latency only; each public
    /// operation records its own outcome once it knows it.
    async fn execute(&self, command: &SearchCommand) -> Result<Value, SearchError> {
        let start = Instant::now();
        debug!(command = %command, "Executing");

        let result = self.transport.execute(command).await;
        match &result {
            Ok(_) => metrics::record_command_latency(command.name(), start.elapsed()),
            Err(e) => debug!(command = command.name(), error = %e, "Command failed"),
        }
        result
    }
}

fn record_outcome<R>(command: &SearchCommand, result: &Result<R, SearchError>) {
    let status = match result {
        Ok(_) => "success",
        Err(SearchError::Transport(_)) => "error",
        Err(SearchError::UnexpectedReply { .. }) => "unexpected_reply",
        Err(SearchError::Decode(_)) => "decode_error",
    };
    metrics::record_command(command.name(), status);
}

fn expect_ok(command: &SearchCommand, reply: &Value) -> Result<(), SearchError> {
    match reply {
        Value::Okay => Ok(()),
        Value::SimpleString(s) if s == "OK" => Ok(()),
        other => Err(SearchError::UnexpectedReply {
            command: command.name(),
            reply: format!("{:?}", other),
        }),
    }
}
