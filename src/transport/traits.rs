// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use async_trait::async_trait;
use redis::Value;

use crate::command::SearchCommand;
use crate::error::SearchError;

#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Send one command and return the reply as-is. Server-side errors come
    /// back as `SearchError::Transport`.
    async fn execute(&self, command: &SearchCommand) -> Result<Value, SearchError>;
}
