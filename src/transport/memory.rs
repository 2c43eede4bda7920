// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use redis::{ErrorKind, RedisError, Value};

use super::traits::SearchTransport;
use crate::command::SearchCommand;
use crate::error::SearchError;

/// Scripted transport: replies are returned in the order they were pushed,
/// and every executed command is recorded.
pub struct MemoryTransport {
    replies: Mutex<VecDeque<Result<Value, String>>>,
    commands: Mutex<Vec<SearchCommand>>,
}

impl MemoryTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn push_reply(&self, reply: Value) {
        self.replies.lock().push_back(Ok(reply));
    }

    /// Queue a server error reply (e.g. "Unknown Index name")
    pub fn push_error(&self, message: impl Into<String>) {
        self.replies.lock().push_back(Err(message.into()));
    }

    /// Commands executed so far, oldest first
    #[must_use]
    pub fn commands(&self) -> Vec<SearchCommand> {
        self.commands.lock().clone()
    }

    /// Replies not yet consumed
    #[must_use]
    pub fn pending(&self) -> usize {
        self.replies.lock().len()
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchTransport for MemoryTransport {
    async fn execute(&self, command: &SearchCommand) -> Result<Value, SearchError> {
        self.commands.lock().push(command.clone());

        let next = self.replies.lock().pop_front();
        match next {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(RedisError::from((ErrorKind::ResponseError, "server error", message)).into()),
            None => Err(RedisError::from((ErrorKind::IoError, "no scripted reply")).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ping() -> SearchCommand {
        SearchCommand::new("FT._LIST", vec![])
    }

    #[tokio::test]
    async fn test_replies_in_order() {
        let transport = MemoryTransport::new();
        transport.push_reply(Value::Okay);
        transport.push_reply(Value::Int(7));
        assert_eq!(transport.pending(), 2);

        assert_eq!(transport.execute(&ping()).await.unwrap(), Value::Okay);
        assert_eq!(transport.execute(&ping()).await.unwrap(), Value::Int(7));
        assert_eq!(transport.pending(), 0);
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let transport = MemoryTransport::new();
        transport.push_error("Unknown Index name");

        let err = transport.execute(&ping()).await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
        assert!(err.to_string().contains("Unknown Index name"));
    }

    #[tokio::test]
    async fn test_empty_queue_fails() {
        let transport = MemoryTransport::default();
        assert!(transport.execute(&ping()).await.is_err());
    }

    #[tokio::test]
    async fn test_records_commands() {
        let transport = MemoryTransport::new();
        transport.push_reply(Value::Okay);
        let _ = transport.execute(&ping()).await;
        let _ = transport.execute(&ping()).await;

        let commands = transport.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].name(), "FT._LIST");
    }
}
