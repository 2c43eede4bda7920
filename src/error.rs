// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use thiserror::Error;

/// Errors surfaced by [`crate::SearchClient`].
///
/// Nothing is validated before a command is sent, so server-side rejections
/// (unknown index, bad argument combinations) arrive as `Transport`.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(#[from] redis::RedisError),
    #[error("Unexpected reply to {command}: {reply}")]
    UnexpectedReply { command: &'static str, reply: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The FT.SEARCH reply did not have the shape the query flags imply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Search reply is not an array")]
    NotAnArray,
    #[error("Search reply is empty")]
    Empty,
    #[error("Search reply count is not an integer: {0}")]
    InvalidCount(String),
    #[error("Search reply has {elements} result elements, not a multiple of stride {stride}")]
    StrideMismatch { elements: usize, stride: usize },
    #[error("Result {index}: key is not a string")]
    InvalidKey { index: usize },
    #[error("Result '{key}': score is not a number")]
    InvalidScore { key: String },
    #[error("Result '{key}': malformed score explanation")]
    InvalidExplanation { key: String },
    #[error("Result '{key}': field list is malformed")]
    InvalidFields { key: String },
}
