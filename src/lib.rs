// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! # ftsearch
//!
//! Typed builders for the RediSearch `FT.*` commands, executed over redis-rs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Builders                            │
//! │  • IndexOptions + SchemaAttribute  → FT.CREATE              │
//! │  • DropIndex                       → FT.DROPINDEX           │
//! │  • QueryOptions + filters/limit/summarize/highlight         │
//! │                                    → FT.SEARCH              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                     (SearchCommand: name + Args)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SearchTransport                          │
//! │  • RedisTransport: redis-rs ConnectionManager               │
//! │  • MemoryTransport: scripted replies for tests              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                         (raw reply)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   QueryResults::decode                      │
//! │  • Stride derived from the same QueryOptions flags          │
//! │  • Length and type checked before indexing                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ftsearch::{ClientConfig, SearchClient};
//! use ftsearch::search::{IndexOptions, QueryOptions, TextAttribute};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SearchClient::connect(&ClientConfig::default()).await?;
//!
//!     let options = IndexOptions::new()
//!         .on_json()
//!         .add_prefix("ticket:")
//!         .add_attribute(TextAttribute::new("$.subject").with_alias("subject"));
//!     client.create_index("idx:tickets", &options).await?;
//!
//!     let results = client
//!         .search(&QueryOptions::new("idx:tickets", "@subject:refund").with_scores())
//!         .await?;
//!     for result in results.iter() {
//!         println!("{} scored {:?}", result.key, result.score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`search`]: Option builders, serialization and reply decoding
//! - [`transport`]: Transport seam and its redis / in-memory backends
//! - [`client`]: [`SearchClient`] tying builders to a transport
//! - [`metrics`]: Command counters and latencies

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod metrics;
pub mod search;
pub mod transport;

pub use client::SearchClient;
pub use command::{Arg, SearchCommand};
pub use config::ClientConfig;
pub use error::{DecodeError, SearchError};
