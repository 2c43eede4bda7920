// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Transport backends.
//!
//! The builders never talk to the network. A [`SearchTransport`] takes a
//! rendered [`crate::SearchCommand`], sends it, and returns the raw reply:
//!
//! - [`RedisTransport`]: redis-rs `ConnectionManager` (reconnects, timeouts)
//! - [`MemoryTransport`]: scripted replies, records every command

pub mod memory;
pub mod redis;
pub mod traits;

pub use self::memory::MemoryTransport;
pub use self::redis::RedisTransport;
pub use self::traits::SearchTransport;
