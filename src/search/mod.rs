// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Command builders for the search module
//!
//! Each builder is an owned value populated by chaining and rendered by
//! `serialize()` into the positional arguments its command expects.
//!
//! # Architecture
//!
//! ```text
//! IndexOptions ──→ FT.CREATE   ─┐
//! DropIndex    ──→ FT.DROPINDEX ├─→ SearchTransport ─→ raw reply
//! QueryOptions ──→ FT.SEARCH   ─┘                          │
//!      │                                                   │
//!      └──────────── stride ──→ QueryResults::decode ←─────┘
//! ```
//!
//! # Index creation
//!
//! ```rust
//! use ftsearch::search::{IndexOptions, NumericAttribute, TagAttribute, TextAttribute};
//!
//! let options = IndexOptions::new()
//!     .on_json()
//!     .add_prefix("users:")
//!     .add_attribute(TextAttribute::new("$.name").with_alias("name").sortable())
//!     .add_attribute(NumericAttribute::new("$.age").with_alias("age"))
//!     .add_attribute(TagAttribute::new("$.roles").with_alias("roles"));
//!
//! assert_eq!(
//!     options.create_command("idx:users").to_string(),
//!     "FT.CREATE idx:users ON JSON PREFIX 1 users: SCHEMA \
//!      $.name AS name TEXT SORTABLE $.age AS age NUMERIC $.roles AS roles TAG"
//! );
//! ```

mod attribute;
mod drop_index;
mod filter;
mod index;
mod limit;
mod query;
mod results;
mod summarize;

pub use attribute::{AttributeType, NumericAttribute, SchemaAttribute, TagAttribute, TextAttribute};
pub use drop_index::DropIndex;
pub use filter::{filter_value, FieldFilter, FilterBound};
pub use index::{IndexOptions, StorageMode};
pub use limit::QueryLimit;
pub use query::QueryOptions;
pub use results::{QueryResult, QueryResults, ScoreExplanation};
pub use summarize::{Highlight, Summarize};
