// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Index creation options
//!
//! Renders `FT.CREATE`. Optional clauses only appear when set to something
//! other than their default, always in this order:
//!
//! ```text
//! FT.CREATE idx:users
//!   ON JSON
//!   PREFIX 1 users:
//!   FILTER @age>16
//!   LANGUAGE english
//!   LANGUAGE_FIELD $.lang
//!   SCORE 0.5
//!   SCORE_FIELD $.score
//!   MAXTEXTFIELDS
//!   NOOFFSETS
//!   TEMPORARY 3600
//!   NOHL
//!   NOFIELDS
//!   NOFREQS
//!   STOPWORDS 2 a the
//!   SKIPINITIALSCAN
//!   SCHEMA
//!     $.name AS name TEXT SORTABLE
//!     $.age AS age NUMERIC
//! ```

use std::fmt;

use crate::command::{push_counted, Arg, SearchCommand};

use super::attribute::SchemaAttribute;

const DEFAULT_SCORE: f64 = 1.0;

/// Which kind of key the index covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Hash,
    Json,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::Hash => write!(f, "HASH"),
            StorageMode::Json => write!(f, "JSON"),
        }
    }
}

/// Everything after the index name in an `FT.CREATE`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexOptions {
    pub on: StorageMode,
    pub prefixes: Vec<String>,
    pub filter: Option<String>,
    pub language: Option<String>,
    pub language_field: Option<String>,
    pub score: f64,
    pub score_field: Option<String>,
    pub max_text_fields: bool,
    pub no_offsets: bool,
    /// Seconds of inactivity before the server drops the index
    pub temporary: Option<u64>,
    pub no_highlight: bool,
    pub no_fields: bool,
    pub no_freqs: bool,
    /// `None` keeps the server's stop words, `Some(vec![])` disables them
    pub stop_words: Option<Vec<String>>,
    pub skip_initial_scan: bool,
    pub schema: Vec<SchemaAttribute>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            on: StorageMode::Hash,
            prefixes: Vec::new(),
            filter: None,
            language: None,
            language_field: None,
            score: DEFAULT_SCORE,
            score_field: None,
            max_text_fields: false,
            no_offsets: false,
            temporary: None,
            no_highlight: false,
            no_fields: false,
            no_freqs: false,
            stop_words: None,
            skip_initial_scan: false,
            schema: Vec::new(),
        }
    }
}

impl IndexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_hash(mut self) -> Self {
        self.on = StorageMode::Hash;
        self
    }

    pub fn on_json(mut self) -> Self {
        self.on = StorageMode::Json;
        self
    }

    pub fn with_storage_mode(mut self, on: StorageMode) -> Self {
        self.on = on;
        self
    }

    pub fn add_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Replace the key prefixes
    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Filter expression applied to every key before indexing
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_language_field(mut self, field: impl Into<String>) -> Self {
        self.language_field = Some(field.into());
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_score_field(mut self, field: impl Into<String>) -> Self {
        self.score_field = Some(field.into());
        self
    }

    pub fn with_max_text_fields(mut self) -> Self {
        self.max_text_fields = true;
        self
    }

    pub fn with_no_offsets(mut self) -> Self {
        self.no_offsets = true;
        self
    }

    pub fn with_temporary(mut self, seconds: u64) -> Self {
        self.temporary = Some(seconds);
        self
    }

    pub fn with_no_highlight(mut self) -> Self {
        self.no_highlight = true;
        self
    }

    pub fn with_no_fields(mut self) -> Self {
        self.no_fields = true;
        self
    }

    pub fn with_no_freqs(mut self) -> Self {
        self.no_freqs = true;
        self
    }

    /// Replace the stop word list
    pub fn with_stop_words(mut self, words: Vec<String>) -> Self {
        self.stop_words = Some(words);
        self
    }

    pub fn add_stop_word(mut self, word: impl Into<String>) -> Self {
        self.stop_words.get_or_insert_with(Vec::new).push(word.into());
        self
    }

    /// Index with no stop words at all (`STOPWORDS 0`)
    pub fn without_stop_words(mut self) -> Self {
        self.stop_words = Some(Vec::new());
        self
    }

    pub fn with_skip_initial_scan(mut self) -> Self {
        self.skip_initial_scan = true;
        self
    }

    pub fn add_attribute(mut self, attribute: impl Into<SchemaAttribute>) -> Self {
        self.schema.push(attribute.into());
        self
    }

    /// Replace the schema
    pub fn with_schema(mut self, schema: Vec<SchemaAttribute>) -> Self {
        self.schema = schema;
        self
    }

    /// Render the options (everything after the index name).
    pub fn serialize(&self) -> Vec<Arg> {
        let mut args = vec![Arg::from("ON"), Arg::from(self.on.to_string())];

        push_counted(&mut args, "PREFIX", &self.prefixes);

        if let Some(ref filter) = self.filter {
            args.push("FILTER".into());
            args.push(filter.into());
        }
        if let Some(ref language) = self.language {
            args.push("LANGUAGE".into());
            args.push(language.into());
        }
        if let Some(ref field) = self.language_field {
            args.push("LANGUAGE_FIELD".into());
            args.push(field.into());
        }
        // Default score stays implicit so a bare index renders `ON <mode> SCHEMA`
        if self.score != DEFAULT_SCORE {
            args.push("SCORE".into());
            args.push(self.score.into());
        }
        if let Some(ref field) = self.score_field {
            args.push("SCORE_FIELD".into());
            args.push(field.into());
        }
        if self.max_text_fields {
            args.push("MAXTEXTFIELDS".into());
        }
        if self.no_offsets {
            args.push("NOOFFSETS".into());
        }
        if let Some(seconds) = self.temporary {
            args.push("TEMPORARY".into());
            args.push(seconds.into());
        }
        // NOOFFSETS already implies no highlighting
        if self.no_highlight && !self.no_offsets {
            args.push("NOHL".into());
        }
        if self.no_fields {
            args.push("NOFIELDS".into());
        }
        if self.no_freqs {
            args.push("NOFREQS".into());
        }
        if let Some(ref words) = self.stop_words {
            args.push("STOPWORDS".into());
            args.push(words.len().into());
            args.extend(words.iter().map(Arg::from));
        }
        if self.skip_initial_scan {
            args.push("SKIPINITIALSCAN".into());
        }

        args.push("SCHEMA".into());
        for attribute in &self.schema {
            args.extend(attribute.serialize());
        }

        args
    }

    /// `FT.CREATE <index> <options...>`
    pub fn create_command(&self, index: &str) -> SearchCommand {
        let mut args = vec![Arg::from(index)];
        args.extend(self.serialize());
        SearchCommand::new("FT.CREATE", args)
    }
}
