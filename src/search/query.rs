// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Search query options
//!
//! Renders `FT.SEARCH`. Clauses always come out in this order, each only when
//! set:
//!
//! ```text
//! FT.SEARCH <index> <query>
//!   NOCONTENT VERBATIM NOSTOPWORDS WITHSCORES
//!   FILTER attr min max ...
//!   RETURN n f1..fn
//!   SUMMARIZE ...
//!   HIGHLIGHT ...
//!   SLOP n
//!   INORDER
//!   LANGUAGE lang
//!   INKEYS n k1..kn
//!   INFIELDS n f1..fn
//!   EXPLAINSCORE
//!   LIMIT offset num
//! ```
//!
//! # Example
//!
//! ```rust
//! use ftsearch::search::{FieldFilter, QueryOptions};
//!
//! let query = QueryOptions::new("idx:docs", "hello world")
//!     .with_scores()
//!     .add_filter(FieldFilter::new("year").with_min_inclusive(2020.0))
//!     .with_limit(0, 50);
//!
//! assert_eq!(
//!     query.search_command().to_string(),
//!     "FT.SEARCH idx:docs hello world WITHSCORES FILTER year 2020 +inf LIMIT 0 50"
//! );
//! assert_eq!(query.stride(), 3);
//! ```

use crate::command::{push_counted, Arg, SearchCommand};

use super::filter::FieldFilter;
use super::limit::QueryLimit;
use super::summarize::{Highlight, Summarize};

/// A complete `FT.SEARCH` request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOptions {
    pub index: String,
    pub query_string: String,
    pub no_content: bool,
    pub verbatim: bool,
    pub no_stop_words: bool,
    pub with_scores: bool,
    pub in_order: bool,
    pub explain_score: bool,
    pub limit: QueryLimit,
    pub return_fields: Vec<String>,
    pub filters: Vec<FieldFilter>,
    pub in_keys: Vec<String>,
    pub in_fields: Vec<String>,
    pub language: Option<String>,
    /// Maximum number of intervening terms; `None` leaves it to the server
    pub slop: Option<i32>,
    pub summarize: Option<Summarize>,
    pub highlight: Option<Highlight>,
}

impl QueryOptions {
    pub fn new(index: impl Into<String>, query_string: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            query_string: query_string.into(),
            ..Default::default()
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = query_string.into();
        self
    }

    /// Return keys only, no document content
    pub fn no_content(mut self) -> Self {
        self.no_content = true;
        self
    }

    /// Don't stem query terms
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    pub fn no_stop_words(mut self) -> Self {
        self.no_stop_words = true;
        self
    }

    pub fn with_scores(mut self) -> Self {
        self.with_scores = true;
        self
    }

    /// Require query terms to appear in order (usually combined with slop)
    pub fn in_order(mut self) -> Self {
        self.in_order = true;
        self
    }

    pub fn explain_score(mut self) -> Self {
        self.explain_score = true;
        self
    }

    pub fn with_limit(mut self, offset: i64, num: i64) -> Self {
        self.limit = QueryLimit::new(offset, num);
        self
    }

    /// Replace the returned fields
    pub fn with_return_fields(mut self, fields: Vec<String>) -> Self {
        self.return_fields = fields;
        self
    }

    pub fn add_return_field(mut self, field: impl Into<String>) -> Self {
        self.return_fields.push(field.into());
        self
    }

    /// Replace the filters
    pub fn with_filters(mut self, filters: Vec<FieldFilter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn add_filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Restrict the search to these keys
    pub fn with_in_keys(mut self, keys: Vec<String>) -> Self {
        self.in_keys = keys;
        self
    }

    pub fn add_in_key(mut self, key: impl Into<String>) -> Self {
        self.in_keys.push(key.into());
        self
    }

    /// Restrict the search to these fields
    pub fn with_in_fields(mut self, fields: Vec<String>) -> Self {
        self.in_fields = fields;
        self
    }

    pub fn add_in_field(mut self, field: impl Into<String>) -> Self {
        self.in_fields.push(field.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_slop(mut self, slop: i32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn with_summarize(mut self, summarize: Summarize) -> Self {
        self.summarize = Some(summarize);
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Render the clauses that follow the query string.
    pub fn serialize(&self) -> Vec<Arg> {
        let mut args = Vec::new();

        if self.no_content {
            args.push("NOCONTENT".into());
        }
        if self.verbatim {
            args.push("VERBATIM".into());
        }
        if self.no_stop_words {
            args.push("NOSTOPWORDS".into());
        }
        if self.with_scores {
            args.push("WITHSCORES".into());
        }

        for filter in &self.filters {
            args.extend(filter.serialize());
        }

        push_counted(&mut args, "RETURN", &self.return_fields);

        if let Some(ref summarize) = self.summarize {
            args.extend(summarize.serialize());
        }
        if let Some(ref highlight) = self.highlight {
            args.extend(highlight.serialize());
        }

        if let Some(slop) = self.slop {
            args.push("SLOP".into());
            args.push(slop.into());
        }
        if self.in_order {
            args.push("INORDER".into());
        }
        if let Some(ref language) = self.language {
            args.push("LANGUAGE".into());
            args.push(language.into());
        }

        push_counted(&mut args, "INKEYS", &self.in_keys);
        push_counted(&mut args, "INFIELDS", &self.in_fields);

        if self.explain_score {
            args.push("EXPLAINSCORE".into());
        }

        args.extend(self.limit.serialize());

        args
    }

    /// `FT.SEARCH <index> <query> <clauses...>`
    pub fn search_command(&self) -> SearchCommand {
        let mut args = vec![Arg::from(&self.index), Arg::from(&self.query_string)];
        args.extend(self.serialize());
        SearchCommand::new("FT.SEARCH", args)
    }

    /// Reply elements per matched document: key, then score, explanation
    /// and field list depending on the flags.
    pub fn stride(&self) -> usize {
        let mut stride = 2;
        if self.with_scores {
            stride += 1;
        }
        if self.explain_score {
            stride += 1;
        }
        if self.no_content {
            stride -= 1;
        }
        stride
    }
}
