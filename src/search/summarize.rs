// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Summarization and highlighting of matched fields.

use crate::command::{push_counted, Arg};

const DEFAULT_SEPARATOR: &str = "...";
const DEFAULT_LEN: i32 = 20;
const DEFAULT_FRAGS: i32 = 3;

/// `SUMMARIZE [FIELDS n f..] FRAGS n LEN n SEPARATOR s`
///
/// [`Summarize::new`] and [`Summarize::default`] carry the server defaults;
/// [`Summarize::empty`] starts from zero values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summarize {
    /// Fields to summarize; empty means all returned fields
    pub fields: Vec<String>,
    pub frags: i32,
    /// Fragment length in words
    pub len: i32,
    pub separator: String,
}

impl Default for Summarize {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            frags: DEFAULT_FRAGS,
            len: DEFAULT_LEN,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Summarize {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero fragments, zero length, no separator
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            frags: 0,
            len: 0,
            separator: String::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn with_frags(mut self, frags: i32) -> Self {
        self.frags = frags;
        self
    }

    pub fn with_len(mut self, len: i32) -> Self {
        self.len = len;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn serialize(&self) -> Vec<Arg> {
        let mut args = vec![Arg::from("SUMMARIZE")];
        push_counted(&mut args, "FIELDS", &self.fields);
        args.push("FRAGS".into());
        args.push(self.frags.into());
        args.push("LEN".into());
        args.push(self.len.into());
        args.push("SEPARATOR".into());
        args.push(Arg::from(&self.separator));
        args
    }
}

/// `HIGHLIGHT [FIELDS n f..] [TAGS open close]`
///
/// Open and close tags should both be set or both be empty. This is not
/// checked here; the server rejects a half-set pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlight {
    /// Fields to highlight; empty means all returned fields
    pub fields: Vec<String>,
    pub open_tag: String,
    pub close_tag: String,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn with_tags(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_tag = open.into();
        self.close_tag = close.into();
        self
    }

    pub fn serialize(&self) -> Vec<Arg> {
        let mut args = vec![Arg::from("HIGHLIGHT")];
        push_counted(&mut args, "FIELDS", &self.fields);
        if !self.open_tag.is_empty() || !self.close_tag.is_empty() {
            args.push("TAGS".into());
            args.push(Arg::from(&self.open_tag));
            args.push(Arg::from(&self.close_tag));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: Vec<Arg>) -> String {
        args.iter().map(Arg::render).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_summarize_defaults() {
        assert_eq!(render(Summarize::default().serialize()), "SUMMARIZE FRAGS 3 LEN 20 SEPARATOR ...");
    }

    #[test]
    fn test_summarize_new_matches_default() {
        assert_eq!(Summarize::new(), Summarize::default());
        assert_ne!(Summarize::empty(), Summarize::default());
    }

    #[test]
    fn test_summarize_zero_value() {
        let tokens = Summarize::empty().serialize();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[6], Arg::from(""));
    }

    #[test]
    fn test_summarize_with_fields() {
        let summarize = Summarize::default()
            .add_field("title")
            .add_field("body")
            .with_frags(1)
            .with_len(5)
            .with_separator("|");
        assert_eq!(
            render(summarize.serialize()),
            "SUMMARIZE FIELDS 2 title body FRAGS 1 LEN 5 SEPARATOR |"
        );
    }

    #[test]
    fn test_highlight_bare() {
        assert_eq!(render(Highlight::new().serialize()), "HIGHLIGHT");
    }

    #[test]
    fn test_highlight_fields_and_tags() {
        let highlight = Highlight::new()
            .with_fields(vec!["body".into()])
            .with_tags("<b>", "</b>");
        assert_eq!(render(highlight.serialize()), "HIGHLIGHT FIELDS 1 body TAGS <b> </b>");
    }

    #[test]
    fn test_highlight_half_set_tags_pass_through() {
        let highlight = Highlight::new().with_tags("<em>", "");
        let tokens = highlight.serialize();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3], Arg::from(""));
    }
}
