// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Schema attributes
//!
//! One declared field of an index. Every variant renders as
//! `<name> [AS alias] <TYPE> [options...]`:
//!
//! ```text
//! $.title AS title TEXT WEIGHT 2 SORTABLE
//! $.tags AS tags TAG SEPARATOR , CASESENSITIVE
//! price NUMERIC SORTABLE
//! ```

use std::fmt;

use crate::command::Arg;

/// A schema field declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaAttribute {
    Text(TextAttribute),
    Tag(TagAttribute),
    Numeric(NumericAttribute),
}

impl SchemaAttribute {
    /// Field identifier (hash field name or JSON path)
    pub fn name(&self) -> &str {
        match self {
            SchemaAttribute::Text(a) => &a.name,
            SchemaAttribute::Tag(a) => &a.name,
            SchemaAttribute::Numeric(a) => &a.name,
        }
    }

    pub fn attribute_type(&self) -> AttributeType {
        match self {
            SchemaAttribute::Text(_) => AttributeType::Text,
            SchemaAttribute::Tag(_) => AttributeType::Tag,
            SchemaAttribute::Numeric(_) => AttributeType::Numeric,
        }
    }

    pub(crate) fn serialize(&self) -> Vec<Arg> {
        let (name, alias) = match self {
            SchemaAttribute::Text(a) => (&a.name, &a.alias),
            SchemaAttribute::Tag(a) => (&a.name, &a.alias),
            SchemaAttribute::Numeric(a) => (&a.name, &a.alias),
        };

        let mut args = vec![Arg::from(name)];
        if let Some(alias) = alias {
            args.push("AS".into());
            args.push(alias.into());
        }
        args.push(self.attribute_type().to_string().into());

        match self {
            SchemaAttribute::Text(a) => {
                if a.no_stem {
                    args.push("NOSTEM".into());
                }
                if a.weight != 0.0 {
                    args.push("WEIGHT".into());
                    args.push(a.weight.into());
                }
                if let Some(ref phonetic) = a.phonetic {
                    args.push("PHONETIC".into());
                    args.push(phonetic.into());
                }
                push_sortable(&mut args, a.sortable, a.unnormalized);
                push_no_index(&mut args, a.no_index);
            }
            SchemaAttribute::Tag(a) => {
                if let Some(separator) = a.separator {
                    args.push("SEPARATOR".into());
                    args.push(separator.to_string().into());
                }
                if a.case_sensitive {
                    args.push("CASESENSITIVE".into());
                }
                push_sortable(&mut args, a.sortable, a.unnormalized);
                push_no_index(&mut args, a.no_index);
            }
            SchemaAttribute::Numeric(a) => {
                push_sortable(&mut args, a.sortable, false);
                push_no_index(&mut args, a.no_index);
            }
        }

        args
    }
}

fn push_sortable(args: &mut Vec<Arg>, sortable: bool, unnormalized: bool) {
    if sortable {
        args.push("SORTABLE".into());
        if unnormalized {
            args.push("UNF".into());
        }
    }
}

fn push_no_index(args: &mut Vec<Arg>, no_index: bool) {
    if no_index {
        args.push("NOINDEX".into());
    }
}

impl From<TextAttribute> for SchemaAttribute {
    fn from(a: TextAttribute) -> Self {
        SchemaAttribute::Text(a)
    }
}

impl From<TagAttribute> for SchemaAttribute {
    fn from(a: TagAttribute) -> Self {
        SchemaAttribute::Tag(a)
    }
}

impl From<NumericAttribute> for SchemaAttribute {
    fn from(a: NumericAttribute) -> Self {
        SchemaAttribute::Numeric(a)
    }
}

/// Attribute types supported by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// Full-text searchable field
    Text,
    /// Tag field (exact match, supports OR)
    Tag,
    /// Numeric field (supports range filters)
    Numeric,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Text => write!(f, "TEXT"),
            AttributeType::Tag => write!(f, "TAG"),
            AttributeType::Numeric => write!(f, "NUMERIC"),
        }
    }
}

/// Full-text field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttribute {
    pub name: String,
    pub alias: Option<String>,
    pub sortable: bool,
    /// Keep the original value for sorting (`UNF`); only meaningful with `sortable`
    pub unnormalized: bool,
    pub no_stem: bool,
    pub no_index: bool,
    /// Phonetic matcher, e.g. `dm:en`
    pub phonetic: Option<String>,
    /// Importance of this field when ranking; 0 leaves the server default (1)
    pub weight: f64,
}

impl TextAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn unnormalized(mut self) -> Self {
        self.unnormalized = true;
        self
    }

    pub fn no_stem(mut self) -> Self {
        self.no_stem = true;
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }

    pub fn with_phonetic(mut self, matcher: impl Into<String>) -> Self {
        self.phonetic = Some(matcher.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Tag field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagAttribute {
    pub name: String,
    pub alias: Option<String>,
    pub sortable: bool,
    pub unnormalized: bool,
    /// Separator for multi-value tags (server default is `,`)
    pub separator: Option<char>,
    pub case_sensitive: bool,
    pub no_index: bool,
}

impl TagAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn unnormalized(mut self) -> Self {
        self.unnormalized = true;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

/// Numeric field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericAttribute {
    pub name: String,
    pub alias: Option<String>,
    pub sortable: bool,
    pub no_index: bool,
}

impl NumericAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}
