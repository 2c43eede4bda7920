// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Numeric range filters
//!
//! Each filter renders as `FILTER <attribute> <min> <max>`. Bounds are
//! inclusive unless prefixed with `(`; unbounded ends render as `-inf`/`+inf`.
//!
//! ```
//! use ftsearch::search::FieldFilter;
//!
//! let filter = FieldFilter::new("price").with_min_exclusive(10.0);
//! let tokens: Vec<String> = filter.serialize().iter().map(|a| a.render()).collect();
//! assert_eq!(tokens, vec!["FILTER", "price", "(10", "+inf"]);
//! ```

use crate::command::Arg;

/// Render a bound. Exclusive bounds get a `(` prefix, including the
/// degenerate exclusive infinities, which the server treats as unbounded.
pub fn filter_value(value: f64, exclusive: bool) -> String {
    let prefix = if exclusive { "(" } else { "" };

    if value == f64::NEG_INFINITY {
        format!("{}-inf", prefix)
    } else if value == f64::INFINITY {
        format!("{}+inf", prefix)
    } else {
        format!("{}{}", prefix, value)
    }
}

/// One end of a numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterBound {
    Inclusive(f64),
    Exclusive(f64),
}

impl FilterBound {
    pub fn value(&self) -> f64 {
        match *self {
            FilterBound::Inclusive(v) | FilterBound::Exclusive(v) => v,
        }
    }

    pub fn is_exclusive(&self) -> bool {
        matches!(self, FilterBound::Exclusive(_))
    }

    pub fn render(&self) -> String {
        filter_value(self.value(), self.is_exclusive())
    }
}

/// Numeric range constraint on one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub attribute: String,
    pub min: FilterBound,
    pub max: FilterBound,
}

impl FieldFilter {
    /// Unbounded filter: `[-inf, +inf]`
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            min: FilterBound::Inclusive(f64::NEG_INFINITY),
            max: FilterBound::Inclusive(f64::INFINITY),
        }
    }

    pub fn with_min_inclusive(mut self, value: f64) -> Self {
        self.min = FilterBound::Inclusive(value);
        self
    }

    pub fn with_min_exclusive(mut self, value: f64) -> Self {
        self.min = FilterBound::Exclusive(value);
        self
    }

    pub fn with_max_inclusive(mut self, value: f64) -> Self {
        self.max = FilterBound::Inclusive(value);
        self
    }

    pub fn with_max_exclusive(mut self, value: f64) -> Self {
        self.max = FilterBound::Exclusive(value);
        self
    }

    pub fn serialize(&self) -> Vec<Arg> {
        vec![
            "FILTER".into(),
            Arg::from(&self.attribute),
            self.min.render().into(),
            self.max.render().into(),
        ]
    }
}
