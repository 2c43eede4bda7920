// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use crate::command::Arg;

pub(crate) const DEFAULT_OFFSET: i64 = 0;
pub(crate) const DEFAULT_NUM: i64 = 10;

/// Result window: `LIMIT offset num`.
///
/// The server default (0, 10) renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimit {
    pub offset: i64,
    pub num: i64,
}

impl QueryLimit {
    pub fn new(offset: i64, num: i64) -> Self {
        Self { offset, num }
    }

    pub fn is_default(&self) -> bool {
        self.offset == DEFAULT_OFFSET && self.num == DEFAULT_NUM
    }

    pub fn serialize(&self) -> Vec<Arg> {
        if self.is_default() {
            Vec::new()
        } else {
            vec!["LIMIT".into(), self.offset.into(), self.num.into()]
        }
    }
}

impl Default for QueryLimit {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET, DEFAULT_NUM)
    }
}
