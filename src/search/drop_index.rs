// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use crate::command::{Arg, SearchCommand};

/// `FT.DROPINDEX <index> [DD]`
///
/// Without `DD` the indexed documents are left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndex {
    pub index: String,
    pub delete_documents: bool,
}

impl DropIndex {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            delete_documents: false,
        }
    }

    /// Also delete the documents covered by the index
    pub fn with_delete_documents(mut self) -> Self {
        self.delete_documents = true;
        self
    }

    pub fn serialize(&self) -> Vec<Arg> {
        let mut args = vec![Arg::from(&self.index)];
        if self.delete_documents {
            args.push("DD".into());
        }
        args
    }

    pub fn command(&self) -> SearchCommand {
        SearchCommand::new("FT.DROPINDEX", self.serialize())
    }
}
