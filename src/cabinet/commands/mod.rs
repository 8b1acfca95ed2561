//! Business logic for each domain program.
//!
//! Every function here takes the stores it operates on plus typed inputs,
//! and returns a [`CmdOutcome`] carrying the operation's value and a list of
//! level-tagged messages for the UI to render. Nothing in this layer writes
//! to stdout, reads stdin, or touches the filesystem; persistence is the
//! caller's job.

use crate::error::{CabinetError, Result};
use crate::store::{Keyed, Record, Store};

pub mod bank;
pub mod clinic;
pub mod contacts;
pub mod library;
pub mod students;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Result of one command: the produced value plus messages for the UI.
#[derive(Debug)]
pub struct CmdOutcome<T> {
    pub value: T,
    pub messages: Vec<CmdMessage>,
}

impl<T> CmdOutcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Look up a keyed record or report which one was missing.
pub(crate) fn index_by_key<R: Record + Keyed>(
    store: &Store<R>,
    key: i32,
    what: &str,
) -> Result<usize> {
    store
        .find_by_key(key)
        .ok_or_else(|| CabinetError::NotFound(format!("{} {} not found", what, key)))
}

/// Blank-keeps-current patch semantics shared by every edit operation.
pub(crate) fn patch_text(field: &mut String, replacement: &Option<String>) {
    if let Some(value) = replacement {
        if !value.is_empty() {
            *field = value.clone();
        }
    }
}
