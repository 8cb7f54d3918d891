//! Output payload definitions for stack frames.
//!
//! This module defines the structure consumed by the event builder.
//! The consumer rejects `null` or `0` for `lineno`, so every optional
//! field is left out of the JSON entirely when it has no value. The two
//! context lists are present, possibly empty, exactly when the source
//! file was read.

use crate::parser::CallSite;
use serde::{Deserialize, Serialize};

/// Frames of one error, ordered oldest call first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stacktrace {
    /// The throw site is the last entry
    pub frames: Vec<Frame>,
}

impl Stacktrace {
    /// Wrap an ordered frame list
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// The frame where the error was thrown
    pub fn throw_site(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

/// One enriched call site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Enclosing function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Source file, as reported by the call site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// 1-based line, never zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,

    /// Lines right before `context_line`, oldest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_context: Option<Vec<String>>,

    /// The source line at `lineno`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_line: Option<String>,

    /// Lines right after `context_line`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_context: Option<Vec<String>>,
}

impl Frame {
    /// Build a context-less frame from a call site
    ///
    /// A zero line number is dropped rather than carried through.
    pub fn from_call_site(call_site: &CallSite) -> Self {
        Self {
            function: call_site.function_name.clone(),
            filename: call_site.file_name.clone(),
            lineno: call_site.line_number.filter(|&line| line > 0),
            ..Self::default()
        }
    }
}
