//! Parser for V8-style `Error.stack` text.
//!
//! A captured stack looks like:
//!
//! ```text
//! TypeError: boom
//!     at Object.handler (/srv/app/routes.js:42:13)
//!     at /srv/app/server.js:10:5
//!     at Array.forEach (native)
//!     at process.processTicksAndRejections (node:internal/process/task_queues:95:5)
//! ```
//!
//! The first line is the error header and is never a frame.

use super::callsite::{CallSite, CallSiteSource};
use crate::utils::config::{ANONYMOUS_FUNCTION_NAMES, NATIVE_FILE_NAME};
use crate::utils::error::ExtractionError;
use log::{debug, trace};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// `at [function (]file:line[:column][)]` or `at function (location)`
static FRAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*at (?:(.+)\s+\()?(?:(.+?):(\d+)(?::(\d+))?|([^)]+))\)?")
        .expect("frame line pattern is valid")
});

/// Separator inserted by long-stack-trace helpers between async segments
static SEPARATOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-{4,}$").expect("separator pattern is valid"));

/// A captured `Error.stack` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackText<'a>(pub &'a str);

impl CallSiteSource for StackText<'_> {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        parse_stack_text(self.0)
    }
}

/// A JavaScript error value as shipped across a process boundary
///
/// Only `stack` matters for extraction; `name` and `message` ride along
/// for the caller's event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaisedError {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub stack: Option<String>,
}

impl RaisedError {
    /// Decode an error object from its JSON form
    ///
    /// # Errors
    /// * `ExtractionError::Malformed` - not a JSON object of the expected shape
    pub fn from_json(raw: &str) -> Result<Self, ExtractionError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl CallSiteSource for RaisedError {
    fn call_sites(&self) -> Result<Vec<CallSite>, ExtractionError> {
        match self.stack.as_deref() {
            Some(stack) => parse_stack_text(stack),
            None => {
                debug!("Error object carries no stack, no call sites to extract");
                Ok(Vec::new())
            }
        }
    }
}

/// Parse V8 stack text into call sites, newest first
///
/// **Public** - main entry point for stack text
///
/// # Arguments
/// * `stack` - Full `Error.stack` value, header line included
///
/// # Returns
/// One call site per recognized frame line. Unrecognized lines (wrapped
/// multi-line messages, blank lines) are skipped.
///
/// # Errors
/// * `ExtractionError::InvalidNumber` - a line or column does not fit in `u32`
pub fn parse_stack_text(stack: &str) -> Result<Vec<CallSite>, ExtractionError> {
    let mut call_sites = Vec::new();

    for line in stack.lines().skip(1) {
        if SEPARATOR_LINE.is_match(line) {
            call_sites.push(CallSite {
                file_name: Some(line.to_string()),
                ..CallSite::default()
            });
            continue;
        }

        if let Some(site) = parse_frame_line(line)? {
            call_sites.push(site);
        } else {
            trace!("Skipping non-frame stack line: {}", line);
        }
    }

    debug!("Parsed {} call sites from stack text", call_sites.len());

    Ok(call_sites)
}

/// Parse a single `at ...` line
///
/// **Private** - internal helper for parse_stack_text
fn parse_frame_line(line: &str) -> Result<Option<CallSite>, ExtractionError> {
    let Some(caps) = FRAME_LINE.captures(line) else {
        return Ok(None);
    };

    let location = caps.get(5).map(|m| m.as_str());

    Ok(Some(CallSite {
        function_name: caps.get(1).and_then(|m| function_name(m.as_str())),
        file_name: caps.get(2).map(|m| m.as_str().to_string()),
        line_number: parse_number(caps.get(3).map(|m| m.as_str()), "line", line)?,
        column_number: parse_number(caps.get(4).map(|m| m.as_str()), "column", line)?,
        native: location == Some(NATIVE_FILE_NAME),
    }))
}

/// Normalize the callee text in front of the location
///
/// `Object.Module._compile` keeps only `Module._compile`, and callees
/// whose method part is anonymous have no usable name at all.
fn function_name(callee: &str) -> Option<String> {
    let mut name = callee;

    if let Some(mut method_start) = callee.rfind('.') {
        // `Foo..bar` style names keep the doubled dot on the method side
        if method_start > 0 && callee.as_bytes()[method_start - 1] == b'.' {
            method_start -= 1;
        }

        if method_start > 0 {
            let object = &callee[..method_start];
            let method = &callee[method_start + 1..];

            if ANONYMOUS_FUNCTION_NAMES.contains(&method) {
                return None;
            }

            if let Some(object_end) = object.find(".Module").filter(|&end| end > 0) {
                name = &callee[object_end + 1..];
            }
        }
    }

    Some(name.to_string())
}

fn parse_number(
    digits: Option<&str>,
    field: &'static str,
    line: &str,
) -> Result<Option<u32>, ExtractionError> {
    digits
        .map(|d| {
            d.parse::<u32>().map_err(|source| ExtractionError::InvalidNumber {
                field,
                line: line.trim().to_string(),
                source,
            })
        })
        .transpose()
}
