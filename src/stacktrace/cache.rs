//! Per-invocation memoization of source files.
//!
//! A cache lives for exactly one extraction call. It never evicts and is
//! never shared, so it needs no locking.

use super::source::SourceReader;
use log::{debug, trace};
use std::collections::HashMap;
use std::io;

/// File contents keyed by the path the call site reported
#[derive(Debug, Default)]
pub struct FileCache {
    // `None` marks a file already found missing
    entries: HashMap<String, Option<String>>,
}

impl FileCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a file's content, reading it at most once
    ///
    /// **Public** - used by the enricher for every local frame
    ///
    /// # Returns
    /// * `Ok(Some(source))` - full file content
    /// * `Ok(None)` - the file does not exist
    ///
    /// # Errors
    /// Any read failure other than `NotFound`. Failures are not cached.
    pub fn load<R: SourceReader + ?Sized>(
        &mut self,
        reader: &R,
        path: &str,
    ) -> io::Result<Option<&str>> {
        if self.entries.contains_key(path) {
            trace!("Source cache hit: {}", path);
        } else {
            let entry = match reader.read_source(path) {
                Ok(source) => Some(source),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("Source file not found, frame keeps no context: {}", path);
                    None
                }
                Err(e) => return Err(e),
            };
            self.entries.insert(path.to_string(), entry);
        }

        Ok(self.entries.get(path).and_then(|entry| entry.as_deref()))
    }

    /// Number of distinct paths looked up
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
