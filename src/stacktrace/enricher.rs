//! Turn raw call sites into frames with source context.
//!
//! Call sites arrive newest first. They are walked from the last index
//! down to index 0, so frames come out oldest first without a separate
//! reverse pass. Each call site is fully resolved, file read included,
//! before the next one starts; the file cache and output list are
//! built up in place.

use super::cache::FileCache;
use super::schema::{Frame, Stacktrace};
use super::source::{FsSourceReader, SourceReader};
use crate::parser::{CallSite, CallSiteSource};
use crate::utils::config::{LINES_OF_CONTEXT, LOCAL_PATH_PREFIXES};
use crate::utils::error::StacktraceError;
use log::{debug, trace};
use std::path::PathBuf;

/// Source lines around one failing line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceContext {
    pub pre_context: Vec<String>,
    pub context_line: Option<String>,
    pub post_context: Vec<String>,
}

/// Resolves call sites into frames
///
/// **Public** - main entry point for enrichment
///
/// # Example
/// ```ignore
/// let enricher = FrameEnricher::new().with_lines_of_context(3);
/// let stacktrace = enricher.extract_frames(&StackText(&stack))?;
/// ```
#[derive(Debug, Clone)]
pub struct FrameEnricher<R = FsSourceReader> {
    reader: R,
    lines_of_context: usize,
}

impl FrameEnricher<FsSourceReader> {
    /// Enricher reading from the filesystem with the default window
    pub fn new() -> Self {
        Self::with_reader(FsSourceReader)
    }
}

impl Default for FrameEnricher<FsSourceReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SourceReader> FrameEnricher<R> {
    /// Enricher reading sources through `reader`
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            lines_of_context: LINES_OF_CONTEXT,
        }
    }

    /// Set the number of lines kept on each side of the failing line
    pub fn with_lines_of_context(mut self, lines: usize) -> Self {
        self.lines_of_context = lines;
        self
    }

    pub fn lines_of_context(&self) -> usize {
        self.lines_of_context
    }

    /// Extract frames from an error and wrap them as a payload
    ///
    /// # Errors
    /// * `StacktraceError::Extraction` - the error has no usable call sites
    /// * `StacktraceError::FileRead` - a source file exists but cannot be read
    pub fn extract_frames<S: CallSiteSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Stacktrace, StacktraceError> {
        self.parse_stack(source).map(Stacktrace::new)
    }

    /// Extract frames from an error, without the payload envelope
    ///
    /// # Errors
    /// Same as [`FrameEnricher::extract_frames`].
    pub fn parse_stack<S: CallSiteSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<Frame>, StacktraceError> {
        let call_sites = source.call_sites()?;
        self.enrich(&call_sites)
    }

    /// Resolve call sites (newest first) into frames (oldest first)
    ///
    /// # Algorithm
    /// 1. Start with an empty frame list and an empty file cache
    /// 2. Walk call sites from the oldest down to the throw site
    /// 3. Copy function, file, and line; drop a zero line
    /// 4. For local files, read the source; when it exists, attach the
    ///    context window (empty lists if the line is unknown)
    ///
    /// # Errors
    /// * `StacktraceError::FileRead` - any read failure except a missing file.
    ///   Nothing that was built so far is returned.
    pub fn enrich(&self, call_sites: &[CallSite]) -> Result<Vec<Frame>, StacktraceError> {
        let mut frames = Vec::with_capacity(call_sites.len());
        let mut cache = FileCache::new();

        for call_site in call_sites.iter().rev() {
            let mut frame = Frame::from_call_site(call_site);
            self.attach_context(&mut frame, &mut cache)?;
            frames.push(frame);
        }

        debug!(
            "Resolved {} frames, {} distinct source files looked up",
            frames.len(),
            cache.len()
        );

        Ok(frames)
    }

    /// Fill in the context fields of a frame whose file is local
    ///
    /// **Private** - internal helper for enrich
    fn attach_context(&self, frame: &mut Frame, cache: &mut FileCache) -> Result<(), StacktraceError> {
        let Some(path) = frame.filename.as_deref().filter(|name| is_local_path(name)) else {
            return Ok(());
        };

        let source = cache
            .load(&self.reader, path)
            .map_err(|source| StacktraceError::FileRead {
                path: PathBuf::from(path),
                source,
            })?;

        let Some(source) = source else {
            return Ok(());
        };

        let context = match frame.lineno {
            Some(lineno) => context_window(source, lineno, self.lines_of_context),
            None => {
                trace!("No line number for {}, context stays empty", path);
                SourceContext::default()
            }
        };

        frame.pre_context = Some(context.pre_context);
        frame.context_line = context.context_line;
        frame.post_context = Some(context.post_context);

        Ok(())
    }
}

/// Whether a file name points at something readable on disk
///
/// Only absolute (`/`) and relative (`.`) paths qualify. Runtime internals
/// such as `node:internal/modules` or `native` never do.
pub fn is_local_path(file_name: &str) -> bool {
    file_name.starts_with(LOCAL_PATH_PREFIXES)
}

/// Slice the window around a 1-based line out of a file
///
/// **Public** - reusable for any source text
///
/// The window is clipped at both ends of the file. A line past the end
/// yields no `context_line` but keeps whatever lines fall inside the
/// `pre_context` range. Line 0 does not exist and yields an empty
/// context. A trailing `\r` is stripped from each line.
pub fn context_window(source: &str, lineno: u32, lines_of_context: usize) -> SourceContext {
    if lineno == 0 {
        return SourceContext::default();
    }

    let lines: Vec<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let total = lines.len();
    let index = lineno as usize - 1;
    let clip = |n: usize| n.min(total);

    let pre_start = index.saturating_sub(lines_of_context);
    let post_start = index.saturating_add(1);
    let post_end = post_start.saturating_add(lines_of_context);

    SourceContext {
        pre_context: owned_lines(&lines[clip(pre_start)..clip(index)]),
        context_line: lines.get(index).map(|line| line.to_string()),
        post_context: owned_lines(&lines[clip(post_start)..clip(post_end)]),
    }
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {}", n))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn labels(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
        range.map(|n| format!("line {}", n)).collect()
    }

    #[test]
    fn test_is_local_path() {
        assert!(is_local_path("/srv/app.js"));
        assert!(is_local_path("./lib/app.js"));
        assert!(is_local_path("../app.js"));
        assert!(!is_local_path("node:internal/modules"));
        assert!(!is_local_path("native"));
        assert!(!is_local_path(""));
    }

    #[test]
    fn test_context_window_middle_of_file() {
        let context = context_window(&numbered(20), 10, 7);

        assert_eq!(context.pre_context, labels(3..=9));
        assert_eq!(context.context_line.as_deref(), Some("line 10"));
        assert_eq!(context.post_context, labels(11..=17));
    }

    #[test]
    fn test_context_window_clipped_at_start() {
        let context = context_window(&numbered(20), 3, 7);

        assert_eq!(context.pre_context, labels(1..=2));
        assert_eq!(context.context_line.as_deref(), Some("line 3"));
        assert_eq!(context.post_context, labels(4..=10));
    }

    #[test]
    fn test_context_window_clipped_at_end() {
        let context = context_window(&numbered(20), 18, 7);

        assert_eq!(context.pre_context, labels(11..=17));
        assert_eq!(context.post_context, labels(19..=20));
    }

    #[test]
    fn test_context_window_first_line() {
        let context = context_window(&numbered(3), 1, 7);

        assert!(context.pre_context.is_empty());
        assert_eq!(context.context_line.as_deref(), Some("line 1"));
        assert_eq!(context.post_context, labels(2..=3));
    }

    #[test]
    fn test_context_window_line_zero_is_empty() {
        assert_eq!(context_window(&numbered(5), 0, 7), SourceContext::default());
    }

    #[test]
    fn test_context_window_past_end_of_file() {
        let context = context_window(&numbered(5), 9, 7);

        assert_eq!(context.pre_context, labels(2..=5));
        assert_eq!(context.context_line, None);
        assert!(context.post_context.is_empty());
    }

    #[test]
    fn test_context_window_strips_carriage_returns() {
        let context = context_window("a\r\nb\r\nc\r\n", 2, 7);

        assert_eq!(context.pre_context, vec!["a".to_string()]);
        assert_eq!(context.context_line.as_deref(), Some("b"));
        // trailing newline leaves one empty line, as the raw split does
        assert_eq!(context.post_context, vec!["c".to_string(), String::new()]);
    }

    #[test]
    fn test_context_window_custom_size() {
        let context = context_window(&numbered(20), 10, 2);

        assert_eq!(context.pre_context, labels(8..=9));
        assert_eq!(context.post_context, labels(11..=12));
    }

    #[test]
    fn test_builder_sets_window() {
        let enricher = FrameEnricher::new();
        assert_eq!(enricher.lines_of_context(), LINES_OF_CONTEXT);

        let enricher = enricher.with_lines_of_context(3);
        assert_eq!(enricher.lines_of_context(), 3);
    }
}
