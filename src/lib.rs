//! Stacktrace Context
//!
//! Converts a raised error into an ordered list of stack frames for an
//! error-tracking backend. Each frame carries the function, file, and
//! line, plus the source lines around the failure point when the file
//! is on local disk.
//!
//! ## Getting Started
//!
//! ```ignore
//! use stacktrace_context::{extract_frames, StackText};
//!
//! let stacktrace = extract_frames(&StackText(&stack))?;
//! for frame in &stacktrace.frames {
//!     println!("{:?}:{:?}", frame.filename, frame.lineno);
//! }
//! ```
//!
//! Frames are ordered oldest call first; the throw site is last.

pub mod output;
pub mod parser;
pub mod stacktrace;
pub mod utils;

pub use parser::{CallSite, CallSiteSource, RaisedError, StackText};
pub use stacktrace::{Frame, FrameEnricher, Stacktrace};
pub use utils::error::{ExtractionError, StacktraceError};

/// Extract frames from an error, wrapped as `{frames: [...]}`
///
/// Reads context from the local filesystem with the default window.
pub fn extract_frames<S: CallSiteSource + ?Sized>(source: &S) -> Result<Stacktrace, StacktraceError> {
    FrameEnricher::new().extract_frames(source)
}

/// Extract the bare frame list from an error
pub fn parse_stack<S: CallSiteSource + ?Sized>(source: &S) -> Result<Vec<Frame>, StacktraceError> {
    FrameEnricher::new().parse_stack(source)
}

/// Frames for the current native call stack
pub fn current_stacktrace() -> Result<Stacktrace, StacktraceError> {
    extract_frames(&backtrace::Backtrace::new())
}
