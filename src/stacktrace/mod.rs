//! Frame enrichment.
//!
//! This module transforms raw call sites into:
//! - Frames ordered oldest call first
//! - Source context around each failing line, when the file is local
//! - The `{frames: [...]}` payload handed to the event builder

pub mod cache;
pub mod enricher;
pub mod schema;
pub mod source;

// Re-export main types and functions
pub use cache::FileCache;
pub use enricher::{context_window, is_local_path, FrameEnricher, SourceContext};
pub use schema::{Frame, Stacktrace};
pub use source::{FsSourceReader, SourceReader};
