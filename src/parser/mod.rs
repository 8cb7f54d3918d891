//! Call-site extraction.
//!
//! This module handles:
//! - The `CallSite` record captured when an error is raised
//! - Decomposing V8 `Error.stack` text into call sites
//! - Decomposing native Rust backtraces into call sites
//!
//! Every source yields call sites newest first: index 0 is where the
//! error was thrown or observed.

pub mod callsite;
pub mod native;
pub mod v8_stack;

// Re-export main types
pub use callsite::{CallSite, CallSiteSource};
pub use v8_stack::{parse_stack_text, RaisedError, StackText};
