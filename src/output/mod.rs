//! Output writers for stacktrace payloads.
//!
//! This module handles handing frames to the event builder:
//! - In-memory JSON values keyed by the interface name
//! - Compact JSON text for transports

pub mod json;

// Re-export main functions
pub use json::{stacktrace_to_string, to_interface_value};
