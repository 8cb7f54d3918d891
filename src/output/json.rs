//! JSON payload output for stacktraces.
//!
//! Renders `Stacktrace` values in the `{"frames": [...]}` shape the event
//! builder consumes, oldest frame first.

use crate::stacktrace::Stacktrace;
use crate::utils::config::INTERFACE_KEY;
use log::debug;

/// Build the event entry for a stacktrace
///
/// **Public** - used by event builders to attach the interface
///
/// # Returns
/// `{"sentry.interfaces.Stacktrace": {"frames": [...]}}`
pub fn to_interface_value(stacktrace: &Stacktrace) -> Result<serde_json::Value, serde_json::Error> {
    debug!("Attaching {} frames as {}", stacktrace.frames.len(), INTERFACE_KEY);

    let mut entry = serde_json::Map::new();
    entry.insert(INTERFACE_KEY.to_string(), serde_json::to_value(stacktrace)?);
    Ok(serde_json::Value::Object(entry))
}

/// Serialize a stacktrace to a compact JSON string
///
/// **Public** - useful for transports and tests
pub fn stacktrace_to_string(stacktrace: &Stacktrace) -> Result<String, serde_json::Error> {
    serde_json::to_string(stacktrace)
}
