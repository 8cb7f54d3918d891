//! Configuration and constants for frame extraction.

/// Lines of source shown before and after the failing line
pub const LINES_OF_CONTEXT: usize = 7;

// A file name is only treated as a local path when it starts with one of
// these. Runtime internals ("node:internal/...", "native") never do.
pub const LOCAL_PATH_PREFIXES: &[char] = &['/', '.'];

/// Function names V8 uses for anonymous callees
pub const ANONYMOUS_FUNCTION_NAMES: &[&str] = &["<anonymous>"];

/// File name reported for builtins (`at Array.forEach (native)`)
pub const NATIVE_FILE_NAME: &str = "native";

/// Key the stacktrace payload is filed under in an event
pub const INTERFACE_KEY: &str = "sentry.interfaces.Stacktrace";
