use pretty_assertions::assert_eq;
use stacktrace_context::parser::parse_stack_text;
use stacktrace_context::{CallSite, CallSiteSource, ExtractionError, RaisedError, StackText};

const NODE_STACK: &str = "TypeError: Cannot read properties of undefined (reading 'id')
    at Object.handler (/srv/app/routes.js:42:13)
    at /srv/app/server.js:10:5
    at Array.forEach (native)
    at Object.<anonymous> (./index.js:3:1)
    at Object.Module._compile (node:internal/modules/cjs/loader:1105:14)";

#[test]
fn test_parse_node_stack_newest_first() {
    let call_sites = parse_stack_text(NODE_STACK).unwrap();

    assert_eq!(
        call_sites,
        vec![
            CallSite::new(Some("Object.handler"), Some("/srv/app/routes.js"), Some(42)).with_column(13),
            CallSite::new(None, Some("/srv/app/server.js"), Some(10)).with_column(5),
            CallSite {
                function_name: Some("Array.forEach".to_string()),
                native: true,
                ..CallSite::default()
            },
            CallSite::new(None, Some("./index.js"), Some(3)).with_column(1),
            CallSite::new(
                Some("Module._compile"),
                Some("node:internal/modules/cjs/loader"),
                Some(1105)
            )
            .with_column(14),
        ]
    );
}

#[test]
fn test_header_only_stack_is_empty() {
    assert!(parse_stack_text("Error: nothing to see").unwrap().is_empty());
    assert!(parse_stack_text("").unwrap().is_empty());
}

#[test]
fn test_wrapped_message_lines_are_skipped() {
    let stack = "Error: first line\nsecond line of message\n    at f (/a.js:1:2)";
    let call_sites = parse_stack_text(stack).unwrap();

    assert_eq!(call_sites.len(), 1);
    assert_eq!(call_sites[0].function_name.as_deref(), Some("f"));
}

#[test]
fn test_separator_lines_become_call_sites() {
    let stack = "Error: x\n    at a (/a.js:1:1)\n    ----------------------------------------\n    at b (/b.js:2:2)";
    let call_sites = parse_stack_text(stack).unwrap();

    assert_eq!(call_sites.len(), 3);
    assert_eq!(
        call_sites[1].file_name.as_deref(),
        Some("    ----------------------------------------")
    );
    assert_eq!(call_sites[1].line_number, None);
}

#[test]
fn test_stack_text_source() {
    let call_sites = StackText(NODE_STACK).call_sites().unwrap();
    assert_eq!(call_sites.len(), 5);
}

#[test]
fn test_raised_error_from_json() {
    let raw = serde_json::json!({
        "name": "RangeError",
        "message": "out of range",
        "stack": "RangeError: out of range\n    at check (/srv/limits.js:8:9)"
    })
    .to_string();

    let error = RaisedError::from_json(&raw).unwrap();
    assert_eq!(error.name.as_deref(), Some("RangeError"));

    let call_sites = error.call_sites().unwrap();
    assert_eq!(call_sites.len(), 1);
    assert_eq!(call_sites[0].line_number, Some(8));
}

#[test]
fn test_raised_error_without_stack() {
    let error = RaisedError::from_json(r#"{"message": "no stack"}"#).unwrap();
    assert!(error.call_sites().unwrap().is_empty());
}

#[test]
fn test_raised_error_malformed() {
    let err = RaisedError::from_json(r#"{"stack": 42}"#).unwrap_err();
    assert!(matches!(err, ExtractionError::Malformed(_)));
}
