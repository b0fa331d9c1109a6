use plume_json::{parse, parse_with_depth, JsonError, DEFAULT_MAX_DEPTH};

/// Helper: parse input that the test requires to be invalid.
fn parse_err(text: &str) -> JsonError {
    match parse(text) {
        Ok(v) => panic!("expected parse failure for {text:?}, got {v:?}"),
        Err(e) => e,
    }
}

// ============================================================================
// Malformed strings
// ============================================================================

#[test]
fn unterminated_string() {
    assert!(matches!(
        parse_err("\"abc"),
        JsonError::MalformedString { .. }
    ));
}

#[test]
fn unknown_escape() {
    assert!(matches!(
        parse_err(r#""\q""#),
        JsonError::MalformedString { .. }
    ));
}

#[test]
fn unknown_escape_reports_backslash_offset() {
    let err = parse_err(r#""ab\q""#);
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn unicode_escape_is_not_decoded() {
    assert!(matches!(
        parse_err("\"\\u0041\""),
        JsonError::MalformedString { .. }
    ));
}

#[test]
fn string_ending_in_backslash() {
    assert!(matches!(
        parse_err("\"abc\\"),
        JsonError::MalformedString { .. }
    ));
}

// ============================================================================
// Malformed numbers
// ============================================================================

#[test]
fn second_decimal_point() {
    assert!(matches!(
        parse_err("1.2.3"),
        JsonError::MalformedNumber { .. }
    ));
}

#[test]
fn second_decimal_point_offset() {
    let err = parse_err("1.2.3");
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn letter_inside_number() {
    assert!(matches!(
        parse_err("12a"),
        JsonError::MalformedNumber { .. }
    ));
}

#[test]
fn exponent_notation_rejected() {
    assert!(matches!(
        parse_err("1e5"),
        JsonError::MalformedNumber { .. }
    ));
}

#[test]
fn bare_minus() {
    assert!(matches!(parse_err("-"), JsonError::MalformedNumber { .. }));
}

#[test]
fn double_minus() {
    assert!(matches!(
        parse_err("--1"),
        JsonError::MalformedNumber { .. }
    ));
}

#[test]
fn number_error_inside_array() {
    assert!(matches!(
        parse_err("[1,2.3.4]"),
        JsonError::MalformedNumber { .. }
    ));
}

// ============================================================================
// Malformed literals
// ============================================================================

#[test]
fn truncated_true() {
    assert!(matches!(
        parse_err("tru"),
        JsonError::MalformedLiteral { .. }
    ));
}

#[test]
fn overlong_true() {
    assert!(matches!(
        parse_err("truest"),
        JsonError::MalformedLiteral { .. }
    ));
}

#[test]
fn truncated_false() {
    assert!(matches!(
        parse_err("fals"),
        JsonError::MalformedLiteral { .. }
    ));
}

#[test]
fn truncated_null() {
    assert!(matches!(
        parse_err("nul"),
        JsonError::MalformedLiteral { .. }
    ));
}

#[test]
fn overlong_null() {
    assert!(matches!(
        parse_err("nullish"),
        JsonError::MalformedLiteral { .. }
    ));
}

#[test]
fn literal_error_inside_array_reports_its_offset() {
    let err = parse_err("[true,tru]");
    assert!(matches!(err, JsonError::MalformedLiteral { .. }));
    assert_eq!(err.offset(), Some(6));
}

// ============================================================================
// Malformed containers
// ============================================================================

#[test]
fn trailing_comma_in_array() {
    assert!(matches!(
        parse_err("[1,2,]"),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn trailing_comma_in_object() {
    assert!(matches!(
        parse_err(r#"{"a":1,}"#),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn missing_colon() {
    assert!(matches!(
        parse_err(r#"{"a" 1}"#),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn non_string_key() {
    assert!(matches!(
        parse_err("{1:2}"),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn unterminated_object() {
    assert!(matches!(
        parse_err(r#"{"a":1"#),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn unterminated_array() {
    assert!(matches!(
        parse_err("[1,2"),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn bad_separator_in_array() {
    assert!(matches!(
        parse_err("[1;2]"),
        JsonError::MalformedContainer { .. }
    ));
}

#[test]
fn missing_comma_between_members() {
    assert!(matches!(
        parse_err(r#"{"a":1 "b":2}"#),
        JsonError::MalformedContainer { .. }
    ));
}

// ============================================================================
// Unexpected tokens
// ============================================================================

#[test]
fn unknown_leading_character() {
    assert!(matches!(
        parse_err("@"),
        JsonError::UnexpectedToken { .. }
    ));
}

#[test]
fn empty_input() {
    assert!(matches!(parse_err(""), JsonError::UnexpectedToken { .. }));
}

#[test]
fn blank_input_offset_points_past_spaces() {
    let err = parse_err("   ");
    assert!(matches!(err, JsonError::UnexpectedToken { .. }));
    assert_eq!(err.offset(), Some(3));
}

// ============================================================================
// Depth ceiling
// ============================================================================

#[test]
fn deep_nesting_within_default_limit_parses() {
    let text = format!(
        "{}{}",
        "[".repeat(DEFAULT_MAX_DEPTH),
        "]".repeat(DEFAULT_MAX_DEPTH)
    );
    assert!(parse(&text).is_ok());
}

#[test]
fn nesting_past_default_limit_fails() {
    let text = "[".repeat(DEFAULT_MAX_DEPTH + 1);
    assert!(matches!(
        parse(&text),
        Err(JsonError::TooDeeplyNested { limit, .. }) if limit == DEFAULT_MAX_DEPTH
    ));
}

#[test]
fn custom_depth_limit() {
    assert!(parse_with_depth("[[]]", 2).is_ok());
    assert!(matches!(
        parse_with_depth("[[]]", 1),
        Err(JsonError::TooDeeplyNested { limit: 1, .. })
    ));
}

#[test]
fn depth_limit_counts_objects_too() {
    assert!(matches!(
        parse_with_depth(r#"{"a":{"b":{}}}"#, 2),
        Err(JsonError::TooDeeplyNested { .. })
    ));
    assert!(parse_with_depth(r#"{"a":{"b":{}}}"#, 3).is_ok());
}

// ============================================================================
// Error rendering
// ============================================================================

#[test]
fn errors_render_offset_in_message() {
    let err = parse_err("[1,2,]");
    let rendered = err.to_string();
    assert!(
        rendered.contains("offset"),
        "error message should carry its offset: {rendered}"
    );
}
