use filament::http::parser::{ParseError, parse_request_line};
use filament::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request_line("GET / HTTP/1.1").unwrap();

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.query, None);
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_head_request() {
    let parsed = parse_request_line("HEAD /logo.png HTTP/1.0").unwrap();

    assert_eq!(parsed.method, Method::Head);
    assert_eq!(parsed.path, "/logo.png");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_all_known_methods() {
    let methods = vec![
        ("GET", Method::Get),
        ("POST", Method::Post),
        ("HEAD", Method::Head),
        ("OPTIONS", Method::Options),
        ("CONNECT", Method::Connect),
        ("TRACE", Method::Trace),
        ("DELETE", Method::Delete),
        ("PUT", Method::Put),
    ];

    for (token, expected) in methods {
        let line = format!("{token} /resource HTTP/1.1");
        let parsed = parse_request_line(&line).unwrap();
        assert_eq!(parsed.method, expected);
    }
}

#[test]
fn test_query_string_split_at_first_question_mark() {
    let parsed = parse_request_line("GET /search?q=rust HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/search");
    assert_eq!(parsed.query.as_deref(), Some("?q=rust"));
}

#[test]
fn test_query_string_keeps_later_question_marks() {
    // Both halves must come from the original target, not a truncated copy.
    let parsed = parse_request_line("GET /a?b?c HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/a");
    assert_eq!(parsed.query.as_deref(), Some("?b?c"));
}

#[test]
fn test_ampersands_without_question_mark_stay_in_path() {
    let parsed = parse_request_line("GET /a&b HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/a&b");
    assert_eq!(parsed.query, None);
}

#[test]
fn test_bare_trailing_question_mark_is_rejected() {
    let result = parse_request_line("GET /a? HTTP/1.1");

    assert!(matches!(result, Err(ParseError::InvalidTarget(_))));
}

#[test]
fn test_unknown_method_is_rejected() {
    let result = parse_request_line("FETCH / HTTP/1.1");

    assert!(matches!(result, Err(ParseError::UnknownMethod(_))));
}

#[test]
fn test_lowercase_method_is_rejected() {
    let result = parse_request_line("get / HTTP/1.1");

    assert!(matches!(result, Err(ParseError::UnknownMethod(_))));
}

#[test]
fn test_missing_version_is_rejected() {
    let result = parse_request_line("GET /");

    assert!(matches!(result, Err(ParseError::MalformedLine(_))));
}

#[test]
fn test_empty_line_is_rejected() {
    let result = parse_request_line("");

    assert!(matches!(result, Err(ParseError::MalformedLine(_))));
}

#[test]
fn test_extra_tokens_are_rejected() {
    let result = parse_request_line("GET / HTTP/1.1 junk");

    assert!(matches!(result, Err(ParseError::MalformedLine(_))));
}

#[test]
fn test_target_starting_with_question_mark_is_rejected() {
    let result = parse_request_line("GET ?q=only HTTP/1.1");

    assert!(matches!(result, Err(ParseError::InvalidTarget(_))));
}

#[test]
fn test_non_http_version_is_rejected() {
    let result = parse_request_line("GET / FTP/1.0");

    assert!(matches!(result, Err(ParseError::InvalidVersion(_))));
}

#[test]
fn test_version_is_echoed_verbatim() {
    let parsed = parse_request_line("GET / HTTP/0.9").unwrap();

    assert_eq!(parsed.version, "HTTP/0.9");
}
