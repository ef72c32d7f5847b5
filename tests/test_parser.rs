use staticd::http::parser::{
    MAX_LINE_LENGTH, MAX_REQUEST_BODY_LENGTH, ParseError, parse_http_request,
};
use staticd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.protocol_minor_version, 0);
    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_method_is_case_normalized() {
    for raw in ["get", "Get", "gET", "GET"] {
        let req = format!("{} / HTTP/1.0\r\n\r\n", raw);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.method.as_str(), "GET");
    }
}

#[test]
fn test_parse_unknown_method_kept_as_extension() {
    let req = b"brew /pot HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Extension("BREW".to_string()));
    assert_eq!(parsed.method.as_str(), "BREW");
}

#[test]
fn test_parse_path_stored_verbatim() {
    let req = b"GET /a%20b/../secret?q=rust HTTP/1.0\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/a%20b/../secret?q=rust");
}

#[test]
fn test_parse_minor_version_digits() {
    let cases: &[(&[u8], u32)] = &[
        (b"GET / HTTP/1.0\r\n\r\n", 0),
        (b"GET / HTTP/1.1\r\n\r\n", 1),
        (b"GET / http/1.1\r\n\r\n", 1),
        (b"GET / HTTP/1.\r\n\r\n", 0),
    ];
    for (raw, minor) in cases {
        let (parsed, _) = parse_http_request(raw).unwrap();
        assert_eq!(parsed.protocol_minor_version, *minor);
    }
}

#[test]
fn test_parse_rejects_non_http_version_token() {
    let req = b"GET / FTP/1.0\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_rejects_request_line_missing_path() {
    let req = b"GET\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_rejects_request_line_missing_version() {
    let req = b"GET /index.html\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_post_request_with_exact_body() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_short_body_is_incomplete() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 5\r\n\r\nhell";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_long_body_leaves_stray_bytes() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello!";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    // The parser stops at the declared length; the connection layer treats
    // the leftover byte as fatal.
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len() - 1);
}

#[test]
fn test_parse_negative_content_length_is_fatal() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: -1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_garbage_content_length_is_fatal() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: five\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_oversized_body_rejected_before_read() {
    let req = format!(
        "POST /api HTTP/1.0\r\nContent-Length: {}\r\n\r\n",
        MAX_REQUEST_BODY_LENGTH + 1
    );
    let result = parse_http_request(req.as_bytes());

    assert!(matches!(result, Err(ParseError::BodyTooLarge)));
}

#[test]
fn test_parse_missing_content_length_means_empty_body() {
    let req = b"GET / HTTP/1.0\r\nHost: localhost\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_binary_body() {
    let req = b"POST /upload HTTP/1.0\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 1, 2, 3]);
}

#[test]
fn test_parse_header_without_colon_is_fatal() {
    let req = b"GET / HTTP/1.0\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_header_value_leading_whitespace_stripped() {
    let req = b"GET / HTTP/1.0\r\nHost: \t  example.com\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_header_lookup_is_case_insensitive() {
    let req = b"GET / HTTP/1.0\r\nCoNtEnT-tYpE: text/plain\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("content-type").unwrap(), "text/plain");
}

#[test]
fn test_parse_duplicate_header_last_declaration_wins() {
    let req = b"GET / HTTP/1.0\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("X-Tag").unwrap(), "second");
}

#[test]
fn test_parse_accepts_bare_lf_line_endings() {
    let req = b"GET / HTTP/1.0\nHost: example.com\n\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_incomplete_without_blank_line() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_empty_buffer_is_incomplete() {
    let result = parse_http_request(b"");

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_unterminated_long_line_is_fatal() {
    let req = vec![b'a'; MAX_LINE_LENGTH];
    let result = parse_http_request(&req);

    assert!(matches!(result, Err(ParseError::LineTooLong)));
}

#[test]
fn test_parse_overlong_header_line_is_fatal() {
    let mut req = b"GET / HTTP/1.0\r\nX-Big: ".to_vec();
    req.extend(vec![b'x'; MAX_LINE_LENGTH]);
    req.extend_from_slice(b"\r\n\r\n");
    let result = parse_http_request(&req);

    assert!(matches!(result, Err(ParseError::LineTooLong)));
}
