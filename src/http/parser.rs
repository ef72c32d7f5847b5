use crate::http::request::{HeaderField, Method, Request};

/// Longest accepted request or header line, terminator included.
pub const MAX_LINE_LENGTH: usize = 4096;

/// Largest accepted request body.
pub const MAX_REQUEST_BODY_LENGTH: usize = 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequestLine,
    InvalidHeader,
    InvalidContentLength,
    LineTooLong,
    BodyTooLarge,
    Incomplete,
}

/// Parses one complete request from the front of `buf`.
///
/// Returns the request plus the number of bytes consumed. `Incomplete` means
/// more input is required before anything can be decided; every other error
/// is fatal for the connection.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let mut pos = 0;

    let line = next_line(buf, &mut pos)?;
    let (method, path, protocol_minor_version) = parse_request_line(line)?;

    let mut headers = Vec::new();
    loop {
        let line = next_line(buf, &mut pos)?;
        if line.is_empty() {
            break;
        }
        headers.push(parse_header_field(line)?);
    }
    // Most-recent-first, so lookups see the last declaration of a name.
    headers.reverse();

    let length = declared_body_length(&headers)?;
    if length > MAX_REQUEST_BODY_LENGTH {
        return Err(ParseError::BodyTooLarge);
    }
    if buf.len() - pos < length {
        return Err(ParseError::Incomplete);
    }
    let body = buf[pos..pos + length].to_vec();
    pos += length;

    let request = Request {
        method,
        path,
        protocol_minor_version,
        headers,
        body,
    };
    Ok((request, pos))
}

/// Takes the next LF-terminated line, stripping the terminator and an
/// optional preceding CR. Lines may not exceed MAX_LINE_LENGTH.
fn next_line<'a>(buf: &'a [u8], pos: &mut usize) -> Result<&'a [u8], ParseError> {
    let rest = &buf[*pos..];
    match rest.iter().position(|&b| b == b'\n') {
        Some(nl) => {
            if nl + 1 > MAX_LINE_LENGTH {
                return Err(ParseError::LineTooLong);
            }
            let mut line = &rest[..nl];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
            *pos += nl + 1;
            Ok(line)
        }
        None if rest.len() >= MAX_LINE_LENGTH => Err(ParseError::LineTooLong),
        None => Err(ParseError::Incomplete),
    }
}

fn parse_request_line(line: &[u8]) -> Result<(Method, String, u32), ParseError> {
    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidRequestLine)?;

    let (token, rest) = line.split_once(' ').ok_or(ParseError::InvalidRequestLine)?;
    let (path, version) = rest.split_once(' ').ok_or(ParseError::InvalidRequestLine)?;

    const PREFIX: &str = "HTTP/1.";
    let prefix = version
        .get(..PREFIX.len())
        .ok_or(ParseError::InvalidRequestLine)?;
    if !prefix.eq_ignore_ascii_case(PREFIX) {
        return Err(ParseError::InvalidRequestLine);
    }
    let minor = parse_leading_digits(&version[PREFIX.len()..]);

    Ok((Method::from_token(token), path.to_string(), minor))
}

/// atoi-style: the run of leading ASCII digits, zero when there is none.
fn parse_leading_digits(s: &str) -> u32 {
    s.bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |n, b| {
            n.saturating_mul(10).saturating_add((b - b'0') as u32)
        })
}

fn parse_header_field(line: &[u8]) -> Result<HeaderField, ParseError> {
    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidHeader)?;
    let (name, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
    Ok(HeaderField {
        name: name.to_string(),
        value: value.trim_start_matches([' ', '\t']).to_string(),
    })
}

/// Body length from Content-Length: absent means zero, negative or
/// unparsable is a protocol error, checked before any body byte is read.
fn declared_body_length(headers: &[HeaderField]) -> Result<usize, ParseError> {
    let value = match headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("Content-Length"))
    {
        Some(h) => h.value.as_str(),
        None => return Ok(0),
    };
    let length: i64 = value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidContentLength)?;
    if length < 0 {
        return Err(ParseError::InvalidContentLength);
    }
    Ok(length as usize)
}
