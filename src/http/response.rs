use crate::files::FileInfo;

/// HTTP status codes the server produces.
///
/// - `Ok` (200): file found and served
/// - `NotFound` (404): no regular file at the resolved path
/// - `MethodNotAllowed` (405): POST
/// - `NotImplemented` (501): any other method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// What follows the response headers on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No body bytes at all (HEAD)
    Empty,
    /// A short fixed text naming the outcome
    Text(&'static str),
    /// The file's bytes, streamed from disk by the writer
    File(FileInfo),
}

/// A response ready for serialization.
///
/// `content_length` is only set for file-backed outcomes; the short error
/// bodies go out without one.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_length: Option<u64>,
    pub body: Body,
}

impl Response {
    /// 200 response for a resolved file. `head` keeps the headers a GET
    /// would produce, Content-Length included, but suppresses the body.
    pub fn file(info: FileInfo, head: bool) -> Self {
        let size = info.size;
        Self {
            status: StatusCode::Ok,
            content_length: Some(size),
            body: if head { Body::Empty } else { Body::File(info) },
        }
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_length: None,
            body: Body::Text("not_found\r\n"),
        }
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::MethodNotAllowed,
            content_length: None,
            body: Body::Text("method_not_allowed\r\n"),
        }
    }

    /// Creates a 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            content_length: None,
            body: Body::Text("not_implemented\r\n"),
        }
    }
}
