/// HTTP request methods routed by the server.
///
/// `GET` and `HEAD` are served from the document root. `POST` is recognized
/// but answered with 405 Method Not Allowed. Any other request-line token is
/// carried as an extension method and answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Recognized, not served
    POST,
    /// Any other token, upper-cased, as it appeared on the request line
    Extension(String),
}

impl Method {
    /// Normalizes a request-line token into a method.
    ///
    /// The token is upper-cased first. An unrecognized token is not a parse
    /// error; it routes to 501 at dispatch time.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_token("get"), Method::GET);
    /// assert_eq!(Method::from_token("brew"), Method::Extension("BREW".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            other => Method::Extension(other.to_string()),
        }
    }

    /// The normalized (upper-case) token for this method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::Extension(token) => token,
        }
    }
}

/// One header line: name and value.
///
/// The value keeps everything after the colon with leading spaces and tabs
/// stripped. Name comparison is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Created fresh per connection by the parser, fully populated before
/// dispatch, and discarded once the response has been written.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method, case-normalized
    pub method: Method,
    /// The request path exactly as sent; no decoding or normalization
    pub path: String,
    /// The digits behind the `HTTP/1.` prefix of the version token
    pub protocol_minor_version: u32,
    /// Header fields, most recently parsed first
    pub headers: Vec<HeaderField>,
    /// Request body; empty unless Content-Length declared one
    pub body: Vec<u8>,
}

impl Request {
    /// Looks up a header value by name, case-insensitively.
    ///
    /// Headers are stored most recently parsed first, so when a name is
    /// declared twice the later declaration wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
