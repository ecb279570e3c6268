/// HTTP request methods.
///
/// The full set of verb tokens the request-line grammar admits. Only GET and
/// HEAD are actually served; the rest parse successfully and are answered
/// with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Create or submit data
    Post,
    /// HEAD - Like GET but without the response body
    Head,
    /// OPTIONS - Describe communication options
    Options,
    /// CONNECT - Establish a tunnel
    Connect,
    /// TRACE - Message loop-back test
    Trace,
    /// DELETE - Delete a resource
    Delete,
    /// PUT - Replace a resource
    Put,
}

impl Method {
    /// Parses an HTTP method token (case-sensitive, uppercase).
    ///
    /// Returns `None` for anything outside the known verb set.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            "CONNECT" => Some(Method::Connect),
            "TRACE" => Some(Method::Trace),
            "DELETE" => Some(Method::Delete),
            "PUT" => Some(Method::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Delete => "DELETE",
            Method::Put => "PUT",
        }
    }
}

/// A parsed request line.
///
/// Built once by the parser, never mutated, discarded after the response is
/// written. Headers and bodies are intentionally absent: the server only
/// consumes the request line.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, ...)
    pub method: Method,
    /// The request path with any query string removed (e.g. "/index.html")
    pub path: String,
    /// The query string, `?` included, if the target carried one
    pub query: Option<String>,
    /// HTTP version token as received (e.g. "HTTP/1.1")
    pub version: String,
}
