use thiserror::Error;

use crate::http::request::{Method, Request};

/// Ways a request line can fail to parse.
///
/// The variants exist for log diagnostics only; the connection handler
/// treats every one of them the same way (close without a reply).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line: {0:?}")]
    MalformedLine(String),
    #[error("unknown method: {0:?}")]
    UnknownMethod(String),
    #[error("invalid target: {0:?}")]
    InvalidTarget(String),
    #[error("invalid version: {0:?}")]
    InvalidVersion(String),
}

/// Parses one HTTP request line of the form `METHOD SP TARGET SP VERSION`.
///
/// The target is split at the first `?`: everything before it becomes the
/// path, everything from the `?` onward (inclusive) becomes the query
/// string. Both slices come from the original target string.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();

    let (Some(method_token), Some(target), Some(version)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedLine(line.to_string()));
    };
    if parts.next().is_some() {
        return Err(ParseError::MalformedLine(line.to_string()));
    }

    let method =
        Method::from_token(method_token).ok_or_else(|| ParseError::UnknownMethod(method_token.to_string()))?;

    if target.starts_with('?') {
        return Err(ParseError::InvalidTarget(target.to_string()));
    }

    if !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidVersion(version.to_string()));
    }

    let (path, query) = match target.find('?') {
        Some(pos) => {
            // A bare trailing `?` is not a query string.
            if pos + 1 == target.len() {
                return Err(ParseError::InvalidTarget(target.to_string()));
            }
            (&target[..pos], Some(target[pos..].to_string()))
        }
        None => (target, None),
    };

    Ok(Request {
        method,
        path: path.to_string(),
        query,
        version: version.to_string(),
    })
}
