//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x surface: one request line in, one response
//! out, connection closed. No headers are read, no bodies are accepted, and
//! connections are never kept alive.
//!
//! # Architecture
//!
//! - **`connection`**: handles one accepted connection end-to-end
//! - **`parser`**: parses the request line into a [`request::Request`]
//! - **`request`**: request-line representation and method tokens
//! - **`response`**: status codes and wire-format response heads
//! - **`writer`**: method dispatch, path resolution, and response writing
//! - **`mime`**: content-type lookup based on file extensions
//!
//! # Connection lifecycle
//!
//! ```text
//! accept → read request line → dispatch on method → write response → close
//! ```
//!
//! Every path through the handler ends with the connection closed; failures
//! close it silently rather than synthesizing an error reply.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
