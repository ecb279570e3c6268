//! Filament - Minimal Static File Server
//!
//! Core library for serving files over HTTP/1.x, one request per connection.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
