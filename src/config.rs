use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ServerError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONTENT_ROOT: &str = "./wwwroot";
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_CONNECTIONS: usize = 1024;

/// Validated server configuration: the listening port and the directory all
/// served files must live under.
///
/// Validation happens once at construction; afterwards the config is
/// immutable and shared read-only across all connections.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    port: u16,
    content_root: PathBuf,
    read_timeout: Duration,
    max_connections: usize,
}

impl ServerConfig {
    /// Builds a config, validating the port and content root.
    ///
    /// The root must exist, be readable, and be a directory. It is
    /// canonicalized here so later per-request containment checks can
    /// compare against an absolute, symlink-free prefix.
    pub fn new(port: u16, content_root: impl AsRef<Path>) -> Result<Self, ServerError> {
        if port == 0 {
            return Err(ServerError::InvalidConfiguration(
                "port must be greater than zero".to_string(),
            ));
        }

        let content_root = content_root.as_ref();
        let canonical = content_root.canonicalize().map_err(|e| {
            ServerError::InvalidConfiguration(format!(
                "content root {}: {}",
                content_root.display(),
                e
            ))
        })?;

        let metadata = fs::metadata(&canonical).map_err(|e| {
            ServerError::InvalidConfiguration(format!(
                "content root {}: {}",
                canonical.display(),
                e
            ))
        })?;
        if !metadata.is_dir() {
            return Err(ServerError::InvalidConfiguration(format!(
                "content root {} is not a directory",
                canonical.display()
            )));
        }

        // Closest stdlib probe for directory readability.
        fs::read_dir(&canonical).map_err(|e| {
            ServerError::InvalidConfiguration(format!(
                "content root {} is not readable: {}",
                canonical.display(),
                e
            ))
        })?;

        Ok(Self {
            port,
            content_root: canonical,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Sets the deadline for receiving the request line (default 30 s).
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Sets the ceiling on concurrent connections (default 1024, minimum 1).
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    /// Builds a config from positional arguments: `[port] [content root]`,
    /// defaulting to port 8080 and `./wwwroot`.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ServerError> {
        let port = match args.next() {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ServerError::InvalidConfiguration(format!("invalid port number: {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };
        let root = args
            .next()
            .unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string());

        Self::new(port, root)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The canonicalized content root.
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }
}
