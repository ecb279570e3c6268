use std::path::PathBuf;

use tokio::fs::{self, File};
use tokio::io::{self, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::config::ServerConfig;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{ResponseHead, StatusCode};

/// Value of the `Server` response header.
pub const SERVER_NAME: &str = "filament";

/// Dispatches on the request method and writes a complete wire-format
/// response. GET and HEAD resolve the target against the content root;
/// every other method gets a bare 501 status line.
///
/// The output is flushed on every path. Generic over the output stream so
/// tests can capture the exact bytes.
pub async fn write_response<W>(
    out: &mut W,
    request: &Request,
    config: &ServerConfig,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match request.method {
        Method::Get => send_file(out, request, config, true).await?,
        Method::Head => send_file(out, request, config, false).await?,
        _ => {
            let head = ResponseHead::new(&request.version, StatusCode::NotImplemented);
            out.write_all(head.status_line().as_bytes()).await?;
        }
    }

    out.flush().await
}

/// Resolves the target and writes a 200 (with the file body for GET) or a
/// minimal 404 status line.
async fn send_file<W>(
    out: &mut W,
    request: &Request,
    config: &ServerConfig,
    include_body: bool,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let Some((path, size)) = resolve_target(&request.path, config).await else {
        warn!(path = %request.path, "resource not found");
        let head = ResponseHead::new(&request.version, StatusCode::NotFound);
        out.write_all(head.status_line().as_bytes()).await?;
        return Ok(());
    };

    let head = ResponseHead::new(&request.version, StatusCode::Ok)
        .header("Content-Length", size.to_string())
        .header("Server", SERVER_NAME)
        .header("Content-Type", mime::for_path(&path));
    out.write_all(&head.serialize()).await?;

    if include_body {
        let mut file = File::open(&path).await?;
        io::copy(&mut file, out).await?;
    }

    Ok(())
}

/// Maps a request path to a canonical file under the content root.
///
/// `/` serves `index.html`. Canonicalization happens before the existence
/// and type checks; a canonical path that escapes the content root is
/// rejected the same as a missing one. Returns the path and its size, or
/// `None` when the target should 404.
async fn resolve_target(target: &str, config: &ServerConfig) -> Option<(PathBuf, u64)> {
    let relative = target.trim_start_matches('/');
    let relative = if relative.is_empty() {
        "index.html"
    } else {
        relative
    };

    let joined = config.content_root().join(relative);
    let canonical = fs::canonicalize(&joined).await.ok()?;

    if !canonical.starts_with(config.content_root()) {
        warn!(path = target, resolved = %canonical.display(), "target escapes content root");
        return None;
    }

    let metadata = fs::metadata(&canonical).await.ok()?;
    if !metadata.is_file() {
        return None;
    }

    Some((canonical, metadata.len()))
}
