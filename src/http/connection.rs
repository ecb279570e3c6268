use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::http::parser::parse_request_line;
use crate::http::writer;

/// Cap and window for consuming unread request bytes before closing.
/// Clients usually send headers the server never reads; leaving them in the
/// receive buffer turns the close into a reset that can discard the
/// in-flight response.
const DRAIN_LIMIT: usize = 8 * 1024;
const DRAIN_WINDOW: Duration = Duration::from_millis(100);

/// Handles one accepted connection end-to-end: exactly one request line is
/// read, one response is written, and the stream is shut down on every path.
pub struct Connection {
    stream: TcpStream,
    config: Arc<ServerConfig>,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<ServerConfig>) -> Self {
        Self { stream, config }
    }

    /// Serves the connection, then closes it regardless of outcome.
    ///
    /// Errors returned here are for the caller's log line only; no error
    /// reply is ever written to the client.
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let result = self.handle().await;
        let _ = self.stream.shutdown().await;
        result
    }

    async fn handle(&mut self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = self.stream.split();
        let mut reader = BufReader::new(read_half);

        let result = exchange(&mut reader, &mut write_half, &self.config).await;

        drain(&mut reader).await;

        result
    }
}

/// Reads the request line under the configured deadline, parses it, and
/// writes the response. A silent client must not park a worker forever.
async fn exchange<R, W>(
    reader: &mut R,
    out: &mut W,
    config: &ServerConfig,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let bytes_read = timeout(config.read_timeout(), reader.read_line(&mut line))
        .await
        .context("timed out waiting for request line")??;

    if bytes_read == 0 {
        debug!("client closed before sending a request");
        return Ok(());
    }

    let request = match parse_request_line(line.trim_end()) {
        Ok(request) => request,
        Err(e) => {
            // Degrade by silence: no reply, just close.
            debug!(error = %e, "malformed request, closing without a reply");
            return Ok(());
        }
    };

    info!(
        method = request.method.as_str(),
        path = %request.path,
        "handling request"
    );

    writer::write_response(out, &request, config).await?;

    Ok(())
}

/// Best-effort read of whatever the client already sent, bounded in both
/// bytes and time, so the socket closes with a clean FIN.
async fn drain<R>(reader: &mut R)
where
    R: AsyncRead + Unpin,
{
    let mut scratch = [0u8; 1024];
    let mut drained = 0;

    while drained < DRAIN_LIMIT {
        match timeout(DRAIN_WINDOW, reader.read(&mut scratch)).await {
            Ok(Ok(0)) => break,
            Ok(Ok(n)) => drained += n,
            _ => break,
        }
    }
}
