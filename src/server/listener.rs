use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::{Notify, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::connection::Connection;

/// A bound listening socket, ready to accept.
///
/// Lifecycle: [`Listener::bind`] validates nothing beyond the socket (the
/// config was validated at construction) and takes the port;
/// [`Listener::start`] moves the listener onto its own task and returns a
/// [`ServerHandle`] for shutdown.
pub struct Listener {
    socket: TcpListener,
    config: Arc<ServerConfig>,
    workers: Arc<Semaphore>,
}

/// Handle to a running listener. Dropping it does not stop the server; call
/// [`ServerHandle::stop`].
pub struct ServerHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl Listener {
    /// Binds the listening socket for the configured port.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let port = config.port();
        let socket = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|source| ServerError::Bind { port, source })?;

        let workers = Arc::new(Semaphore::new(config.max_connections()));

        Ok(Self {
            socket,
            config: Arc::new(config),
            workers,
        })
    }

    /// The address the socket actually bound.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Starts the accept loop on its own task; non-blocking for the caller.
    pub fn start(self) -> ServerHandle {
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(self.accept_loop(shutdown.clone()));

        ServerHandle { shutdown, task }
    }

    async fn accept_loop(self, shutdown: Arc<Notify>) {
        info!("accepting connections");

        loop {
            // Backpressure: wait for a worker slot before accepting, but
            // never let held permits starve shutdown — stop() must close
            // the socket even while every worker is busy.
            let permit = tokio::select! {
                _ = shutdown.notified() => {
                    break;
                }

                acquired = self.workers.clone().acquire_owned() => match acquired {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            tokio::select! {
                _ = shutdown.notified() => {
                    break;
                }

                accepted = self.socket.accept() => match accepted {
                    Ok((stream, peer)) => {
                        debug!(%peer, "accepted connection");
                        let config = self.config.clone();
                        tokio::spawn(async move {
                            let _permit = permit;
                            if let Err(e) = Connection::new(stream, config).serve().await {
                                warn!(%peer, error = %e, "connection error");
                            }
                        });
                    }
                    Err(e) => {
                        warn!(error = %e, "accept failed");
                    }
                }
            }
        }

        // Dropping self here closes the listening socket. In-flight
        // connections keep their config Arc and run to completion.
        info!("listener stopped");
    }
}

impl ServerHandle {
    /// Signals the accept loop to exit and close the listening socket.
    /// Idempotent; in-flight connections are not cancelled.
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }

    /// Waits for the accept loop to finish.
    pub async fn stopped(self) {
        let _ = self.task.await;
    }
}
