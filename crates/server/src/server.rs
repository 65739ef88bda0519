//! TCP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::{Semaphore, watch};
use tokio::time;

use super::config::{Config, ServerConfig};
use super::error::Error;
use super::frame::{self, Frame};
use super::handler::{Outcome, Reply, RequestHandler};
use sssp_core::BellmanFordSolver;

/// Server statistics.
#[derive(Debug, Default)]
pub struct ServerStats {
    pub connections_total: AtomicU64,
    pub requests_total: AtomicU64,
    pub rejected_total: AtomicU64,
    pub negative_cycles_total: AtomicU64,
    pub errors_total: AtomicU64,
}

impl ServerStats {
    fn record(&self, outcome: &Outcome) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        match outcome {
            Outcome::Distances => {}
            Outcome::NegativeCycle => {
                self.negative_cycles_total.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Rejected(_) => {
                self.rejected_total.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

/// One-request-per-connection TCP server.
pub struct Server {
    config: ServerConfig,
    handler: Arc<RequestHandler<BellmanFordSolver>>,
    stats: Arc<ServerStats>,
    shutdown: watch::Sender<bool>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            handler: Arc::new(RequestHandler::new(BellmanFordSolver, config.protocol)),
            config: config.server,
            stats: Arc::new(ServerStats::default()),
            shutdown,
        }
    }

    /// Binds the listening socket with the configured backlog.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let bind_address = self.config.bind_address();
        let resolved = tokio::net::lookup_host(bind_address.as_str()).await?.next();
        let addr = resolved.ok_or(Error::AddressResolution(bind_address))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        Ok(socket.listen(self.config.backlog)?)
    }

    /// Binds and serves until [`Server::shutdown`] is called.
    pub async fn run(&self) -> Result<(), Error> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Accepts connections on `listener` until shutdown.
    ///
    /// At most `max_connections` connections are in flight; the next accept
    /// waits for a permit, so the default of 1 handles each connection to
    /// completion before accepting another.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), Error> {
        tracing::info!(
            "Server listening on {} (max {} concurrent connection(s))",
            listener.local_addr()?,
            self.config.max_connections
        );

        let permits = Arc::new(Semaphore::new(self.config.max_connections));
        let mut shutdown_rx = self.shutdown.subscribe();

        while !*shutdown_rx.borrow_and_update() {
            let permit = tokio::select! {
                permit = permits.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
                _ = shutdown_rx.changed() => break,
            };

            tokio::select! {
                result = listener.accept() => {
                    match result {
                        Ok((stream, addr)) => {
                            self.stats.connections_total.fetch_add(1, Ordering::Relaxed);

                            let handler = self.handler.clone();
                            let stats = self.stats.clone();
                            let config = self.config.clone();

                            tokio::spawn(async move {
                                let _permit = permit;
                                if let Err(e) =
                                    handle_connection(stream, addr, &handler, &config, &stats).await
                                {
                                    tracing::warn!("[{}] Connection error: {}", addr, e);
                                    stats.errors_total.fetch_add(1, Ordering::Relaxed);
                                }
                                tracing::debug!("[{}] Connection closed", addr);
                            });
                        }
                        Err(e) => {
                            tracing::error!("Accept error: {}", e);
                        }
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }

        tracing::info!(
            "Server shutting down: {} connection(s), {} request(s), {} rejected, {} negative cycle(s), {} error(s)",
            self.stats.connections_total.load(Ordering::Relaxed),
            self.stats.requests_total.load(Ordering::Relaxed),
            self.stats.rejected_total.load(Ordering::Relaxed),
            self.stats.negative_cycles_total.load(Ordering::Relaxed),
            self.stats.errors_total.load(Ordering::Relaxed),
        );
        Ok(())
    }

    /// Initiates server shutdown.
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// Returns server statistics.
    pub fn stats(&self) -> &ServerStats {
        &self.stats
    }
}

/// Reads one request, answers it and closes the connection.
async fn handle_connection(
    mut stream: TcpStream,
    addr: SocketAddr,
    handler: &RequestHandler<BellmanFordSolver>,
    config: &ServerConfig,
    stats: &ServerStats,
) -> Result<(), Error> {
    tracing::debug!("[{}] Client connected", addr);

    let read = frame::read_request(
        &mut stream,
        config.read_buffer_size,
        config.max_request_bytes,
    );
    let frame = time::timeout(config.read_timeout(), read)
        .await
        .map_err(|_| Error::ReadTimeout(addr))??;

    let reply = match frame {
        Frame::Complete(payload) => {
            tracing::debug!("[{}] Received {} bytes", addr, payload.len());
            handler.handle(&payload)
        }
        Frame::TooLarge => Reply::rejected(format!(
            "request exceeds {} bytes",
            config.max_request_bytes
        )),
    };

    match &reply.outcome {
        Outcome::Rejected(reason) => tracing::debug!("[{}] Rejected request: {}", addr, reason),
        outcome => tracing::debug!("[{}] Response: {:?}", addr, outcome),
    }
    stats.record(&reply.outcome);

    stream.write_all(reply.body.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
