use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener as StdTcpListener};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket. Runs before the process daemonizes, so a
/// failure still reaches whoever started us.
///
/// Every candidate address for the port is tried in turn, candidates that
/// fail are skipped, and only exhausting all of them is fatal.
pub fn bind(port: u16) -> anyhow::Result<StdTcpListener> {
    let candidates: [SocketAddr; 2] = [
        (Ipv6Addr::UNSPECIFIED, port).into(),
        (Ipv4Addr::UNSPECIFIED, port).into(),
    ];

    for addr in candidates {
        match StdTcpListener::bind(addr) {
            Ok(listener) => {
                info!("listening on {}", addr);
                return Ok(listener);
            }
            Err(e) => {
                warn!("failed to bind {}: {}", addr, e);
            }
        }
    }
    anyhow::bail!("failed to listen on port {}", port)
}

/// Accepts connections forever, one task per connection.
///
/// An accept failure is fatal to the whole server: the listening socket
/// itself is broken. A failing connection task only logs; ownership of the
/// socket moves into the task, so the acceptor never blocks on a
/// connection's I/O and the task's exit releases everything it held.
pub async fn run(listener: StdTcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    listener
        .set_nonblocking(true)
        .context("failed to prepare listening socket")?;
    let listener = TcpListener::from_std(listener).context("failed to register listening socket")?;

    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;
        debug!("accepted connection from {}", peer);

        let cfg = cfg.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, cfg);
            if let Err(e) = conn.run().await {
                error!("connection error from {}: {:#}", peer, e);
            }
        });
    }
}
