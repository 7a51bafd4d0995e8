use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

use tracing::{debug, info};

use crate::conn::Conn;
use crate::error::{ConnError, Result};

/// Accepts incoming chanproto connections on a TCP address.
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Bind and listen on `addr`.
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self> {
        let addrs: Vec<SocketAddr> = addr.to_socket_addrs().map_err(ConnError::Io)?.collect();
        let display = addrs
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<none>".to_string());
        let inner = TcpListener::bind(&addrs[..]).map_err(|source| ConnError::Bind {
            addr: display,
            source,
        })?;
        if let Ok(local) = inner.local_addr() {
            info!(addr = %local, "listening");
        }
        Ok(Self { inner })
    }

    /// Accept one incoming connection (blocking).
    pub fn accept(&self) -> Result<Conn> {
        let (stream, peer) = self.inner.accept().map_err(ConnError::Accept)?;
        debug!(peer = %peer, "accepted connection");
        Conn::from_stream(stream)
    }

    /// The address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }
}
