use chanproto_frame::FrameError;

/// Errors that can occur on a chanproto connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// Failed to connect to the specified address.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// Failed to accept an incoming connection.
    #[error("failed to accept connection: {0}")]
    Accept(std::io::Error),

    /// A framing error occurred on the connection.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// An I/O error occurred on the connection itself.
    #[error("connection I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConnError {
    /// True if the peer closed the stream at a message boundary.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ConnError::Frame(FrameError::EndOfStream))
    }
}

pub type Result<T> = std::result::Result<T, ConnError>;
