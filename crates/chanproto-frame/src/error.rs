use crate::message::{MAX_CHANNEL, MAX_ID};

/// Errors that can occur during message encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The stream ended at a message boundary.
    #[error("end of stream")]
    EndOfStream,

    /// The stream ended in the middle of a frame.
    #[error("unexpected end of stream (incomplete message)")]
    UnexpectedEndOfStream,

    /// The pending frame cannot fit into the configured read buffer.
    #[error("read buffer too small for pending message")]
    ShortBuffer,

    /// The stream made no forward progress across repeated reads, or the
    /// parser stalled on bytes that do not start a frame.
    #[error("no progress reading from stream")]
    NoProgress,

    /// A varint exceeded its maximum length, or a frame declared a body
    /// shorter than its own header.
    #[error("malformed message")]
    Malformed,

    /// A frame declared a body larger than the configured maximum.
    #[error("message too big ({size} bytes, max {max})")]
    MessageTooBig { size: usize, max: usize },

    /// A message id above [`MAX_ID`] cannot be encoded without truncation.
    #[error("message id out of range ({0}, max {max})", max = MAX_ID)]
    IdOutOfRange(u64),

    /// A channel tag above [`MAX_CHANNEL`] cannot be encoded without
    /// truncation.
    #[error("channel out of range ({0}, max {max})", max = MAX_CHANNEL)]
    ChannelOutOfRange(u8),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
