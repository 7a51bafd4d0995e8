use bytes::Bytes;

use crate::error::{FrameError, Result};

/// Largest encodable message id (60 bits).
pub const MAX_ID: u64 = (1 << 60) - 1;

/// Largest channel tag (4 bits).
pub const MAX_CHANNEL: u8 = 15;

/// One framed message: a 60-bit id, a 4-bit channel tag and an opaque
/// payload.
///
/// On the wire the id and channel travel packed as `(id << 4) | channel` in
/// a single varint header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Application-assigned message id.
    pub id: u64,
    /// Channel this message belongs to.
    pub channel: u8,
    /// The message payload.
    pub data: Bytes,
}

impl Message {
    /// Create a new message, validating the id and channel ranges.
    pub fn new(id: u64, channel: u8, data: impl Into<Bytes>) -> Result<Self> {
        if id > MAX_ID {
            return Err(FrameError::IdOutOfRange(id));
        }
        if channel > MAX_CHANNEL {
            return Err(FrameError::ChannelOutOfRange(channel));
        }
        Ok(Self {
            id,
            channel,
            data: data.into(),
        })
    }

    /// The packed varint header for this message.
    pub fn header(&self) -> u64 {
        (self.id << 4) | u64::from(self.channel)
    }

    /// The total wire size of this message's frame.
    pub fn wire_size(&self) -> usize {
        let body = crate::varint::encoding_length(self.header()) + self.data.len();
        crate::varint::encoding_length(body as u64) + body
    }
}
