use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::message::{Message, MAX_CHANNEL, MAX_ID};
use crate::varint::{encoding_length, put_uvarint};

/// Default maximum frame body length: 8 MiB.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Default reader buffer capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Smallest usable reader buffer capacity.
pub(crate) const MIN_BUFFER_SIZE: usize = 16;

/// Encode one message into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────────────┬─────────────────────────┬────────────────┐
/// │ varint(body_length)  │ varint((id<<4)|channel) │ Payload        │
/// │ (1-10B)              │ (1-10B)                 │ (rest of body) │
/// └──────────────────────┴─────────────────────────┴────────────────┘
/// ```
/// `body_length` covers the header varint plus the payload.
pub fn encode_message(message: &Message, dst: &mut BytesMut) -> Result<()> {
    if message.id > MAX_ID {
        return Err(FrameError::IdOutOfRange(message.id));
    }
    if message.channel > MAX_CHANNEL {
        return Err(FrameError::ChannelOutOfRange(message.channel));
    }

    let header = message.header();
    let body = encoding_length(header) + message.data.len();
    dst.reserve(encoding_length(body as u64) + body);
    put_uvarint(dst, body as u64);
    put_uvarint(dst, header);
    dst.put_slice(&message.data);
    Ok(())
}

/// Encode a batch of messages into one contiguous block.
///
/// The result is byte-identical to encoding each message in order.
pub fn encode_batch(messages: &[Message], dst: &mut BytesMut) -> Result<()> {
    // The two varints never exceed MAX_VARINT_LEN each, so this bounds the
    // true size.
    let upper: usize = messages
        .iter()
        .map(|m| 2 * crate::varint::MAX_VARINT_LEN + m.data.len())
        .sum();
    dst.reserve(upper);
    for message in messages {
        encode_message(message, dst)?;
    }
    Ok(())
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum frame body length in bytes. Default: 8 MiB.
    pub max_message_size: usize,
    /// Reader buffer capacity in bytes. Default: 4096, minimum 16.
    pub buffer_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
