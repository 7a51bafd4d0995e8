//! Varint length-prefixed message framing with channel multiplexing.
//!
//! Every message is framed as:
//! - A varint `body_length` prefix
//! - A varint header packing a 60-bit message id and a 4-bit channel tag
//! - The payload (`body_length` minus the header varint's length)
//!
//! The reader tolerates arbitrary chunking (a frame may be split at any
//! byte, including inside a varint) and works against a fixed-capacity
//! buffer. No partial reads, no buffer management in user code.

pub mod codec;
pub mod error;
pub mod message;
pub mod reader;
pub mod varint;
pub mod writer;

pub use codec::{
    encode_batch, encode_message, FrameConfig, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_MESSAGE_SIZE,
};
pub use error::{FrameError, Result};
pub use message::{Message, MAX_CHANNEL, MAX_ID};
pub use reader::MessageReader;
pub use varint::{encoding_length, put_uvarint, MAX_VARINT_LEN};
pub use writer::MessageWriter;
