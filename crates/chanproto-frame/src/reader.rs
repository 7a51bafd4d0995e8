use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::codec::{FrameConfig, MIN_BUFFER_SIZE};
use crate::error::{FrameError, Result};
use crate::message::Message;
use crate::varint::{VarintDecoder, VarintStep};

/// Upper bound on consecutive reads that yield no bytes before the reader
/// gives up with [`FrameError::NoProgress`].
const MAX_CONSECUTIVE_EMPTY_READS: usize = 16;

/// Parser phase. Each frame passes through all three in order; a varint
/// completing or a payload filling up drives the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Expecting the frame's body-length varint.
    Len,
    /// Expecting the packed id/channel header varint.
    Header,
    /// Copying payload bytes.
    Payload,
}

/// Reads complete messages from any `Read` stream.
///
/// The reader owns a fixed-capacity buffer and a resumable parser, so the
/// stream may be fragmented at any byte (including inside a varint) and
/// callers still only ever see whole messages. End of stream is reported as
/// `Err(FrameError::EndOfStream)`.
///
/// A frame must fit in the buffer together with its own length prefix; a
/// frame that cannot is rejected with [`FrameError::ShortBuffer`]. After any
/// terminal error has been returned, subsequent calls report `EndOfStream`
/// without touching the underlying stream again.
pub struct MessageReader<T> {
    inner: T,
    buf: Box<[u8]>,
    /// Read index: `buf[r..w]` is buffered but not yet parsed.
    r: usize,
    /// Write index: `buf[w..]` is free.
    w: usize,
    phase: Phase,
    varint: VarintDecoder,
    /// In `Header`: the declared body length. In `Payload`: payload bytes
    /// still owed. Zero in `Len`.
    body_len: usize,
    header: u64,
    payload: Vec<u8>,
    queued: VecDeque<Message>,
    err: Option<FrameError>,
    closed: bool,
    config: FrameConfig,
}

impl<T: Read> MessageReader<T> {
    /// Create a reader with the default buffer capacity.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a reader with an explicit buffer capacity.
    ///
    /// Capacities below the minimum of 16 bytes are clamped up.
    pub fn with_capacity(inner: T, capacity: usize) -> Self {
        Self::with_config(
            inner,
            FrameConfig {
                buffer_size: capacity,
                ..FrameConfig::default()
            },
        )
    }

    /// Create a reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        let capacity = config.buffer_size.max(MIN_BUFFER_SIZE);
        Self {
            inner,
            buf: vec![0u8; capacity].into_boxed_slice(),
            r: 0,
            w: 0,
            phase: Phase::Len,
            varint: VarintDecoder::new(),
            body_len: 0,
            header: 0,
            payload: Vec::new(),
            queued: VecDeque::new(),
            err: None,
            closed: false,
            config,
        }
    }

    /// Read the next complete message (blocking).
    ///
    /// Messages are returned in stream order. Any terminal condition is
    /// reported exactly once; from then on every call returns
    /// [`FrameError::EndOfStream`].
    pub fn read_message(&mut self) -> Result<Message> {
        loop {
            if let Some(err) = self.err.take() {
                self.r = self.w;
                self.closed = true;
                return Err(err);
            }

            if self.closed {
                return Err(FrameError::EndOfStream);
            }

            // Completed message waiting?
            if let Some(message) = self.queued.pop_front() {
                self.compact();
                return Ok(message);
            }

            // A parser that is still at the frame boundary after consuming
            // more than one byte is not advancing: the bytes do not start a
            // frame.
            if self.phase == Phase::Len && self.r > 1 {
                self.r = self.w;
                self.closed = true;
                return Err(FrameError::NoProgress);
            }

            if self.r < self.w {
                self.advance();
                continue;
            }

            // A frame may owe zero payload bytes; emit without reading.
            if self.phase == Phase::Payload && self.body_len == 0 {
                self.finish_payload();
                continue;
            }

            // Would the rest of this frame ever fit?
            let needed = self.body_len.saturating_sub(self.varint.consumed());
            if needed > self.buf.len() - self.w {
                self.r = self.w;
                self.closed = true;
                return Err(FrameError::ShortBuffer);
            }

            self.fill();
        }
    }

    /// Discard all state and continue reading from `inner`.
    ///
    /// The buffer allocation is kept.
    pub fn reset(&mut self, inner: T) {
        self.inner = inner;
        self.r = 0;
        self.w = 0;
        self.phase = Phase::Len;
        self.varint.reset();
        self.body_len = 0;
        self.header = 0;
        self.payload = Vec::new();
        self.queued.clear();
        self.err = None;
        self.closed = false;
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Move the unparsed tail to the front of the buffer.
    fn compact(&mut self) {
        if self.r > 0 {
            self.buf.copy_within(self.r..self.w, 0);
            self.w -= self.r;
            self.r = 0;
        }
    }

    /// Parse buffered bytes until one unit (varint or payload) completes or
    /// the buffer drains.
    fn advance(&mut self) {
        match self.phase {
            Phase::Payload => self.read_payload(),
            Phase::Len | Phase::Header => self.read_varint(),
        }
    }

    fn read_varint(&mut self) {
        while self.r < self.w {
            let byte = self.buf[self.r];
            self.r += 1;
            match self.varint.feed(byte) {
                VarintStep::Complete(value) => {
                    self.finish_varint(value);
                    return;
                }
                VarintStep::NeedMore => {}
                VarintStep::Malformed => {
                    self.err = Some(FrameError::Malformed);
                    self.r = self.w;
                    return;
                }
            }
        }
    }

    fn finish_varint(&mut self, value: u64) {
        match self.phase {
            Phase::Len => {
                self.body_len = value as usize;
                self.varint.reset();
                // Zero-length frames carry nothing; stay at the boundary.
                if self.body_len > 0 {
                    self.phase = Phase::Header;
                }
            }
            Phase::Header => {
                let consumed = self.varint.consumed();
                self.header = value;
                self.varint.reset();
                if consumed > self.body_len {
                    self.err = Some(FrameError::Malformed);
                    return;
                }
                self.body_len -= consumed;
                if self.body_len > self.config.max_message_size {
                    self.err = Some(FrameError::MessageTooBig {
                        size: self.body_len,
                        max: self.config.max_message_size,
                    });
                    return;
                }
                self.payload = Vec::with_capacity(self.body_len);
                self.phase = Phase::Payload;
            }
            Phase::Payload => unreachable!("varint completion outside a varint phase"),
        }
    }

    fn read_payload(&mut self) {
        let take = (self.w - self.r).min(self.body_len);
        self.payload
            .extend_from_slice(&self.buf[self.r..self.r + take]);
        self.r += take;
        self.body_len -= take;
        if self.body_len == 0 {
            self.finish_payload();
        }
    }

    fn finish_payload(&mut self) {
        let payload = std::mem::take(&mut self.payload);
        self.queued.push_back(Message {
            id: self.header >> 4,
            channel: (self.header & 0xF) as u8,
            data: Bytes::from(payload),
        });
        self.phase = Phase::Len;
        self.varint.reset();
        self.body_len = 0;
    }

    /// Refill the buffer from the stream with bounded retries.
    ///
    /// Any failure lands in the sticky error slot; the drive loop surfaces
    /// it on its next pass.
    fn fill(&mut self) {
        self.compact();

        assert!(
            self.w < self.buf.len(),
            "chanproto-frame: tried to fill full read buffer"
        );

        for _ in 0..MAX_CONSECUTIVE_EMPTY_READS {
            match self.inner.read(&mut self.buf[self.w..]) {
                Ok(0) => {
                    self.err = Some(if self.mid_frame() {
                        FrameError::UnexpectedEndOfStream
                    } else {
                        FrameError::EndOfStream
                    });
                    return;
                }
                Ok(n) => {
                    self.w += n;
                    return;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.err = Some(FrameError::Io(err));
                    return;
                }
            }
        }
        self.err = Some(FrameError::NoProgress);
    }

    /// End of stream is only clean at a frame boundary with no partial
    /// varint consumed.
    fn mid_frame(&self) -> bool {
        self.phase != Phase::Len || self.varint.consumed() > 0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::Cursor;

    use bytes::BytesMut;

    use super::*;
    use crate::codec::{encode_message, DEFAULT_MAX_MESSAGE_SIZE};

    /// Cycling lowercase payload filler.
    fn fill_pattern(len: usize) -> Vec<u8> {
        const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
        (0..len).map(|i| CHARS[i % CHARS.len()]).collect()
    }

    fn message(id: u64, channel: u8, payload_len: usize) -> Message {
        Message::new(id, channel, fill_pattern(payload_len)).unwrap()
    }

    fn encode(id: u64, channel: u8, payload_len: usize) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_message(&message(id, channel, payload_len), &mut buf).unwrap();
        buf.to_vec()
    }

    fn chunks_of(bytes: &[u8], size: usize) -> Vec<Vec<u8>> {
        bytes.chunks(size).map(<[u8]>::to_vec).collect()
    }

    /// Scripted byte source. Delivers one chunk per read (split if the
    /// destination is smaller), signals `Interrupted` for empty chunks and
    /// end of stream once exhausted.
    struct ChunkSource {
        chunks: VecDeque<Vec<u8>>,
    }

    impl ChunkSource {
        fn new(chunks: Vec<Vec<u8>>) -> Self {
            Self {
                chunks: chunks.into(),
            }
        }
    }

    impl Read for ChunkSource {
        fn read(&mut self, dst: &mut [u8]) -> std::io::Result<usize> {
            let Some(mut chunk) = self.chunks.pop_front() else {
                return Ok(0);
            };
            if chunk.is_empty() {
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if chunk.len() > dst.len() {
                let rest = chunk.split_off(dst.len());
                self.chunks.push_front(rest);
            }
            dst[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    fn reader_over(chunks: Vec<Vec<u8>>, capacity: usize) -> MessageReader<ChunkSource> {
        MessageReader::with_capacity(ChunkSource::new(chunks), capacity)
    }

    fn expect_message(reader: &mut MessageReader<ChunkSource>, id: u64, channel: u8, len: usize) {
        let got = reader.read_message().unwrap();
        assert_eq!(got, message(id, channel, len));
    }

    fn expect_eos(reader: &mut MessageReader<ChunkSource>) {
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::EndOfStream
        ));
    }

    #[test]
    fn basic() {
        let mut reader = reader_over(vec![encode(42, 3, 3)], 16);
        expect_message(&mut reader, 42, 3, 3);
        expect_eos(&mut reader);
    }

    #[test]
    fn smallest_header() {
        let mut reader = reader_over(vec![encode(0, 0, 0)], 16);
        expect_message(&mut reader, 0, 0, 0);
        expect_eos(&mut reader);
    }

    #[test]
    fn smallest_header_with_full_buffer_payload() {
        // 1 length byte + 1 header byte + 14 payload bytes = exactly 16.
        let mut reader = reader_over(vec![encode(0, 0, 14)], 16);
        expect_message(&mut reader, 0, 0, 14);
        expect_eos(&mut reader);
    }

    #[test]
    fn large_header() {
        let mut reader = reader_over(vec![encode(crate::MAX_ID, 15, 0)], 16);
        expect_message(&mut reader, crate::MAX_ID, 15, 0);
        expect_eos(&mut reader);
    }

    #[test]
    fn large_header_with_payload() {
        let mut reader = reader_over(vec![encode(crate::MAX_ID, 15, 5)], 16);
        expect_message(&mut reader, crate::MAX_ID, 15, 5);
        expect_eos(&mut reader);
    }

    #[test]
    fn byte_per_read() {
        let chunks = chunks_of(&encode(0, 0, 2), 1);
        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 0, 0, 2);
        expect_eos(&mut reader);
    }

    #[test]
    fn uneven_chunks() {
        let wire = encode(42, 3, 130);
        let cuts = [0, 1, 3, 17, 56, 89, 107, wire.len()];
        let chunks: Vec<Vec<u8>> = cuts
            .windows(2)
            .map(|pair| wire[pair[0]..pair[1]].to_vec())
            .collect();
        let mut reader = reader_over(chunks, 256);
        expect_message(&mut reader, 42, 3, 130);
        expect_eos(&mut reader);
    }

    #[test]
    fn two_messages_single_read() {
        let mut wire = encode(5, 10, 4);
        wire.extend(encode(42, 3, 7));
        assert_eq!(wire.len(), 16);

        let mut reader = reader_over(vec![wire], 16);
        expect_message(&mut reader, 5, 10, 4);
        expect_message(&mut reader, 42, 3, 7);
        expect_eos(&mut reader);
    }

    #[test]
    fn second_frame_needs_refill() {
        // 7 + 10 bytes against a 16-byte buffer: the second frame alone
        // fits, so it completes after the tail byte arrives in a refill.
        let mut wire = encode(5, 10, 5);
        wire.extend(encode(42, 3, 7));
        assert_eq!(wire.len(), 17);

        let mut reader = reader_over(vec![wire], 16);
        expect_message(&mut reader, 5, 10, 5);
        expect_message(&mut reader, 42, 3, 7);
        expect_eos(&mut reader);
    }

    #[test]
    fn many_messages_single_read() {
        let mut wire = Vec::new();
        for (id, channel, len) in [(5, 10, 2), (42, 3, 5), (27, 1, 8), (98_993, 15, 100)] {
            wire.extend(encode(id, channel, len));
        }
        let mut reader = reader_over(vec![wire], 256);
        expect_message(&mut reader, 5, 10, 2);
        expect_message(&mut reader, 42, 3, 5);
        expect_message(&mut reader, 27, 1, 8);
        expect_message(&mut reader, 98_993, 15, 100);
        expect_eos(&mut reader);
    }

    #[test]
    fn many_messages_chunked() {
        let mut chunks = chunks_of(&encode(5, 10, 2), 1);
        chunks.extend(chunks_of(&encode(42, 3, 5), 2));
        chunks.extend(chunks_of(&encode(crate::MAX_ID, 1, 5), 1));

        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 5, 10, 2);
        expect_message(&mut reader, 42, 3, 5);
        expect_message(&mut reader, crate::MAX_ID, 1, 5);
        expect_eos(&mut reader);
    }

    #[test]
    fn empty_stream() {
        let mut reader = reader_over(vec![], 16);
        expect_eos(&mut reader);
        // End of stream repeats.
        expect_eos(&mut reader);
    }

    #[test]
    fn short_buffer_single_frame() {
        // 17-byte frame against a 16-byte buffer.
        let wire = encode(0, 0, 15);
        assert_eq!(wire.len(), 17);

        let mut reader = reader_over(vec![wire], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
    }

    #[test]
    fn short_buffer_after_message() {
        let mut reader = reader_over(vec![encode(0, 1, 2), encode(42, 3, 14)], 16);
        expect_message(&mut reader, 0, 1, 2);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
    }

    #[test]
    fn short_buffer_chunked() {
        let mut wire = encode(0, 1, 2);
        wire.extend(encode(42, 3, 14));
        let mut reader = reader_over(chunks_of(&wire, 2), 16);
        expect_message(&mut reader, 0, 1, 2);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
    }

    #[test]
    fn short_buffer_after_many_chunked() {
        let mut chunks = chunks_of(&encode(5, 10, 2), 1);
        chunks.extend(chunks_of(&encode(42, 3, 5), 2));
        chunks.extend(chunks_of(&encode(crate::MAX_ID, 1, 6), 1));

        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 5, 10, 2);
        expect_message(&mut reader, 42, 3, 5);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
    }

    #[test]
    fn short_buffer_with_truncated_stream() {
        // The capacity verdict lands before the missing bytes matter.
        let wire = encode(0, 0, 15);
        let mut reader = reader_over(vec![wire[..12].to_vec()], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
    }

    #[test]
    fn stray_zero_bytes_stall() {
        let mut reader = reader_over(vec![vec![0u8; 2]], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::NoProgress
        ));
    }

    #[test]
    fn buffer_of_zero_bytes_stalls() {
        let mut reader = reader_over(vec![vec![0u8; 16]], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::NoProgress
        ));
    }

    #[test]
    fn single_leading_zero_frame_is_skipped() {
        let mut wire = vec![0u8];
        wire.extend(encode(42, 3, 2));
        let mut reader = reader_over(vec![wire], 16);
        expect_message(&mut reader, 42, 3, 2);
        expect_eos(&mut reader);
    }

    #[test]
    fn truncated_final_byte() {
        let wire = encode(0, 0, 14);
        assert_eq!(wire.len(), 16);
        let mut reader = reader_over(vec![wire[..15].to_vec()], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnexpectedEndOfStream
        ));
    }

    #[test]
    fn truncated_after_messages_chunked() {
        let truncated = encode(0, 0, 14)[..15].to_vec();
        let mut chunks = chunks_of(&encode(5, 10, 2), 1);
        chunks.extend(chunks_of(&encode(42, 3, 5), 2));
        chunks.extend(chunks_of(&truncated, 1));

        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 5, 10, 2);
        expect_message(&mut reader, 42, 3, 5);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnexpectedEndOfStream
        ));
    }

    #[test]
    fn truncated_before_header() {
        // Only the length varint of the second frame arrives.
        let second = encode(0, 0, 0);
        let mut reader = reader_over(vec![encode(5, 10, 2), second[..1].to_vec()], 16);
        expect_message(&mut reader, 5, 10, 2);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnexpectedEndOfStream
        ));
    }

    #[test]
    fn truncated_large_length_varint() {
        let second = encode(crate::MAX_ID, 0, 5);
        let mut reader = reader_over(vec![encode(5, 10, 2), second[..1].to_vec()], 16);
        expect_message(&mut reader, 5, 10, 2);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnexpectedEndOfStream
        ));
    }

    #[test]
    fn partial_varint_then_eof() {
        let mut reader = reader_over(vec![vec![0x80]], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnexpectedEndOfStream
        ));
    }

    #[test]
    fn max_consecutive_empty_reads() {
        let mut chunks = chunks_of(&encode(5, 10, 2), 2);
        chunks.extend(std::iter::repeat_with(Vec::new).take(100));

        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 5, 10, 2);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::NoProgress
        ));
    }

    #[test]
    fn stalled_source_mid_frame() {
        let wire = encode(0, 0, 14);
        let mut chunks = vec![wire[..4].to_vec()];
        chunks.extend(std::iter::repeat_with(Vec::new).take(40));

        let mut reader = reader_over(chunks, 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::NoProgress
        ));
    }

    #[test]
    fn big_messages_chunked() {
        let mut chunks = chunks_of(&encode(42, 3, 100_000), 2048);
        chunks.extend(chunks_of(&encode(crate::MAX_ID, 1, 100_000), 3052));

        let mut reader = reader_over(chunks, 100_000 + 4096);
        expect_message(&mut reader, 42, 3, 100_000);
        expect_message(&mut reader, crate::MAX_ID, 1, 100_000);
        expect_eos(&mut reader);
    }

    #[test]
    fn malformed_length_varint() {
        let mut reader = reader_over(vec![vec![0xFF; 11]], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::Malformed
        ));
        // The reader is closed afterwards.
        expect_eos(&mut reader);
    }

    #[test]
    fn malformed_header_varint() {
        // Valid length varint declaring a large body, then a header varint
        // of 11 continuation bytes.
        let mut wire = vec![0x20];
        wire.extend([0xFF; 11]);
        let mut reader = reader_over(vec![wire], 32);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::Malformed
        ));
    }

    #[test]
    fn header_longer_than_body_is_malformed() {
        // body_length 1 cannot contain a two-byte header varint.
        let mut reader = reader_over(vec![vec![0x01, 0x80, 0x01]], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::Malformed
        ));
    }

    #[test]
    fn oversized_body_rejected() {
        let config = FrameConfig {
            max_message_size: 64,
            buffer_size: 4096,
        };
        let mut buf = BytesMut::new();
        encode_message(&message(0, 0, 100), &mut buf).unwrap();
        let mut reader = MessageReader::with_config(ChunkSource::new(vec![buf.to_vec()]), config);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::MessageTooBig { size: 100, max: 64 }
        ));
    }

    #[test]
    fn default_size_limit_is_8_mib() {
        let reader = MessageReader::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(reader.config().max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
    }

    #[test]
    fn error_then_end_of_stream() {
        let wire = encode(0, 0, 15);
        let mut reader = reader_over(vec![wire], 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::ShortBuffer
        ));
        expect_eos(&mut reader);
        expect_eos(&mut reader);
    }

    #[test]
    fn io_error_propagates() {
        struct FailingSource;
        impl Read for FailingSource {
            fn read(&mut self, _dst: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::ConnectionReset))
            }
        }
        let mut reader = MessageReader::with_capacity(FailingSource, 16);
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::Io(err) if err.kind() == ErrorKind::ConnectionReset
        ));
    }

    #[test]
    fn interrupted_read_retries() {
        let mut chunks = vec![Vec::new(), Vec::new()];
        chunks.push(encode(8, 2, 3));
        let mut reader = reader_over(chunks, 16);
        expect_message(&mut reader, 8, 2, 3);
        expect_eos(&mut reader);
    }

    #[test]
    fn reset_reuses_buffer() {
        let mut reader = reader_over(vec![encode(1, 1, 2)], 64);
        expect_message(&mut reader, 1, 1, 2);
        expect_eos(&mut reader);

        reader.reset(ChunkSource::new(vec![encode(2, 2, 4)]));
        expect_message(&mut reader, 2, 2, 4);
        expect_eos(&mut reader);
        assert_eq!(reader.capacity(), 64);
    }

    #[test]
    fn minimum_capacity_is_enforced() {
        let reader = MessageReader::with_capacity(Cursor::new(Vec::<u8>::new()), 1);
        assert_eq!(reader.capacity(), 16);
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut reader = MessageReader::new(Cursor::new(Vec::<u8>::new()));
        let _ = reader.get_ref();
        let _ = reader.get_mut();
        let _inner = reader.into_inner();
    }
}
