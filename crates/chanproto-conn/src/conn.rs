use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use chanproto_frame::{Message, MessageReader, MessageWriter};
use tracing::debug;

use crate::error::{ConnError, Result};
use crate::pipeline::Pipeline;

/// A chanproto network connection.
///
/// Pairs a [`MessageReader`] and [`MessageWriter`] over two handles to one
/// TCP stream, plus a [`Pipeline`] to sequence concurrent requests issued
/// through [`send`](Conn::send).
pub struct Conn {
    reader: MessageReader<TcpStream>,
    writer: MessageWriter<TcpStream>,
    pipeline: Pipeline,
    stream: TcpStream,
}

/// Connect to `addr` and return a [`Conn`] for the stream.
pub fn connect(addr: impl ToSocketAddrs) -> Result<Conn> {
    let mut last_err = None;
    for candidate in addr.to_socket_addrs().map_err(ConnError::Io)? {
        match TcpStream::connect(candidate) {
            Ok(stream) => {
                debug!(addr = %candidate, "connected");
                return Conn::from_stream(stream);
            }
            Err(err) => last_err = Some((candidate, err)),
        }
    }
    match last_err {
        Some((candidate, source)) => Err(ConnError::Connect {
            addr: candidate.to_string(),
            source,
        }),
        None => Err(ConnError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "no addresses to connect to",
        ))),
    }
}

impl Conn {
    /// Build a connection around an established stream.
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let read_half = stream.try_clone().map_err(ConnError::Io)?;
        let write_half = stream.try_clone().map_err(ConnError::Io)?;
        Ok(Self {
            reader: MessageReader::new(read_half),
            writer: MessageWriter::new(write_half),
            pipeline: Pipeline::new(),
            stream,
        })
    }

    /// Send one or more messages after waiting for this sender's turn in
    /// the pipeline.
    ///
    /// Returns the pipeline id assigned to this send, for use with
    /// [`start_response`](Conn::start_response) /
    /// [`end_response`](Conn::end_response).
    pub fn send(&mut self, messages: &[Message]) -> Result<u64> {
        let id = self.pipeline.next();
        self.pipeline.start_request(id);
        let result = match messages {
            [single] => self.writer.write_message(single),
            batch => self.writer.write_batch(batch),
        };
        self.pipeline.end_request(id);
        result?;
        Ok(id)
    }

    /// Read the next message from the peer (blocking).
    pub fn read_message(&mut self) -> Result<Message> {
        Ok(self.reader.read_message()?)
    }

    /// Block until it is `id`'s turn to read its response.
    pub fn start_response(&self, id: u64) {
        self.pipeline.start_response(id);
    }

    /// Mark `id`'s response as consumed.
    pub fn end_response(&self, id: u64) {
        self.pipeline.end_response(id);
    }

    /// The request/response sequencer for this connection.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The address of the remote peer.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    /// The local address of this connection.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream.local_addr()?)
    }

    /// Shut down both directions and drop the connection.
    pub fn close(self) -> Result<()> {
        debug!("closing connection");
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer may already have torn the stream down.
            Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(err) => Err(ConnError::Io(err)),
        }
    }
}
