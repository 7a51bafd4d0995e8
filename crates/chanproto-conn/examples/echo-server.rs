//! Minimal echo server: accepts one peer and echoes messages back.
//!
//! Run with:
//!   cargo run --example echo-server
//!
//! In another terminal:
//!   cargo run --example send-client

use chanproto_conn::Listener;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let listener = Listener::bind("127.0.0.1:7400")?;
    eprintln!("Listening on {}", listener.local_addr()?);

    // Accept one peer and echo messages until disconnect.
    let mut conn = listener.accept()?;
    eprintln!("Peer connected: {}", conn.peer_addr()?);

    loop {
        match conn.read_message() {
            Ok(message) => {
                eprintln!(
                    "Received {} bytes on channel {} (id {})",
                    message.data.len(),
                    message.channel,
                    message.id
                );
                conn.send(std::slice::from_ref(&message))?;
            }
            Err(e) => {
                eprintln!("Peer disconnected: {e}");
                break;
            }
        }
    }

    Ok(())
}
