//! Sends a few messages to the echo server and prints the replies.
//!
//! Run with:
//!   cargo run --example send-client

use chanproto_conn::connect;
use chanproto_frame::Message;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = connect("127.0.0.1:7400")?;

    for (id, channel, payload) in [(1u64, 0u8, "hello"), (2, 3, "world"), (3, 15, "bye")] {
        let request = Message::new(id, channel, payload.as_bytes().to_vec())?;
        let pipeline_id = conn.send(std::slice::from_ref(&request))?;
        let reply = conn.read_message()?;
        eprintln!(
            "send #{pipeline_id} -> id={} channel={} payload={:?}",
            reply.id,
            reply.channel,
            String::from_utf8_lossy(&reply.data)
        );
    }

    conn.close()?;
    Ok(())
}
