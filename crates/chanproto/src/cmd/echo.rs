use chanproto_conn::Listener;

use crate::cmd::EchoArgs;
use crate::exit::{conn_error, CliResult, SUCCESS};

pub fn run(args: EchoArgs) -> CliResult<i32> {
    let listener =
        Listener::bind(&*args.addr).map_err(|err| conn_error("bind failed", err))?;
    let mut conn = listener
        .accept()
        .map_err(|err| conn_error("accept failed", err))?;

    loop {
        match conn.read_message() {
            Ok(message) => {
                tracing::info!(
                    id = message.id,
                    channel = message.channel,
                    size = message.data.len(),
                    "echoing message"
                );
                conn.send(std::slice::from_ref(&message))
                    .map_err(|err| conn_error("echo send failed", err))?;
            }
            Err(err) if err.is_end_of_stream() => return Ok(SUCCESS),
            Err(err) => return Err(conn_error("receive failed", err)),
        }
    }
}
