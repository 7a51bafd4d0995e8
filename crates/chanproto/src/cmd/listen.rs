use chanproto_conn::Listener;

use crate::cmd::ListenArgs;
use crate::exit::{conn_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: ListenArgs, format: OutputFormat) -> CliResult<i32> {
    let listener =
        Listener::bind(&*args.addr).map_err(|err| conn_error("bind failed", err))?;
    let mut conn = listener
        .accept()
        .map_err(|err| conn_error("accept failed", err))?;

    let mut received = 0usize;
    loop {
        if let Some(count) = args.count {
            if received >= count {
                return Ok(SUCCESS);
            }
        }
        match conn.read_message() {
            Ok(message) => {
                if let Some(channel) = args.channel {
                    if message.channel != channel {
                        continue;
                    }
                }
                print_message(&message, format);
                received += 1;
            }
            Err(err) if err.is_end_of_stream() => return Ok(SUCCESS),
            Err(err) => return Err(conn_error("receive failed", err)),
        }
    }
}
