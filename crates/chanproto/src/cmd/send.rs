use std::fs;

use chanproto_conn::connect;
use chanproto_frame::Message;

use crate::cmd::SendArgs;
use crate::exit::{conn_error, frame_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let message = Message::new(args.id, args.channel, payload)
        .map_err(|err| frame_error("invalid message", err))?;

    let mut conn = connect(&*args.addr).map_err(|err| conn_error("connect failed", err))?;
    conn.send(std::slice::from_ref(&message))
        .map_err(|err| conn_error("send failed", err))?;

    if args.wait {
        let reply = conn
            .read_message()
            .map_err(|err| conn_error("receive failed", err))?;
        print_message(&reply, format);
    }

    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path).map_err(|err| {
            crate::exit::io_error(&format!("failed reading {}", path.display()), err)
        });
    }
    Ok(Vec::new())
}
