use std::fs::File;
use std::io::Read;

use chanproto_frame::{FrameConfig, FrameError, MessageReader};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let source: Box<dyn Read> = match &args.file {
        Some(path) => Box::new(File::open(path).map_err(|err| {
            crate::exit::io_error(&format!("failed opening {}", path.display()), err)
        })?),
        None => Box::new(std::io::stdin()),
    };

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_message_size {
        config.max_message_size = max;
    }
    let mut reader = MessageReader::with_config(source, config);

    loop {
        match reader.read_message() {
            Ok(message) => print_message(&message, format),
            Err(FrameError::EndOfStream) => return Ok(SUCCESS),
            Err(err) => return Err(frame_error("decode failed", err)),
        }
    }
}
