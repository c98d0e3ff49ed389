use crate::args::Args;
use crate::errors::CliError;

use std::fs;
use std::io::{self, Read};

/// Message from `--message`, `--file` or stdin, in that order of preference.
///
/// A file is taken whole; text piped through stdin loses one trailing newline.
pub fn read_message(args: &Args) -> Result<String, CliError> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }

    if let Some(path) = &args.file {
        log::debug!("reading message from {}", path.display());
        return fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }

    log::debug!("reading message from stdin");
    read_from(io::stdin().lock())
}

fn read_from(mut reader: impl Read) -> Result<String, CliError> {
    let mut message = String::new();
    reader
        .read_to_string(&mut message)
        .map_err(CliError::Stdin)?;

    Ok(strip_line_ending(message))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
