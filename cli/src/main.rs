mod args;
mod errors;
mod input;

use args::{Action, Args, CipherKind, OutputFormat};
use errors::CliError;

use classic_crypto::{
    Cipher, ClassicCryptoError, Hill, KeyMatrix, Playfair, Vigenere, ensure_key_length,
};
use clap::Parser;
use serde::Serialize;

use std::process::ExitCode;

#[derive(Debug, Serialize)]
struct Report<'a> {
    cipher: CipherKind,
    action: Action,
    result: &'a str,
}

/// Builds the selected cipher from the key material given on the command line.
///
/// Vigenère and Playfair keys are length-checked here, the core accepts any key.
fn build_cipher(args: &Args) -> Result<Box<dyn Cipher>, CliError> {
    match args.cipher {
        CipherKind::Vigenere | CipherKind::Playfair => {
            let key = args.key.as_deref().ok_or_else(|| {
                ClassicCryptoError::MissingKey(format!("--key is required for {:?}", args.cipher))
            })?;
            ensure_key_length(key)?;

            let cipher: Box<dyn Cipher> = match args.cipher {
                CipherKind::Vigenere => Box::new(Vigenere::new(key)),
                _ => Box::new(Playfair::new(key)),
            };
            Ok(cipher)
        }
        CipherKind::Hill => {
            let letters = args.matrix.as_deref().ok_or_else(|| {
                ClassicCryptoError::MissingKey("--matrix is required for hill".into())
            })?;
            let cipher: Box<dyn Cipher> = Box::new(Hill::new(parse_matrix(letters)?));
            Ok(cipher)
        }
    }
}

/// Four letters, row by row; whitespace between them is ignored.
fn parse_matrix(letters: &str) -> Result<KeyMatrix, CliError> {
    let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
    let letters: [char; 4] = letters
        .as_slice()
        .try_into()
        .map_err(|_| CliError::MatrixLength(letters.len()))?;

    Ok(KeyMatrix::from_letters(letters)?)
}

fn run(args: &Args, message: &str) -> Result<String, CliError> {
    let cipher = build_cipher(args)?;
    log::debug!("{:?} with {}", args.action, cipher.name());

    let result = match args.action {
        Action::Encrypt => cipher.encrypt(message),
        Action::Decrypt => cipher.decrypt(message)?,
    };

    match args.format {
        OutputFormat::Text => Ok(result),
        OutputFormat::Json => Ok(serde_json::to_string(&Report {
            cipher: args.cipher,
            action: args.action,
            result: &result,
        })?),
    }
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let args = Args::parse();

    let outcome = input::read_message(&args).and_then(|message| run(&args, &message));
    match outcome {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
