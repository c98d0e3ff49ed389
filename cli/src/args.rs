use clap::{Parser, ValueEnum};
use serde::Serialize;

use std::path::PathBuf;

/// Encrypt or decrypt text with the Vigenère, Playfair or Hill cipher.
#[derive(Parser, Debug)]
#[command(name = "classic-cli")]
#[command(version)]
pub struct Args {
    /// Cipher to use
    #[arg(short, long, value_enum)]
    pub cipher: CipherKind,

    /// Whether to encrypt or decrypt the message
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Read the message from a text file
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Message given inline; stdin is read when neither this nor --file is set
    #[arg(short, long)]
    pub message: Option<String>,

    /// Key for Vigenère and Playfair (at least 12 characters)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Hill key matrix as four letters, row by row (e.g. DDCF)
    #[arg(long, value_name = "LETTERS")]
    pub matrix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Vigenere,
    Playfair,
    Hill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Encrypt,
    Decrypt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
