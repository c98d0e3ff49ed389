use classic_crypto::ClassicCryptoError;

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Crypto(#[from] ClassicCryptoError),

    #[error("Could not read message from {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read message from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("Hill key matrix needs exactly 4 letters, got {0}")]
    MatrixLength(usize),

    #[error("Output serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
