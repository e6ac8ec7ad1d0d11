use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Key file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// Wrong key pair, corrupted or truncated message. Deliberately carries no detail.
    #[error("Authentication failed")]
    AuthenticationFailure,

    #[error("Secure random source unavailable: {0}")]
    SecureRandomUnavailable(String),

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Message too large: {len} bytes (maximum {max})")]
    MessageTooLarge { len: usize, max: usize },

    #[error("Decrypted message is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Encryption failed")]
    EncryptionFailed,
}

impl Error {
    /// A missing file is `NotFound`, anything else `Io`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound { path }
        } else {
            Error::Io { path, source }
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
