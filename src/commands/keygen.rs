use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::key::KeyPair;
use crate::key_store;

/// Where `create_key_pair` put the two halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPairPaths {
    pub public_key_path: PathBuf,
    pub secret_key_path: PathBuf,
}

/// Generates a key pair and writes `public.key` and `private.key` into `destination_dir`,
/// creating the directory if needed. Existing files are overwritten.
pub fn create_key_pair(destination_dir: impl AsRef<Path>) -> Result<KeyPairPaths> {
    let dir = destination_dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| Error::write(dir, e))?;

    let key_pair = KeyPair::generate()?;

    let paths = KeyPairPaths {
        public_key_path: dir.join(Defaults::PUBLIC_KEY_FILE_NAME),
        secret_key_path: dir.join(Defaults::SECRET_KEY_FILE_NAME),
    };

    // Secret first: if the public write then fails, derive-public can rebuild it.
    key_store::save_secret(&paths.secret_key_path, key_pair.secret_key())?;
    key_store::save(&paths.public_key_path, key_pair.public_key())?;

    info!(dir = %dir.display(), "created key pair");
    Ok(paths)
}
