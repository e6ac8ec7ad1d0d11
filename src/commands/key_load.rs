use std::path::Path;

use crate::error::Result;
use crate::key_store;

/// Raw bytes of a public- or secret-key file. Which one it is is up to the caller.
pub fn load_key_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    key_store::load(path)
}
