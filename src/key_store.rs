//! Raw key files: exactly the key bytes, no header or encoding.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads the whole file. Length is not checked here.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "loaded key file");
    Ok(bytes)
}

/// Creates or overwrites `path`. Not atomic: a failed write may leave a partial file.
pub fn save(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).map_err(|e| Error::write(path, e))?;
    write_all(path, f, bytes)
}

/// Like [`save`], but on Unix the file is created owner read/write only.
pub fn save_secret(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let f = options.open(path).map_err(|e| Error::write(path, e))?;

    // mode() only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::write(path, e))?;
    }

    write_all(path, f, bytes)
}

fn write_all(path: &Path, f: File, bytes: &[u8]) -> Result<()> {
    let mut w = BufWriter::new(f);
    w.write_all(bytes).map_err(|e| Error::write(path, e))?;
    w.flush().map_err(|e| Error::write(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "wrote key file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.key");

        save(&path, &[1, 2, 3]).unwrap();
        assert_eq!(load(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.key");

        save(&path, &[0u8; 64]).unwrap();
        save(&path, &[5u8; 32]).unwrap();
        assert_eq!(load(&path).unwrap(), vec![5u8; 32]);
    }

    #[test]
    fn load_accepts_any_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.key");

        save(&path, b"not a key").unwrap();
        assert_eq!(load(&path).unwrap(), b"not a key");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does/not/exist.key");

        match load(&path) {
            Err(Error::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = save(dir.path().join("nope").join("public.key"), &[1]);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn unwritable_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file for writing.
        let result = save(dir.path(), &[1]);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn secret_files_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.key");

        save(&path, &[0u8; 4]).unwrap();
        save_secret(&path, &[9u8; 32]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(load(&path).unwrap(), vec![9u8; 32]);
    }
}
