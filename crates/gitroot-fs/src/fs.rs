//! Filesystem provider used by the resolver.
//!
//! The resolver only ever needs to ask what kind of entry lives at a path and
//! to read a small text file. Keeping that behind a trait lets callers probe
//! something other than the local disk.

use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Kind of a filesystem entry, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Anything else: sockets, devices, dangling or looping symlinks.
    Other,
}

/// The filesystem primitives the resolver depends on.
pub trait FileSystem {
    /// Classify the entry at `path`, or `Ok(None)` when nothing is there.
    fn entry_kind(&self, path: &NormalizedPath) -> Result<Option<EntryKind>>;

    /// Read the entry at `path` as UTF-8 text.
    fn read_text(&self, path: &NormalizedPath) -> Result<String>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn entry_kind(&self, path: &NormalizedPath) -> Result<Option<EntryKind>> {
        (**self).entry_kind(path)
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        (**self).read_text(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

fn kind_of(meta: &Metadata) -> EntryKind {
    if meta.is_dir() {
        EntryKind::Directory
    } else if meta.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

impl FileSystem for StdFileSystem {
    fn entry_kind(&self, path: &NormalizedPath) -> Result<Option<EntryKind>> {
        let native = path.to_native();
        match fs::symlink_metadata(&native) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(&native, e)),
            Ok(meta) if !meta.file_type().is_symlink() => return Ok(Some(kind_of(&meta))),
            Ok(_) => {}
        }

        match fs::metadata(&native) {
            Ok(meta) => Ok(Some(kind_of(&meta))),
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Symlink target is not reachable");
                Ok(Some(EntryKind::Other))
            }
        }
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        let native = path.to_native();
        let bytes = fs::read(&native).map_err(|e| Error::io(&native, e))?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { path: native })
    }
}

/// Canonicalize an existing path, without the `\\?\` prefix on Windows.
pub fn canonicalize(path: impl AsRef<Path>) -> Result<NormalizedPath> {
    let path = path.as_ref();
    let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
    NormalizedPath::try_new(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_kind_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let missing = NormalizedPath::new(temp.path().join("nope"));
        assert_eq!(StdFileSystem.entry_kind(&missing).unwrap(), None);
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bin");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = StdFileSystem
            .read_text(&NormalizedPath::new(&file))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_other() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

        let kind = StdFileSystem.entry_kind(&NormalizedPath::new(&link)).unwrap();
        assert_eq!(kind, Some(EntryKind::Other));
    }
}
