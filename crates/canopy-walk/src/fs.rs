//! Filesystem abstraction for the walker.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// The filesystem surface the walker depends on.
///
/// Paths are joined with [`Path::join`]; `list_children` yields names
/// only, not full paths.
pub trait FileSystem {
    /// Size in bytes of the entry at `path` itself.
    fn size_of(&self, path: &Path) -> io::Result<u64>;

    /// Whether `path` names a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Names of the direct children of the directory at `path`.
    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// [`FileSystem`] implementation over `std::fs`.
///
/// Child names are sorted so walks are deterministic across platforms
/// and filesystems.
#[derive(Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        names.sort();
        Ok(names)
    }
}
