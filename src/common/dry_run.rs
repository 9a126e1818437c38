//! Write-suppressing file system wrapper for `--dry-run`

use std::io;
use std::path::Path;

use super::fs::{DirEntry, EntryKind, FileSystem};

/// Delegates reads to the inner file system and drops every write
pub struct DryRunFileSystem<'a, F: FileSystem + ?Sized> {
    inner: &'a F,
}

impl<'a, F: FileSystem + ?Sized> DryRunFileSystem<'a, F> {
    pub fn new(inner: &'a F) -> Self {
        Self { inner }
    }
}

impl<F: FileSystem + ?Sized> FileSystem for DryRunFileSystem<'_, F> {
    fn kind(&self, path: &Path) -> Option<EntryKind> {
        self.inner.kind(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.inner.read_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn copy_file(&self, _src: &Path, _dst: &Path) -> io::Result<()> {
        Ok(())
    }

    fn remove(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
