//! File system abstraction and recursive copy
//!
//! All installer and catalog logic goes through the [`FileSystem`] trait so it can
//! run against the real disk ([`OsFileSystem`]), against an in-memory tree in
//! tests, or against a write-suppressing wrapper for `--dry-run`.

use std::fs;
use std::io;
use std::path::Path;

/// Kind of a file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// A single directory entry as returned by [`FileSystem::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Minimal file system interface used by the installer
pub trait FileSystem {
    /// Kind of the entry at `path`, or `None` when nothing exists there
    fn kind(&self, path: &Path) -> Option<EntryKind>;

    /// Entries directly under `path`, sorted by name. Entry kinds do not
    /// follow symlinks: a link is always reported as a file.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a single file. The parent of `dst` must already exist.
    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Remove a file, or a directory together with everything below it
    fn remove(&self, path: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool {
        self.kind(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::Dir)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::File)
    }
}

/// File system backed by `std::fs`
///
/// `kind` follows symlinks, `read_dir` does not. Permissions are whatever the
/// OS applies by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(path).ok()?;
        if metadata.is_dir() {
            Some(EntryKind::Dir)
        } else {
            Some(EntryKind::File)
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        fs::copy(src, dst).map(|_| ())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        // symlink_metadata so a link to a directory is unlinked, not emptied
        if fs::symlink_metadata(path)?.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}

/// Counts gathered by [`copy_tree`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

impl CopyStats {
    fn add(&mut self, other: CopyStats) {
        self.files += other.files;
        self.dirs += other.dirs;
    }
}

/// Mirror `src` into `dst`
///
/// A file is copied to `dst` (its parent directory is created first). A directory
/// is recreated at `dst` and every entry below it is copied recursively. Existing
/// content at `dst` is not removed; callers that need replace semantics remove it
/// beforehand.
///
/// Only `src` itself is resolved through symlinks. Links below it are copied as
/// files, so a link to a directory fails the copy instead of recursing.
pub fn copy_tree<F>(fs: &F, src: &Path, dst: &Path) -> io::Result<CopyStats>
where
    F: FileSystem + ?Sized,
{
    let kind = fs.kind(src).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", src.display()),
        )
    })?;
    copy_entry(fs, src, dst, kind)
}

fn copy_entry<F>(fs: &F, src: &Path, dst: &Path, kind: EntryKind) -> io::Result<CopyStats>
where
    F: FileSystem + ?Sized,
{
    match kind {
        EntryKind::File => {
            if let Some(parent) = dst.parent() {
                fs.create_dir_all(parent)?;
            }
            fs.copy_file(src, dst)?;
            Ok(CopyStats { files: 1, dirs: 0 })
        }
        EntryKind::Dir => {
            fs.create_dir_all(dst)?;
            let mut stats = CopyStats { files: 0, dirs: 1 };

            for entry in fs.read_dir(src)? {
                let entry_src = src.join(&entry.name);
                let entry_dst = dst.join(&entry.name);
                stats.add(copy_entry(fs, &entry_src, &entry_dst, entry.kind)?);
            }

            Ok(stats)
        }
    }
}
