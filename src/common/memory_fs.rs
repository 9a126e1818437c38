//! In-memory [`FileSystem`] used by unit tests
//!
//! Mirrors the OS semantics the installer relies on: copying into a missing
//! parent fails, removing a directory removes everything below it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::fs::{DirEntry, EntryKind, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.nodes.borrow_mut().insert(PathBuf::from("/"), Node::Dir);
        fs
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        self.write(path, contents);
        self
    }

    /// Write a file, creating missing parent directories
    pub fn write(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.into()));
    }

    /// File contents as UTF-8, `None` for directories and missing paths
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(bytes)) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    }

    /// Every path at or below `root`, in sorted order
    pub fn paths_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.nodes
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn kind(&self, path: &Path) -> Option<EntryKind> {
        match self.nodes.borrow().get(path)? {
            Node::Dir => Some(EntryKind::Dir),
            Node::File(_) => Some(EntryKind::File),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::other(format!(
                    "{}: not a directory",
                    path.display()
                )));
            }
            None => return Err(not_found(path)),
        }

        let mut entries: Vec<DirEntry> = nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::Dir => EntryKind::Dir,
                    Node::File(_) => EntryKind::File,
                };
                Some(DirEntry { name, kind })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(bytes)) => String::from_utf8(bytes.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(Node::Dir) => Err(io::Error::other(format!(
                "{}: is a directory",
                path.display()
            ))),
            None => Err(not_found(path)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            match nodes.get(ancestor) {
                Some(Node::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{}: file exists", ancestor.display()),
                    ));
                }
                Some(Node::Dir) => {}
                None => {
                    nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        let bytes = match nodes.get(src) {
            Some(Node::File(bytes)) => bytes.clone(),
            _ => return Err(not_found(src)),
        };
        match dst.parent().and_then(|parent| nodes.get(parent)) {
            Some(Node::Dir) => {}
            _ => return Err(not_found(dst)),
        }
        if let Some(Node::Dir) = nodes.get(dst) {
            return Err(io::Error::other(format!(
                "{}: is a directory",
                dst.display()
            )));
        }
        nodes.insert(dst.to_path_buf(), Node::File(bytes));
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if !nodes.contains_key(path) {
            return Err(not_found(path));
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_parents() {
        let fs = MemoryFileSystem::new().with_file("/a/b/c.txt", "x");

        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(fs.is_file(Path::new("/a/b/c.txt")));
    }

    #[test]
    fn test_read_dir_lists_direct_children_only() {
        let fs = MemoryFileSystem::new()
            .with_file("/root/b.md", "b")
            .with_file("/root/a/deep.md", "deep")
            .with_dir("/root/c");

        let names: Vec<String> = fs
            .read_dir(Path::new("/root"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["a", "b.md", "c"]);
    }

    #[test]
    fn test_copy_file_requires_parent() {
        let fs = MemoryFileSystem::new().with_file("/src.md", "x");

        let err = fs
            .copy_file(Path::new("/src.md"), Path::new("/missing/dst.md"))
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_is_recursive_and_component_aware() {
        let fs = MemoryFileSystem::new()
            .with_file("/d/skill/a.md", "a")
            .with_file("/d/skill/sub/b.md", "b")
            .with_file("/d/skill-two/c.md", "c");

        fs.remove(Path::new("/d/skill")).unwrap();

        assert!(!fs.exists(Path::new("/d/skill")));
        assert!(!fs.exists(Path::new("/d/skill/sub/b.md")));
        assert!(fs.is_file(Path::new("/d/skill-two/c.md")));
    }

    #[test]
    fn test_create_dir_all_over_file_fails() {
        let fs = MemoryFileSystem::new().with_file("/f", "x");

        assert!(fs.create_dir_all(Path::new("/f/sub")).is_err());
    }
}
