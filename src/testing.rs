//! Testing utilities for fmgr
//!
//! This module provides [`MemoryFs`], an in-memory [`PlatformFs`] for
//! driving navigation and file commands without touching the disk.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Read, Write};
use std::rc::Rc;

use crate::platform::{FsError, PlatformFs, Result, compile_mask};

type FileMap = Rc<RefCell<BTreeMap<String, Vec<u8>>>>;

/// In-memory filesystem
///
/// Directories and files are keyed by their full path. Listings come back
/// in insertion order, which lets tests pin the "unsorted" contract.
///
/// # Examples
/// ```ignore
/// let fs = MemoryFs::unix()
///     .with_dir("/data/logs")
///     .with_file("/data/readme.txt", b"hi");
/// assert!(fs.directory_exists("/data"));
/// ```
#[derive(Debug)]
pub struct MemoryFs {
    separator: char,
    roots: Vec<String>,
    dirs: RefCell<Vec<String>>,
    files: FileMap,
    file_order: RefCell<Vec<String>>,
    denied: HashSet<String>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryFs {
    /// Unix layout with a single `/` root
    #[must_use]
    pub fn unix() -> Self {
        Self::new('/', &["/"])
    }

    /// Windows layout with the given drive roots (`C:\`)
    #[must_use]
    pub fn windows(roots: &[&str]) -> Self {
        Self::new('\\', roots)
    }

    fn new(separator: char, roots: &[&str]) -> Self {
        Self {
            separator,
            roots: roots.iter().map(ToString::to_string).collect(),
            dirs: RefCell::new(roots.iter().map(ToString::to_string).collect()),
            files: Rc::new(RefCell::new(BTreeMap::new())),
            file_order: RefCell::new(Vec::new()),
            denied: HashSet::new(),
            reads: Cell::new(0),
            writes: Cell::new(0),
        }
    }

    /// Add a directory and any missing ancestors
    #[must_use]
    pub fn with_dir(self, path: &str) -> Self {
        self.add_dir(path);
        self
    }

    /// Add a file (and its parent directories)
    #[must_use]
    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        if let Some(parent) = self.parent_of(path) {
            self.add_dir(&parent);
        }
        self.put_file(path, content.to_vec());
        self
    }

    /// Make every access below `path` fail with permission denied
    #[must_use]
    pub fn deny(mut self, path: &str) -> Self {
        self.denied.insert(path.to_string());
        self
    }

    /// Number of files opened for reading so far
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of files opened for writing so far
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    #[must_use]
    pub fn content(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    fn add_dir(&self, path: &str) {
        if self.dirs.borrow().iter().any(|d| d == path) {
            return;
        }
        if let Some(parent) = self.parent_of(path) {
            self.add_dir(&parent);
        }
        self.dirs.borrow_mut().push(path.to_string());
    }

    fn put_file(&self, path: &str, content: Vec<u8>) {
        if self.files.borrow_mut().insert(path.to_string(), content).is_none() {
            self.file_order.borrow_mut().push(path.to_string());
        }
    }

    fn remove_file(&self, path: &str) -> Option<Vec<u8>> {
        self.file_order.borrow_mut().retain(|f| f != path);
        self.files.borrow_mut().remove(path)
    }

    fn parent_of(&self, path: &str) -> Option<String> {
        if self.roots.iter().any(|r| r == path) {
            return None;
        }
        let pos = path.rfind(self.separator)?;
        let parent = &path[..pos];
        if parent.contains(self.separator) {
            Some(parent.to_string())
        } else {
            Some(format!("{parent}{}", self.separator))
        }
    }

    fn check(&self, path: &str) -> Result<()> {
        let blocked = self.denied.iter().any(|d| {
            path == d
                || path
                    .strip_prefix(d.as_str())
                    .is_some_and(|rest| rest.starts_with(self.separator))
        });
        if blocked {
            Err(FsError::access(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ))
        } else {
            Ok(())
        }
    }

    fn is_under(&self, entry: &str, dir: &str, recursive: bool) -> bool {
        let Some(parent) = self.parent_of(entry) else {
            return false;
        };
        if parent == dir {
            return true;
        }
        recursive && self.is_under(&parent, dir, true)
    }

    fn list(&self, path: &str, pattern: &str, recursive: bool, candidates: Vec<String>) -> Result<Vec<String>> {
        self.check(path)?;
        if !self.directory_exists(path) {
            return Err(FsError::access(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            ));
        }
        let mask = compile_mask(pattern)?;
        let sep = self.separator;
        Ok(candidates
            .into_iter()
            .filter(|entry| self.is_under(entry, path, recursive))
            .filter(|entry| {
                let name = entry.rsplit(sep).next().unwrap_or(entry);
                mask.matches(name)
            })
            .collect())
    }
}

impl PlatformFs for MemoryFs {
    fn separator(&self) -> char {
        self.separator
    }

    fn list_roots(&self) -> Result<Vec<String>> {
        Ok(self.roots.clone())
    }

    fn list_directories(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>> {
        let candidates = self.dirs.borrow().clone();
        self.list(path, pattern, recursive, candidates)
    }

    fn list_files(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>> {
        let candidates = self.file_order.borrow().clone();
        self.list(path, pattern, recursive, candidates)
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.dirs.borrow().iter().any(|d| d == path)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn file_size(&self, path: &str) -> Result<u64> {
        self.check(path)?;
        self.content(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| FsError::access(path, io::ErrorKind::NotFound.into()))
    }

    fn open_read(&self, path: &str) -> Result<Box<dyn Read>> {
        self.check(path)?;
        let content = self
            .content(path)
            .ok_or_else(|| FsError::access(path, io::ErrorKind::NotFound.into()))?;
        self.reads.set(self.reads.get() + 1);
        Ok(Box::new(io::Cursor::new(content)))
    }

    fn open_write(&self, path: &str) -> Result<Box<dyn Write>> {
        self.check(path)?;
        let parent_ok = self
            .parent_of(path)
            .is_some_and(|parent| self.directory_exists(&parent));
        if !parent_ok {
            return Err(FsError::access(path, io::ErrorKind::NotFound.into()));
        }
        self.put_file(path, Vec::new());
        self.writes.set(self.writes.get() + 1);
        Ok(Box::new(MemoryWriter {
            path: path.to_string(),
            files: Rc::clone(&self.files),
        }))
    }

    fn copy(&self, src: &str, dst: &str) -> Result<()> {
        self.check(src)?;
        self.check(dst)?;
        let content = self
            .content(src)
            .ok_or_else(|| FsError::access(src, io::ErrorKind::NotFound.into()))?;
        self.put_file(dst, content);
        Ok(())
    }

    fn move_file(&self, src: &str, dst: &str) -> Result<()> {
        self.check(src)?;
        self.check(dst)?;
        let content = self
            .remove_file(src)
            .ok_or_else(|| FsError::access(src, io::ErrorKind::NotFound.into()))?;
        self.put_file(dst, content);
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<()> {
        self.check(path)?;
        self.remove_file(path)
            .map(|_| ())
            .ok_or_else(|| FsError::access(path, io::ErrorKind::NotFound.into()))
    }
}

/// Appends straight into the shared file map
struct MemoryWriter {
    path: String,
    files: FileMap,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_keeps_insertion_order() {
        let fs = MemoryFs::unix()
            .with_dir("/data/zeta")
            .with_dir("/data/alpha")
            .with_dir("/data/alpha/deep");

        assert_eq!(
            fs.list_directories("/data", "*", false).unwrap(),
            ["/data/zeta", "/data/alpha"]
        );
        assert_eq!(fs.list_directories("/data", "*", true).unwrap().len(), 3);
        assert_eq!(fs.list_directories("/", "*", false).unwrap(), ["/data"]);
    }

    #[test]
    fn test_windows_parents() {
        let fs = MemoryFs::windows(&["C:\\", "D:\\"]).with_file("C:\\docs\\a.txt", b"x");
        assert!(fs.directory_exists("C:\\docs"));
        assert_eq!(fs.list_directories("C:\\", "*", false).unwrap(), ["C:\\docs"]);
        assert_eq!(fs.list_files("C:\\docs", "*.txt", false).unwrap(), ["C:\\docs\\a.txt"]);
    }

    #[test]
    fn test_denied_paths_fail() {
        let fs = MemoryFs::unix().with_dir("/secret/inner").deny("/secret");
        assert!(fs.list_directories("/secret", "*", false).is_err());
        assert!(fs.list_directories("/secret/inner", "*", false).is_err());
        assert!(fs.list_directories("/", "*", false).is_ok());
    }

    #[test]
    fn test_writer_commits_content() {
        let fs = MemoryFs::unix().with_dir("/tmp");
        {
            let mut w = fs.open_write("/tmp/out").unwrap();
            w.write_all(b"hello").unwrap();
        }
        assert_eq!(fs.content("/tmp/out").unwrap(), b"hello");
        assert_eq!(fs.writes(), 1);
        assert!(fs.open_write("/missing/out").is_err());
    }
}
