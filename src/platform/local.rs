//! `std::fs` backed [`PlatformFs`]

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use glob::Pattern;

use super::error::{FsError, Result};
use super::{PlatformFs, compile_mask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

/// The local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Breadth-first listing of `root`. Symbolic links to directories are
    /// reported but never descended into.
    fn list(&self, root: &str, pattern: &str, recursive: bool, kind: EntryKind) -> Result<Vec<String>> {
        let mask = compile_mask(pattern)?;
        let mut found = Vec::new();
        let mut pending = VecDeque::from([root.to_string()]);

        while let Some(dir) = pending.pop_front() {
            let entries = fs::read_dir(&dir).map_err(|e| FsError::access(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| FsError::access(&dir, e))?;
                let path = entry.path();
                let path_str = path.to_string_lossy().into_owned();
                let is_dir = path.is_dir();

                if recursive && is_dir {
                    let is_link = entry
                        .file_type()
                        .map_err(|e| FsError::access(&path_str, e))?
                        .is_symlink();
                    if !is_link {
                        pending.push_back(path_str.clone());
                    }
                }

                let wanted = match kind {
                    EntryKind::Directory => is_dir,
                    EntryKind::File => path.is_file(),
                };
                if wanted && name_matches(&mask, &path) {
                    found.push(path_str);
                }
            }
        }

        Ok(found)
    }
}

/// Whether `src` and `dst` name the same existing file
fn same_file(src: &str, dst: &str) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copying or moving a file onto itself would truncate it
fn reject_same_file(src: &str, dst: &str) -> Result<()> {
    if same_file(src, dst) {
        return Err(FsError::access(
            dst,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            ),
        ));
    }
    Ok(())
}

fn name_matches(mask: &Pattern, path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| mask.matches(&name.to_string_lossy()))
}

impl PlatformFs for LocalFs {
    #[cfg(windows)]
    fn list_roots(&self) -> Result<Vec<String>> {
        Ok((b'A'..=b'Z')
            .map(|letter| format!("{}:\\", letter as char))
            .filter(|drive| Path::new(drive).exists())
            .collect())
    }

    #[cfg(not(windows))]
    fn list_roots(&self) -> Result<Vec<String>> {
        Ok(vec!["/".to_string()])
    }

    fn list_directories(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>> {
        self.list(path, pattern, recursive, EntryKind::Directory)
    }

    fn list_files(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>> {
        self.list(path, pattern, recursive, EntryKind::File)
    }

    fn directory_exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_dir()
    }

    fn file_exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_file()
    }

    fn absolute(&self, path: &str) -> Result<String> {
        std::path::absolute(path)
            .map(|p| p.to_string_lossy().into_owned())
            .map_err(|e| FsError::access(path, e))
    }

    fn file_size(&self, path: &str) -> Result<u64> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsError::access(path, e))
    }

    fn open_read(&self, path: &str) -> Result<Box<dyn Read>> {
        let file = fs::File::open(path).map_err(|e| FsError::access(path, e))?;
        Ok(Box::new(file))
    }

    fn open_write(&self, path: &str) -> Result<Box<dyn Write>> {
        let file = fs::File::create(path).map_err(|e| FsError::access(path, e))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn copy(&self, src: &str, dst: &str) -> Result<()> {
        reject_same_file(src, dst)?;
        fs::copy(src, dst).map_err(|e| FsError::access(src, e))?;
        tracing::info!("Copied: {} -> {}", src, dst);
        Ok(())
    }

    fn move_file(&self, src: &str, dst: &str) -> Result<()> {
        reject_same_file(src, dst)?;
        match fs::rename(src, dst) {
            Ok(()) => {}
            // Renames cannot cross devices; copy then delete instead.
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                fs::copy(src, dst).map_err(|e| FsError::access(src, e))?;
                fs::remove_file(src).map_err(|e| FsError::access(src, e))?;
            }
            Err(e) => return Err(FsError::access(src, e)),
        }
        tracing::info!("Moved: {} -> {}", src, dst);
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<()> {
        fs::remove_file(path).map_err(|e| FsError::access(path, e))?;
        tracing::info!("Deleted: {}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("logs/old")).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.rs"), "b").unwrap();
        fs::write(dir.path().join("logs/app.txt"), "log").unwrap();
        fs::write(dir.path().join("logs/old/1.txt"), "old").unwrap();
        dir
    }

    fn root(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_list_directories_top_level() {
        let dir = fixture();
        let fs = LocalFs::new();
        let dirs = sorted(fs.list_directories(&root(&dir), "*", false).unwrap());
        let expected = sorted(vec![
            dir.path().join("logs").to_string_lossy().into_owned(),
            dir.path().join("src").to_string_lossy().into_owned(),
        ]);
        assert_eq!(dirs, expected);
    }

    #[test]
    fn test_list_files_with_mask_and_recursion() {
        let dir = fixture();
        let fs = LocalFs::new();

        let top = fs.list_files(&root(&dir), "*.txt", false).unwrap();
        assert_eq!(top.len(), 1);

        let all = fs.list_files(&root(&dir), "*.txt", true).unwrap();
        assert_eq!(all.len(), 3);
        // Breadth-first: the top-level match comes first.
        assert!(all[0].ends_with("a.txt"));
    }

    #[test]
    fn test_list_empty_directory() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        assert!(fs.list_directories(&root(&dir), "*", false).unwrap().is_empty());
        assert!(fs.list_files(&root(&dir), "*", false).unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_directory_is_access_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone").to_string_lossy().into_owned();
        let err = LocalFs::new().list_files(&missing, "*", false).unwrap_err();
        assert!(matches!(err, FsError::Access { .. }));
    }

    #[test]
    fn test_existence_checks() {
        let dir = fixture();
        let fs = LocalFs::new();
        let file = dir.path().join("a.txt").to_string_lossy().into_owned();
        assert!(fs.file_exists(&file));
        assert!(!fs.directory_exists(&file));
        assert!(fs.directory_exists(&root(&dir)));
        assert!(!fs.file_exists(""));
    }

    #[test]
    fn test_copy_move_delete() {
        let dir = fixture();
        let fs = LocalFs::new();
        let src = dir.path().join("a.txt").to_string_lossy().into_owned();
        let copy = dir.path().join("src/a.txt").to_string_lossy().into_owned();
        let moved = dir.path().join("logs/a.txt").to_string_lossy().into_owned();

        fs.copy(&src, &copy).unwrap();
        assert!(fs.file_exists(&src));
        assert!(fs.file_exists(&copy));

        // Overwrites an existing target.
        fs.move_file(&copy, &moved).unwrap();
        fs.move_file(&src, &moved).unwrap();
        assert!(!fs.file_exists(&src));
        assert_eq!(std::fs::read_to_string(&moved).unwrap(), "a");

        fs.delete(&moved).unwrap();
        assert!(!fs.file_exists(&moved));
    }

    #[test]
    fn test_copy_onto_itself_keeps_content() {
        let dir = fixture();
        let fs = LocalFs::new();
        let src = dir.path().join("a.txt").to_string_lossy().into_owned();
        let same = dir
            .path()
            .join("logs/../a.txt")
            .to_string_lossy()
            .into_owned();

        let err = fs.copy(&src, &same).unwrap_err();
        assert!(matches!(err, FsError::Access { .. }));
        assert!(err.to_string().contains("same file"));
        assert!(fs.move_file(&src, &src).is_err());
        assert_eq!(std::fs::read_to_string(&src).unwrap(), "a");
    }

    #[test]
    fn test_move_missing_source_is_access_error() {
        let dir = fixture();
        let fs = LocalFs::new();
        let missing = dir.path().join("none.txt").to_string_lossy().into_owned();
        let dst = dir.path().join("src/none.txt").to_string_lossy().into_owned();

        let err = fs.move_file(&missing, &dst).unwrap_err();
        assert!(matches!(err, FsError::Access { .. }));
        assert!(!fs.file_exists(&dst));
    }

    #[test]
    fn test_text_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        let path = dir.path().join("note.txt").to_string_lossy().into_owned();

        let mut writer = fs
            .open_text_writer(&path, crate::encoding::TextEncoding::Utf32)
            .unwrap();
        writer.write_line("привет").unwrap();
        writer.finish().unwrap();

        let lines: Vec<_> = fs
            .open_text_reader(&path, crate::encoding::TextEncoding::Utf8)
            .unwrap()
            .collect();
        assert_eq!(lines, ["привет"]);
        assert_eq!(fs.file_size(&path).unwrap(), 4 + 7 * 4);
    }
}
