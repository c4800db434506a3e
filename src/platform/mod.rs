//! Platform filesystem service
//!
//! Navigation, selection and the file commands only see the filesystem
//! through [`PlatformFs`]. [`LocalFs`] is the real implementation; tests
//! use an in-memory one.

mod error;
mod local;
mod text;

pub use error::{FsError, Result};
pub use local::LocalFs;
pub use text::{TextReader, TextWriter};

use std::io::{Read, Write};

use glob::Pattern;

use crate::encoding::TextEncoding;

/// Filesystem operations the file manager needs
///
/// Paths are strings in the platform's native form. Listings return full
/// entry paths in whatever order the underlying service produces; they are
/// not sorted.
pub trait PlatformFs {
    /// Path separator used by this filesystem
    fn separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }

    /// Available drives / volume roots, each ending in the separator
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the roots cannot be enumerated.
    fn list_roots(&self) -> Result<Vec<String>>;

    /// Directories under `path` whose name matches `pattern`
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if `path` (or a searched subdirectory) is
    /// inaccessible, `FsError::InvalidPattern` for a malformed mask.
    fn list_directories(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>>;

    /// Files under `path` whose name matches `pattern`
    ///
    /// # Errors
    ///
    /// Same as [`PlatformFs::list_directories`].
    fn list_files(&self, path: &str, pattern: &str, recursive: bool) -> Result<Vec<String>>;

    fn directory_exists(&self, path: &str) -> bool;

    fn file_exists(&self, path: &str) -> bool;

    /// Turn a typed path into an absolute one
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the current directory is unavailable.
    fn absolute(&self, path: &str) -> Result<String> {
        Ok(path.to_string())
    }

    /// Size of a file in bytes
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the file metadata cannot be read.
    fn file_size(&self, path: &str) -> Result<u64>;

    /// Open a file for reading
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the file cannot be opened.
    fn open_read(&self, path: &str) -> Result<Box<dyn Read>>;

    /// Create or truncate a file for writing
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the file cannot be created.
    fn open_write(&self, path: &str) -> Result<Box<dyn Write>>;

    /// Copy `src` to `dst`, replacing `dst`
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if either side is inaccessible.
    fn copy(&self, src: &str, dst: &str) -> Result<()>;

    /// Move `src` to `dst`, replacing `dst`
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if either side is inaccessible.
    fn move_file(&self, src: &str, dst: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns `FsError::Access` if the file cannot be removed.
    fn delete(&self, path: &str) -> Result<()>;

    /// Read and decode a whole text file
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the file cannot be read.
    fn open_text_reader(&self, path: &str, encoding: TextEncoding) -> Result<TextReader> {
        let reader = self.open_read(path)?;
        TextReader::read(reader, encoding).map_err(|e| FsError::access(path, e))
    }

    /// Create a text file; the handle is released when the writer drops
    ///
    /// # Errors
    ///
    /// Returns `FsError::Access` if the file cannot be created.
    fn open_text_writer(&self, path: &str, encoding: TextEncoding) -> Result<TextWriter> {
        let writer = self.open_write(path)?;
        TextWriter::new(writer, encoding).map_err(|e| FsError::access(path, e))
    }
}

/// Compile a listing mask; an empty mask matches everything
///
/// # Errors
///
/// Returns `FsError::InvalidPattern` if the mask is not a valid glob.
pub fn compile_mask(mask: &str) -> Result<Pattern> {
    let mask = if mask.trim().is_empty() { "*" } else { mask.trim() };
    Pattern::new(mask).map_err(|e| FsError::invalid_pattern(mask, &e.to_string()))
}
