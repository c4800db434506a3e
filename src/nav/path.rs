//! Path values handed between navigation, selection and file operations
//!
//! Paths stay plain strings here: root detection and ascent are defined on
//! the last separator occurrence, which is also what the listing service
//! hands back, so no normalisation sneaks in between a listing and the
//! value the user ends up with.

use std::fmt;

/// A directory the user has navigated to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkingPath(String);

impl WorkingPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when this path is a drive/volume root (`C:\`, `/`)
    #[must_use]
    pub fn is_root(&self, separator: char) -> bool {
        is_root(&self.0, separator)
    }

    /// Path of `name` inside this directory
    #[must_use]
    pub fn join(&self, name: &str, separator: char) -> FilePath {
        FilePath(join_entry(&self.0, name, separator))
    }
}

impl fmt::Display for WorkingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(String);

impl FilePath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the last separator
    #[must_use]
    pub fn file_name(&self, separator: char) -> &str {
        self.0
            .rfind(separator)
            .map_or(self.0.as_str(), |pos| &self.0[pos + separator.len_utf8()..])
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where "go up one level" leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ascent {
    /// Already at a drive root: the user has to pick a drive again
    DriveRoot,
    /// The parent directory
    Parent(WorkingPath),
}

/// Compute the parent of `path`.
///
/// A path whose last separator is its final character is a drive root and
/// cannot be truncated further. Otherwise the path is cut at its last
/// separator; if nothing separated remains (`C:`, the empty string left by
/// `/data`) the separator is put back so the result is again a root form.
/// A path without any separator has no parent either.
#[must_use]
pub fn ascend(path: &WorkingPath, separator: char) -> Ascent {
    let raw = path.as_str();
    let Some(pos) = raw.rfind(separator) else {
        return Ascent::DriveRoot;
    };
    if pos + separator.len_utf8() == raw.len() {
        return Ascent::DriveRoot;
    }

    let mut parent = raw[..pos].to_string();
    if !parent.contains(separator) {
        parent.push(separator);
    }
    Ascent::Parent(WorkingPath(parent))
}

/// Returns `true` when the last separator of `path` is its final character
#[must_use]
pub fn is_root(path: &str, separator: char) -> bool {
    path.ends_with(separator)
}

/// Drop the line ending from typed input; other whitespace is significant
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Strip trailing separators from a typed path without destroying a root
/// form: `/data/` becomes `/data`, `C:\` and `/` stay as they are.
#[must_use]
pub fn normalize_typed(path: &str, separator: char) -> String {
    let trimmed = strip_line_ending(path);
    let stripped = trimmed.trim_end_matches(separator);
    if stripped.contains(separator) {
        stripped.to_string()
    } else if stripped.len() < trimmed.len() {
        format!("{stripped}{separator}")
    } else {
        trimmed.to_string()
    }
}

/// Append `name` to `dir`, adding a separator unless `dir` already ends in one
#[must_use]
pub fn join_entry(dir: &str, name: &str, separator: char) -> String {
    if dir.ends_with(separator) {
        format!("{dir}{name}")
    } else {
        format!("{dir}{separator}{name}")
    }
}

/// Display form of a listed entry relative to the directory it was listed
/// from. Falls back to the full path for entries outside `dir`.
#[must_use]
pub fn relative_to<'a>(entry: &'a str, dir: &str, separator: char) -> &'a str {
    entry
        .strip_prefix(dir)
        .filter(|rest| dir.ends_with(separator) || rest.starts_with(separator))
        .map(|rest| rest.trim_start_matches(separator))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(entry)
}
