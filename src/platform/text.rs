//! Line-oriented text streams over raw byte handles

use std::io::{self, Read, Write};

use crate::encoding::TextEncoding;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Decoded lines of a text file
///
/// The file handle is consumed and released while reading, so iterating
/// holds no open handle.
#[derive(Debug)]
pub struct TextReader {
    lines: std::vec::IntoIter<String>,
}

impl TextReader {
    /// Read everything from `reader` and decode it.
    ///
    /// # Errors
    ///
    /// Returns the underlying read error.
    pub fn read(mut reader: Box<dyn Read>, encoding: TextEncoding) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        drop(reader);

        let text = encoding.decode(&bytes);
        let lines: Vec<String> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Ok(Self {
            lines: lines.into_iter(),
        })
    }
}

impl Iterator for TextReader {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.lines.next()
    }
}

/// Encoding line sink
///
/// Owns the file handle; dropping the writer releases it on every path.
pub struct TextWriter {
    inner: Box<dyn Write>,
    encoding: TextEncoding,
    lines: usize,
}

impl TextWriter {
    /// Start a new text stream, writing the encoding's byte order mark.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn new(mut inner: Box<dyn Write>, encoding: TextEncoding) -> io::Result<Self> {
        inner.write_all(encoding.bom())?;
        Ok(Self {
            inner,
            encoding,
            lines: 0,
        })
    }

    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(&self.encoding.encode(line))?;
        self.inner.write_all(&self.encoding.encode(LINE_ENDING))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and close, returning the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns the underlying flush error.
    pub fn finish(mut self) -> io::Result<usize> {
        self.inner.flush()?;
        Ok(self.lines)
    }
}
