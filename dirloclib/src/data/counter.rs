//! Line counting for a single file.
//!
//! Files are read character by character as UTF-8. A line ends at `\n`,
//! `\r\n` or a lone `\r`, and a trailing line without a terminator still
//! counts. Content that is not valid UTF-8 is treated as unreadable.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use utf8_chars::BufReadCharsExt;

use crate::error::DirlocError;
use crate::Result;

use super::stats::LineCount;

/// Tracks the line currently being read.
#[derive(Default, Debug, Copy, Clone)]
struct LineState {
    started: bool,
    has_content: bool,
}

/// Counts lines from any reader.
pub struct LineCounter<T: Read> {
    reader: BufReader<T>,
    count: LineCount,
    line: LineState,
}

impl LineCounter<File> {
    /// Open a file for counting.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DirlocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<T: Read> LineCounter<T> {
    pub fn from_reader(reader: T) -> Self {
        Self {
            reader: BufReader::new(reader),
            count: LineCount::default(),
            line: LineState::default(),
        }
    }

    /// Consume the reader and return the counts.
    pub fn count(mut self) -> std::io::Result<LineCount> {
        let mut pending_cr = false;

        for c in self.reader.chars() {
            let c = c?;

            if pending_cr {
                pending_cr = false;
                if c == '\n' {
                    continue;
                }
            }

            match c {
                '\n' => {
                    self.line.started = true;
                    Self::finish_line(&mut self.count, &mut self.line);
                }
                '\r' => {
                    self.line.started = true;
                    Self::finish_line(&mut self.count, &mut self.line);
                    pending_cr = true;
                }
                c => {
                    self.line.started = true;
                    if !c.is_whitespace() {
                        self.line.has_content = true;
                    }
                }
            }
        }

        if self.line.started {
            Self::finish_line(&mut self.count, &mut self.line);
        }

        Ok(self.count)
    }

    fn finish_line(count: &mut LineCount, line: &mut LineState) {
        count.total += 1;
        if line.has_content {
            count.non_empty += 1;
        }
        *line = LineState::default();
    }
}

/// Count lines from a reader.
///
/// # Example
///
/// ```rust
/// use dirloclib::{count_reader, LineCount};
///
/// let source = "import os\n\nprint(os.getcwd())\n";
/// let count = count_reader(source.as_bytes()).unwrap();
/// assert_eq!(count, LineCount::new(2, 3));
/// ```
pub fn count_reader(reader: impl Read) -> std::io::Result<LineCount> {
    LineCounter::from_reader(reader).count()
}

/// Count lines in a file, returning an error if it cannot be read as text.
pub fn try_count_file(path: impl AsRef<Path>) -> Result<LineCount> {
    let path = path.as_ref();
    LineCounter::open(path)?
        .count()
        .map_err(|e| DirlocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Count lines in a file, treating unreadable files as empty.
///
/// Failures are logged as warnings so that a single bad file never aborts
/// a scan.
pub fn count_file(path: impl AsRef<Path>) -> LineCount {
    let path = path.as_ref();
    match try_count_file(path) {
        Ok(count) => count,
        Err(err) => {
            warn!("{} could not be read as lines: {}", path.display(), err);
            LineCount::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn count_str(source: &str) -> LineCount {
        count_reader(source.as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_str(""), LineCount::new(0, 0));
    }

    #[test]
    fn test_blank_and_code_lines() {
        let count = count_str("a = 1\nb = 2\n\nprint(a + b)\n");
        assert_eq!(count, LineCount::new(3, 4));
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let count = count_str("x\n   \n\t\n \t \nx\n");
        assert_eq!(count, LineCount::new(2, 5));
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(count_str("one\ntwo"), LineCount::new(2, 2));
        assert_eq!(count_str("one\n   "), LineCount::new(1, 2));
    }

    #[test]
    fn test_crlf_counts_as_one_break() {
        assert_eq!(count_str("a\r\nb\r\n\r\n"), LineCount::new(2, 3));
    }

    #[test]
    fn test_lone_carriage_return_breaks_lines() {
        assert_eq!(count_str("a\rb\r\rc"), LineCount::new(3, 4));
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(count_str("// año\n\u{3000}\nñ\n"), LineCount::new(2, 3));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[b'a', b'\n', 0xff, 0xfe, b'\n'];
        assert!(count_reader(bytes).is_err());
    }

    #[test]
    fn test_non_empty_never_exceeds_total() {
        for source in ["", "\n", "a", "a\n\n", " \r\n\r\nx", "\u{a0}\n"] {
            let count = count_str(source);
            assert!(count.non_empty <= count.total, "{source:?}");
        }
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.py");
        fs::write(&file, "import os\n\ndef f():\n    pass\n").unwrap();

        assert_eq!(count_file(&file), LineCount::new(3, 4));
        assert_eq!(try_count_file(&file).unwrap(), LineCount::new(3, 4));
    }

    #[test]
    fn test_missing_file_counts_as_empty() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing.py");

        assert!(matches!(
            try_count_file(&missing),
            Err(DirlocError::FileRead { .. })
        ));
        assert_eq!(count_file(&missing), LineCount::default());
    }

    #[test]
    fn test_binary_file_counts_as_empty() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("blob.txt");
        fs::write(&file, [0x00, 0xc3, 0x28, 0x0a, 0xff]).unwrap();

        assert_eq!(count_file(&file), LineCount::default());
    }
}
