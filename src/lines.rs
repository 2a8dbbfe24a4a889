//! Line-oriented file I/O: a chunked reader that yields delimiter-separated
//! lines and a writer that appends the delimiter for you. Forward-only;
//! restarting requires an explicit [`LineReader::rewind`].

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

pub const DEFAULT_DELIMITER: &str = "\n";
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Reads a byte stream in chunks and converts complete lines to strings.
pub struct LineReader<R> {
    inner: R,
    delimiter: Vec<u8>,
    chunk_size: usize,
    buffer: Vec<u8>,
    at_eof: bool,
}

impl LineReader<File> {
    /// Opens a file for line reading with the default delimiter.
    pub fn open(path: &str) -> io::Result<LineReader<File>> {
        Ok(LineReader::new(File::open(path)?))
    }
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> LineReader<R> {
        LineReader::with_options(inner, DEFAULT_DELIMITER, DEFAULT_CHUNK_SIZE)
    }

    /// `delimiter` must be non-empty; `chunk_size` is the read granularity.
    pub fn with_options(inner: R, delimiter: &str, chunk_size: usize) -> LineReader<R> {
        assert!(!delimiter.is_empty(), "line delimiter must not be empty");
        assert!(chunk_size > 0, "chunk size must not be zero");
        LineReader {
            inner,
            delimiter: delimiter.as_bytes().to_vec(),
            chunk_size,
            buffer: Vec::with_capacity(chunk_size),
            at_eof: false,
        }
    }

    /// The next line without its delimiter, or `None` at end of stream. A
    /// final line without a trailing delimiter is still returned.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        while !self.at_eof {
            if let Some(pos) = find_delimiter(&self.buffer, &self.delimiter) {
                let rest = self.buffer.split_off(pos + self.delimiter.len());
                let mut line = std::mem::replace(&mut self.buffer, rest);
                line.truncate(pos);
                return decode(line).map(Some);
            }
            let mut chunk = vec![0u8; self.chunk_size];
            let n = self.inner.read(&mut chunk)?;
            if n == 0 {
                self.at_eof = true;
                if !self.buffer.is_empty() {
                    let line = std::mem::take(&mut self.buffer);
                    return decode(line).map(Some);
                }
            } else {
                self.buffer.extend_from_slice(&chunk[..n]);
            }
        }
        Ok(None)
    }

    /// Every remaining line.
    pub fn read_lines(&mut self) -> io::Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Everything remaining as one string, or `None` when already at EOF
    /// with nothing buffered.
    pub fn read_all(&mut self) -> io::Result<Option<String>> {
        self.inner.read_to_end(&mut self.buffer)?;
        self.at_eof = true;
        if self.buffer.is_empty() {
            return Ok(None);
        }
        decode(std::mem::take(&mut self.buffer)).map(Some)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> LineReader<R> {
    /// Starts reading from the beginning of the stream again.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.buffer.clear();
        self.at_eof = false;
        Ok(())
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        self.read_line().transpose()
    }
}

fn find_delimiter(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes lines to a byte stream, appending the delimiter to each.
pub struct LineWriter<W: Write> {
    inner: W,
    delimiter: String,
}

impl LineWriter<File> {
    /// Creates (or truncates) a file for line writing.
    pub fn create(path: &str) -> io::Result<LineWriter<File>> {
        Ok(LineWriter::new(File::create(path)?))
    }

    /// Opens a file for appending, creating it when missing.
    pub fn append(path: &str) -> io::Result<LineWriter<File>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LineWriter::new(file))
    }
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> LineWriter<W> {
        LineWriter::with_delimiter(inner, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(inner: W, delimiter: &str) -> LineWriter<W> {
        LineWriter {
            inner,
            delimiter: delimiter.to_string(),
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(self.delimiter.as_bytes())
    }

    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Writes `text` verbatim, without a delimiter.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
