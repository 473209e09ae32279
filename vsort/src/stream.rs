//! Line-oriented stream adapters for files
//!
//! Sources yield `io::Result` lines with the terminator removed, suitable
//! for [`populate`](crate::populate). Sinks are buffered writers suitable
//! for [`emit`](crate::emit).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};

/// Open `path` as a buffered line source
pub fn open_lines<P: AsRef<Path>>(path: P) -> io::Result<Lines<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines())
}

/// Create or truncate `path` as a buffered sink
pub fn create_sink<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Memory-mapped input file read as lines
#[cfg(feature = "mmap")]
#[derive(Debug)]
pub struct MmapInput {
    /// `None` for an empty file, which cannot be mapped
    mmap: Option<Mmap>,
}

#[cfg(feature = "mmap")]
impl MmapInput {
    /// Map `path` read-only
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self { mmap: None });
        }

        // SAFETY: Read-only mapping; the file must not be truncated while mapped
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(Self { mmap: Some(mmap) })
    }

    /// Get the mapped bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Iterate over the lines of the mapping
    pub fn lines(&self) -> MmapLines<'_> {
        MmapLines::new(self.as_bytes())
    }
}

/// Line iterator over a byte buffer, created by [`MmapInput::lines`]
///
/// Splits on `\n` and drops a `\r` directly before it, matching
/// [`BufRead::lines`]. A final line without a terminator is still yielded.
#[derive(Debug, Clone)]
pub struct MmapLines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MmapLines<'a> {
    /// Create an iterator over `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for MmapLines<'a> {
    type Item = io::Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.pos..];
        let line = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                let line = &rest[..end];
                line.strip_suffix(b"\r").unwrap_or(line)
            }
            None => {
                self.pos = self.data.len();
                rest
            }
        };

        Some(
            std::str::from_utf8(line)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
        )
    }
}
