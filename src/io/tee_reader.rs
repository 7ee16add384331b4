//! Reader decorator that mirrors every chunk into a writer.

use std::io::{self, Read, Write};

/// A reader that writes every chunk it returns to `writer` first.
///
/// Each call to `read` pulls whatever the inner reader produces, writes all
/// of it to the writer, and only then hands the bytes to the caller. End of
/// stream and read errors from the inner reader pass through unchanged. A
/// failed write is returned as the read error; from then on every `read`
/// fails without touching the inner reader.
#[derive(Debug)]
pub struct TeeReader<R, W> {
    reader: R,
    writer: W,
    failed: bool,
}

impl<R: Read, W: Write> TeeReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            failed: false,
        }
    }

    /// Get a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a reference to the mirror writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Whether a mirrored write has failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Consume the tee and return the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: Read, W: Write> Read for TeeReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.failed {
            return Err(io::Error::other("an earlier mirrored write failed"));
        }

        let n = self.reader.read(buf)?;
        if n == 0 {
            return Ok(0);
        }
        if let Err(e) = self.writer.write_all(&buf[..n]) {
            self.failed = true;
            return Err(e);
        }
        Ok(n)
    }
}
