//! Chunked-transfer-encoding framing for the upload body.

use std::io::{self, Write};

/// The zero-length frame that terminates a chunked body.
pub const TERMINATOR: &[u8] = b"0\r\n\r\n";

/// Frame one chunk: hex length, CRLF, the bytes, CRLF.
///
/// The empty chunk frames to exactly [`TERMINATOR`].
pub fn encode_chunk(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 16);
    frame.extend_from_slice(format!("{:x}\r\n", payload.len()).as_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(b"\r\n");
    frame
}

/// Writer adapter that frames every write as one chunk and counts payload
/// bytes.
///
/// [`finish`](Self::finish) consumes the writer and emits the terminator,
/// so it cannot be written twice. Chunk lengths are whatever the producer
/// hands to `write`; nothing is buffered beyond the frame header.
pub struct ChunkWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> ChunkWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Payload bytes framed so far (frame overhead excluded).
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write the terminator frame and flush, returning the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.write_all(TERMINATOR)?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for ChunkWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // An empty write must not emit the terminator frame early.
        if buf.is_empty() {
            return Ok(0);
        }
        write!(self.inner, "{:x}\r\n", buf.len())?;
        self.inner.write_all(buf)?;
        self.inner.write_all(b"\r\n")?;
        self.bytes_written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_carry_hex_length_and_crlf() {
        assert_eq!(encode_chunk(b"abc"), b"3\r\nabc\r\n");
        assert_eq!(encode_chunk(&[0u8; 26]).len(), 2 + 2 + 26 + 2);
        assert_eq!(&encode_chunk(&[0u8; 26])[..4], b"1a\r\n");
    }

    #[test]
    fn empty_chunk_is_the_terminator() {
        assert_eq!(encode_chunk(b""), TERMINATOR);
    }

    #[test]
    fn writer_frames_each_write() {
        let mut writer = ChunkWriter::new(Vec::new());
        writer.write_all(b"hello").unwrap();
        writer.write_all(b" world").unwrap();
        assert_eq!(writer.bytes_written(), 11);

        let framed = writer.finish().unwrap();
        assert_eq!(framed, b"5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n");
    }

    #[test]
    fn terminator_appears_exactly_once() {
        let mut writer = ChunkWriter::new(Vec::new());
        writer.write_all(b"x").unwrap();
        let framed = writer.finish().unwrap();

        let hits = framed
            .windows(TERMINATOR.len())
            .filter(|window| *window == TERMINATOR)
            .count();
        assert_eq!(hits, 1);
        assert!(framed.ends_with(TERMINATOR));
    }

    #[test]
    fn empty_writes_emit_nothing() {
        let mut writer = ChunkWriter::new(Vec::new());
        writer.write_all(b"").unwrap();
        assert_eq!(writer.bytes_written(), 0);
        let framed = writer.finish().unwrap();
        assert_eq!(framed, TERMINATOR);
    }
}
