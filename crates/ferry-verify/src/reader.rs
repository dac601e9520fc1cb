use std::io::{self, Read};

use crate::{Accumulator, Hasher, Result, VerifyError};

/// Reader that feeds every byte it yields into an [`Accumulator`].
///
/// Lets extraction and checksum computation share one pass over a stream:
/// the consumer pulls bytes as usual and the digest is ready once the
/// stream is drained.
pub struct DigestReader<R, H: Hasher = crate::Sha256Hasher> {
    inner: R,
    accumulator: Accumulator<H>,
}

impl<R: Read, H: Hasher> DigestReader<R, H> {
    pub fn new(inner: R, accumulator: Accumulator<H>) -> Self {
        Self { inner, accumulator }
    }

    /// Total bytes read through so far.
    pub fn bytes_processed(&self) -> u64 {
        self.accumulator.bytes_processed()
    }

    /// Hex digest of everything read so far. Drops the inner reader.
    pub fn finalize_hex(self) -> String {
        self.accumulator.finalize_hex()
    }

    /// Finalize and compare against an expected hex digest, case-sensitively.
    ///
    /// Returns the computed digest on match.
    pub fn verify_hex(self, expected: &str) -> Result<String> {
        let actual = self.accumulator.finalize_hex();
        if actual == expected {
            Ok(actual)
        } else {
            Err(VerifyError::Mismatch {
                expected: expected.to_string(),
                actual,
            })
        }
    }
}

impl<R: Read, H: Hasher> Read for DigestReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.accumulator.update(&buf[..n]);
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::Sha256Hasher;

    #[test]
    fn tee_matches_one_shot_digest() {
        let data = b"test data for verification";
        let mut reader = DigestReader::new(Cursor::new(data), Accumulator::sha256());

        let mut copied = Vec::new();
        io::copy(&mut reader, &mut copied).unwrap();

        assert_eq!(copied, data);
        assert_eq!(reader.bytes_processed(), data.len() as u64);
        assert_eq!(
            reader.finalize_hex(),
            hex::encode(Sha256Hasher::digest(data)),
        );
    }

    #[test]
    fn verify_hex_matches_and_mismatches() {
        let data = b"payload";
        let expected = hex::encode(Sha256Hasher::digest(data));

        let mut reader = DigestReader::new(Cursor::new(data), Accumulator::sha256());
        io::copy(&mut reader, &mut io::sink()).unwrap();
        assert_eq!(reader.verify_hex(&expected).unwrap(), expected);

        let mut reader = DigestReader::new(Cursor::new(data), Accumulator::sha256());
        io::copy(&mut reader, &mut io::sink()).unwrap();
        let err = reader.verify_hex("deadbeef").unwrap_err();
        assert!(matches!(err, VerifyError::Mismatch { .. }));
    }

    #[test]
    fn partial_reads_hash_only_consumed_bytes() {
        let data = b"abcdefgh";
        let mut reader = DigestReader::new(Cursor::new(data), Accumulator::sha256());

        let mut buf = [0u8; 3];
        reader.read(&mut buf).unwrap();

        assert_eq!(reader.bytes_processed(), 3);
        assert_eq!(
            reader.finalize_hex(),
            hex::encode(Sha256Hasher::digest(b"abc")),
        );
    }
}
