use sha2::Digest;

/// Incremental hash over a byte stream.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

pub struct Sha256Hasher(sha2::Sha256);

impl Sha256Hasher {
    pub fn new() -> Self {
        Self(sha2::Sha256::new())
    }

    /// One-shot digest of a complete buffer.
    pub fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(data).to_vec()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

/// Byte-counting accumulator over a [`Hasher`].
///
/// One instance per transfer, fed only from that transfer's single
/// stream-copy path. Not thread-safe by design.
pub struct Accumulator<H = Sha256Hasher> {
    hasher: H,
    bytes: u64,
}

impl Accumulator<Sha256Hasher> {
    pub fn sha256() -> Self {
        Self::new(Sha256Hasher::new())
    }
}

impl<H: Hasher> Accumulator<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher, bytes: 0 }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.bytes += chunk.len() as u64;
    }

    /// Total bytes fed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes
    }

    /// Lowercase hex digest of everything fed so far.
    pub fn finalize_hex(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}
