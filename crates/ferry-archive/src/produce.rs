use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::debug;

use crate::Result;

/// Gzip level used when the caller supplies none.
pub const DEFAULT_COMPRESSION: u32 = 6;

/// Walks a directory tree and emits archive bytes into a writer.
pub trait ArchiveSource {
    fn produce(
        &self,
        source: &Path,
        out: &mut dyn Write,
        compression: Option<u32>,
    ) -> Result<()>;
}

/// Streaming tar.gz production from a directory tree.
///
/// Bytes flow straight into `out` as entries are appended; the writer sees
/// whatever chunk sizes the encoder emits.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzSource;

impl ArchiveSource for TarGzSource {
    fn produce(
        &self,
        source: &Path,
        out: &mut dyn Write,
        compression: Option<u32>,
    ) -> Result<()> {
        let level = compression.unwrap_or(DEFAULT_COMPRESSION).min(9);
        debug!(source = %source.display(), level, "packing archive");

        let encoder = GzEncoder::new(out, Compression::new(level));
        let mut builder = tar::Builder::new(encoder);
        builder.append_dir_all(".", source)?;
        builder.into_inner()?.finish()?;
        Ok(())
    }
}
