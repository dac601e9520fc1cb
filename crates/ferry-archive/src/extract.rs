use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::sanitize::sanitize_entry_path;
use crate::{ArchiveError, Result};

/// Consumes a raw archive byte stream and unpacks it under a destination
/// directory.
pub trait ArchiveSink {
    fn extract(&self, stream: &mut dyn Read, destination: &Path) -> Result<()>;
}

/// Streaming gzip + tar extraction.
///
/// Entries are unpacked as they arrive; memory use is bounded by the
/// decoder's buffer, not the archive size.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzSink;

impl ArchiveSink for TarGzSink {
    fn extract(&self, stream: &mut dyn Read, destination: &Path) -> Result<()> {
        fs::create_dir_all(destination)?;

        let mut archive = tar::Archive::new(GzDecoder::new(stream));
        for entry in archive.entries()? {
            let mut entry = entry.map_err(|e| ArchiveError::Corrupted(e.to_string()))?;
            let raw_path = entry
                .path()
                .map_err(|e| ArchiveError::Corrupted(e.to_string()))?
                .into_owned();
            let resolved = sanitize_entry_path(&raw_path, destination)?;

            if entry.header().entry_type().is_symlink() {
                // tar's unpack does not re-check link targets against the root.
                if let Ok(Some(target)) = entry.link_name() {
                    if target.is_absolute() {
                        return Err(ArchiveError::PathEscape {
                            entry: raw_path,
                            resolved: target.into_owned(),
                        });
                    }
                }
            }

            if let Some(parent) = resolved.parent() {
                fs::create_dir_all(parent)?;
            }
            debug!(entry = %raw_path.display(), "unpacking archive entry");
            entry
                .unpack(&resolved)
                .map_err(|source| ArchiveError::ExtractionFailed {
                    path: resolved.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}
