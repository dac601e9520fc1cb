use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::Result;

/// A scoped filesystem area where archive contents are assembled or
/// unpacked around one transfer.
///
/// Exactly one exists per top-level operation and it is never retained
/// across calls. Release runs on every exit path: explicitly via
/// [`release`](Self::release), or on drop.
pub struct StagingArea {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl StagingArea {
    /// Create a fresh staging directory under `base`.
    pub fn create(base: &Path) -> Result<Self> {
        fs::create_dir_all(base)?;
        let dir = tempfile::Builder::new()
            .prefix("staging-")
            .tempdir_in(base)?;
        let path = dir.path().to_path_buf();
        debug!(path = %path.display(), "created staging area");
        Ok(Self {
            path,
            dir: Some(dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staging directory. Idempotent; failures are logged and
    /// never propagated into the caller's result.
    pub fn release(&mut self) {
        if let Some(dir) = self.dir.take() {
            if let Err(e) = dir.close() {
                warn!(path = %self.path.display(), error = %e, "staging cleanup failed");
            }
        }
    }
}

impl Drop for StagingArea {
    fn drop(&mut self) {
        self.release();
    }
}
