//! Orchestration: the staging-area lifecycle around both pipelines.

use std::path::{Path, PathBuf};

use ferry_archive::{ArchiveSink, ArchiveSource};
use tracing::error;

use crate::Result;
use crate::data::{ImageProperties, TransferOptions, TransferRequest};
use crate::effects::{download, upload};
use crate::staging::StagingArea;

/// Turns a populated staging area into imported unit identifiers.
pub trait UnitImporter {
    fn import_units(
        &self,
        base_path: &Path,
        staging_path: &Path,
        id_pool: &mut Vec<String>,
    ) -> Result<Vec<String>>;
}

/// Materializes the named units into a staging area ahead of an upload.
pub trait UnitPreparer {
    fn prepare(&self, base_path: &Path, staging_path: &Path, units: &[String]) -> Result<()>;
}

/// Owns the staging-area lifecycle around the two pipelines and exposes
/// the top-level fetch-and-unpack and pack-and-send operations.
pub struct ImageStore<I, P> {
    base_path: PathBuf,
    importer: I,
    preparer: P,
}

impl<I: UnitImporter, P: UnitPreparer> ImageStore<I, P> {
    pub fn new(base_path: impl Into<PathBuf>, importer: I, preparer: P) -> Self {
        Self {
            base_path: base_path.into(),
            importer,
            preparer,
        }
    }

    /// Fetch and unpack one image, then import its units.
    ///
    /// The staging area is released on every exit path; a failed download
    /// imports nothing. Classified failures are logged with the target URL
    /// and propagated unchanged.
    pub fn download(
        &self,
        request: &TransferRequest,
        options: &TransferOptions,
        sink: &impl ArchiveSink,
        id_pool: &mut Vec<String>,
    ) -> Result<Vec<String>> {
        let mut staging = StagingArea::create(&self.base_path)?;
        let result = download::fetch(request, options, sink, staging.path()).and_then(|()| {
            self.importer
                .import_units(&self.base_path, staging.path(), id_pool)
        });
        staging.release();

        result.inspect_err(|e| error!(url = %request.url(), error = %e, "image download failed"))
    }

    /// Prepare the named units into staging and send them as one image.
    ///
    /// The staging area is released on every exit path, fatal rejections
    /// included.
    pub fn upload(
        &self,
        request: &TransferRequest,
        properties: &ImageProperties,
        options: &TransferOptions,
        source: &impl ArchiveSource,
        units: &[String],
    ) -> Result<()> {
        let mut staging = StagingArea::create(&self.base_path)?;
        let result = self
            .preparer
            .prepare(&self.base_path, staging.path(), units)
            .and_then(|()| upload::send(staging.path(), request, properties, options, source));
        staging.release();

        result.inspect_err(|e| error!(url = %request.url(), error = %e, "image upload failed"))
    }
}
