//! Archive collaborators for image transfer pipelines.
//!
//! The transfer core moves byte streams; this crate turns those streams
//! into files and back. [`ArchiveSink`] consumes a response body and
//! unpacks it under a destination directory; [`ArchiveSource`] walks a
//! directory and produces archive bytes into a writer. The default
//! implementations speak gzip-compressed tar with entry-path sanitization.
//!
//! Both traits are stream adapters: the caller owns the reader/writer, so
//! checksum tees and wire framing compose around them without callbacks.

pub use self::error::{ArchiveError, Result};
pub use self::extract::{ArchiveSink, TarGzSink};
pub use self::produce::{ArchiveSource, DEFAULT_COMPRESSION, TarGzSource};
pub use self::sanitize::sanitize_entry_path;

mod error;
mod extract;
mod produce;
mod sanitize;
