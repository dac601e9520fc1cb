//! Retry-aware streaming transfer of disk-image archives between a storage
//! host and a remote image registry.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request, property, and option types
//! - [`core`] - Pure transforms: header construction, status
//!   classification, chunked-transfer framing
//! - [`effects`] - I/O: the download and upload pipelines, the registry
//!   connection, and the orchestration layer
//!
//! # Key properties
//!
//! - **Single-Pass**: checksum computation shares the stream copy with
//!   archive extraction/production; memory use is bounded by chunk size,
//!   never payload size
//! - **Classified failures**: every operational failure is labeled
//!   [`TransferError::Retryable`] or [`TransferError::Fatal`]; retry
//!   policy itself belongs to the caller
//! - **Scoped resources**: the staging area and the registry connection
//!   are released on every exit path

pub mod core;
pub mod data;
pub mod effects;
mod error;
mod staging;

pub use data::{ImageProperties, PropertyValue, TransferOptions, TransferRequest};
pub use effects::download::fetch;
pub use effects::store::{ImageStore, UnitImporter, UnitPreparer};
pub use effects::upload::send;
pub use error::{Result, TransferError};
pub use staging::StagingArea;
