//! I/O operations: the registry connection, the two transfer pipelines,
//! and the orchestration layer.

pub mod connection;
pub mod download;
pub mod store;
pub mod upload;
