//! Pure transformations: no I/O, independently testable.

pub mod chunk;
pub mod headers;
pub mod status;
