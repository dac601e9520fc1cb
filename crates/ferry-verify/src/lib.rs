//! Streaming checksum primitives for image transfers.
//!
//! Provides incremental hashing that runs in the same pass as data movement:
//! a transfer pipeline feeds bytes through [`DigestReader`] (or updates an
//! [`Accumulator`] directly) and finalizes once the stream is drained, so no
//! payload is ever held in memory just to hash it.
//!
//! # Key Features
//!
//! - **Single-Pass**: bytes are hashed as they move, never re-read
//! - **Counting**: the accumulator tracks total bytes processed
//! - **Extensible**: minimal [`Hasher`] trait allows custom algorithms
//!
//! # Example
//!
//! ```
//! use ferry_verify::{Accumulator, Sha256Hasher};
//!
//! let mut acc = Accumulator::sha256();
//! acc.update(b"hello ");
//! acc.update(b"world");
//! assert_eq!(acc.bytes_processed(), 11);
//! assert_eq!(
//!     acc.finalize_hex(),
//!     hex::encode(Sha256Hasher::digest(b"hello world")),
//! );
//! ```

pub use self::error::{Result, VerifyError};
pub use self::hasher::{Accumulator, Hasher, Sha256Hasher};
pub use self::reader::DigestReader;

mod error;
mod hasher;
mod reader;
