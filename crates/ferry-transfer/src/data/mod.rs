//! Immutable configuration and request types.

mod options;
mod properties;
mod request;

pub use options::{DEFAULT_SOCKET_TIMEOUT, TransferOptions};
pub use properties::{COMPRESSION_LEVEL_KEY, ImageProperties, PropertyValue};
pub use request::TransferRequest;
