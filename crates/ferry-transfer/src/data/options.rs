use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default deadline for both connecting and socket reads/writes.
pub const DEFAULT_SOCKET_TIMEOUT: Duration = Duration::from_secs(90);

/// Per-call transport timeouts.
///
/// Threaded through every pipeline call and reasserted on the transport at
/// the start of each one; no process-global timeout state exists. The
/// socket timeout turns a network partition after connect into a retryable
/// failure instead of a hang.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferOptions {
    /// TCP connect deadline.
    pub connect_timeout: Duration,
    /// Read/write deadline on an established connection.
    pub socket_timeout: Duration,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_SOCKET_TIMEOUT,
            socket_timeout: DEFAULT_SOCKET_TIMEOUT,
        }
    }
}

impl TransferOptions {
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn socket_timeout(mut self, timeout: Duration) -> Self {
        self.socket_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ninety_seconds() {
        let options = TransferOptions::default();
        assert_eq!(options.connect_timeout, Duration::from_secs(90));
        assert_eq!(options.socket_timeout, Duration::from_secs(90));
    }

    #[test]
    fn builder_overrides() {
        let options = TransferOptions::default()
            .connect_timeout(Duration::from_secs(5))
            .socket_timeout(Duration::from_secs(10));
        assert_eq!(options.connect_timeout, Duration::from_secs(5));
        assert_eq!(options.socket_timeout, Duration::from_secs(10));
    }
}
