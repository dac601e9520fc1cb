use std::io;

use thiserror::Error;

/// Classified transfer failure.
///
/// The pipelines label failures; they never retry. `Retryable` marks
/// transient conditions the caller may re-attempt wholesale; `Fatal`
/// marks permanent rejections where retrying cannot help.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("retryable transfer failure: {reason}")]
    Retryable {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("fatal transfer failure: {reason}")]
    Fatal { reason: String },
}

impl TransferError {
    pub fn retryable(reason: impl Into<String>) -> Self {
        Self::Retryable {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn retryable_with(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Retryable {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal {
            reason: reason.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable { .. })
    }
}

impl From<io::Error> for TransferError {
    fn from(e: io::Error) -> Self {
        Self::retryable_with("socket I/O failed", e)
    }
}

impl From<reqwest::Error> for TransferError {
    fn from(e: reqwest::Error) -> Self {
        Self::retryable_with("HTTP request failed", e)
    }
}

impl From<native_tls::Error> for TransferError {
    fn from(e: native_tls::Error) -> Self {
        Self::retryable_with("TLS setup failed", e)
    }
}

impl From<ferry_archive::ArchiveError> for TransferError {
    fn from(e: ferry_archive::ArchiveError) -> Self {
        Self::retryable_with("archive processing failed", e)
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;
