//! The download pipeline: streaming GET with after-the-fact checksum
//! verification.

use std::path::Path;

use ferry_archive::ArchiveSink;
use ferry_verify::{Accumulator, DigestReader};
use tracing::{debug, info, warn};

use crate::Result;
use crate::TransferError;
use crate::core::headers::{ETAG, IMAGE_META_CHECKSUM};
use crate::data::{TransferOptions, TransferRequest};

/// Fetch the archive at `request` and unpack it under `destination`,
/// verifying the peer-supplied checksum when one is present.
///
/// The response body flows through the checksum accumulator and into the
/// sink in a single pass; nothing is buffered beyond the sink's own
/// working set. Every operational failure here classifies as retryable.
pub fn fetch(
    request: &TransferRequest,
    options: &TransferOptions,
    sink: &impl ArchiveSink,
    destination: &Path,
) -> Result<()> {
    let url = request.url();
    // The blocking client applies `timeout` per blocking operation (each
    // body read gets a fresh deadline), so it acts as a per-read socket
    // timeout rather than a whole-transfer deadline.
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.socket_timeout)
        .build()?;

    let mut get = client.get(&url);
    for (key, value) in &request.extra_headers {
        get = get.header(key, value);
    }
    debug!(%url, "requesting image archive");
    let response = get.send()?.error_for_status()?;

    // Captured up front; the response is consumed by the stream copy.
    let integrity = response
        .headers()
        .get(ETAG)
        .or_else(|| response.headers().get(IMAGE_META_CHECKSUM))
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut stream = DigestReader::new(response, Accumulator::sha256());
    sink.extract(&mut stream, destination)?;
    let bytes = stream.bytes_processed();

    match integrity {
        Some(expected) => {
            let digest = stream.verify_hex(&expected).map_err(|e| {
                TransferError::retryable(format!("checksum verification failed for {url}: {e}"))
            })?;
            info!(%url, bytes, %digest, "image checksum verified");
        }
        None => {
            warn!(%url, bytes, "peer sent no integrity header; accepting without verification");
        }
    }
    Ok(())
}
