//! The upload pipeline: hand-framed chunked PUT of the packed archive.

use std::io::Write;
use std::path::Path;

use ferry_archive::ArchiveSource;
use tracing::{debug, error, info};

use crate::core::chunk::ChunkWriter;
use crate::core::headers::upload_headers;
use crate::core::status::{Disposition, classify_status};
use crate::data::{ImageProperties, TransferOptions, TransferRequest};
use crate::effects::connection::RegistryConnection;
use crate::{Result, TransferError};

/// Stream the archive produced from `staging_path` to the registry as a
/// chunked PUT.
///
/// Chunk lengths are computed on the fly from whatever the producer
/// writes; the peer trusts the body implicitly, so no checksum is sent.
/// The connection is released on every exit path.
pub fn send(
    staging_path: &Path,
    request: &TransferRequest,
    properties: &ImageProperties,
    options: &TransferOptions,
    source: &impl ArchiveSource,
) -> Result<()> {
    let mut conn =
        RegistryConnection::open(&request.host, request.port, request.use_tls, options)?;

    debug!(url = %request.url(), "starting chunked image upload");
    write!(conn, "PUT {} HTTP/1.1\r\n", request.resource_path())?;
    if !request
        .extra_headers
        .iter()
        .any(|(key, _)| key.eq_ignore_ascii_case("host"))
    {
        write!(conn, "host: {}\r\n", request.authority())?;
    }
    for (key, value) in upload_headers(request, properties) {
        write!(conn, "{key}: {value}\r\n")?;
    }
    conn.write_all(b"\r\n")?;

    let mut body = ChunkWriter::new(&mut conn);
    source.produce(staging_path, &mut body, properties.compression_level())?;
    let bytes = body.bytes_written();
    body.finish()?;

    let response = conn.read_response()?;
    match classify_status(response.status) {
        Disposition::Success => {
            info!(url = %request.url(), bytes, "image upload accepted");
            Ok(())
        }
        disposition => {
            error!(
                url = %request.url(),
                status = response.status,
                body = %response.body_excerpt,
                "registry rejected image upload"
            );
            let reason = format!(
                "registry at {} rejected image {}: status {} {}",
                request.authority(),
                request.resource_id,
                response.status,
                response.reason
            );
            match disposition {
                Disposition::Fatal => Err(TransferError::fatal(reason)),
                _ => Err(TransferError::retryable(reason)),
            }
        }
    }
}
