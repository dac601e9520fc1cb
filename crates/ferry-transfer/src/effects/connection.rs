use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use native_tls::{TlsConnector, TlsStream};
use tracing::debug;

use crate::data::TransferOptions;
use crate::{Result, TransferError};

/// Cap on the response body retained for logging and error messages.
const BODY_EXCERPT_LIMIT: usize = 8 * 1024;

/// A plain or TLS stream to the registry, with the per-call socket timeout
/// asserted on both directions.
///
/// The socket is shut down on drop, so release is guaranteed on every exit
/// path of the pipeline that opened it.
pub enum RegistryConnection {
    Plain(TcpStream),
    Tls(Box<TlsStream<TcpStream>>),
}

impl RegistryConnection {
    pub fn open(
        host: &str,
        port: u16,
        use_tls: bool,
        options: &TransferOptions,
    ) -> Result<Self> {
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                TransferError::retryable(format!("no address resolved for {host}:{port}"))
            })?;

        let stream = TcpStream::connect_timeout(&addr, options.connect_timeout)?;
        stream.set_read_timeout(Some(options.socket_timeout))?;
        stream.set_write_timeout(Some(options.socket_timeout))?;
        debug!(%addr, use_tls, "connected to registry");

        if use_tls {
            let connector = TlsConnector::new()?;
            let stream = connector.connect(host, stream).map_err(|e| {
                TransferError::retryable(format!("TLS handshake with {host}:{port} failed: {e}"))
            })?;
            Ok(Self::Tls(Box::new(stream)))
        } else {
            Ok(Self::Plain(stream))
        }
    }

    /// Read the response status line, headers, and a bounded body excerpt.
    ///
    /// Only status and excerpt are surfaced; the connection is not reused
    /// afterwards.
    pub fn read_response(&mut self) -> Result<RegistryResponse> {
        let mut reader = BufReader::new(&mut *self);

        let mut line = String::new();
        reader.read_line(&mut line)?;
        let mut parts = line.trim_end().splitn(3, ' ');
        let version = parts.next().unwrap_or("");
        let code = parts.next().and_then(|s| s.parse::<u16>().ok());
        let reason = parts.next().unwrap_or("").to_string();
        let Some(status) = code.filter(|_| version.starts_with("HTTP/")) else {
            return Err(TransferError::retryable(format!(
                "malformed response status line: {:?}",
                line.trim_end()
            )));
        };

        let mut content_length: Option<usize> = None;
        loop {
            let mut header = String::new();
            let n = reader.read_line(&mut header)?;
            if n == 0 || header.trim_end().is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.trim().eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().ok();
                }
            }
        }

        let mut body_excerpt = String::new();
        if let Some(len) = content_length {
            let mut buf = vec![0u8; len.min(BODY_EXCERPT_LIMIT)];
            reader.read_exact(&mut buf)?;
            body_excerpt = String::from_utf8_lossy(&buf).into_owned();
        }

        Ok(RegistryResponse {
            status,
            reason,
            body_excerpt,
        })
    }

    fn tcp_stream(&self) -> &TcpStream {
        match self {
            Self::Plain(stream) => stream,
            Self::Tls(stream) => stream.get_ref(),
        }
    }
}

impl Read for RegistryConnection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(stream) => stream.read(buf),
            Self::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for RegistryConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(stream) => stream.write(buf),
            Self::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(stream) => stream.flush(),
            Self::Tls(stream) => stream.flush(),
        }
    }
}

impl Drop for RegistryConnection {
    fn drop(&mut self) {
        let _ = self.tcp_stream().shutdown(Shutdown::Both);
    }
}

/// Status and a bounded body excerpt from the registry's response.
#[derive(Debug)]
pub struct RegistryResponse {
    pub status: u16,
    pub reason: String,
    pub body_excerpt: String,
}
