use serde::{Deserialize, Serialize};

/// Target of one transfer operation.
///
/// Immutable once constructed; the registry URL is derived, never stored.
///
/// # Examples
///
/// ```
/// use ferry_transfer::TransferRequest;
///
/// let request = TransferRequest::new("registry.internal", 9292, "7f3a")
///     .use_tls(true)
///     .header("x-auth-token", "secret");
/// assert_eq!(request.url(), "https://registry.internal:9292/v1/images/7f3a");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub resource_id: String,
    /// Caller-supplied headers, sent verbatim. On upload they override the
    /// pipeline defaults.
    pub extra_headers: Vec<(String, String)>,
}

impl TransferRequest {
    pub fn new(host: impl Into<String>, port: u16, resource_id: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            use_tls: false,
            resource_id: resource_id.into(),
            extra_headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn use_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }

    /// `host:port`, as embedded in failure messages.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path component of the registry resource.
    pub fn resource_path(&self) -> String {
        format!("/v1/images/{}", self.resource_id)
    }

    /// Full registry URL for this resource.
    pub fn url(&self) -> String {
        format!(
            "{}://{}{}",
            self.scheme(),
            self.authority(),
            self.resource_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_reflects_tls_flag() {
        let plain = TransferRequest::new("registry", 9292, "abc");
        assert_eq!(plain.url(), "http://registry:9292/v1/images/abc");

        let tls = TransferRequest::new("registry", 443, "abc").use_tls(true);
        assert_eq!(tls.url(), "https://registry:443/v1/images/abc");
    }

    #[test]
    fn headers_accumulate_in_order() {
        let request = TransferRequest::new("h", 1, "r")
            .header("a", "1")
            .header("b", "2");
        assert_eq!(
            request.extra_headers,
            vec![("a".into(), "1".into()), ("b".into(), "2".into())]
        );
    }
}
