//! Upload header construction and the property-to-header transform.

use crate::data::{ImageProperties, PropertyValue, TransferRequest};

/// Prefix for headers derived from image properties.
pub const PROPERTY_PREFIX: &str = "x-image-meta-property-";

/// Response headers asserting the content checksum, in preference order.
pub const ETAG: &str = "etag";
pub const IMAGE_META_CHECKSUM: &str = "x-image-meta-checksum";

/// Transform one property entry into its request header.
///
/// Underscores in the key become hyphens; the value renders verbatim.
pub fn property_header(key: &str, value: &PropertyValue) -> (String, String) {
    (
        format!("{PROPERTY_PREFIX}{}", key.replace('_', "-")),
        value.to_string(),
    )
}

/// Fixed defaults for an upload request. The image is registered private
/// and queued; the body is a chunked octet stream.
fn default_headers() -> Vec<(String, String)> {
    [
        ("content-type", "application/octet-stream"),
        ("transfer-encoding", "chunked"),
        ("x-image-meta-is-public", "False"),
        ("x-image-meta-status", "queued"),
        ("x-image-meta-disk-format", "vhd"),
        ("x-image-meta-container-format", "ovf"),
        ("x-glance-registry-purge-props", "False"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Full upload header set: defaults, overlaid by the caller's extra
/// headers (caller wins), plus one header per property entry.
pub fn upload_headers(
    request: &TransferRequest,
    properties: &ImageProperties,
) -> Vec<(String, String)> {
    let mut headers = default_headers();

    for (key, value) in &request.extra_headers {
        match headers
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
        {
            Some(slot) => slot.1 = value.clone(),
            None => headers.push((key.clone(), value.clone())),
        }
    }

    for (key, value) in properties.header_entries() {
        headers.push(property_header(key, value));
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn property_key_underscores_become_hyphens() {
        let (name, value) = property_header("os_type", &PropertyValue::from("linux"));
        assert_eq!(name, "x-image-meta-property-os-type");
        assert_eq!(value, "linux");
    }

    #[test]
    fn defaults_are_present() {
        let request = TransferRequest::new("h", 1, "r");
        let headers = upload_headers(&request, &ImageProperties::new());

        assert_eq!(
            header_value(&headers, "content-type"),
            Some("application/octet-stream")
        );
        assert_eq!(header_value(&headers, "transfer-encoding"), Some("chunked"));
        assert_eq!(header_value(&headers, "x-image-meta-status"), Some("queued"));
        assert_eq!(
            header_value(&headers, "x-glance-registry-purge-props"),
            Some("False")
        );
    }

    #[test]
    fn caller_headers_override_defaults_without_duplicates() {
        let request =
            TransferRequest::new("h", 1, "r").header("x-image-meta-disk-format", "qcow2");
        let headers = upload_headers(&request, &ImageProperties::new());

        assert_eq!(
            header_value(&headers, "x-image-meta-disk-format"),
            Some("qcow2")
        );
        let count = headers
            .iter()
            .filter(|(k, _)| k == "x-image-meta-disk-format")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn caller_headers_pass_through_verbatim() {
        let request = TransferRequest::new("h", 1, "r").header("x-auth-token", "secret");
        let headers = upload_headers(&request, &ImageProperties::new());
        assert_eq!(header_value(&headers, "x-auth-token"), Some("secret"));
    }

    #[test]
    fn properties_become_suffixed_headers() {
        let request = TransferRequest::new("h", 1, "r");
        let properties = ImageProperties::new()
            .with("os_type", "linux")
            .with("vm_mode", "hvm")
            .with(crate::data::COMPRESSION_LEVEL_KEY, 5);
        let headers = upload_headers(&request, &properties);

        assert_eq!(
            header_value(&headers, "x-image-meta-property-os-type"),
            Some("linux")
        );
        assert_eq!(
            header_value(&headers, "x-image-meta-property-vm-mode"),
            Some("hvm")
        );
        assert!(
            !headers
                .iter()
                .any(|(k, _)| k.contains("compression")),
        );
    }
}
