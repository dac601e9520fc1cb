//! Response status classification for the upload pipeline.

/// The one status the registry returns for an accepted upload.
pub const OK: u16 = 200;

/// Statuses where retrying cannot help: bad auth, forbidden, conflicting
/// image state, precondition failed, payload too large, and a server fault
/// the registry reports as permanent.
const FATAL_STATUSES: [u16; 6] = [401, 403, 409, 412, 413, 500];

/// What a response status means for the operation that observed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Success,
    Fatal,
    Retry,
}

pub fn is_fatal_status(code: u16) -> bool {
    FATAL_STATUSES.contains(&code)
}

pub fn classify_status(code: u16) -> Disposition {
    match code {
        OK => Disposition::Success,
        code if is_fatal_status(code) => Disposition::Fatal,
        _ => Disposition::Retry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_is_success() {
        assert_eq!(classify_status(200), Disposition::Success);
    }

    #[test]
    fn enumerated_statuses_are_fatal() {
        for code in [401, 403, 409, 412, 413, 500] {
            assert_eq!(classify_status(code), Disposition::Fatal, "status {code}");
        }
    }

    #[test]
    fn everything_else_is_retryable() {
        for code in [201, 202, 204, 301, 400, 404, 429, 502, 503, 504] {
            assert_eq!(classify_status(code), Disposition::Retry, "status {code}");
        }
    }
}
