//! Host extraction.
//!
//! Works directly on the referrer slice: no URL parsing, no allocation.

const HTTP: &[u8] = b"http://";
const HTTPS: &[u8] = b"https://";

/// Strip a leading `http://` or `https://` (ASCII case-insensitive).
///
/// Any other scheme is left in place and ends up as part of the host.
#[inline]
pub fn strip_scheme(referrer: &str) -> &str {
    let bytes = referrer.as_bytes();
    let len = if has_prefix_ignore_case(bytes, HTTPS) {
        HTTPS.len()
    } else if has_prefix_ignore_case(bytes, HTTP) {
        HTTP.len()
    } else {
        0
    };
    // The prefix is pure ASCII, so `len` is a char boundary.
    &referrer[len..]
}

/// Extract the host from a referrer value.
///
/// Returns the slice after an optional scheme, up to the first `/`, `:`,
/// `?` or `#`. The result may be empty. Never fails; input that is not a
/// URL yields a host that simply matches nothing.
#[inline]
pub fn extract_host(referrer: &str) -> &str {
    let rest = strip_scheme(referrer);
    match rest.find(['/', ':', '?', '#']) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[inline]
fn has_prefix_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_referrer() {
        assert_eq!(extract_host(""), "");
    }

    #[test]
    fn test_strip_http_and_https() {
        assert_eq!(extract_host("http://spam.icu"), "spam.icu");
        assert_eq!(extract_host("https://spam.icu"), "spam.icu");
        assert_eq!(extract_host("HTTPS://Spam.ICU"), "Spam.ICU");
        assert_eq!(extract_host("HtTp://example.com/"), "example.com");
    }

    #[test]
    fn test_bare_host() {
        assert_eq!(extract_host("hk4.ikancupang.id"), "hk4.ikancupang.id");
        assert_eq!(extract_host("example.com/page"), "example.com");
    }

    #[test]
    fn test_stops_at_first_delimiter() {
        assert_eq!(extract_host("https://example.com/path?q=1#f"), "example.com");
        assert_eq!(extract_host("https://example.com:8443/path"), "example.com");
        assert_eq!(extract_host("https://example.com?q=1"), "example.com");
        assert_eq!(extract_host("https://example.com#top"), "example.com");
        assert_eq!(extract_host("https://example.com/a:b"), "example.com");
    }

    #[test]
    fn test_scheme_only() {
        assert_eq!(extract_host("https://"), "");
        assert_eq!(extract_host("http:///path"), "");
    }

    #[test]
    fn test_other_schemes_are_not_stripped() {
        // "ftp" ends at the ':' of the unrecognized scheme
        assert_eq!(extract_host("ftp://example.com"), "ftp");
        assert_eq!(extract_host("httpx://example.com"), "httpx");
    }

    #[test]
    fn test_ipv6_literal_is_not_interpreted() {
        assert_eq!(extract_host("https://[::1]:8080/path"), "[");
        assert_eq!(extract_host("[::1]:8080"), "[");
    }

    #[test]
    fn test_userinfo_is_not_stripped() {
        assert_eq!(extract_host("https://user@example.com/"), "user@example.com");
    }

    #[test]
    fn test_short_inputs_do_not_panic() {
        for input in ["h", "ht", "http", "http:", "http:/", "https:/", "é", "https://é"] {
            let _ = extract_host(input);
        }
        assert_eq!(extract_host("https://é/x"), "é");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let inputs = [
            "https://www.gazdp.com/path",
            "spam.icu",
            "http://example.com:80",
            "",
            "https://[::1]:8080/path",
            "not a url at all",
        ];
        for input in inputs {
            let once = extract_host(input);
            assert_eq!(extract_host(once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_round_trip_with_path_query_fragment() {
        for host in ["example.com", "sub.example.gazdp.com", "UPPER.case.ICU", "x"] {
            let referrer = format!("https://{}/path?q=1#f", host);
            assert_eq!(extract_host(&referrer), host);
        }
    }

    #[test]
    fn test_result_borrows_input() {
        let referrer = String::from("https://www.gazdp.com/x");
        let host = extract_host(&referrer);
        let start = host.as_ptr() as usize - referrer.as_ptr() as usize;
        assert_eq!(start, "https://".len());
    }
}
