use super::{is_blank, HostMatcher};

/// Check if `host` starts with `prefix`, optional ASCII digits, then a dot.
///
/// Matches "iqri.", "iqri1." and "iqri18." for prefix "iqri", but not
/// "iqrix." or "iqri1x.". A digit run that reaches the end of the host is
/// not a match.
#[inline]
pub fn matches_numeric_prefix(host: &str, prefix: &str) -> bool {
    let (h, p) = (host.as_bytes(), prefix.as_bytes());
    if p.is_empty() || h.len() <= p.len() || !h[..p.len()].eq_ignore_ascii_case(p) {
        return false;
    }

    let rest = &h[p.len()..];
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    rest.get(digits) == Some(&b'.')
}

/// Numeric subdomain prefix matcher (e.g. "hk" for hk1., hk12., ...)
#[derive(Debug, Clone, Default)]
pub struct SubdomainPrefixMatcher {
    prefixes: Vec<String>,
}

impl SubdomainPrefixMatcher {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn entries(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl HostMatcher for SubdomainPrefixMatcher {
    fn matches(&self, host: &str) -> bool {
        self.prefixes
            .iter()
            .any(|p| !is_blank(p) && matches_numeric_prefix(host, p))
    }
}
