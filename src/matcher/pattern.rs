use super::{is_blank, HostMatcher};

/// Check if `host` contains `needle` anywhere, ignoring ASCII case.
#[inline]
pub fn contains_ignore_case(host: &str, needle: &str) -> bool {
    let (h, n) = (host.as_bytes(), needle.as_bytes());
    if n.is_empty() {
        return true;
    }
    if n.len() > h.len() {
        return false;
    }
    h.windows(n.len()).any(|w| w.eq_ignore_ascii_case(n))
}

/// Substring pattern matcher
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    patterns: Vec<String>,
}

impl PatternMatcher {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn entries(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl HostMatcher for PatternMatcher {
    fn matches(&self, host: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| !is_blank(p) && contains_ignore_case(host, p))
    }
}
