use super::{is_blank, HostMatcher};

/// Glob matching where '*' matches any run of bytes, including none.
///
/// Anchored at both ends and ASCII case-insensitive. Iterative two-pointer
/// scan with a single backtrack point: on mismatch, resume right after the
/// last '*' and let it absorb one more host byte. Runs in O(host * pattern)
/// worst case with constant stack.
pub fn glob_match(host: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return host.eq_ignore_ascii_case(pattern);
    }

    let (h, p) = (host.as_bytes(), pattern.as_bytes());
    let (mut hi, mut pi) = (0usize, 0usize);
    // (pattern index just after the last '*', host index it was tried from)
    let mut backtrack: Option<(usize, usize)> = None;

    while hi < h.len() {
        if pi < p.len() && p[pi] == b'*' {
            pi += 1;
            backtrack = Some((pi, hi));
        } else if pi < p.len() && p[pi].eq_ignore_ascii_case(&h[hi]) {
            pi += 1;
            hi += 1;
        } else if let Some((star_pi, star_hi)) = backtrack {
            pi = star_pi;
            hi = star_hi + 1;
            backtrack = Some((star_pi, hi));
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}

/// Wildcard glob matcher
#[derive(Debug, Clone, Default)]
pub struct WildcardMatcher {
    patterns: Vec<String>,
}

impl WildcardMatcher {
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

impl HostMatcher for WildcardMatcher {
    fn matches(&self, host: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| !is_blank(p) && glob_match(host, p))
    }
}
