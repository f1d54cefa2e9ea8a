use super::{is_blank, HostMatcher};

/// Check if `host` ends with `suffix`, ignoring ASCII case.
#[inline]
pub fn ends_with_ignore_case(host: &str, suffix: &str) -> bool {
    let (h, s) = (host.as_bytes(), suffix.as_bytes());
    h.len() >= s.len() && h[h.len() - s.len()..].eq_ignore_ascii_case(s)
}

/// TLD matcher - matches hosts ending with a blocked suffix.
///
/// Entries carry their leading dot (".icu"), so a plain suffix comparison
/// already enforces the label boundary: ".icu" matches "spam.icu" but not "xicu".
#[derive(Debug, Clone, Default)]
pub struct TldMatcher {
    tlds: Vec<String>,
}

impl TldMatcher {
    pub fn new(tlds: Vec<String>) -> Self {
        Self { tlds }
    }

    pub fn entries(&self) -> &[String] {
        &self.tlds
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }
}

impl HostMatcher for TldMatcher {
    fn matches(&self, host: &str) -> bool {
        self.tlds
            .iter()
            .any(|tld| !is_blank(tld) && ends_with_ignore_case(host, tld))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(tlds: &[&str]) -> TldMatcher {
        TldMatcher::new(tlds.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_ends_with_ignore_case() {
        assert!(ends_with_ignore_case("spam.icu", ".icu"));
        assert!(ends_with_ignore_case("SPAM.ICU", ".icu"));
        assert!(ends_with_ignore_case(".icu", ".icu"));
        assert!(!ends_with_ignore_case("icu", ".icu"));
        assert!(!ends_with_ignore_case("xicu", ".icu"));
    }

    #[test]
    fn test_tld_match() {
        let m = matcher(&[".icu", ".xyz", ".biz.id"]);

        assert!(m.matches("spam.icu"));
        assert!(m.matches("malicious.xyz"));
        assert!(m.matches("spam.biz.id"));
        assert!(m.matches("Deep.Sub.SPAM.ICU"));
        assert!(!m.matches("xicu"));
        assert!(!m.matches("example.com"));
        assert!(!m.matches("example.id"));
    }

    #[test]
    fn test_multi_label_suffix_needs_full_suffix() {
        let m = matcher(&[".co.id"]);
        assert!(m.matches("shop.co.id"));
        assert!(!m.matches("shopco.id"));
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let m = matcher(&["", "   ", ".icu"]);
        assert!(!m.matches("example.com"));
        assert!(m.matches("spam.icu"));

        let only_blank = matcher(&["", " "]);
        assert!(!only_blank.matches("example.com"));
        assert!(!only_blank.matches(""));
    }

    #[test]
    fn test_entries_are_kept_verbatim() {
        let m = matcher(&[".ICU"]);
        assert_eq!(m.entries(), &[".ICU".to_string()]);
        assert!(m.matches("spam.icu"));
    }
}
