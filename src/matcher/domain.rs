//! Blocked domain matcher.
//!
//! Keeps the configured entries verbatim and builds a lowercase HashSet
//! alongside them for O(1) exact lookup. Subdomain matching walks the entries
//! and checks the dot boundary by direct indexing.

use std::borrow::Cow;
use std::collections::HashSet;

use super::{is_blank, HostMatcher};
use crate::types::MatchKind;

/// Domain matcher - matches a blocked domain and all of its subdomains
#[derive(Debug, Clone, Default)]
pub struct DomainMatcher {
    /// Entries as configured
    domains: Vec<String>,
    /// Lowercased non-blank entries for exact lookup
    index: HashSet<String>,
}

impl DomainMatcher {
    pub fn new(domains: Vec<String>) -> Self {
        let index = domains
            .iter()
            .filter(|d| !is_blank(d))
            .map(|d| d.to_ascii_lowercase())
            .collect();
        Self { domains, index }
    }

    pub fn entries(&self) -> &[String] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Check if the host equals a blocked domain.
    ///
    /// Allocates a lowercase key only when the host contains uppercase ASCII.
    pub fn matches_exact(&self, host: &str) -> bool {
        if host.is_empty() || self.index.is_empty() {
            return false;
        }

        let key = if host.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(host.to_ascii_lowercase())
        } else {
            Cow::Borrowed(host)
        };
        self.index.contains(key.as_ref())
    }

    /// Check if the host is a subdomain of a blocked domain.
    ///
    /// The byte right before the matched tail must be a '.', so "gazdp.com"
    /// blocks "sub.example.gazdp.com" but not "notgazdp.com".
    pub fn matches_subdomain(&self, host: &str) -> bool {
        self.domains
            .iter()
            .any(|domain| !is_blank(domain) && is_subdomain_of(host, domain))
    }

    /// Report which domain check matches, exact first.
    pub fn match_kind(&self, host: &str) -> Option<MatchKind> {
        if self.matches_exact(host) {
            Some(MatchKind::ExactDomain)
        } else if self.matches_subdomain(host) {
            Some(MatchKind::Subdomain)
        } else {
            None
        }
    }
}

impl HostMatcher for DomainMatcher {
    fn matches(&self, host: &str) -> bool {
        self.match_kind(host).is_some()
    }
}

#[inline]
fn is_subdomain_of(host: &str, domain: &str) -> bool {
    let (h, d) = (host.as_bytes(), domain.as_bytes());
    if h.len() <= d.len() {
        return false;
    }
    let start = h.len() - d.len();
    h[start - 1] == b'.' && h[start..].eq_ignore_ascii_case(d)
}
