//! Referrer classification.
//!
//! Checks run in a fixed order and the first hit wins:
//! TLD suffix, exact domain, subdomain, substring pattern,
//! numeric subdomain prefix, wildcard glob.

use crate::host::extract_host;
use crate::matcher::HostMatcher;
use crate::rules::RuleSet;
use crate::types::{Classification, MatchKind, RuleMatch};

/// Check if a host is blocked by any rule.
///
/// An empty host never matches.
#[inline]
pub fn is_blocked(host: &str, rules: &RuleSet) -> bool {
    match_kind(host, rules).is_some()
}

/// Find the first check that blocks `host`.
pub fn match_kind(host: &str, rules: &RuleSet) -> Option<MatchKind> {
    if host.is_empty() {
        return None;
    }

    if rules.tlds().matches(host) {
        return Some(MatchKind::Tld);
    }

    if let Some(kind) = rules.domains().match_kind(host) {
        return Some(kind);
    }

    if rules.patterns().matches(host) {
        return Some(MatchKind::Pattern);
    }

    if rules.subdomain_prefixes().matches(host) {
        return Some(MatchKind::SubdomainPrefix);
    }

    if rules.wildcards().matches(host) {
        return Some(MatchKind::Wildcard);
    }

    None
}

/// Extract the host from a referrer and report the blocking check, if any.
///
/// Returns `None` for an empty referrer without running any check.
pub fn match_referrer<'a>(referrer: &'a str, rules: &RuleSet) -> Option<RuleMatch<'a>> {
    if referrer.is_empty() {
        return None;
    }
    let host = extract_host(referrer);
    match_kind(host, rules).map(|kind| RuleMatch { host, kind })
}

/// Check if a raw referrer value is blocked.
#[inline]
pub fn is_blocked_referrer(referrer: &str, rules: &RuleSet) -> bool {
    match_referrer(referrer, rules).is_some()
}

/// Classify a raw referrer value.
#[inline]
pub fn classify(referrer: &str, rules: &RuleSet) -> Classification {
    Classification::from(is_blocked_referrer(referrer, rules))
}
