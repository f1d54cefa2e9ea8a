//! Compiled rule set.
//!
//! A `RuleSet` is an immutable snapshot of the five blocklist categories.
//! Build it once from a [`RuleConfig`](crate::config::RuleConfig) and share it
//! (e.g. behind an `Arc`) across threads.

use crate::classify;
use crate::config::RuleConfig;
use crate::matcher::{
    DomainMatcher, PatternMatcher, SubdomainPrefixMatcher, TldMatcher, WildcardMatcher,
};
use crate::types::{Classification, MatchKind, RuleMatch};

/// Immutable rule snapshot
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    tlds: TldMatcher,
    domains: DomainMatcher,
    patterns: PatternMatcher,
    subdomain_prefixes: SubdomainPrefixMatcher,
    wildcards: WildcardMatcher,
}

impl RuleSet {
    /// Compile a rule set from a configuration.
    ///
    /// Entries are taken as-is; call [`RuleConfig::sanitize`] first if the
    /// configuration comes from an untrusted source. Blank entries are still
    /// ignored at match time.
    pub fn new(config: RuleConfig) -> Self {
        Self {
            tlds: TldMatcher::new(config.blocked_tlds),
            domains: DomainMatcher::new(config.blocked_domains),
            patterns: PatternMatcher::new(config.blocked_patterns),
            subdomain_prefixes: SubdomainPrefixMatcher::new(config.blocked_subdomain_prefixes),
            wildcards: WildcardMatcher::new(config.blocked_wildcard_patterns),
        }
    }

    /// Rule set with no rules; blocks nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rule set with the built-in blocklist
    pub fn builtin() -> Self {
        Self::new(RuleConfig::default())
    }

    pub fn tlds(&self) -> &TldMatcher {
        &self.tlds
    }

    pub fn domains(&self) -> &DomainMatcher {
        &self.domains
    }

    pub fn patterns(&self) -> &PatternMatcher {
        &self.patterns
    }

    pub fn subdomain_prefixes(&self) -> &SubdomainPrefixMatcher {
        &self.subdomain_prefixes
    }

    pub fn wildcards(&self) -> &WildcardMatcher {
        &self.wildcards
    }

    /// Total number of configured entries across all categories
    pub fn rule_count(&self) -> usize {
        self.tlds.entries().len()
            + self.domains.entries().len()
            + self.patterns.entries().len()
            + self.subdomain_prefixes.entries().len()
            + self.wildcards.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    /// See [`classify::is_blocked`]
    pub fn is_blocked(&self, host: &str) -> bool {
        classify::is_blocked(host, self)
    }

    /// See [`classify::match_kind`]
    pub fn match_kind(&self, host: &str) -> Option<MatchKind> {
        classify::match_kind(host, self)
    }

    /// See [`classify::classify`]
    pub fn classify(&self, referrer: &str) -> Classification {
        classify::classify(referrer, self)
    }

    /// See [`classify::match_referrer`]
    pub fn match_referrer<'a>(&self, referrer: &'a str) -> Option<RuleMatch<'a>> {
        classify::match_referrer(referrer, self)
    }

    /// Convert back into a configuration with the original entries
    pub fn to_config(&self) -> RuleConfig {
        RuleConfig {
            blocked_tlds: self.tlds.entries().to_vec(),
            blocked_domains: self.domains.entries().to_vec(),
            blocked_patterns: self.patterns.entries().to_vec(),
            blocked_subdomain_prefixes: self.subdomain_prefixes.entries().to_vec(),
            blocked_wildcard_patterns: self.wildcards.entries().to_vec(),
        }
    }
}

impl From<RuleConfig> for RuleSet {
    fn from(config: RuleConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule_set() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert_eq!(rules.rule_count(), 0);
        assert!(!rules.is_blocked("spam.icu"));
    }

    #[test]
    fn test_builtin_rule_set() {
        let rules = RuleSet::builtin();
        assert!(!rules.is_empty());
        assert!(rules.is_blocked("spam.icu"));
        assert!(rules.is_blocked("www.gazdp.com"));
        assert!(!rules.is_blocked("www.google.com"));
    }

    #[test]
    fn test_entries_are_not_rewritten() {
        let config = RuleConfig::empty()
            .with_tld(".ICU")
            .with_domain("GazDP.com")
            .with_wildcard("*CRM*.com");
        let rules = RuleSet::new(config.clone());

        assert_eq!(rules.to_config(), config);
        assert!(rules.is_blocked("spam.icu"));
        assert!(rules.is_blocked("gazdp.com"));
        assert!(rules.is_blocked("mycrmhub.com"));
    }

    #[test]
    fn test_rule_set_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleSet>();
    }
}
