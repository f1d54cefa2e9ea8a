//! Rule configuration.
//!
//! `RuleConfig` is the raw, owned form of the blocklists. It can be built in
//! code, deserialized from JSON or parsed from a rule file, then compiled into
//! a [`RuleSet`] with [`RuleConfig::build`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ReferrerBlockError, Result};
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::rules::RuleSet;
use crate::types::{RuleKind, TextRule};

const DEFAULT_TLDS: &[&str] = &[".biz.id", ".co.id", ".icu", ".in", ".xyz"];

const DEFAULT_PATTERNS: &[&str] = &[
    "cekitchenware",
    "ctysss",
    "hiplay704",
    "ikancupang",
    "jbuif",
    "karyapemuda",
    "kawruhbasa",
    "missywilkinson",
    "parakerja",
    "pvdwatersports",
    "pulbarholdings",
    "raymandservice",
    "sscgdpracticeset",
    "sharpdrivers",
    "teknovidia",
    "tempatbelajar",
    "toworld123",
];

const DEFAULT_DOMAINS: &[&str] = &[
    "aksarabrita.com",
    "barondamaluku.com",
    "cozynestplans.com",
    "gazdp.com",
    "kebumenupdate.com",
    "kiprahkita.com",
    "pengkicau.com",
    "mojok.co",
    "patioinstallationcompanies.com",
    "tugassains.com",
    "wartaupdate.com",
    "wellsfederal",
    "xlyanghub.com",
];

/// Blocklist configuration.
///
/// Missing or `null` lists deserialize as empty. Keys use the `BlockedTLDs`
/// style; snake_case and camelCase spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Suffixes with their leading dot, e.g. ".icu"
    #[serde(
        rename = "BlockedTLDs",
        alias = "blocked_tlds",
        alias = "blockedTLDs",
        alias = "blockedTlds",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub blocked_tlds: Vec<String>,

    /// Domains blocked along with all their subdomains
    #[serde(
        rename = "BlockedDomains",
        alias = "blocked_domains",
        alias = "blockedDomains",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub blocked_domains: Vec<String>,

    /// Substrings blocked anywhere in the host
    #[serde(
        rename = "BlockedPatterns",
        alias = "blocked_patterns",
        alias = "blockedPatterns",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub blocked_patterns: Vec<String>,

    /// Prefixes blocked when followed by optional digits and a dot
    #[serde(
        rename = "BlockedSubdomainPrefixes",
        alias = "blocked_subdomain_prefixes",
        alias = "blockedSubdomainPrefixes",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub blocked_subdomain_prefixes: Vec<String>,

    /// Globs where '*' matches any run of characters
    #[serde(
        rename = "BlockedWildcardPatterns",
        alias = "blocked_wildcard_patterns",
        alias = "blockedWildcardPatterns",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub blocked_wildcard_patterns: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleConfig {
    /// The built-in blocklist
    fn default() -> Self {
        Self {
            blocked_tlds: to_owned_list(DEFAULT_TLDS),
            blocked_domains: to_owned_list(DEFAULT_DOMAINS),
            blocked_patterns: to_owned_list(DEFAULT_PATTERNS),
            blocked_subdomain_prefixes: Vec::new(),
            blocked_wildcard_patterns: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Configuration with no rules
    pub fn empty() -> Self {
        Self {
            blocked_tlds: Vec::new(),
            blocked_domains: Vec::new(),
            blocked_patterns: Vec::new(),
            blocked_subdomain_prefixes: Vec::new(),
            blocked_wildcard_patterns: Vec::new(),
        }
    }

    /// Add a TLD suffix (with leading dot)
    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        self.blocked_tlds.push(tld.into());
        self
    }

    /// Add a blocked domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.blocked_domains.push(domain.into());
        self
    }

    /// Add a substring pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.blocked_patterns.push(pattern.into());
        self
    }

    /// Add a numeric subdomain prefix
    pub fn with_subdomain_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.blocked_subdomain_prefixes.push(prefix.into());
        self
    }

    /// Add a wildcard glob
    pub fn with_wildcard(mut self, pattern: impl Into<String>) -> Self {
        self.blocked_wildcard_patterns.push(pattern.into());
        self
    }

    /// Add an entry to the list for `kind`
    pub fn push(&mut self, kind: RuleKind, value: impl Into<String>) {
        self.list_mut(kind).push(value.into());
    }

    /// Entries configured for `kind`
    pub fn entries(&self, kind: RuleKind) -> &[String] {
        match kind {
            RuleKind::Tld => &self.blocked_tlds,
            RuleKind::Domain => &self.blocked_domains,
            RuleKind::Pattern => &self.blocked_patterns,
            RuleKind::SubdomainPrefix => &self.blocked_subdomain_prefixes,
            RuleKind::Wildcard => &self.blocked_wildcard_patterns,
        }
    }

    fn list_mut(&mut self, kind: RuleKind) -> &mut Vec<String> {
        match kind {
            RuleKind::Tld => &mut self.blocked_tlds,
            RuleKind::Domain => &mut self.blocked_domains,
            RuleKind::Pattern => &mut self.blocked_patterns,
            RuleKind::SubdomainPrefix => &mut self.blocked_subdomain_prefixes,
            RuleKind::Wildcard => &mut self.blocked_wildcard_patterns,
        }
    }

    fn lists_mut(&mut self) -> [&mut Vec<String>; 5] {
        [
            &mut self.blocked_tlds,
            &mut self.blocked_domains,
            &mut self.blocked_patterns,
            &mut self.blocked_subdomain_prefixes,
            &mut self.blocked_wildcard_patterns,
        ]
    }

    /// Total number of entries across all lists
    pub fn len(&self) -> usize {
        self.blocked_tlds.len()
            + self.blocked_domains.len()
            + self.blocked_patterns.len()
            + self.blocked_subdomain_prefixes.len()
            + self.blocked_wildcard_patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Trim entries, drop blank ones and remove case-insensitive duplicates.
    ///
    /// The first spelling of a duplicated entry is kept.
    pub fn sanitize(&mut self) {
        for list in self.lists_mut() {
            let mut seen = HashSet::with_capacity(list.len());
            let entries = std::mem::take(list);
            for entry in entries {
                let trimmed = entry.trim();
                if trimmed.is_empty() || !seen.insert(trimmed.to_ascii_lowercase()) {
                    continue;
                }
                list.push(if trimmed.len() == entry.len() {
                    entry
                } else {
                    trimmed.to_string()
                });
            }
        }
    }

    /// Check that every TLD entry starts with '.'.
    pub fn validate(&self) -> Result<()> {
        for tld in &self.blocked_tlds {
            let trimmed = tld.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('.') {
                return Err(ReferrerBlockError::InvalidTld(tld.clone()));
            }
        }
        Ok(())
    }

    /// Append all entries of `other`. Run [`sanitize`](Self::sanitize) to dedupe.
    pub fn merge(&mut self, other: RuleConfig) {
        self.blocked_tlds.extend(other.blocked_tlds);
        self.blocked_domains.extend(other.blocked_domains);
        self.blocked_patterns.extend(other.blocked_patterns);
        self.blocked_subdomain_prefixes
            .extend(other.blocked_subdomain_prefixes);
        self.blocked_wildcard_patterns
            .extend(other.blocked_wildcard_patterns);
    }

    /// Sanitize and validate in one step
    pub fn prepare(&mut self) -> Result<()> {
        self.sanitize();
        self.validate()
    }

    /// Load a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: RuleConfig = serde_json::from_str(json)?;
        config.prepare()?;
        log::debug!("Loaded {} referrer rules from JSON", config.len());
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ReferrerBlockError::ConfigError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Build a configuration from parsed text rules.
    pub fn from_text_rules(rules: Vec<TextRule>) -> Result<Self> {
        let mut config = Self::empty();
        for rule in rules {
            if rule.kind == RuleKind::Tld && !rule.value.starts_with('.') {
                return Err(ReferrerBlockError::ParseErrorAtLine {
                    line: rule.line_num,
                    message: ReferrerBlockError::InvalidTld(rule.value).to_string(),
                });
            }
            config.push(rule.kind, rule.value);
        }
        config.prepare()?;
        Ok(config)
    }

    /// Load a configuration from rule text.
    pub fn from_rules_text(text: &str) -> Result<Self> {
        let config = Self::from_text_rules(parse_rules(text)?)?;
        log::debug!("Loaded {} referrer rules from text", config.len());
        Ok(config)
    }

    /// Load a configuration from a rule file.
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::from_text_rules(parse_rules_from_file(path)?)?;
        log::debug!("Loaded {} referrer rules from file", config.len());
        Ok(config)
    }

    /// Compile into an immutable [`RuleSet`]
    pub fn build(self) -> RuleSet {
        RuleSet::new(self)
    }
}
