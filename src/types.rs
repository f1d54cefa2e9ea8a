use std::fmt;

/// Outcome of classifying a referrer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Allowed,
    Blocked,
}

impl Classification {
    /// Check if this classification blocks the request
    pub fn is_blocked(&self) -> bool {
        matches!(self, Classification::Blocked)
    }
}

impl From<bool> for Classification {
    fn from(blocked: bool) -> Self {
        if blocked {
            Classification::Blocked
        } else {
            Classification::Allowed
        }
    }
}

/// Rule list a configuration entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Tld,
    Domain,
    Pattern,
    SubdomainPrefix,
    Wildcard,
}

impl RuleKind {
    /// Parse the category name used in rule files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "tld" => Some(RuleKind::Tld),
            "domain" => Some(RuleKind::Domain),
            "pattern" => Some(RuleKind::Pattern),
            "prefix" | "subdomain_prefix" => Some(RuleKind::SubdomainPrefix),
            "wildcard" => Some(RuleKind::Wildcard),
            _ => None,
        }
    }
}

/// Which check blocked a host.
///
/// Evaluation order follows the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Tld,
    ExactDomain,
    Subdomain,
    Pattern,
    SubdomainPrefix,
    Wildcard,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Tld => "tld",
            MatchKind::ExactDomain => "domain",
            MatchKind::Subdomain => "subdomain",
            MatchKind::Pattern => "pattern",
            MatchKind::SubdomainPrefix => "subdomain_prefix",
            MatchKind::Wildcard => "wildcard",
        }
    }

    /// Rule list this match came from
    pub fn rule_kind(&self) -> RuleKind {
        match self {
            MatchKind::Tld => RuleKind::Tld,
            MatchKind::ExactDomain | MatchKind::Subdomain => RuleKind::Domain,
            MatchKind::Pattern => RuleKind::Pattern,
            MatchKind::SubdomainPrefix => RuleKind::SubdomainPrefix,
            MatchKind::Wildcard => RuleKind::Wildcard,
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blocked referrer: the extracted host and the check that caught it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Host slice borrowed from the referrer text
    pub host: &'a str,
    pub kind: MatchKind,
}

/// Parsed text rule before it is added to a config
#[derive(Debug, Clone)]
pub struct TextRule {
    /// Category of the rule
    pub kind: RuleKind,
    /// Rule value (domain, suffix, pattern, prefix or glob)
    pub value: String,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}
