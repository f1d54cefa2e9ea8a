//! Rule category matchers.
//!
//! Every matcher compares ASCII case-insensitively and skips blank entries,
//! so a bad configuration line can never match or suppress anything.

mod domain;
mod pattern;
mod prefix;
mod tld;
mod wildcard;

pub use domain::DomainMatcher;
pub use pattern::{contains_ignore_case, PatternMatcher};
pub use prefix::{matches_numeric_prefix, SubdomainPrefixMatcher};
pub use tld::{ends_with_ignore_case, TldMatcher};
pub use wildcard::{glob_match, WildcardMatcher};

/// Trait for host matchers
pub trait HostMatcher: Send + Sync {
    /// Check if the host matches any rule of this matcher
    fn matches(&self, host: &str) -> bool;
}

/// Blank entries are ignored at match time.
#[inline]
pub(crate) fn is_blank(entry: &str) -> bool {
    entry.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(".icu"));
    }

    #[test]
    fn test_matchers_are_object_safe() {
        let matchers: Vec<Box<dyn HostMatcher>> = vec![
            Box::new(TldMatcher::new(vec![".icu".to_string()])),
            Box::new(DomainMatcher::new(vec!["gazdp.com".to_string()])),
            Box::new(PatternMatcher::new(vec!["ctysss".to_string()])),
            Box::new(SubdomainPrefixMatcher::new(vec!["iqri".to_string()])),
            Box::new(WildcardMatcher::new(vec!["sdk*freegame.top".to_string()])),
        ];
        let hosts = [
            "spam.icu",
            "www.gazdp.com",
            "shop-ctysss.com",
            "iqri1.x.com",
            "sdk7freegame.top",
        ];
        for (matcher, host) in matchers.iter().zip(hosts) {
            assert!(matcher.matches(host), "{} should match", host);
            assert!(!matcher.matches("example.com"));
        }
    }
}
