//! Referrer Block - fast referrer spam classification for Rust
//!
//! This library decides whether an HTTP `Referer` value comes from a blocked
//! host, with support for:
//! - TLD suffix rules (`.icu`)
//! - Domain rules matching the domain and all subdomains (`gazdp.com`)
//! - Substring patterns (`ikancupang`)
//! - Numeric subdomain prefixes (`iqri` blocks `iqri.`, `iqri1.`, `iqri18.`)
//! - Wildcard globs (`*crmsoftware*.com`)
//!
//! Host extraction and matching work on borrowed slices and never fail: a
//! malformed referrer simply matches nothing.
//!
//! # Example
//!
//! ```rust
//! use referrer_block::{classify, Classification, RuleConfig};
//!
//! let rules = RuleConfig::empty()
//!     .with_tld(".icu")
//!     .with_domain("gazdp.com")
//!     .with_wildcard("sdk*freegame.top")
//!     .build();
//!
//! assert_eq!(classify("https://spam.icu/page", &rules), Classification::Blocked);
//! assert_eq!(classify("https://www.gazdp.com", &rules), Classification::Blocked);
//! assert_eq!(classify("https://notgazdp.com", &rules), Classification::Allowed);
//! assert_eq!(classify("", &rules), Classification::Allowed);
//! ```
//!
//! # Rule Syntax
//!
//! Rule files hold one rule per line:
//! ```text
//! category(value)
//! ```
//!
//! | Category | Example | Description |
//! |----------|---------|-------------|
//! | `tld` | `tld(.icu)` | Host ends with the suffix |
//! | `domain` | `domain(gazdp.com)` | Exact host or any subdomain |
//! | `pattern` | `pattern(ctysss)` | Substring anywhere in the host |
//! | `prefix` | `prefix(iqri)` | Prefix, optional digits, then a dot |
//! | `wildcard` | `wildcard(*crm*.com)` | Glob, `*` matches anything |
//!
//! `#` starts a comment and `file: path` includes another rule file.

pub mod classify;
pub mod config;
pub mod error;
pub mod guard;
pub mod host;
pub mod matcher;
#[cfg(feature = "async")]
pub mod middleware;
pub mod parser;
pub mod rules;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use classify::{classify, is_blocked, is_blocked_referrer, match_kind, match_referrer};
pub use config::RuleConfig;
pub use error::{ReferrerBlockError, Result};
pub use host::{extract_host, strip_scheme};
pub use matcher::{
    glob_match, DomainMatcher, HostMatcher, PatternMatcher, SubdomainPrefixMatcher, TldMatcher,
    WildcardMatcher,
};
pub use parser::{parse_rules, parse_rules_from_file};
pub use rules::RuleSet;
pub use store::RuleStore;
pub use types::{Classification, MatchKind, RuleKind, RuleMatch, TextRule};

// Re-export guard types
pub use guard::{GuardOptions, ReferrerGuard, Rejection, RequestInfo, Verdict};

#[cfg(feature = "async")]
pub use middleware::{Endpoint, ReferrerBlock, Response};
