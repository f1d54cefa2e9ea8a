//! Request guard.
//!
//! Framework-neutral glue between an inbound request and the classifier:
//! reads the referrer, classifies it and, on a hit, describes the rejection
//! (status, body, artificial delay) and logs it.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::classify::match_referrer;
use crate::rules::RuleSet;
use crate::store::RuleStore;
use crate::types::MatchKind;

/// Default status for blocked requests (410 Gone)
pub const DEFAULT_STATUS: u16 = 410;

/// Default body for blocked requests
pub const DEFAULT_BODY: &str =
    "<!DOCTYPE html><html><head><title>Gone</title></head><body></body></html>";

/// Default lower bound of the rejection delay
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(100);

/// Default upper bound (exclusive) of the rejection delay
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(500);

/// The parts of a request the guard looks at
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestInfo<'a> {
    /// Raw `Referer` header value
    pub referer: Option<&'a str>,
    /// Client address, for logging
    pub remote_addr: Option<IpAddr>,
    /// Request path, for logging
    pub path: &'a str,
}

impl<'a> RequestInfo<'a> {
    pub fn new(referer: Option<&'a str>, remote_addr: Option<IpAddr>, path: &'a str) -> Self {
        Self {
            referer,
            remote_addr,
            path,
        }
    }

    /// Request carrying only a referrer
    pub fn from_referer(referer: &'a str) -> Self {
        Self {
            referer: Some(referer),
            remote_addr: None,
            path: "/",
        }
    }
}

/// Guard options.
#[derive(Debug, Clone)]
pub struct GuardOptions {
    /// Response status for blocked requests
    pub status: u16,
    /// Response body for blocked requests
    pub body: String,
    /// Minimum artificial delay before answering a blocked request
    pub min_delay: Duration,
    /// Maximum (exclusive) artificial delay
    pub max_delay: Duration,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS,
            body: DEFAULT_BODY.to_string(),
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set response status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the delay range. `max` is exclusive; an empty range uses `min`.
    pub fn with_delay(mut self, min: Duration, max: Duration) -> Self {
        self.min_delay = min;
        self.max_delay = max;
        self
    }

    /// Disable the artificial delay
    pub fn without_delay(self) -> Self {
        self.with_delay(Duration::ZERO, Duration::ZERO)
    }

    fn pick_delay(&self) -> Duration {
        if self.max_delay <= self.min_delay {
            return self.min_delay;
        }
        let min = self.min_delay.as_nanos() as u64;
        let max = self.max_delay.as_nanos() as u64;
        Duration::from_nanos(rand::rng().random_range(min..max))
    }
}

/// How to answer a blocked request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub body: String,
    /// Wait this long before answering
    pub delay: Duration,
    /// Host that was blocked
    pub host: String,
    /// Check that blocked it
    pub kind: MatchKind,
}

/// Guard decision for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the request to the next handler
    Pass,
    /// Answer with the rejection instead
    Reject(Rejection),
}

impl Verdict {
    pub fn is_reject(&self) -> bool {
        matches!(self, Verdict::Reject(_))
    }
}

/// Referrer guard backed by a shared rule store
#[derive(Debug, Clone)]
pub struct ReferrerGuard {
    store: Arc<RuleStore>,
    options: GuardOptions,
}

impl ReferrerGuard {
    pub fn new(store: Arc<RuleStore>, options: GuardOptions) -> Self {
        Self { store, options }
    }

    /// Guard over a fixed rule set with default options
    pub fn from_rules(rules: RuleSet) -> Self {
        Self::new(Arc::new(RuleStore::new(rules)), GuardOptions::default())
    }

    /// Shared store, for reloading rules while the guard is in use
    pub fn store(&self) -> &Arc<RuleStore> {
        &self.store
    }

    pub fn options(&self) -> &GuardOptions {
        &self.options
    }

    /// Decide what to do with a request.
    ///
    /// A missing or empty referrer always passes without classification.
    pub fn check(&self, request: &RequestInfo<'_>) -> Verdict {
        let referer = match request.referer {
            Some(referer) if !referer.is_empty() => referer,
            _ => return Verdict::Pass,
        };

        let rules = self.store.snapshot();
        let Some(hit) = match_referrer(referer, &rules) else {
            if crate::host::extract_host(referer).is_empty() {
                tracing::debug!(referer, "Malformed referrer detected");
            }
            return Verdict::Pass;
        };

        tracing::warn!(
            host = hit.host,
            ip = ?request.remote_addr,
            path = request.path,
            kind = %hit.kind,
            "Referrer spam blocked"
        );

        Verdict::Reject(Rejection {
            status: self.options.status,
            body: self.options.body.clone(),
            delay: self.options.pick_delay(),
            host: hit.host.to_string(),
            kind: hit.kind,
        })
    }
}

impl Default for ReferrerGuard {
    fn default() -> Self {
        Self::new(Arc::new(RuleStore::default()), GuardOptions::default())
    }
}
