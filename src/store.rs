//! Shared rule snapshots.
//!
//! Readers take an `Arc<RuleSet>` and classify against it without holding
//! the lock. Replacement publishes a new, fully built set; existing
//! snapshots stay valid until dropped.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::RuleConfig;
use crate::error::Result;
use crate::rules::RuleSet;

/// Holder of the current rule snapshot
#[derive(Debug)]
pub struct RuleStore {
    current: RwLock<Arc<RuleSet>>,
}

impl RuleStore {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<RuleSet> {
        self.current.read().clone()
    }

    /// Publish a new rule set and return the previous one.
    pub fn replace(&self, rules: RuleSet) -> Arc<RuleSet> {
        let next = Arc::new(rules);
        let count = next.rule_count();
        let previous = std::mem::replace(&mut *self.current.write(), next);
        log::info!(
            "Replaced referrer rules: {} -> {} entries",
            previous.rule_count(),
            count
        );
        previous
    }

    /// Sanitize, validate and publish a configuration.
    ///
    /// On error the current snapshot is left untouched.
    pub fn reload(&self, mut config: RuleConfig) -> Result<Arc<RuleSet>> {
        config.prepare()?;
        Ok(self.replace(config.build()))
    }

    /// Reload from a JSON config file
    pub fn reload_json_file(&self, path: impl AsRef<Path>) -> Result<Arc<RuleSet>> {
        let config = RuleConfig::from_json_file(path)?;
        Ok(self.replace(config.build()))
    }

    /// Reload from a rule text file
    pub fn reload_rules_file(&self, path: impl AsRef<Path>) -> Result<Arc<RuleSet>> {
        let config = RuleConfig::from_rules_file(path)?;
        Ok(self.replace(config.build()))
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl From<RuleSet> for RuleStore {
    fn from(rules: RuleSet) -> Self {
        Self::new(rules)
    }
}
