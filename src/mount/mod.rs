//! Service registry: binding modules to URL prefixes.
//!
//! # Responsibilities
//! - Hold the prefix → module associations built during host construction
//! - Reject prefix collisions and malformed prefixes before anything serves
//! - Hand the completed table to the router assembly
//!
//! # Design Decisions
//! - Mounting is additive and one-shot: no unmount, no remount
//! - The table is consumed when the router is assembled, so nothing can
//!   mutate mounts after the host starts serving
//! - Prefixes are restricted to a single path segment; a multi-segment
//!   prefix could shadow routes of a sibling mount
//! - Explicit errors rather than panics; all failures here are load-time

use std::collections::BTreeMap;

use thiserror::Error;

use crate::services::ServiceModule;

/// A mount was rejected. Load-time and fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("mount prefix {prefix:?} is already in use")]
    PrefixCollision { prefix: String },

    #[error("invalid mount prefix {prefix:?}: {reason}")]
    InvalidPrefix {
        prefix: String,
        reason: &'static str,
    },

    #[error("a module named {name:?} is already mounted")]
    DuplicateModule { name: &'static str },
}

/// Prefix → module mapping, built once inside host construction.
#[derive(Default)]
pub struct MountTable {
    entries: BTreeMap<String, ServiceModule>,
}

impl MountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a module to a prefix.
    ///
    /// Every route the module declared becomes reachable at
    /// `prefix + relative_path` once the table is assembled into a router.
    pub fn mount(&mut self, prefix: &str, module: ServiceModule) -> Result<(), MountError> {
        validate_prefix(prefix)?;
        if self.entries.contains_key(prefix) {
            return Err(MountError::PrefixCollision {
                prefix: prefix.to_string(),
            });
        }
        // Module names key the template namespaces, so they must be unique
        // across the table as well.
        if self.entries.values().any(|m| m.name() == module.name()) {
            return Err(MountError::DuplicateModule {
                name: module.name(),
            });
        }
        tracing::debug!(prefix = %prefix, service = module.name(), "service mounted");
        self.entries.insert(prefix.to_string(), module);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceModule)> {
        self.entries.iter().map(|(p, m)| (p.as_str(), m))
    }

    pub(crate) fn into_entries(self) -> BTreeMap<String, ServiceModule> {
        self.entries
    }
}

fn validate_prefix(prefix: &str) -> Result<(), MountError> {
    let invalid = |reason| MountError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason,
    };
    if !prefix.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if prefix.len() == 1 {
        return Err(invalid("must not be the bare root"));
    }
    if prefix.ends_with('/') {
        return Err(invalid("must not end with '/'"));
    }
    if prefix[1..].contains('/') {
        return Err(invalid("must be a single path segment"));
    }
    if prefix.contains(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    Ok(())
}
