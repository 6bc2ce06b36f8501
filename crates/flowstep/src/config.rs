//! Configuration types for step-over resolution.
//!
//! All types implement [`serde::Deserialize`] and default every field, so a
//! configuration file only needs the settings it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`ResolverConfig`] - How branching mediators are resolved.
//! - [`AbsentBranchPolicy`] - Whether an absent branch arms the construct's successor.
//! - [`EntryRegion`] - Which positions on a branching mediator count as its entry.
//!
//! # Example
//!
//! ```
//! # use flowstep::config::{AbsentBranchPolicy, AppConfig, EntryRegion};
//! let config = AppConfig::default();
//! assert_eq!(config.resolver().absent_branches(), AbsentBranchPolicy::FallThrough);
//! assert_eq!(config.resolver().entry_region(), EntryRegion::StartTag);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Resolver configuration section.
    #[serde(default)]
    resolver: ResolverConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified resolver configuration.
    pub fn new(resolver: ResolverConfig) -> Self {
        Self { resolver }
    }

    /// Returns the resolver configuration.
    pub fn resolver(&self) -> &ResolverConfig {
        &self.resolver
    }
}

/// Settings for the step-over resolver.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    absent_branches: AbsentBranchPolicy,

    #[serde(default)]
    entry_region: EntryRegion,
}

impl ResolverConfig {
    /// Creates a new [`ResolverConfig`].
    ///
    /// # Arguments
    ///
    /// * `absent_branches` - How absent branches of an entered mediator are treated.
    /// * `entry_region` - Which positions count as a branching mediator's entry.
    pub fn new(absent_branches: AbsentBranchPolicy, entry_region: EntryRegion) -> Self {
        Self {
            absent_branches,
            entry_region,
        }
    }

    pub fn absent_branches(&self) -> AbsentBranchPolicy {
        self.absent_branches
    }

    pub fn entry_region(&self) -> EntryRegion {
        self.entry_region
    }
}

/// Treatment of declared branches that are absent when stepping over the
/// entry of a branching mediator.
///
/// A branch is absent when its element was not declared, or was declared
/// without mediators (a `<case>` with no children, a `<target>` that only
/// references a sequence by name).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsentBranchPolicy {
    /// An absent branch is an edge to whatever follows the mediator.
    ///
    /// The heads of the present branches are armed, and unless every declared
    /// branch was present, so is the mediator's successor. A `filter` without
    /// `else` therefore arms both the head of `then` and the statement after
    /// the filter.
    #[default]
    FallThrough,

    /// Absent branches are skipped.
    ///
    /// The mediator's successor is only armed when no branch is present.
    Ignore,
}

/// Positions on a branching mediator that are stepped over as its entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryRegion {
    /// Only positions within the start tag. Positions inside the mediator
    /// that are in no branch (the end tag, gaps between branches) step to the
    /// mediator's successor.
    #[default]
    StartTag,

    /// Any position inside the mediator that is not inside one of its
    /// branches.
    OutsideBranches,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(
            config.resolver().absent_branches(),
            AbsentBranchPolicy::FallThrough
        );
        assert_eq!(config.resolver().entry_region(), EntryRegion::StartTag);
    }

    #[test]
    fn test_deserialize_kebab_case_values() {
        let config: AppConfig = serde_json::from_str(
            r#"{"resolver": {"absent_branches": "ignore", "entry_region": "outside-branches"}}"#,
        )
        .expect("config should deserialize");

        assert_eq!(
            config.resolver().absent_branches(),
            AbsentBranchPolicy::Ignore
        );
        assert_eq!(
            config.resolver().entry_region(),
            EntryRegion::OutsideBranches
        );
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: AppConfig = serde_json::from_str(r#"{"resolver": {"absent_branches": "fall-through"}}"#)
            .expect("config should deserialize");

        assert_eq!(config.resolver().entry_region(), EntryRegion::StartTag);
    }
}
