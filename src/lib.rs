//! forge-outdated - find registry modules with outdated dependency ranges
//!
//! This library walks the Puppet Forge module listing and reports modules
//! whose declared range for a dependency (or for puppet itself) excludes a
//! given version.

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod registry;
