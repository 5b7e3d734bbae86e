//! Core domain models for forge-outdated
//!
//! This module contains the fundamental types used throughout the application:
//! - Typed module listing records
//! - The target dependency and how it is looked up in a release
//! - Version requirement ranges
//! - Per-module outcomes and the summary counters

mod module;
mod outcome;
mod requirement;
mod summary;
mod target;

pub use module::{DependencyEntry, ModulePage, ModuleRecord, Pagination, Release, ReleaseMetadata};
pub use outcome::{CheckResult, Classification, ModuleOutcome};
pub use requirement::{parse_version, VersionRange};
pub use summary::CheckSummary;
pub use target::{TargetDependency, RUNTIME_REQUIREMENT};
