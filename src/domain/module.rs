//! Typed records for the registry's module listing
//!
//! Shape of one page of `GET /v3/modules`:
//!
//! ```json
//! { "results": [ { "current_release": { "slug": "...", "metadata": { ... } } } ],
//!   "pagination": { "next": "/v3/modules?offset=20" } }
//! ```

use serde::Deserialize;

/// One page of the module listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModulePage {
    /// Modules on this page
    pub results: Vec<ModuleRecord>,
    /// Pagination information
    #[serde(default)]
    pub pagination: Pagination,
}

impl ModulePage {
    /// The cursor of the following page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.pagination.next.as_deref()
    }
}

/// Pagination block of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Path and query of the next page; null on the last page
    #[serde(default)]
    pub next: Option<String>,
}

/// A published module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleRecord {
    pub current_release: Release,
}

impl ModuleRecord {
    /// Display name of the module (slug of its current release)
    pub fn name(&self) -> &str {
        &self.current_release.slug
    }
}

/// The current release of a module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub slug: String,
    #[serde(default)]
    pub metadata: ReleaseMetadata,
}

/// Release metadata holding the dependency lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseMetadata {
    /// Module dependencies
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<DependencyEntry>,
    /// Runtime requirements (e.g. `puppet`)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirements: Vec<DependencyEntry>,
}

/// A single dependency or requirement entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    #[serde(default)]
    pub version_requirement: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DependencyEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<DependencyEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
