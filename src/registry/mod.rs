//! Module registry access
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Puppet Forge v3 module listing adapter
//! - Initial listing query construction

mod client;
mod forge;

pub use client::HttpClient;
pub use forge::{ForgeClient, DEFAULT_BASE_URL};

use crate::domain::{ModulePage, TargetDependency};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Path of the module listing endpoint
pub const MODULES_PATH: &str = "/v3/modules";

/// Trait for sources of paginated module listings
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Fetch the page a cursor (path and query, or absolute URL) points at
    async fn fetch_page(&self, cursor: &str) -> Result<ModulePage, RegistryError>;
}

/// User supplied listing filters, forwarded as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    /// Only modules owned by this user
    pub owner: Option<String>,
    /// Only modules matching this search query
    pub query: Option<String>,
}

/// Build the cursor of the first listing page
pub fn initial_cursor(target: &TargetDependency, filters: &QueryFilters) -> String {
    let mut params = url::form_urlencoded::Serializer::new(String::new());
    params.append_pair("exclude_fields", "releases");
    if target.is_runtime() {
        params.append_pair("hide_deprecated", "yes");
    }
    if let Some(owner) = &filters.owner {
        params.append_pair("owner", owner);
    }
    if let Some(query) = &filters.query {
        params.append_pair("query", query);
    }
    format!("{}?{}", MODULES_PATH, params.finish())
}
