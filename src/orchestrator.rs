//! Check orchestrator coordinating the whole run
//!
//! Workflow: build first cursor → fetch page → check each module → report →
//! follow `pagination.next` until the listing is exhausted.
//!
//! Pages are fetched one at a time. A malformed requirement only affects its
//! own module; a registry failure aborts the run.

use crate::check::RequirementChecker;
use crate::cli::CheckConfig;
use crate::domain::{CheckSummary, Classification};
use crate::error::AppError;
use crate::output::Reporter;
use crate::registry::{initial_cursor, ForgeClient, HttpClient, ModuleSource, QueryFilters};
use std::io::Write;

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator<S> {
    /// Source of module listing pages
    source: S,
    /// Per-module judgment
    checker: RequirementChecker,
    /// Listing filters
    filters: QueryFilters,
}

impl Orchestrator<ForgeClient> {
    /// Create a new orchestrator talking to the configured registry
    pub fn new(config: CheckConfig) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        let source = ForgeClient::new(client, config.base_url);
        Ok(Self::with_source(
            source,
            RequirementChecker::new(config.target, config.version),
            config.filters,
        ))
    }
}

impl<S: ModuleSource> Orchestrator<S> {
    /// Create an orchestrator with a custom module source (for testing)
    pub fn with_source(source: S, checker: RequirementChecker, filters: QueryFilters) -> Self {
        Self {
            source,
            checker,
            filters,
        }
    }

    /// Run the check workflow and print the summary
    pub async fn run<O: Write, E: Write>(
        &self,
        reporter: &mut Reporter<O, E>,
    ) -> Result<CheckSummary, AppError> {
        let mut summary = CheckSummary::new();
        let mut cursor = Some(initial_cursor(self.checker.target(), &self.filters));

        while let Some(current) = cursor {
            reporter.info(&format!("GET {}", current))?;
            let page = self.source.fetch_page(&current).await?;

            for record in &page.results {
                let result = self.checker.check(record);
                summary.record(Classification::of(&result));
                reporter.module(record.name(), self.checker.target(), &result)?;
            }

            cursor = page.next_cursor().map(str::to_string);
        }

        reporter.summary(&summary)?;
        Ok(summary)
    }
}
