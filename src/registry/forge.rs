//! Puppet Forge v3 adapter
//!
//! Fetches pages of the module listing.
//! API endpoint: https://forgeapi.puppet.com/v3/modules
//!
//! The `pagination.next` value the Forge returns is a path and query relative
//! to the API host, so every cursor is resolved against the base URL.

use crate::domain::ModulePage;
use crate::error::{ConfigError, RegistryError};
use crate::registry::{HttpClient, ModuleSource};
use async_trait::async_trait;
use url::Url;

/// Puppet Forge API base URL
pub const DEFAULT_BASE_URL: &str = "https://forgeapi.puppet.com";

/// Forge module listing adapter
pub struct ForgeClient {
    client: HttpClient,
    base_url: Url,
}

impl ForgeClient {
    /// Create a new Forge adapter
    pub fn new(client: HttpClient, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Parse a base URL argument
    pub fn parse_base_url(input: &str) -> Result<Url, ConfigError> {
        Url::parse(input).map_err(|e| ConfigError::InvalidBaseUrl {
            value: input.to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve a cursor against the base URL
    ///
    /// Root-relative cursors are appended to the base URL, keeping any path
    /// it has; anything else is joined.
    fn build_url(&self, cursor: &str) -> Result<Url, RegistryError> {
        let resolved = if cursor.starts_with('/') {
            let base = self.base_url.as_str().trim_end_matches('/');
            Url::parse(&format!("{}{}", base, cursor))
        } else {
            self.base_url.join(cursor)
        };

        resolved.map_err(|e| RegistryError::InvalidCursor {
            cursor: cursor.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ModuleSource for ForgeClient {
    async fn fetch_page(&self, cursor: &str) -> Result<ModulePage, RegistryError> {
        let url = self.build_url(cursor)?;
        self.client.get_json(url.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn forge(base: &str) -> ForgeClient {
        ForgeClient::new(
            HttpClient::new().unwrap(),
            ForgeClient::parse_base_url(base).unwrap(),
        )
    }

    #[test]
    fn test_build_url() {
        let client = forge(DEFAULT_BASE_URL);
        assert_eq!(
            client
                .build_url("/v3/modules?exclude_fields=releases")
                .unwrap()
                .as_str(),
            "https://forgeapi.puppet.com/v3/modules?exclude_fields=releases"
        );
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        for base in ["https://mirror.example.com/forge", "https://mirror.example.com/forge/"] {
            let client = forge(base);
            assert_eq!(
                client
                    .build_url("/v3/modules?exclude_fields=releases&offset=20")
                    .unwrap()
                    .as_str(),
                "https://mirror.example.com/forge/v3/modules?exclude_fields=releases&offset=20"
            );
        }
    }

    #[test]
    fn test_build_url_absolute_cursor() {
        let client = forge(DEFAULT_BASE_URL);
        assert_eq!(
            client
                .build_url("https://mirror.example.com/v3/modules?offset=20")
                .unwrap()
                .as_str(),
            "https://mirror.example.com/v3/modules?offset=20"
        );
    }

    #[test]
    fn test_parse_base_url_invalid() {
        let err = ForgeClient::parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_fetch_page() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v3/modules")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("exclude_fields".into(), "releases".into()),
                Matcher::UrlEncoded("owner".into(), "puppetlabs".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "pagination": { "next": "/v3/modules?exclude_fields=releases&owner=puppetlabs&offset=20" },
                    "results": [
                        { "current_release": { "slug": "puppetlabs-ntp-10.0.0", "metadata": {} } }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = forge(&server.url());
        let page = client
            .fetch_page("/v3/modules?exclude_fields=releases&owner=puppetlabs")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name(), "puppetlabs-ntp-10.0.0");
        assert_eq!(
            page.next_cursor(),
            Some("/v3/modules?exclude_fields=releases&owner=puppetlabs&offset=20")
        );
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v3/modules")
            .with_status(404)
            .create_async()
            .await;

        let client = forge(&server.url());
        let err = client.fetch_page("/v3/modules").await.unwrap_err();
        assert!(matches!(err, RegistryError::HttpStatus { status: 404, .. }));
    }
}
