// src/services/api.rs

//! SmugMug search API client.
//!
//! [`SearchApi`] is the seam between the crawl loop and the remote service.
//! [`SmugMugClient`] implements it over HTTP; tests substitute their own.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{
    Config, ContentSearchResponse, ContentType, NodeResponse, SearchItem, UserSearchResponse,
};
use crate::utils::{endpoint, http};

/// Operations the crawler needs from the remote service.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Usernames whose profile matches the probe character.
    async fn search_profiles(&self, probe: char) -> Result<Vec<String>>;

    /// Resolve a username to the node URI that scopes its content.
    async fn get_user_node(&self, username: &str) -> Result<String>;

    /// Image, video or album search within a node.
    async fn search_content(
        &self,
        node_uri: &str,
        keyword: &str,
        content_type: ContentType,
    ) -> Result<Vec<SearchItem>>;

    /// Folder search keyed directly by username.
    async fn search_folders(&self, username: &str, keyword: &str) -> Result<Vec<SearchItem>>;
}

/// HTTP implementation of [`SearchApi`].
#[derive(Debug, Clone)]
pub struct SmugMugClient {
    client: Client,
    base_url: Url,
    page_size: usize,
}

impl SmugMugClient {
    /// Create a client from the application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = http::create_async_client(&config.api)?;
        let base_url = Url::parse(&config.api.base_url)?;
        Ok(Self::with_client(client, base_url, config.crawler.page_size))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base_url: Url, page_size: usize) -> Self {
        Self {
            client,
            base_url,
            page_size,
        }
    }

    /// `/api/v2/folder/user/{username}{suffix}` with the username encoded as one segment.
    fn user_folder_url(&self, username: &str, suffix: &str) -> Result<Url> {
        let mut url = endpoint(&self.base_url, "/api/v2/folder/user/")?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("api.base_url cannot carry a path"))?
            .pop_if_empty()
            .push(&format!("{username}{suffix}"));
        Ok(url)
    }

    /// GET a URL and decode the JSON body. Non-2xx statuses are errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        log::debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchApi for SmugMugClient {
    async fn search_profiles(&self, probe: char) -> Result<Vec<String>> {
        let url = endpoint(&self.base_url, "/api/v2/user!search")?;
        let response: UserSearchResponse = self.get_json(url, &[("q", probe.to_string())]).await?;
        Ok(response.into_usernames())
    }

    async fn get_user_node(&self, username: &str) -> Result<String> {
        let url = self.user_folder_url(username, "")?;
        let response: NodeResponse = self.get_json(url.clone(), &[]).await?;
        response
            .into_uri()
            .ok_or_else(|| AppError::missing_field("Response.Node.Uri", url.as_str()))
    }

    async fn search_content(
        &self,
        node_uri: &str,
        keyword: &str,
        content_type: ContentType,
    ) -> Result<Vec<SearchItem>> {
        let (path, query) = match content_type {
            ContentType::Images | ContentType::Videos => {
                let media_type = content_type.media_type().unwrap_or("Image");
                (
                    "/api/v2/image!search",
                    vec![
                        ("Scope", node_uri.to_string()),
                        ("Text", keyword.to_string()),
                        ("Type", media_type.to_string()),
                        ("SortDirection", "Descending".to_string()),
                        ("SortMethod", "Popular".to_string()),
                        ("start", "1".to_string()),
                        ("count", self.page_size.to_string()),
                    ],
                )
            }
            ContentType::Albums => (
                "/api/v2/album!search",
                vec![
                    ("Scope", node_uri.to_string()),
                    ("Text", keyword.to_string()),
                    ("SortDirection", "Descending".to_string()),
                    ("SortMethod", "Rank".to_string()),
                ],
            ),
            ContentType::Folders => {
                return Err(AppError::validation(
                    "Folder search is keyed by username; use search_folders",
                ));
            }
        };

        let url = endpoint(&self.base_url, path)?;
        let response: ContentSearchResponse = self.get_json(url, &query).await?;
        Ok(response.into_items(content_type))
    }

    async fn search_folders(&self, username: &str, keyword: &str) -> Result<Vec<SearchItem>> {
        let url = self.user_folder_url(username, "!search")?;
        let query = [
            ("Text", keyword.to_string()),
            ("SortDirection", "Descending".to_string()),
            ("SortMethod", "Rank".to_string()),
        ];
        let response: ContentSearchResponse = self.get_json(url, &query).await?;
        Ok(response.into_items(ContentType::Folders))
    }
}
