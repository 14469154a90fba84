//! In-memory `SearchApi` used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{AppError, Result};
use crate::models::{ContentType, SearchItem};
use crate::services::SearchApi;

/// A request observed by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SearchProfiles(char),
    GetUserNode(String),
    SearchContent {
        node_uri: String,
        keyword: String,
        content_type: ContentType,
    },
    SearchFolders {
        username: String,
        keyword: String,
    },
}

/// Scripted responses keyed by probe character and username.
#[derive(Default)]
pub struct FakeApi {
    users: HashMap<char, Vec<String>>,
    items: HashMap<String, Vec<SearchItem>>,
    failing_probes: HashSet<char>,
    failing_users: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

const NODE_PREFIX: &str = "/api/v2/node/";

impl FakeApi {
    pub fn with_users(mut self, probe: char, users: &[&str]) -> Self {
        self.users
            .insert(probe, users.iter().map(|u| u.to_string()).collect());
        self
    }

    pub fn with_items(mut self, username: &str, items: Vec<SearchItem>) -> Self {
        self.items.insert(username.to_string(), items);
        self
    }

    pub fn fail_probe(mut self, probe: char) -> Self {
        self.failing_probes.insert(probe);
        self
    }

    pub fn fail_user(mut self, username: &str) -> Self {
        self.failing_users.insert(username.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Probe characters in the order they were searched.
    pub fn probes(&self) -> Vec<char> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SearchProfiles(probe) => Some(probe),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error(target: &str) -> AppError {
        AppError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: format!("fake://{target}"),
        }
    }

    fn items_for(&self, username: &str) -> Result<Vec<SearchItem>> {
        if self.failing_users.contains(username) {
            return Err(Self::server_error(username));
        }
        Ok(self.items.get(username).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl SearchApi for FakeApi {
    async fn search_profiles(&self, probe: char) -> Result<Vec<String>> {
        self.record(Call::SearchProfiles(probe));
        if self.failing_probes.contains(&probe) {
            return Err(Self::server_error("user!search"));
        }
        Ok(self.users.get(&probe).cloned().unwrap_or_default())
    }

    async fn get_user_node(&self, username: &str) -> Result<String> {
        self.record(Call::GetUserNode(username.to_string()));
        if self.failing_users.contains(username) {
            return Err(Self::server_error(username));
        }
        Ok(format!("{NODE_PREFIX}{username}"))
    }

    async fn search_content(
        &self,
        node_uri: &str,
        keyword: &str,
        content_type: ContentType,
    ) -> Result<Vec<SearchItem>> {
        self.record(Call::SearchContent {
            node_uri: node_uri.to_string(),
            keyword: keyword.to_string(),
            content_type,
        });
        let username = node_uri.strip_prefix(NODE_PREFIX).unwrap_or(node_uri);
        self.items_for(username)
    }

    async fn search_folders(&self, username: &str, keyword: &str) -> Result<Vec<SearchItem>> {
        self.record(Call::SearchFolders {
            username: username.to_string(),
            keyword: keyword.to_string(),
        });
        self.items_for(username)
    }
}

/// Build a search hit with the given title and link fields.
pub fn item(
    title: &str,
    original_url: Option<&str>,
    url: Option<&str>,
    web_uri: Option<&str>,
) -> SearchItem {
    SearchItem {
        title: Some(title.to_string()),
        original_url: original_url.map(String::from),
        url: url.map(String::from),
        web_uri: web_uri.map(String::from),
    }
}
