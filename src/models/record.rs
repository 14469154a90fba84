//! Flattened search hit written to the export file.

use serde::{Deserialize, Serialize};

use crate::models::SearchItem;

/// One discovered item, tied to the user it was found under.
///
/// Field order is the export column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    #[serde(rename = "Username")]
    pub username: String,

    /// Empty when the API omitted it
    #[serde(rename = "Title")]
    pub title: String,

    /// First non-empty of `OriginalUrl`, `Url`, `WebUri`; empty if none
    #[serde(rename = "URL")]
    pub url: String,
}

impl ResultRecord {
    /// Build a record from a search hit.
    pub fn from_item(username: &str, item: &SearchItem) -> Self {
        Self {
            username: username.to_string(),
            title: item.title.clone().unwrap_or_default(),
            url: resolve_item_url(item).unwrap_or_default().to_string(),
        }
    }
}

/// Pick the item link by priority: original resource, generic URL, web page.
pub fn resolve_item_url(item: &SearchItem) -> Option<&str> {
    [&item.original_url, &item.url, &item.web_uri]
        .into_iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|candidate| !candidate.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(original: Option<&str>, url: Option<&str>, web: Option<&str>) -> SearchItem {
        SearchItem {
            title: Some("Sunset".to_string()),
            original_url: original.map(String::from),
            url: url.map(String::from),
            web_uri: web.map(String::from),
        }
    }

    #[test]
    fn test_url_priority() {
        let all = item(Some("http://x/o"), Some("http://x/u"), Some("http://x/w"));
        assert_eq!(resolve_item_url(&all), Some("http://x/o"));

        let no_original = item(None, Some("http://x/u"), Some("http://x/w"));
        assert_eq!(resolve_item_url(&no_original), Some("http://x/u"));

        let web_only = item(None, None, Some("http://x/w"));
        assert_eq!(resolve_item_url(&web_only), Some("http://x/w"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let blank_original = item(Some(""), Some(""), Some("http://x/w"));
        assert_eq!(resolve_item_url(&blank_original), Some("http://x/w"));
    }

    #[test]
    fn test_record_defaults_to_empty_strings() {
        let record = ResultRecord::from_item("alice", &SearchItem::default());
        assert_eq!(record.username, "alice");
        assert_eq!(record.title, "");
        assert_eq!(record.url, "");
    }
}
