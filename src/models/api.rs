//! Response envelopes of the SmugMug v2 API.
//!
//! Only the fields the crawl reads are modelled; everything else in the
//! payload is ignored. Lists that are absent or `null` decode as empty.

use serde::Deserialize;

use crate::models::ContentType;

/// `GET /api/v2/user!search`
#[derive(Debug, Default, Deserialize)]
pub struct UserSearchResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<UserSearchBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserSearchBody {
    #[serde(rename = "User", default)]
    pub users: Option<Vec<User>>,
}

/// A public profile returned by the user search.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "NickName")]
    pub nick_name: String,
}

impl UserSearchResponse {
    /// Usernames in response order.
    pub fn into_usernames(self) -> Vec<String> {
        self.response
            .and_then(|body| body.users)
            .unwrap_or_default()
            .into_iter()
            .map(|user| user.nick_name)
            .collect()
    }
}

/// `GET /api/v2/folder/user/{username}`
#[derive(Debug, Default, Deserialize)]
pub struct NodeResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<NodeBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeBody {
    #[serde(rename = "Node", default)]
    pub node: Option<Node>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Node {
    #[serde(rename = "Uri", default)]
    pub uri: Option<String>,
}

impl NodeResponse {
    /// The node URI scoping the user's content, if present.
    pub fn into_uri(self) -> Option<String> {
        self.response
            .and_then(|body| body.node)
            .and_then(|node| node.uri)
            .filter(|uri| !uri.is_empty())
    }
}

/// Image, album and folder searches share one envelope; the list lives under
/// a field named after the content kind.
#[derive(Debug, Default, Deserialize)]
pub struct ContentSearchResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<ContentSearchBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentSearchBody {
    #[serde(rename = "AlbumImage", default)]
    pub album_images: Option<Vec<SearchItem>>,

    #[serde(rename = "Album", default)]
    pub albums: Option<Vec<SearchItem>>,

    #[serde(rename = "Folder", default)]
    pub folders: Option<Vec<SearchItem>>,
}

impl ContentSearchResponse {
    /// Take the result list matching `content_type`.
    pub fn into_items(self, content_type: ContentType) -> Vec<SearchItem> {
        let Some(body) = self.response else {
            return Vec::new();
        };
        let items = match content_type {
            ContentType::Images | ContentType::Videos => body.album_images,
            ContentType::Albums => body.albums,
            ContentType::Folders => body.folders,
        };
        items.unwrap_or_default()
    }
}

/// A single search hit. Any of the link fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub web_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usernames_from_response() {
        let json = r#"{"Response": {"User": [{"NickName": "alice"}, {"NickName": "bob", "Name": "Bob"}]}}"#;
        let parsed: UserSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_usernames(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_missing_user_list_is_empty() {
        for json in [r#"{}"#, r#"{"Response": {}}"#, r#"{"Response": {"User": null}}"#] {
            let parsed: UserSearchResponse = serde_json::from_str(json).unwrap();
            assert!(parsed.into_usernames().is_empty(), "{json}");
        }
    }

    #[test]
    fn test_user_without_nickname_is_rejected() {
        let json = r#"{"Response": {"User": [{"Name": "anonymous"}]}}"#;
        assert!(serde_json::from_str::<UserSearchResponse>(json).is_err());
    }

    #[test]
    fn test_node_uri() {
        let json = r#"{"Response": {"Node": {"Uri": "/api/v2/node/abc123", "Name": "root"}}}"#;
        let parsed: NodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_uri().as_deref(), Some("/api/v2/node/abc123"));

        let parsed: NodeResponse = serde_json::from_str(r#"{"Response": {}}"#).unwrap();
        assert_eq!(parsed.into_uri(), None);
    }

    #[test]
    fn test_items_selected_by_content_type() {
        let json = r#"{
            "Response": {
                "AlbumImage": [{"Title": "Sunset", "OriginalUrl": "http://x/1.jpg"}],
                "Album": [{"Title": "Trip", "WebUri": "http://x/trip"}]
            }
        }"#;
        let parsed: ContentSearchResponse = serde_json::from_str(json).unwrap();
        let items = parsed.into_items(ContentType::Albums);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Trip"));
        assert_eq!(items[0].web_uri.as_deref(), Some("http://x/trip"));

        for content_type in [ContentType::Images, ContentType::Videos] {
            let parsed: ContentSearchResponse = serde_json::from_str(json).unwrap();
            let items = parsed.into_items(content_type);
            assert_eq!(items.len(), 1, "{content_type}");
            assert_eq!(items[0].title.as_deref(), Some("Sunset"));
        }

        let parsed: ContentSearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.into_items(ContentType::Folders).is_empty());
    }
}
