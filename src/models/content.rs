//! Content categories that can be searched per user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of content searched for each discovered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Images,
    Videos,
    Albums,
    Folders,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Images,
        ContentType::Videos,
        ContentType::Albums,
        ContentType::Folders,
    ];

    /// Lowercase name used on the command line and in export file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Images => "images",
            ContentType::Videos => "videos",
            ContentType::Albums => "albums",
            ContentType::Folders => "folders",
        }
    }

    /// `Type` filter sent to the image search endpoint.
    ///
    /// Only images and videos go through that endpoint.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            ContentType::Images => Some("Image"),
            ContentType::Videos => Some("Video"),
            ContentType::Albums | ContentType::Folders => None,
        }
    }

    /// Whether the search needs a resolved node URI instead of the username.
    pub fn requires_node(&self) -> bool {
        !matches!(self, ContentType::Folders)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unsupported content type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_mapping() {
        assert_eq!(ContentType::Images.media_type(), Some("Image"));
        assert_eq!(ContentType::Videos.media_type(), Some("Video"));
        assert_eq!(ContentType::Albums.media_type(), None);
        assert_eq!(ContentType::Folders.media_type(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("albums".parse::<ContentType>().unwrap(), ContentType::Albums);
        assert!("Images".parse::<ContentType>().is_err());
        assert!("pages".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_only_folders_skip_node_lookup() {
        assert!(ContentType::Images.requires_node());
        assert!(ContentType::Albums.requires_node());
        assert!(!ContentType::Folders.requires_node());
    }
}
