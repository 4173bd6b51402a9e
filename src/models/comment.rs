use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of contribution a discussion comment makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    #[default]
    General,
    Resource,
    Risk,
    Alternative,
}

impl CommentType {
    /// Types offered as composer templates, in display order.
    pub const TEMPLATES: [CommentType; 3] =
        [CommentType::Resource, CommentType::Risk, CommentType::Alternative];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentType::General => "general",
            CommentType::Resource => "resource",
            CommentType::Risk => "risk",
            CommentType::Alternative => "alternative",
        }
    }

    /// Template label shown on the composer button.
    pub fn template_label(&self) -> Option<&'static str> {
        match self {
            CommentType::General => None,
            CommentType::Resource => Some("Resource Suggestion"),
            CommentType::Risk => Some("Technical Risk"),
            CommentType::Alternative => Some("Alternative Approach"),
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comment type: {0}")]
pub struct ParseCommentTypeError(pub String);

impl FromStr for CommentType {
    type Err = ParseCommentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(CommentType::General),
            "resource" => Ok(CommentType::Resource),
            "risk" => Ok(CommentType::Risk),
            "alternative" => Ok(CommentType::Alternative),
            other => Err(ParseCommentTypeError(other.to_string())),
        }
    }
}

/// A discussion entry attached to a project or a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
    pub upvotes: u32,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_type_parses_lowercase_names() {
        assert_eq!("risk".parse::<CommentType>(), Ok(CommentType::Risk));
        assert_eq!("general".parse::<CommentType>(), Ok(CommentType::General));
        assert!("Risk".parse::<CommentType>().is_err());
    }

    #[test]
    fn comment_serializes_type_field() {
        let comment = Comment {
            id: "c1".to_string(),
            author: "Sneha Patel".to_string(),
            content: "What about a fallback?".to_string(),
            comment_type: CommentType::Risk,
            upvotes: 12,
            timestamp: DateTime::parse_from_rfc3339("2025-07-30T10:00:00Z")
                .expect("valid timestamp")
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&comment).expect("serialization should succeed");
        assert_eq!(value["type"], "risk");
        assert_eq!(value["upvotes"], 12);
    }

    #[test]
    fn only_templates_have_labels() {
        assert!(CommentType::General.template_label().is_none());
        for template in CommentType::TEMPLATES {
            assert!(template.template_label().is_some());
        }
    }
}
