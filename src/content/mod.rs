use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::text_utils::parse_date;

pub mod schema;
pub mod post_file;

/// Raw front-matter as handed over by the content loader, before validation.
pub type FrontMatter = serde_json::Map<String, serde_json::Value>;

/// Validated front-matter of a blog post.
///
/// Instances only come out of [`schema::validate`], so the required fields are
/// always present and the optional flags already carry their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub is_draft: bool,
    pub is_published: bool,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub published_on: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub file_path: PathBuf,
    pub metadata: PostMetadata,
    pub body: String,
}

impl Post {
    /// A post is listed on the site only once it is published and no longer a draft.
    pub fn is_visible(&self) -> bool {
        self.metadata.is_published && !self.metadata.is_draft
    }

    pub fn published_date(&self) -> Option<NaiveDate> {
        parse_date(&self.metadata.published_on)
    }
}
