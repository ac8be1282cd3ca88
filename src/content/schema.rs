use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::content::{FrontMatter, PostMetadata};

pub const IS_DRAFT: &str = "isDraft";
pub const IS_PUBLISHED: &str = "isPublished";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const KEYWORDS: &str = "keywords";
pub const PUBLISHED_ON: &str = "publishedOn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Boolean => write!(f, "boolean"),
        }
    }
}

/// One offending front-matter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub expected: FieldType,
    /// JSON type that was received, or `missing`.
    pub found: &'static str,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: expected {}, received {}", self.field, self.expected, self.found)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid front-matter: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.field).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues.iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct FieldReader<'a> {
    front_matter: &'a FrontMatter,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    fn new(front_matter: &'a FrontMatter) -> Self {
        FieldReader {
            front_matter,
            issues: vec![],
        }
    }

    fn report(&mut self, field: &'static str, expected: FieldType, found: &'static str) {
        self.issues.push(FieldIssue { field, expected, found });
    }

    fn string(&mut self, field: &'static str, required: bool) -> Option<String> {
        match self.front_matter.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.report(field, FieldType::String, type_name(other));
                None
            }
            None => {
                if required {
                    self.report(field, FieldType::String, "missing");
                }
                None
            }
        }
    }

    fn boolean(&mut self, field: &'static str, default: bool) -> bool {
        match self.front_matter.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                self.report(field, FieldType::Boolean, type_name(other));
                default
            }
            None => default,
        }
    }
}

/// Validates a raw front-matter mapping and fills in the defaults.
///
/// Every offending field is reported in the returned error, not only the
/// first one. Keys that are not part of the post schema are ignored.
pub fn validate(front_matter: &FrontMatter) -> Result<PostMetadata, ValidationError> {
    let mut reader = FieldReader::new(front_matter);

    let is_draft = reader.boolean(IS_DRAFT, false);
    let is_published = reader.boolean(IS_PUBLISHED, false);
    let title = reader.string(TITLE, true);
    let description = reader.string(DESCRIPTION, true);
    let keywords = reader.string(KEYWORDS, false);
    let published_on = reader.string(PUBLISHED_ON, true);

    match (title, description, published_on) {
        (Some(title), Some(description), Some(published_on)) if reader.issues.is_empty() => Ok(PostMetadata {
            is_draft,
            is_published,
            title,
            description,
            keywords,
            published_on,
        }),
        _ => Err(ValidationError { issues: reader.issues }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn front_matter(value: Value) -> FrontMatter {
        match value {
            Value::Object(map) => map,
            _ => panic!("front-matter must be an object"),
        }
    }

    fn minimal() -> FrontMatter {
        front_matter(json!({
            "title": "Building a blog",
            "description": "How this site is built",
            "publishedOn": "2023-03-01",
        }))
    }

    #[test]
    fn test_defaults() {
        let metadata = validate(&minimal()).unwrap();
        assert_eq!(metadata, PostMetadata {
            is_draft: false,
            is_published: false,
            title: "Building a blog".to_string(),
            description: "How this site is built".to_string(),
            keywords: None,
            published_on: "2023-03-01".to_string(),
        });
    }

    #[test]
    fn test_all_fields() {
        let fm = front_matter(json!({
            "isDraft": true,
            "isPublished": true,
            "title": "Building a blog",
            "description": "How this site is built",
            "keywords": "astro, rust",
            "publishedOn": "2023-03-01",
        }));
        let metadata = validate(&fm).unwrap();
        assert!(metadata.is_draft);
        assert!(metadata.is_published);
        assert_eq!(metadata.keywords.as_deref(), Some("astro, rust"));
    }

    #[test]
    fn test_missing_required() {
        for field in [TITLE, DESCRIPTION, PUBLISHED_ON] {
            let mut fm = minimal();
            fm.remove(field);
            let err = validate(&fm).unwrap_err();
            assert_eq!(err.fields(), vec![field]);
            assert_eq!(err.issues()[0].found, "missing");
        }
    }

    #[test]
    fn test_wrong_types() {
        let fm = front_matter(json!({
            "isDraft": "yes",
            "isPublished": null,
            "title": 42,
            "description": "ok",
            "keywords": ["a", "b"],
            "publishedOn": "2023-03-01",
        }));
        let err = validate(&fm).unwrap_err();
        assert_eq!(err.fields(), vec![IS_DRAFT, IS_PUBLISHED, TITLE, KEYWORDS]);
        assert_eq!(err.issues()[0], FieldIssue { field: IS_DRAFT, expected: FieldType::Boolean, found: "string" });
        assert_eq!(err.issues()[1].found, "null");
        assert_eq!(err.issues()[2].found, "number");
        assert_eq!(err.issues()[3].found, "array");
    }

    #[test]
    fn test_reports_every_field() {
        let err = validate(&FrontMatter::new()).unwrap_err();
        assert_eq!(err.fields(), vec![TITLE, DESCRIPTION, PUBLISHED_ON]);
        assert_eq!(
            err.to_string(),
            "invalid front-matter: `title`: expected string, received missing; \
             `description`: expected string, received missing; \
             `publishedOn`: expected string, received missing"
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut fm = minimal();
        fm.insert("heroImage".to_string(), json!("/img/hero.png"));
        assert!(validate(&fm).is_ok());
    }

    #[test]
    fn test_input_is_untouched() {
        let fm = minimal();
        let before = fm.clone();
        let _ = validate(&fm).unwrap();
        assert_eq!(fm, before);
        assert!(!fm.contains_key(IS_DRAFT));
    }
}
