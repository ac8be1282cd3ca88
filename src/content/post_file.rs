use std::io;
use std::fs;
use std::path::{Path, PathBuf};

use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde_json::Value;
use thiserror::Error;

use crate::content::schema::{validate, ValidationError};
use crate::content::{FrontMatter, Post};

pub const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];
pub const INDEX_STEM: &str = "index";
const FENCE: &str = "---";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("error reading `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("malformed front-matter in `{}`: {}", .0.display(), .1)]
    FrontMatter(PathBuf, String),

    #[error("`{}`: {}", .0.display(), .1)]
    Validation(PathBuf, ValidationError),

    #[error("cannot derive a slug from `{}`", .0.display())]
    InvalidPath(PathBuf),
}

pub fn is_post_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => POST_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// `posts/hello-world.md` gives `hello-world`, `posts/hello-world/index.md` too.
pub fn slug_from_path(path: &Path) -> Option<String> {
    if !is_post_file(path) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    if stem == INDEX_STEM {
        let dir = path.parent()?.file_name()?.to_str()?;
        Some(dir.to_string())
    } else {
        Some(stem.to_string())
    }
}

/// Everything after the closing `---` line, untrimmed.
fn body_after_front_matter(raw: &str) -> &str {
    let mut lines = raw.split_inclusive('\n');
    let mut offset = match lines.next() {
        Some(first) if first.trim_end() == FENCE => first.len(),
        _ => return raw,
    };

    for line in lines {
        offset += line.len();
        if line.trim_end() == FENCE {
            return &raw[offset..];
        }
    }
    raw
}

fn extract_front_matter(path: &Path, raw: &str) -> Result<(FrontMatter, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<Value>(raw)
        .map_err(|e| ContentError::FrontMatter(path.to_path_buf(), e.to_string()))?;

    let front_matter = match parsed.data {
        Some(Value::Object(map)) => map,
        Some(Value::Null) | None => FrontMatter::new(),
        Some(_) => return Err(ContentError::FrontMatter(
            path.to_path_buf(), "front-matter is not a mapping".to_string(),
        )),
    };

    Ok((front_matter, body_after_front_matter(raw).to_string()))
}

pub fn parse_post(path: &Path, raw: &str) -> Result<Post, ContentError> {
    let slug = slug_from_path(path)
        .ok_or_else(|| ContentError::InvalidPath(path.to_path_buf()))?;
    let (front_matter, body) = extract_front_matter(path, raw)?;
    let metadata = validate(&front_matter)
        .map_err(|e| ContentError::Validation(path.to_path_buf(), e))?;

    Ok(Post {
        slug,
        file_path: path.to_path_buf(),
        metadata,
        body,
    })
}

pub fn load_post(path: &Path) -> Result<Post, ContentError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    parse_post(path, &raw)
}
