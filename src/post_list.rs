use std::cmp::Ordering;
use std::{fs, io};
use std::path::{Path, PathBuf};

use spdlog::{debug, info, warn};

use crate::content::Post;
use crate::content::post_file::{is_post_file, load_post, ContentError, INDEX_STEM, POST_EXTENSIONS};

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    /// Flat post files plus `<dir>/index.md` folders, sorted by path.
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();

            if file_type.is_file() && is_post_file(&path) {
                posts.push(path);
            } else if file_type.is_dir() {
                match Self::index_file(&path) {
                    Some(index) => posts.push(index),
                    None => warn!("Skipping directory without an index post: {}", path.display()),
                }
            }
        }
        posts.sort();
        Ok(posts)
    }

    fn index_file(dir: &Path) -> Option<PathBuf> {
        POST_EXTENSIONS.iter()
            .map(|ext| dir.join(format!("{}.{}", INDEX_STEM, ext)))
            .find(|candidate| candidate.is_file())
    }
}

/// Every post found in a content directory, with the ones that failed to load.
///
/// Whether a failure aborts the build is up to the caller.
pub struct PostCollection {
    posts: Vec<Post>,
    failures: Vec<(PathBuf, ContentError)>,
}

impl PostCollection {
    pub fn load(root_dir: &Path) -> io::Result<PostCollection> {
        let post_list = PostList { root_dir: root_dir.to_path_buf() };
        let files = post_list.retrieve_files()?;
        debug!("Found {} post files in {}", files.len(), root_dir.display());

        let mut posts = vec![];
        let mut failures = vec![];
        for file in files {
            match load_post(&file) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    warn!("Skipping post: {}", e);
                    failures.push((file, e));
                }
            }
        }

        info!("Loaded {} posts, {} failed", posts.len(), failures.len());
        Ok(PostCollection::from_parts(posts, failures))
    }

    pub fn from_parts(posts: Vec<Post>, failures: Vec<(PathBuf, ContentError)>) -> Self {
        PostCollection { posts, failures }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn failures(&self) -> &[(PathBuf, ContentError)] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts meant for listing, newest first. Undated posts go last.
    pub fn visible(&self, include_drafts: bool) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter()
            .filter(|p| include_drafts || p.is_visible())
            .collect();

        posts.sort_by(|a, b| {
            let by_date = match (a.published_date(), b.published_date()) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_date.then_with(|| a.slug.cmp(&b.slug))
        });
        posts
    }
}
