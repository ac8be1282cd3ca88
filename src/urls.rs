pub const DEFAULT_BASE_URL: &str = "https://brockherion.dev";

/// Builds the links the site pages point at.
///
/// Slugs are used as they are: no escaping or validation happens here, so
/// they are expected to be URL safe already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        UrlBuilder::new(DEFAULT_BASE_URL)
    }
}

impl UrlBuilder {
    pub fn new(base_url: &str) -> Self {
        UrlBuilder {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute, canonical address of a page.
    pub fn build_permalink(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    pub fn build_post_url(&self, slug: &str) -> String {
        format!("/blog/posts/{}", slug)
    }

    /// Site relative path of a post's cover image. Older layouts only.
    pub fn build_image_url(&self, slug: &str, extension: &str) -> String {
        format!("/posts/{}.{}", slug, extension)
    }
}
