use std::process::ExitCode;

use anyhow::{Context, Result};

use folio::config::Config;
use folio::content::Post;
use folio::post_list::PostCollection;
use folio::reading_time::ReadingTime;
use folio::urls::UrlBuilder;

fn render_row(post: &Post, urls: &UrlBuilder, reading_time: &ReadingTime) -> String {
    let minutes = reading_time.estimate(Some(post.body.as_str()));
    format!("{}\t{} min\t{}\t{}\t{}",
            post.metadata.published_on,
            minutes,
            urls.build_post_url(&post.slug),
            urls.build_permalink(&post.slug),
            post.metadata.title,
    )
}

pub fn list_cmd(config: &Config, include_drafts: bool) -> Result<ExitCode> {
    let posts_dir = &config.paths.posts_dir;
    let collection = PostCollection::load(posts_dir)
        .with_context(|| format!("Error reading posts from {}", posts_dir.display()))?;

    let urls = config.url_builder();
    let reading_time = config.reading_time();

    for post in collection.visible(include_drafts) {
        println!("{}", render_row(post, &urls, &reading_time));
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use folio::content::PostMetadata;

    use super::*;

    #[test]
    fn test_render_row() {
        let post = Post {
            slug: "my-post".to_string(),
            file_path: PathBuf::from("posts/my-post.md"),
            metadata: PostMetadata {
                is_draft: false,
                is_published: true,
                title: "My post".to_string(),
                description: "About it".to_string(),
                keywords: None,
                published_on: "2023-02-14".to_string(),
            },
            body: "<p>one two three</p>".to_string(),
        };

        let row = render_row(&post, &UrlBuilder::default(), &ReadingTime::default());
        assert_eq!(row, "2023-02-14\t1 min\t/blog/posts/my-post\thttps://brockherion.dev/my-post\tMy post");
    }
}
