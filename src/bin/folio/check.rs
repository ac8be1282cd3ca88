use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use folio::config::Config;
use folio::content::post_file::ContentError;
use folio::post_list::PostCollection;

fn render_failure(path: &Path, err: &ContentError) -> String {
    let reasons: Vec<String> = match err {
        ContentError::Validation(_, e) => e.issues().iter().map(|issue| issue.to_string()).collect(),
        other => vec![other.to_string()],
    };

    let mut buf = format!("{}\n", path.display());
    for reason in reasons {
        buf.push_str(&format!("  - {}\n", reason));
    }
    buf
}

pub fn check_cmd(config: &Config) -> Result<ExitCode> {
    let posts_dir = &config.paths.posts_dir;
    let collection = PostCollection::load(posts_dir)
        .with_context(|| format!("Error reading posts from {}", posts_dir.display()))?;

    for (path, err) in collection.failures() {
        print!("{}", render_failure(path, err));
    }

    println!("{} valid, {} invalid", collection.posts().len(), collection.failures().len());

    if collection.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use folio::content::FrontMatter;
    use folio::content::schema::validate;

    use super::*;

    #[test]
    fn test_render_validation_failure() {
        let path = PathBuf::from("posts/broken.md");
        let err = validate(&FrontMatter::new()).unwrap_err();
        let err = ContentError::Validation(path.clone(), err);

        assert_eq!(render_failure(&path, &err), r##"posts/broken.md
  - `title`: expected string, received missing
  - `description`: expected string, received missing
  - `publishedOn`: expected string, received missing
"##);
    }

    #[test]
    fn test_render_other_failure() {
        let path = PathBuf::from("posts/notes.txt");
        let err = ContentError::InvalidPath(path.clone());
        assert_eq!(render_failure(&path, &err), "posts/notes.txt\n  - cannot derive a slug from `posts/notes.txt`\n");
    }
}
