use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::reading_time::{ReadingTime, WORDS_PER_MINUTE};
use crate::urls::{UrlBuilder, DEFAULT_BASE_URL};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_words_per_minute() -> u32 {
    WORDS_PER_MINUTE
}

#[derive(Deserialize, Debug)]
pub struct Site {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Site { base_url: default_base_url() }
    }
}

#[derive(Deserialize, Debug)]
pub struct Paths {
    pub posts_dir: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct Reading {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub site: Site,
    pub paths: Paths,
    pub reading: Option<Reading>,
    pub log: Option<Log>,
}

impl Config {
    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(&self.site.base_url)
    }

    pub fn reading_time(&self) -> ReadingTime {
        self.reading.as_ref()
            .and_then(|r| ReadingTime::new(r.words_per_minute))
            .unwrap_or_default()
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Executable has no parent directory"))?;
    let str_path = path.to_string_lossy();
    Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if let Some(ref reading) = cfg.reading {
        if reading.words_per_minute == 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidData, "reading.words_per_minute must be greater than 0"));
        }
    }

    if cfg.site.base_url.trim().is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "site.base_url must not be empty"));
    }

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[site]
base_url = "https://example.com/"

[paths]
posts_dir = "content/posts"

[reading]
words_per_minute = 250

[log]
level = "Debug"
log_to_console = true
location = "/tmp/folio.log"
"##).unwrap();

        assert_eq!(cfg.paths.posts_dir, PathBuf::from("content/posts"));
        assert_eq!(cfg.url_builder().build_permalink("x"), "https://example.com/x");
        assert_eq!(cfg.reading_time().words_per_minute(), 250);
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/folio.log")));
    }

    #[test]
    fn test_defaults() {
        let cfg = parse_config(r##"
[paths]
posts_dir = "posts"
"##).unwrap();

        assert_eq!(cfg.site.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.reading_time(), ReadingTime::default());
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config(r##"
[paths]
posts_dir = "${exe_dir}/posts"
"##).unwrap();

        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.posts_dir, exe_dir.join("posts"));
    }

    #[test]
    fn test_invalid_values() {
        let err = parse_config(r##"
[paths]
posts_dir = "posts"

[reading]
words_per_minute = 0
"##).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = parse_config("[site]\nbase_url = \"https://example.com\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("Error parsing configuration file"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
