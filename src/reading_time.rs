use lazy_static::lazy_static;
use regex::Regex;

pub const WORDS_PER_MINUTE: u32 = 200;

lazy_static! {
    // Markup removal is a heuristic, not a parser: a `>` inside an attribute value ends the tag early
    static ref TAG_REGEX: Regex = Regex::new(r"</?[^>]+(?:>|$)").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    words_per_minute: u32,
}

impl Default for ReadingTime {
    fn default() -> Self {
        ReadingTime { words_per_minute: WORDS_PER_MINUTE }
    }
}

impl ReadingTime {
    /// Returns `None` for a rate of zero.
    pub fn new(words_per_minute: u32) -> Option<Self> {
        if words_per_minute == 0 {
            return None;
        }
        Some(ReadingTime { words_per_minute })
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    /// Estimated minutes needed to read `content`, rounded up.
    ///
    /// Markup tags are stripped before counting. Leading or trailing
    /// whitespace left after stripping counts as an extra (empty) word.
    pub fn estimate(&self, content: Option<&str>) -> u32 {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => return 0,
        };

        let words = count_words(content);
        words.div_ceil(self.words_per_minute as usize) as u32
    }
}

/// Number of whitespace separated tokens once markup is removed.
pub fn count_words(content: &str) -> usize {
    let cleaned = TAG_REGEX.replace_all(content, "");
    WHITESPACE_REGEX.split(&cleaned).count()
}

pub fn estimate(content: Option<&str>) -> u32 {
    ReadingTime::default().estimate(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty() {
        assert_eq!(estimate(None), 0);
        assert_eq!(estimate(Some("")), 0);
    }

    #[test]
    fn test_short_text() {
        assert_eq!(estimate(Some("one two three")), 1);
        assert_eq!(count_words("one two three"), 3);
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(count_words("<p>one two three</p>"), 3);
        assert_eq!(estimate(Some("<p>one two three</p>")), 1);
        assert_eq!(count_words(r#"<a href="/x" class="y">one</a> two"#), 2);
        // Unterminated tag runs to the end
        assert_eq!(count_words("one two <img src="), 3);
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(estimate(Some(words(200).as_str())), 1);
        assert_eq!(estimate(Some(words(201).as_str())), 2);
        assert_eq!(estimate(Some(words(400).as_str())), 2);
        assert_eq!(estimate(Some(words(401).as_str())), 3);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(count_words("one \n\t two"), 2);
        // Edge whitespace yields empty tokens which are still counted
        assert_eq!(count_words(" one two "), 4);
        assert_eq!(count_words("<p>one</p>\n"), 2);
        assert_eq!(count_words("<br/>"), 1);
    }

    #[test]
    fn test_custom_rate() {
        assert!(ReadingTime::new(0).is_none());
        let fast = ReadingTime::new(100).unwrap();
        assert_eq!(fast.words_per_minute(), 100);
        assert_eq!(fast.estimate(Some(words(400).as_str())), 4);
        assert_eq!(ReadingTime::default().words_per_minute(), WORDS_PER_MINUTE);
    }
}
