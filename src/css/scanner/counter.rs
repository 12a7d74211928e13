use std::path::Path;
use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::file_utils;

// A period directly followed by an ASCII letter. Rough proxy for the start of
// a class selector; matches inside comments and strings are counted as well.
static CLASS_SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[a-zA-Z]").expect("class selector pattern is valid"));

/// Counts class selector occurrences in stylesheet text
#[derive(Debug, Default)]
pub struct SelectorCounter;

impl SelectorCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count non-overlapping selector matches in `content`
    pub fn count(&self, content: &str) -> usize {
        CLASS_SELECTOR_RE.find_iter(content).count()
    }

    /// Read a stylesheet and count the selector matches in it
    pub fn count_file(&self, file_path: impl AsRef<Path>) -> Result<usize> {
        let file_path = file_path.as_ref();
        let content = file_utils::read_file_to_string(file_path)?;
        let count = self.count(&content);

        debug!("Found {} class selectors in {}", count, file_path.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_selector_start_once() {
        let counter = SelectorCounter::new();
        assert_eq!(counter.count(".foo { color: red; } .bar-baz { margin: 0; }"), 2);
    }

    #[test]
    fn ignores_periods_before_digits() {
        let counter = SelectorCounter::new();
        assert_eq!(counter.count(".card { padding: .5rem 0.25em; }"), 1);
    }

    #[test]
    fn counts_compound_and_commented_selectors() {
        let counter = SelectorCounter::new();
        let css = "/* see styles.css */\n.btn.primary:hover { }";
        // `.c` from the comment, then `.b` and `.p`
        assert_eq!(counter.count(css), 3);
    }

    #[test]
    fn empty_content_has_no_matches() {
        assert_eq!(SelectorCounter::new().count(""), 0);
    }
}
