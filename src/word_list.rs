//! `word_list` — dictionary sources for the solver
//!
//! A dictionary is just an ordered list of raw candidate strings, one word per
//! line. No normalization happens here: trimming, case folding and rejecting
//! malformed entries are the job of [`crate::validator::filter`], so a source
//! hands over exactly what it read.
//!
//! Sources implement [`DictionarySource`]:
//! - [`WordList`] — an in-memory list, e.g. parsed from a string;
//! - [`DictionaryFile`] — a path on disk, read when the words are requested;
//! - plain `Vec`s and arrays of strings.

use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw word list for one solve.
pub trait DictionarySource {
    /// Human-readable name used in diagnostics (a path, or a short label).
    fn name(&self) -> String;

    /// Load every raw candidate word, in source order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read.
    fn load_words(&self) -> io::Result<Vec<String>>;
}

/// An in-memory word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Raw words, in source order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse one word per line. Blank lines are dropped; everything else is
    /// kept as-is (minus the line terminator) for the filter to judge.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        WordList { words }
    }

    /// Read and parse a word file.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to read dictionary from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList { words: iter.into_iter().map(Into::into).collect() }
    }
}

impl DictionarySource for WordList {
    fn name(&self) -> String {
        format!("in-memory list ({} words)", self.words.len())
    }

    fn load_words(&self) -> io::Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// A dictionary file on disk, read lazily by [`DictionarySource::load_words`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFile {
    path: PathBuf,
}

impl DictionaryFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for DictionaryFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_words(&self) -> io::Result<Vec<String>> {
        WordList::load_from_path(&self.path).map(|list| list.words)
    }
}

fn owned_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_string()).collect()
}

impl<S: AsRef<str>> DictionarySource for Vec<S> {
    fn name(&self) -> String {
        format!("in-memory list ({} words)", self.len())
    }

    fn load_words(&self) -> io::Result<Vec<String>> {
        Ok(owned_words(self))
    }
}

impl<S: AsRef<str>, const N: usize> DictionarySource for [S; N] {
    fn name(&self) -> String {
        format!("in-memory list ({N} words)")
    }

    fn load_words(&self) -> io::Result<Vec<String>> {
        Ok(owned_words(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("quay\ntoxic\nmob");
        assert_eq!(list.words, vec!["quay", "toxic", "mob"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = WordList::parse_from_str("quay\n\n   \ntoxic\n\n");
        assert_eq!(list.words, vec!["quay", "toxic"]);
    }

    #[test]
    fn test_parse_keeps_order_case_and_duplicates() {
        let list = WordList::parse_from_str("Toxic\nquay\nToxic");
        assert_eq!(list.words, vec!["Toxic", "quay", "Toxic"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let list = WordList::parse_from_str("quay\r\ntoxic\r\n");
        assert_eq!(list.words, vec!["quay", "toxic"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let list = WordList::parse_from_str("");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_from_iterator() {
        let list: WordList = ["a", "b"].into_iter().collect();
        assert_eq!(list.words, vec!["a", "b"]);
    }

    #[test]
    fn test_array_and_vec_sources() {
        let words = ["quay", "mob"];
        let source: &dyn DictionarySource = &words;
        assert_eq!(source.load_words().unwrap(), vec!["quay", "mob"]);
        assert!(source.name().contains('2'));

        let owned = vec!["quay".to_string()];
        let source: &dyn DictionarySource = &owned;
        assert_eq!(source.load_words().unwrap(), vec!["quay"]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let file = DictionaryFile::new("/definitely/not/here/dictionary.txt");
        let err = file.load_words().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/definitely/not/here/dictionary.txt"));
        assert_eq!(file.name(), "/definitely/not/here/dictionary.txt");
    }
}
