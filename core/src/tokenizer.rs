use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

lazy_static! {
    static ref KEYWORD_RE: Regex = Regex::new(r"^[a-z]+$").expect("valid regex");
}

/// Punctuation stripped from the end of a token. Nothing else is trimmed.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ':', ';'];

/// Membership test for words that are never indexed.
pub trait NoiseFilter {
    fn is_noise(&self, word: &str) -> bool;
}

impl NoiseFilter for HashSet<String> {
    fn is_noise(&self, word: &str) -> bool { self.contains(word) }
}

impl NoiseFilter for HashSet<&str> {
    fn is_noise(&self, word: &str) -> bool { self.contains(word) }
}

impl<T: NoiseFilter + ?Sized> NoiseFilter for &T {
    fn is_noise(&self, word: &str) -> bool { (**self).is_noise(word) }
}

/// Noise words, stored verbatim. Callers are expected to supply them lowercased;
/// an uppercase entry never matches because tokens are lowercased first.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    /// Adds every whitespace-separated token of `reader` as-is.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in lossy_lines(reader) {
            let line = line?;
            words.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(Self { words })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| Error::open_input(path, e))?;
        Self::from_reader(BufReader::new(f)).map_err(|e| Error::io(path, e))
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool { self.words.insert(word.into()) }
    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl NoiseFilter for NoiseWords {
    fn is_noise(&self, word: &str) -> bool { self.contains(word) }
}

impl<S: Into<String>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Lines of `reader` split on `\n`, with invalid UTF-8 replaced by U+FFFD.
///
/// A replaced byte can never be part of a keyword, so a stray Latin-1 byte only
/// drops the token it sits in. A trailing `\r` is left on the line.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = std::io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Splits a document line into raw tokens on the single-space character only.
/// Runs of spaces produce empty tokens; tabs stay inside tokens.
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ')
}

/// Normalizes a raw token into a keyword, or `None` if it is not one.
///
/// Trailing `. , ! ? : ;` are stripped, the rest is ASCII-lowercased, and the
/// result must be non-empty, not a noise word, and made only of `a..=z`.
pub fn get_keyword<N: NoiseFilter + ?Sized>(word: &str, noise: &N) -> Option<String> {
    let trimmed = word.trim_end_matches(&TRAILING_PUNCTUATION[..]);
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.is_empty() || noise.is_noise(&lowered) {
        return None;
    }
    if KEYWORD_RE.is_match(&lowered) {
        Some(lowered)
    } else {
        None
    }
}
