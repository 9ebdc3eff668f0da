use crate::error::{Error, Result};
use crate::index::KeywordIndex;
use crate::scanner;
use crate::search;
use crate::tokenizer::{self, lossy_lines, NoiseWords};
use crate::DocumentKeywordMap;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Lifecycle of a [`SearchEngine`]. Queries are meant for `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    Empty,
    Building,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub num_docs: u32,
    pub num_keywords: usize,
    pub num_occurrences: usize,
}

/// Owns the noise words and the keyword index, and drives indexing of a corpus.
#[derive(Debug)]
pub struct SearchEngine {
    index: KeywordIndex,
    noise: NoiseWords,
    state: BuildState,
}

impl Default for SearchEngine {
    fn default() -> Self { Self::new() }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { index: KeywordIndex::new(), noise: NoiseWords::new(), state: BuildState::Empty }
    }

    pub fn with_noise_words(noise: NoiseWords) -> Self {
        Self { noise, ..Self::new() }
    }

    pub fn state(&self) -> BuildState { self.state }
    pub fn index(&self) -> &KeywordIndex { &self.index }
    pub fn noise_words(&self) -> &NoiseWords { &self.noise }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_docs: self.index.num_docs(),
            num_keywords: self.index.len(),
            num_occurrences: self.index.total_occurrences(),
        }
    }

    /// Replaces the noise words with the tokens of `path`. Returns how many were loaded.
    pub fn load_noise_words<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.noise = NoiseWords::load(path)?;
        Ok(self.noise.len())
    }

    pub fn get_keyword(&self, word: &str) -> Option<String> {
        tokenizer::get_keyword(word, &self.noise)
    }

    pub fn load_keywords_from_document(&self, doc: &str) -> Result<DocumentKeywordMap> {
        scanner::load_keywords_from_document(doc, &self.noise)
    }

    pub fn merge_keywords(&mut self, kws: DocumentKeywordMap) {
        if self.state == BuildState::Empty {
            self.state = BuildState::Building;
        }
        self.index.merge_keywords(kws);
    }

    /// Scans and merges a single document. Nothing is merged if the scan fails.
    pub fn index_document(&mut self, doc: &str) -> Result<()> {
        let kws = self.load_keywords_from_document(doc)?;
        tracing::debug!(doc, keywords = kws.len(), "merging document");
        self.merge_keywords(kws);
        Ok(())
    }

    /// Indexes documents in order and marks the engine ready.
    ///
    /// The first failure is returned as-is; documents merged before it stay in the
    /// index and the engine remains in `Building`.
    pub fn index_documents<I, S>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state = BuildState::Building;
        for doc in docs {
            self.index_document(doc.as_ref())?;
        }
        self.state = BuildState::Ready;
        let stats = self.stats();
        tracing::info!(num_docs = stats.num_docs, num_keywords = stats.num_keywords, "index ready");
        Ok(())
    }

    /// Builds a fresh index from a document-list file and a noise-words file.
    ///
    /// Both files hold whitespace-separated tokens; document names are used as paths verbatim.
    pub fn make_index<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, docs_file: P, noise_file: Q) -> Result<()> {
        self.index.clear();
        self.state = BuildState::Empty;
        let loaded = self.load_noise_words(noise_file)?;
        tracing::debug!(noise_words = loaded, "loaded noise words");
        let docs = read_document_list(docs_file)?;
        self.index_documents(docs)
    }

    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        if self.state != BuildState::Ready {
            tracing::warn!(state = ?self.state, "query against an index that is not ready");
        }
        search::top5_search(&self.index, kw1, kw2)
    }
}

/// Reads whitespace-separated document identifiers from `path`.
pub fn read_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| Error::open_input(path, e))?;
    let mut docs = Vec::new();
    for line in lossy_lines(BufReader::new(f)) {
        let line = line.map_err(|e| Error::io(path, e))?;
        docs.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(docs)
}
