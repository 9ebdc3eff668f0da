pub mod engine;
pub mod error;
pub mod index;
pub mod scanner;
pub mod search;
pub mod tokenizer;

use serde::Serialize;
use std::collections::HashMap;

pub use engine::{BuildState, IndexStats, SearchEngine};
pub use error::{Error, Result};
pub use index::{insert_last_occurrence, KeywordIndex};
pub use search::{top5_search, top_k_search, TOP_K};
pub use tokenizer::{get_keyword, NoiseFilter, NoiseWords};

/// One keyword's hit count in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Document identifier carried verbatim from the document list, usually a path.
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Occurrences of a single keyword, kept in non-increasing frequency order.
pub type PostingList = Vec<Occurrence>;

/// Scanner output for one document: keyword -> its aggregated occurrence.
pub type DocumentKeywordMap = HashMap<String, Occurrence>;
