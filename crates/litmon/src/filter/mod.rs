//! Filter engine narrowing a paper set by a free-text query.
//!
//! Two interchangeable strategies sit behind one contract: literal substring
//! matching (exact, free) and LLM-assisted selection (semantic, one model
//! call per chunk, advisory rather than exact).

mod llm;
mod matching;

pub use matching::keyword_filter;

use std::str::FromStr;

use crate::error::{FilterError, FilterResult};
use crate::llm::LlmClient;
use crate::models::Paper;

/// Strategy selected for a filter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Literal substring match against title or abstract.
    Matching,
    /// Delegate relevance judgment to a language model.
    Llm,
}

impl FromStr for FilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matching" => Ok(Self::Matching),
            "llm" => Ok(Self::Llm),
            other => Err(FilterError::InvalidMode(other.to_string())),
        }
    }
}

/// Filter engine holding the LLM client used by [`FilterMode::Llm`].
pub struct PaperFilter {
    llm: LlmClient,
    chunk_size: usize,
}

impl PaperFilter {
    /// Create a filter engine with the default chunk size.
    #[must_use]
    pub fn new(llm: LlmClient) -> Self {
        Self { llm, chunk_size: crate::config::api::FILTER_CHUNK_SIZE }
    }

    /// Override the number of papers serialized per model call.
    /// A zero chunk size is clamped to one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Narrow `papers` to the ones relevant to `query` under `mode`.
    ///
    /// Both strategies preserve chunk/input order in their output. LLM mode
    /// fails the whole call on any chunk-level model failure; no partial
    /// result is returned and no retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Llm`] when a model call fails.
    pub async fn filter(
        &self,
        papers: &[Paper],
        query: &str,
        mode: FilterMode,
    ) -> FilterResult<Vec<Paper>> {
        match mode {
            FilterMode::Matching => Ok(matching::keyword_filter(papers, query)),
            FilterMode::Llm => llm::chunked_filter(&self.llm, papers, query, self.chunk_size).await,
        }
    }
}
