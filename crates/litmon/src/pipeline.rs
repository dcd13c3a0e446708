//! The fetch → filter → notify orchestration pipeline.

use crate::error::PipelineError;
use crate::filter::{FilterMode, PaperFilter};
use crate::models::{Paper, QueryParams};
use crate::notify::SlackNotifier;
use crate::sources::PaperSource;

/// One-shot orchestration of a source adapter, the filter engine and an
/// optional notifier. Holds no state across runs; every `run` is
/// independent.
pub struct Pipeline {
    source: Box<dyn PaperSource>,
    filter: PaperFilter,
    notifier: Option<SlackNotifier>,
}

impl Pipeline {
    /// Create a pipeline without a notifier.
    #[must_use]
    pub fn new(source: Box<dyn PaperSource>, filter: PaperFilter) -> Self {
        Self { source, filter, notifier: None }
    }

    /// Attach a notification sink.
    #[must_use]
    pub fn with_notifier(mut self, notifier: SlackNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Run fetch, filter and (optionally) notify, strictly in that order.
    ///
    /// Each stage completes fully before the next starts. Component errors
    /// propagate untouched; a failure at any stage aborts the run, including
    /// a notification failure partway through the announcement sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] wrapping the originating component error.
    pub async fn run(
        &mut self,
        fetching_params: &QueryParams,
        filtering_query: &str,
        filtering_mode: FilterMode,
    ) -> Result<Vec<Paper>, PipelineError> {
        let papers = self.source.fetch(fetching_params).await?;
        tracing::info!(fetched = papers.len(), "fetch stage complete");

        let filtered = self.filter.filter(&papers, filtering_query, filtering_mode).await?;
        tracing::info!(kept = filtered.len(), "filter stage complete");

        if let Some(notifier) = self.notifier.as_mut() {
            notifier.send_text(&format!("Query: {filtering_query}")).await?;
            for paper in &filtered {
                notifier.send_paper(paper).await?;
            }
            tracing::info!(sent = 1 + filtered.len(), "notify stage complete");
        }

        Ok(filtered)
    }
}
