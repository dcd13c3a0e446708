//! Literal substring matching strategy.

use crate::models::Paper;

/// Retain papers whose title or abstract contains `query` literally.
///
/// Case-sensitive, no normalization, input order preserved. An empty query
/// matches nothing and yields an empty result.
#[must_use]
pub fn keyword_filter(papers: &[Paper], query: &str) -> Vec<Paper> {
    if query.is_empty() {
        return Vec::new();
    }
    papers.iter().filter(|paper| paper.mentions(query)).cloned().collect()
}
