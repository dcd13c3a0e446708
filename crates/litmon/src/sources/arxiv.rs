//! Adapter for the arXiv export API (Atom feed).

use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{SourceError, SourceResult};
use crate::models::{Paper, QueryParams};

use super::PaperSource;

/// Fetches papers from the arXiv export API.
pub struct ArxivSource {
    client: reqwest::Client,
    api_url: String,
}

impl ArxivSource {
    /// Create a new arXiv adapter.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self { client: config.http_client()?, api_url: config.arxiv_api_url.clone() })
    }

    fn build_url(
        &self,
        category: &str,
        start: &str,
        end: &str,
        max_results: u32,
    ) -> SourceResult<Url> {
        let search_query = format!("cat:{category} AND submittedDate:[{start} TO {end}]");
        let max_results = max_results.to_string();
        Url::parse_with_params(
            &self.api_url,
            &[("search_query", search_query.as_str()), ("max_results", max_results.as_str())],
        )
        .map_err(|err| SourceError::parse(format!("invalid arXiv endpoint: {err}")))
    }
}

#[async_trait::async_trait]
impl PaperSource for ArxivSource {
    async fn fetch(&self, params: &QueryParams) -> SourceResult<Vec<Paper>> {
        let QueryParams::Arxiv { category, start, end, max_results } = params else {
            return Err(SourceError::invalid_params("arxiv", "Arxiv"));
        };

        let url = self.build_url(category, start, end, *max_results)?;
        tracing::debug!(%url, "querying arXiv export API");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::fetch(status.as_u16(), message));
        }

        let body = response.text().await?;
        let papers = parse_feed(&body, *max_results as usize);
        tracing::info!(fetched = papers.len(), %category, "arXiv fetch complete");
        Ok(papers)
    }
}

/// Atom feed as served by the export API. Only the entry fields the common
/// paper record needs are captured.
#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: String,
    #[serde(rename = "author", default)]
    authors: Vec<EntryAuthor>,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct EntryAuthor {
    name: String,
}

/// Parse the Atom body into papers, bounded by `max_results`.
///
/// A malformed or empty feed yields an empty list rather than an error; the
/// export API answers odd queries with HTML error pages and those should
/// read as "nothing found".
fn parse_feed(body: &str, max_results: usize) -> Vec<Paper> {
    let Ok(feed) = quick_xml::de::from_str::<Feed>(body) else {
        tracing::warn!("arXiv feed did not parse as Atom; treating as empty");
        return Vec::new();
    };

    feed.entries
        .into_iter()
        .take(max_results)
        .map(|entry| {
            let authors = entry.authors.into_iter().map(|author| author.name).collect();
            Paper::new(entry.title, authors, entry.summary)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <entry>
    <title>Scaling Laws Revisited</title>
    <author><name>Ada Lovelace</name></author>
    <author><name>Alan Turing</name></author>
    <summary>We revisit scaling laws.</summary>
  </entry>
  <entry>
    <title>Sparse Attention</title>
    <author><name>Grace Hopper</name></author>
    <summary>Attention, sparsely.</summary>
  </entry>
</feed>"#;

    #[test]
    fn parses_entries_in_feed_order() {
        let papers = parse_feed(FEED, 10);
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Scaling Laws Revisited");
        assert_eq!(papers[0].authors, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(papers[1].r#abstract, "Attention, sparsely.");
    }

    #[test]
    fn bounds_results() {
        let papers = parse_feed(FEED, 1);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Scaling Laws Revisited");
    }

    #[test]
    fn malformed_feed_is_empty() {
        assert!(parse_feed("<html>rate limited</html>", 10).is_empty());
        assert!(parse_feed("", 10).is_empty());
    }
}
