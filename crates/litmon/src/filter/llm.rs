//! LLM-assisted selection strategy.

use crate::error::{FilterResult, LlmError};
use crate::llm::LlmClient;
use crate::models::Paper;
use crate::prompts;

/// Ask the model to select relevant papers, one call per chunk.
///
/// Chunking bounds per-call token volume; per-chunk selections are
/// concatenated in chunk order. The model's structured response is trusted
/// as-is, so callers must treat the result as advisory.
pub(crate) async fn chunked_filter(
    llm: &LlmClient,
    papers: &[Paper],
    query: &str,
    chunk_size: usize,
) -> FilterResult<Vec<Paper>> {
    let mut selected = Vec::new();

    for (index, chunk) in papers.chunks(chunk_size).enumerate() {
        let dump = serialize_chunk(chunk)?;
        let user_prompt = prompts::user_prompt(query, &dump);
        tracing::debug!(chunk = index, papers = chunk.len(), "requesting selection");

        let result = llm.generate(prompts::SYSTEM_PROMPT, &user_prompt).await?;
        selected.extend(result.papers);
    }

    Ok(selected)
}

/// One serialized paper record per line.
fn serialize_chunk(chunk: &[Paper]) -> Result<String, LlmError> {
    let lines = chunk
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(LlmError::Payload)?;
    Ok(lines.join("\n"))
}
