//! Prompt templates for LLM-assisted filtering.

/// System prompt framing the selection task.
pub const SYSTEM_PROMPT: &str = "\
Role: You are an advanced assistant specialized in filtering research papers to match user interests.

Objective: Identify research papers that align with the user's specified interests or keywords.

Instructions:

1. Understand User Interests:
    Analyze the user's provided \"interests\" or \"keywords\" to define their focus, including:
    - Specific research fields
    - Particular topics or keywords
    - Problems or applications of interest

2. Evaluate Relevance:
    Use available information for each paper (e.g., title, authors, abstract) to assess its alignment with the user's interests. Prioritize accuracy and clarity in your recommendations.
";

/// Render the user prompt for one chunk of serialized papers.
#[must_use]
pub fn user_prompt(query: &str, papers: &str) -> String {
    format!("{query}\n\nPapers:\n{papers}")
}
