//! Language-model interface for the LLM-assisted filter strategy.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint and asks for a
//! structured `{"papers": [...]}` object so the assistant's selection can be
//! deserialized directly into [`PaperList`].

use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::LlmError;
use crate::models::PaperList;

/// Client for an OpenAI-compatible completion API.
pub struct LlmClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    /// Create a new completion client.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            api_url: config.completion_api_url.clone(),
            api_key: config.completion_api_key.clone(),
            model: config.completion_model.clone(),
        })
    }

    /// Request one structured completion and parse the selected papers.
    ///
    /// The structured response is trusted as-is; there is no check that the
    /// returned papers are a subset of what the prompt contained.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on transport failure, a non-success status, or a
    /// payload that does not deserialize into a paper list.
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<PaperList, LlmError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "paper_list",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": {
                            "papers": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "title": { "type": "string" },
                                        "authors": {
                                            "type": "array",
                                            "items": { "type": "string" }
                                        },
                                        "abstract": { "type": "string" }
                                    },
                                    "required": ["title", "authors", "abstract"],
                                    "additionalProperties": false
                                }
                            }
                        },
                        "required": ["papers"],
                        "additionalProperties": false
                    }
                }
            }
        });

        let mut request = self.client.post(format!("{}/chat/completions", self.api_url)).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Status { status: status.as_u16(), message });
        }

        let completion: ChatCompletion = response.json().await?;
        let choice = completion.choices.into_iter().next().ok_or(LlmError::EmptyCompletion)?;
        let list: PaperList = serde_json::from_str(&choice.message.content)?;
        tracing::debug!(selected = list.papers.len(), "completion parsed");
        Ok(list)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_content_deserializes_into_paper_list() {
        let content = r#"{"papers":[{"title":"DDPM","authors":["Jonathan Ho"],"abstract":"Denoising."}]}"#;
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{ "message": { "content": content } }]
        }))
        .unwrap();

        let list: PaperList =
            serde_json::from_str(&completion.choices[0].message.content).unwrap();
        assert_eq!(list.papers.len(), 1);
        assert_eq!(list.papers[0].title, "DDPM");
    }
}
