//! Slack notification sink.

use serde_json::json;

use crate::config::Config;
use crate::error::NotifyError;
use crate::models::Paper;

/// Posts messages to a Slack channel via `chat.postMessage`.
///
/// The first successful post in a run records the returned `ts`, and later
/// messages are sent as replies in that thread.
pub struct SlackNotifier {
    client: reqwest::Client,
    api_url: String,
    bot_token: String,
    channel: String,
    icon_emoji: String,
    thread_ts: Option<String>,
}

impl SlackNotifier {
    /// Create a notifier from the configured bot token and channel.
    ///
    /// # Errors
    ///
    /// Returns error if no bot token is configured or HTTP client
    /// initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let bot_token = config
            .slack_bot_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SLACK_BOT_TOKEN is not set"))?;

        Ok(Self {
            client: config.http_client()?,
            api_url: config.slack_api_url.clone(),
            bot_token,
            channel: config.slack_channel.clone(),
            icon_emoji: config.slack_icon_emoji.clone(),
            thread_ts: None,
        })
    }

    /// Send a free-text message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] on transport failure, a non-success status,
    /// or an acknowledgment missing the `ts` correlation field. Failures are
    /// not retried here.
    pub async fn send_text(&mut self, text: &str) -> Result<(), NotifyError> {
        let payload = json!({
            "text": text,
            "channel": self.channel,
            "icon_emoji": self.icon_emoji,
            "thread_ts": self.thread_ts,
        });

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_url))
            .bearer_auth(&self.bot_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status { status: status.as_u16(), message });
        }

        let ack: serde_json::Value = response.json().await?;
        match ack.get("ts").and_then(serde_json::Value::as_str) {
            Some(ts) => {
                self.thread_ts = Some(ts.to_string());
                Ok(())
            }
            None => Err(NotifyError::MissingAck),
        }
    }

    /// Send a paper rendered as a `Title / Authors / Abstract` block.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SlackNotifier::send_text`].
    pub async fn send_paper(&mut self, paper: &Paper) -> Result<(), NotifyError> {
        self.send_text(&render_paper(paper)).await
    }
}

/// Human-readable rendering of a paper for chat messages.
#[must_use]
pub fn render_paper(paper: &Paper) -> String {
    format!(
        "Title: {}\nAuthors: {}\nAbstract: {}",
        paper.title,
        paper.author_names(),
        paper.r#abstract
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_joins_authors_with_commas() {
        let paper = Paper::new(
            "World Models",
            vec!["David Ha".to_string(), "Jürgen Schmidhuber".to_string()],
            "Learning world models.",
        );
        assert_eq!(
            render_paper(&paper),
            "Title: World Models\nAuthors: David Ha, Jürgen Schmidhuber\nAbstract: Learning world models."
        );
    }
}
