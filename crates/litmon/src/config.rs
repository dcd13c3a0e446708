//! Configuration for the paper pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// External endpoint constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// OpenReview API base URL.
    pub const OPENREVIEW_API: &str = "https://api.openreview.net";

    /// Slack Web API base URL.
    pub const SLACK_API: &str = "https://slack.com/api";

    /// OpenAI-compatible completion API base URL.
    pub const COMPLETION_API: &str = "https://api.openai.com/v1";

    /// Default completion model.
    pub const DEFAULT_MODEL: &str = "gpt-4o";

    /// Default Slack channel for paper announcements.
    pub const DEFAULT_CHANNEL: &str = "dev-survey-copilot";

    /// Default icon for notification messages.
    pub const DEFAULT_ICON_EMOJI: &str = ":ghost:";

    /// Default directory holding ACL Anthology XML volumes.
    pub const ACL_DATA_DIR: &str = "data/acl-anthology/xml";

    /// Notes fetched per OpenReview page.
    pub const OPENREVIEW_PAGE_LIMIT: usize = 1000;

    /// Papers serialized into a single completion request.
    pub const FILTER_CHUNK_SIZE: usize = 10;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Pipeline configuration.
///
/// Endpoint URLs are fields rather than constants so integration tests can
/// point every remote call at a mock server via [`Config::for_testing`].
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible API key (required for LLM filtering).
    pub completion_api_key: Option<String>,

    /// Completion model name.
    pub completion_model: String,

    /// Completion API base URL.
    pub completion_api_url: String,

    /// Slack bot token (required for notifications).
    pub slack_bot_token: Option<String>,

    /// Slack channel announcements are posted to.
    pub slack_channel: String,

    /// Icon shown next to notification messages.
    pub slack_icon_emoji: String,

    /// Slack Web API base URL.
    pub slack_api_url: String,

    /// OpenReview account name.
    pub openreview_username: Option<String>,

    /// OpenReview account password.
    pub openreview_password: Option<String>,

    /// OpenReview API base URL.
    pub openreview_api_url: String,

    /// Notes fetched per OpenReview page.
    pub openreview_page_limit: usize,

    /// arXiv export API query endpoint.
    pub arxiv_api_url: String,

    /// Directory holding ACL Anthology XML volumes.
    pub acl_data_dir: PathBuf,

    /// Papers serialized into a single completion request.
    pub filter_chunk_size: usize,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Credentials are optional here; each component checks for the ones it
    /// needs when constructed.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            completion_api_key: std::env::var("OPENAI_API_KEY").ok(),
            completion_model: std::env::var("LITMON_MODEL")
                .unwrap_or_else(|_| api::DEFAULT_MODEL.to_string()),
            completion_api_url: api::COMPLETION_API.to_string(),
            slack_bot_token: std::env::var("SLACK_BOT_TOKEN").ok(),
            slack_channel: std::env::var("SLACK_CHANNEL")
                .unwrap_or_else(|_| api::DEFAULT_CHANNEL.to_string()),
            slack_icon_emoji: api::DEFAULT_ICON_EMOJI.to_string(),
            slack_api_url: api::SLACK_API.to_string(),
            openreview_username: std::env::var("OPENREVIEW_USERNAME").ok(),
            openreview_password: std::env::var("OPENREVIEW_PASSWORD").ok(),
            openreview_api_url: api::OPENREVIEW_API.to_string(),
            openreview_page_limit: api::OPENREVIEW_PAGE_LIMIT,
            arxiv_api_url: api::ARXIV_API.to_string(),
            acl_data_dir: std::env::var("ACL_ANTHOLOGY_DIR")
                .map_or_else(|_| PathBuf::from(api::ACL_DATA_DIR), PathBuf::from),
            filter_chunk_size: api::FILTER_CHUNK_SIZE,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with every endpoint pointed at a mock
    /// server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            completion_api_key: Some("test-key".to_string()),
            completion_model: api::DEFAULT_MODEL.to_string(),
            completion_api_url: format!("{base_url}/v1"),
            slack_bot_token: Some("test-token".to_string()),
            slack_channel: api::DEFAULT_CHANNEL.to_string(),
            slack_icon_emoji: api::DEFAULT_ICON_EMOJI.to_string(),
            slack_api_url: format!("{base_url}/api"),
            openreview_username: Some("test-user".to_string()),
            openreview_password: Some("test-pass".to_string()),
            openreview_api_url: base_url.to_string(),
            openreview_page_limit: 2, // Exercise pagination with small fixtures
            arxiv_api_url: format!("{base_url}/api/query"),
            acl_data_dir: PathBuf::from("tests/fixtures"),
            filter_chunk_size: api::FILTER_CHUNK_SIZE,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Build the HTTP client shared by the remote-facing components.
    ///
    /// # Errors
    ///
    /// Returns error if client initialization fails.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .gzip(true)
            .build()
    }
}
