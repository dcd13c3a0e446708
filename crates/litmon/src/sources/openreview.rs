//! Adapter for the OpenReview API.

use serde::Deserialize;

use crate::config::Config;
use crate::error::{SourceError, SourceResult};
use crate::models::{Paper, QueryParams};

use super::PaperSource;

/// Fetches conference submissions from OpenReview.
///
/// Authentication happens once, at [`OpenReviewSource::connect`]; the bearer
/// token is held for the adapter's lifetime.
pub struct OpenReviewSource {
    client: reqwest::Client,
    api_url: String,
    token: String,
    page_limit: usize,
}

impl OpenReviewSource {
    /// Authenticate against OpenReview and build the adapter.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Authentication`] when credentials are missing
    /// or rejected, [`SourceError::Http`] on transport failure.
    pub async fn connect(config: &Config) -> SourceResult<Self> {
        let username = config
            .openreview_username
            .clone()
            .ok_or_else(|| SourceError::authentication("OPENREVIEW_USERNAME is not set"))?;
        let password = config
            .openreview_password
            .clone()
            .ok_or_else(|| SourceError::authentication("OPENREVIEW_PASSWORD is not set"))?;

        let client = config.http_client()?;
        let response = client
            .post(format!("{}/login", config.openreview_api_url))
            .json(&serde_json::json!({ "id": username, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::authentication(format!("login failed ({status}): {message}")));
        }

        #[derive(Deserialize)]
        struct Login {
            token: String,
        }

        let login: Login = response.json().await?;
        tracing::debug!("authenticated with OpenReview");

        Ok(Self {
            client,
            api_url: config.openreview_api_url.clone(),
            token: login.token,
            page_limit: config.openreview_page_limit,
        })
    }

    /// Invitation id addressing a conference's blind submissions.
    fn invitation(conference: &str, year: i32) -> String {
        format!("{conference}.cc/{year}/Conference/-/Blind_Submission")
    }
}

#[async_trait::async_trait]
impl PaperSource for OpenReviewSource {
    async fn fetch(&self, params: &QueryParams) -> SourceResult<Vec<Paper>> {
        let QueryParams::Conference { conference, year } = params else {
            return Err(SourceError::invalid_params("openreview", "Conference"));
        };

        let invitation = Self::invitation(conference, *year);
        tracing::debug!(%invitation, "paging OpenReview submissions");

        // All-or-nothing: a failure on any page drops whatever was already
        // collected and fails the whole call.
        let mut papers = Vec::new();
        let mut offset = 0usize;
        loop {
            let offset_param = offset.to_string();
            let limit_param = self.page_limit.to_string();
            let response = self
                .client
                .get(format!("{}/notes", self.api_url))
                .bearer_auth(&self.token)
                .query(&[
                    ("invitation", invitation.as_str()),
                    ("offset", offset_param.as_str()),
                    ("limit", limit_param.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SourceError::fetch(status.as_u16(), message));
            }

            let page: NotesPage = response.json().await?;
            let fetched = page.notes.len();
            papers.extend(page.notes.into_iter().map(|note| {
                Paper::new(note.content.title, note.content.authors, note.content.r#abstract)
            }));

            if fetched < self.page_limit {
                break;
            }
            offset += fetched;
        }

        tracing::info!(fetched = papers.len(), %invitation, "OpenReview fetch complete");
        Ok(papers)
    }
}

#[derive(Debug, Deserialize)]
struct NotesPage {
    #[serde(default)]
    notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
struct Note {
    content: NoteContent,
}

/// Submission content fields; authors arrive as full names.
#[derive(Debug, Deserialize)]
struct NoteContent {
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    r#abstract: String,
}
