//! Adapter for a local ACL Anthology XML corpus.

use std::path::PathBuf;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::config::Config;
use crate::error::{SourceError, SourceResult};
use crate::models::{Paper, QueryParams};

use super::PaperSource;

/// Reads conference proceedings from ACL Anthology volume files laid out as
/// `<data_dir>/<year>.<conference>.xml`. Conference identifiers are
/// lower-case in this corpus.
pub struct AclAnthologySource {
    data_dir: PathBuf,
}

impl AclAnthologySource {
    /// Create a new anthology adapter rooted at the configured data dir.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { data_dir: config.acl_data_dir.clone() }
    }
}

#[async_trait::async_trait]
impl PaperSource for AclAnthologySource {
    async fn fetch(&self, params: &QueryParams) -> SourceResult<Vec<Paper>> {
        let QueryParams::Conference { conference, year } = params else {
            return Err(SourceError::invalid_params("acl-anthology", "Conference"));
        };

        let path = self.data_dir.join(format!("{year}.{conference}.xml"));
        tracing::debug!(path = %path.display(), "reading anthology volume");

        let body = tokio::fs::read_to_string(&path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound { path: path.clone() }
            } else {
                SourceError::parse(format!("failed to read {}: {err}", path.display()))
            }
        })?;

        let papers = parse_volume(&body)?;
        tracing::info!(fetched = papers.len(), %conference, year, "anthology fetch complete");
        Ok(papers)
    }
}

/// Fields a `<paper>` element contributes to the common record.
#[derive(Clone, Copy)]
enum Field {
    Title,
    Abstract,
    First,
    Last,
}

/// Parse one anthology volume. `<paper>` elements may sit at any depth;
/// authors are joined as `"<first> <last>"`.
fn parse_volume(xml: &str) -> SourceResult<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut in_paper = false;
    let mut field = None;
    let mut title = String::new();
    let mut r#abstract = String::new();
    let mut authors: Vec<String> = Vec::new();
    let mut first = String::new();
    let mut last = String::new();

    loop {
        match reader.read_event() {
            Err(err) => return Err(SourceError::parse(err.to_string())),
            Ok(Event::Eof) => break,
            Ok(Event::Start(tag)) => match tag.local_name().as_ref() {
                b"paper" => {
                    in_paper = true;
                    title.clear();
                    r#abstract.clear();
                    authors.clear();
                }
                b"title" if in_paper => field = Some(Field::Title),
                b"abstract" if in_paper => field = Some(Field::Abstract),
                b"author" if in_paper => {
                    first.clear();
                    last.clear();
                }
                b"first" if in_paper => field = Some(Field::First),
                b"last" if in_paper => field = Some(Field::Last),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                if in_paper && field.is_some() {
                    let chunk = text.unescape().map_err(|err| SourceError::parse(err.to_string()))?;
                    match field {
                        Some(Field::Title) => title.push_str(&chunk),
                        Some(Field::Abstract) => r#abstract.push_str(&chunk),
                        Some(Field::First) => first.push_str(&chunk),
                        Some(Field::Last) => last.push_str(&chunk),
                        None => {}
                    }
                }
            }
            Ok(Event::End(tag)) => match tag.local_name().as_ref() {
                b"paper" => {
                    in_paper = false;
                    papers.push(Paper::new(title.clone(), authors.clone(), r#abstract.clone()));
                }
                b"author" if in_paper => {
                    authors.push(full_name(&first, &last));
                }
                b"title" | b"abstract" | b"first" | b"last" => field = None,
                _ => {}
            },
            Ok(_) => {}
        }
    }

    Ok(papers)
}

/// First name, then last name, space-joined; a missing half is skipped.
fn full_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
