//! Common paper record produced by every source adapter.

use serde::{Deserialize, Serialize};

/// A research paper, reduced to the fields every source can provide.
///
/// Equality is structural; papers carry no identity beyond their content,
/// and duplicates across sources are not collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Author names in publication order.
    pub authors: Vec<String>,

    /// Paper abstract.
    #[serde(rename = "abstract")]
    pub r#abstract: String,
}

impl Paper {
    /// Create a new paper record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        r#abstract: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), authors, r#abstract: r#abstract.into() }
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// True if `needle` occurs literally in the title or the abstract.
    /// Case-sensitive, no normalization.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.r#abstract.contains(needle)
    }
}

/// A list of papers as returned by the structured completion call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperList {
    /// Selected papers.
    pub papers: Vec<Paper>,
}
