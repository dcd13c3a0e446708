//! Source adapters translating external literature repositories into the
//! common [`Paper`] representation.
//!
//! Every adapter implements [`PaperSource`]; the pipeline depends only on
//! that capability and never on a concrete variant. `fetch` is stateless:
//! it returns the papers for this call only and accumulates nothing, so an
//! adapter instance can be reused across runs without surprises.

mod acl_anthology;
mod arxiv;
mod openreview;

pub use acl_anthology::AclAnthologySource;
pub use arxiv::ArxivSource;
pub use openreview::OpenReviewSource;

use crate::error::SourceResult;
use crate::models::{Paper, QueryParams};

/// Capability shared by all source adapters.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch papers matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SourceError::InvalidParameterType`] before any I/O
    /// if `params` is not the variant this adapter understands, and the
    /// adapter-specific fetch errors otherwise.
    async fn fetch(&self, params: &QueryParams) -> SourceResult<Vec<Paper>>;
}

/// Venues published in the ACL Anthology.
const ACL_ANTHOLOGY_VENUES: &[&str] = &[
    "AACL", "ACL", "ALTA", "AMTA", "ArabicNLP", "CCL", "CL", "COLING", "CoNLL", "EACL", "EAMT",
    "EMNLP", "HLT", "IJCLCLP", "IJCNLP", "IWSLT", "JLCL", "KONVENS", "LILT", "LREC", "NAACL",
    "NEJLT", "NoDaLiDa", "PACLIC", "RANLP", "ROCLING", "SemEval", "TACL", "TAL", "WMT",
];

/// Venues hosted on OpenReview.
const OPENREVIEW_VENUES: &[&str] = &["ICLR", "NeurIPS"];

/// True if `conference` is published in the ACL Anthology.
#[must_use]
pub fn is_acl_anthology_venue(conference: &str) -> bool {
    ACL_ANTHOLOGY_VENUES.contains(&conference)
}

/// True if `conference` is hosted on OpenReview.
#[must_use]
pub fn is_openreview_venue(conference: &str) -> bool {
    OPENREVIEW_VENUES.contains(&conference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_routing_is_disjoint() {
        assert!(is_acl_anthology_venue("ACL"));
        assert!(is_acl_anthology_venue("EMNLP"));
        assert!(!is_acl_anthology_venue("acl")); // identifiers are matched as given

        assert!(is_openreview_venue("ICLR"));
        assert!(is_openreview_venue("NeurIPS"));
        assert!(!is_openreview_venue("ACL"));

        for venue in ACL_ANTHOLOGY_VENUES {
            assert!(!is_openreview_venue(venue));
        }
    }
}
