//! Query parameters, one variant per source family.

use chrono::NaiveDate;

/// Invalid query-parameter values, rejected at construction.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    /// Date bound is not a YYYYMMDD calendar date.
    #[error("invalid date '{value}': expected YYYYMMDD")]
    BadDate {
        /// Offending input
        value: String,
    },

    /// `max_results` must be positive.
    #[error("max_results must be positive")]
    ZeroMaxResults,
}

/// Validated query parameters for one pipeline run.
///
/// Exactly one variant is constructed per run and handed to the matching
/// adapter; a mismatch is a programming error the adapter rejects before
/// performing any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParams {
    /// arXiv export API query.
    Arxiv {
        /// arXiv category, e.g. `cs.CL`.
        category: String,
        /// Inclusive start of the submission window (YYYYMMDD).
        start: String,
        /// Inclusive end of the submission window (YYYYMMDD).
        end: String,
        /// Upper bound on returned papers.
        max_results: u32,
    },

    /// Conference proceedings query (ACL Anthology or OpenReview).
    Conference {
        /// Conference identifier, e.g. `acl` or `ICLR`.
        conference: String,
        /// Conference year.
        year: i32,
    },
}

impl QueryParams {
    /// Construct validated arXiv query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError`] if a date bound is not a YYYYMMDD calendar
    /// date or `max_results` is zero.
    pub fn arxiv(
        category: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        max_results: u32,
    ) -> Result<Self, ParamsError> {
        let start = start.into();
        let end = end.into();
        validate_date(&start)?;
        validate_date(&end)?;
        if max_results == 0 {
            return Err(ParamsError::ZeroMaxResults);
        }
        Ok(Self::Arxiv { category: category.into(), start, end, max_results })
    }

    /// Construct conference query parameters.
    #[must_use]
    pub fn conference(conference: impl Into<String>, year: i32) -> Self {
        Self::Conference { conference: conference.into(), year }
    }
}

fn validate_date(value: &str) -> Result<(), ParamsError> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map(|_| ())
        .map_err(|_| ParamsError::BadDate { value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arxiv_params_accept_valid_window() {
        let params = QueryParams::arxiv("cs.CL", "20240101", "20240102", 100).unwrap();
        assert!(matches!(params, QueryParams::Arxiv { max_results: 100, .. }));
    }

    #[test]
    fn arxiv_params_reject_bad_dates() {
        assert!(matches!(
            QueryParams::arxiv("cs.CL", "2024-01-01", "20240102", 100),
            Err(ParamsError::BadDate { .. })
        ));
        assert!(matches!(
            QueryParams::arxiv("cs.CL", "20240101", "20241301", 100),
            Err(ParamsError::BadDate { .. })
        ));
    }

    #[test]
    fn arxiv_params_reject_zero_max_results() {
        assert!(matches!(
            QueryParams::arxiv("cs.CL", "20240101", "20240102", 0),
            Err(ParamsError::ZeroMaxResults)
        ));
    }
}
