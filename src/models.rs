//! Data models for job searches and their results.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`JobQuery`]: The caller's search terms (city, country, keywords)
//! - [`JobRecord`]: A single normalized job listing
//! - [`SearchOutcome`]: Whether a search found listings or hit the site's
//!   "no results" page

use serde::Serialize;

/// The search terms for one job-site query.
///
/// The keyword string is comma-separated (e.g. `"python,django"`) and is
/// normalized into the site's query format by the URL builder.
#[derive(Debug, Clone)]
pub struct JobQuery {
    /// The city to search in.
    pub city: String,
    /// The country, in whatever form the target site expects
    /// (Indeed wants `"ireland"`, Monster wants `"ie"`).
    pub country: String,
    /// Comma-separated search keywords.
    pub keywords: String,
}

impl JobQuery {
    /// Build a query from anything string-like.
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            keywords: keywords.into(),
        }
    }
}

/// A single job listing, normalized across sites.
///
/// # Invariants
///
/// * `url` is always absolute; relative links are joined against the
///   site's base URL during extraction.
/// * `description` is `Some` only when the caller asked for descriptions,
///   in which case it holds the detail page's text or the literal
///   fallback `"No description available"`.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    /// The job title.
    pub title: String,
    /// The hiring company's name.
    pub company: String,
    /// Absolute link to the job's detail page.
    pub url: String,
    /// Detail-page description text, fetched on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The result of a successful search request.
///
/// A search that completes without a fault either finds listings or lands
/// on the site's "no results" page. Transport and extraction faults are
/// reported separately through [`ScrapeError`](crate::error::ScrapeError),
/// never swallowed.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The site returned a results page; holds every extracted card.
    Found(Vec<JobRecord>),
    /// The site's "no results" marker was present (or the results
    /// container was absent entirely).
    NoResults,
}

impl SearchOutcome {
    /// The extracted records, empty when nothing matched.
    pub fn records(&self) -> &[JobRecord] {
        match self {
            SearchOutcome::Found(records) => records,
            SearchOutcome::NoResults => &[],
        }
    }
}
