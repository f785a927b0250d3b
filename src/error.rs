//! Error types for job searches.
//!
//! Every fallible operation in this crate returns [`ScrapeError`]. The
//! variants mirror the layers a search passes through: site lookup,
//! transport, selector parsing, and card extraction. "No results" is not
//! an error; it is reported through
//! [`SearchOutcome::NoResults`](crate::models::SearchOutcome).

use thiserror::Error;

/// The error taxonomy for a job search.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The requested site identifier is not in the registry.
    ///
    /// Raised eagerly, before any network traffic.
    #[error("{name} not found or not supported yet")]
    UnsupportedSite {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A URL could not be parsed or joined against its base.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A CSS selector string failed to parse.
    #[error("invalid selector `{selector}`: {message}")]
    Selector {
        /// The selector string that failed to parse.
        selector: String,
        /// The parser's diagnostic.
        message: String,
    },

    /// A job card was missing a required element.
    #[error("no element matched `{selector}` while extracting the {field}")]
    MissingElement {
        /// Which record field was being extracted.
        field: &'static str,
        /// The selector that matched nothing.
        selector: &'static str,
    },
}
