//! Per-site job-card extractors.
//!
//! Each submodule knows how to read one site's search results markup and
//! turn its job cards into [`JobRecord`](crate::models::JobRecord)s.
//!
//! # Supported Sites
//!
//! | Site | Module | Card markup |
//! |------|--------|-------------|
//! | Indeed IE | [`indeed`] | `.jobsearch-SerpJobCard` elements, relative job links |
//! | Monster IE | [`monster`] | `.card-content .summary` elements, absolute job links |
//!
//! # Common Patterns
//!
//! Each extractor exports a `collect_cards(results, profile)` function
//! that walks every card inside the results container and extracts title
//! text, company text, and the job link. Relative links are joined
//! against the site's base URL so a record's URL is always absolute. A
//! card missing a required element fails the whole extraction with
//! [`ScrapeError::MissingElement`] rather than being skipped silently.

use scraper::Html;

use crate::dom::{DomQuery, parse_selector};
use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::sites::{Site, SiteProfile};

pub mod indeed;
pub mod monster;

/// Extract every job card from a fetched search page.
///
/// Locates the results container via the profile's `results` selector and
/// dispatches to the site's card extractor. Returns `None` when the
/// container is absent, which the orchestration layer reports as
/// "no results".
pub fn extract(
    document: &Html,
    profile: &SiteProfile,
) -> Result<Option<Vec<JobRecord>>, ScrapeError> {
    let results_selector = parse_selector(profile.results)?;
    let Some(results) = document.find_first(&results_selector) else {
        return Ok(None);
    };

    let records = match profile.site {
        Site::Indeed => indeed::collect_cards(results, profile)?,
        Site::Monster => monster::collect_cards(results, profile)?,
    };
    Ok(Some(records))
}
