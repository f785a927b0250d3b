//! # Jobscrape
//!
//! Search Irish job boards and extract structured job listings.
//!
//! ## Features
//!
//! - Queries Indeed IE and Monster IE through each site's search URL
//! - Declarative per-site profiles: URL template plus the CSS selectors
//!   for results, "no results" markers, job cards, and descriptions
//! - Normalizes every listing into a [`JobRecord`] with title, company,
//!   and an absolute URL
//! - Optionally fetches each job's detail page for its description text
//!
//! ## Usage
//!
//! ```no_run
//! use jobscrape::{JobQuery, SearchOutcome, Site, get_jobs};
//!
//! # async fn run() -> Result<(), jobscrape::ScrapeError> {
//! let query = JobQuery::new("dublin", "ireland", "python,django");
//! match get_jobs(Site::Indeed, &query, false).await? {
//!     SearchOutcome::Found(jobs) => println!("{} jobs", jobs.len()),
//!     SearchOutcome::NoResults => println!("nothing matched"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! A search runs through a short pipeline:
//! 1. **Registry**: resolve the [`Site`] to its static [`SiteProfile`]
//! 2. **Fetch**: build the query URL and download the results page
//! 3. **Check**: bail out early when the "no results" marker is present
//! 4. **Extract**: walk the job cards with the site's extractor
//! 5. **Describe** (optional): fetch each job's detail page, in order

use scraper::Html;
use tracing::{info, instrument};

pub mod dom;
pub mod error;
pub mod fetch;
pub mod models;
pub mod scrapers;
pub mod sites;

pub use error::ScrapeError;
pub use models::{JobQuery, JobRecord, SearchOutcome};
pub use sites::{Site, SiteProfile};

/// Search one site for jobs.
///
/// Builds the query URL from the site's profile, fetches the results
/// page, and extracts every job card. With `with_descriptions` set, each
/// job's detail page is fetched as well and its description text attached
/// to the record, in the same order the cards appeared.
///
/// # Errors
///
/// Any transport or extraction fault aborts the whole request; there are
/// no retries. A search that merely matches nothing is not an error — it
/// comes back as [`SearchOutcome::NoResults`].
#[instrument(level = "info", skip_all, fields(site = %site))]
pub async fn get_jobs(
    site: Site,
    query: &JobQuery,
    with_descriptions: bool,
) -> Result<SearchOutcome, ScrapeError> {
    let profile = site.profile();
    let url = fetch::search_url(profile, query);
    info!(%url, "Searching for jobs");

    let body = fetch::fetch_text(&url).await?;
    let Some(records) = extract_page(&body, profile)? else {
        info!("No jobs matched the query");
        return Ok(SearchOutcome::NoResults);
    };

    let records = if with_descriptions {
        fetch::attach_descriptions(records, profile).await?
    } else {
        records
    };

    info!(count = records.len(), "Search complete");
    Ok(SearchOutcome::Found(records))
}

/// Parse a results page and extract its job cards.
///
/// `None` means the site reported no results, either through its
/// "no results" marker or by omitting the results container.
fn extract_page(
    body: &str,
    profile: &SiteProfile,
) -> Result<Option<Vec<JobRecord>>, ScrapeError> {
    let document = Html::parse_document(body);
    if fetch::no_results_marker(&document, profile)? {
        return Ok(None);
    }
    scrapers::extract(&document, profile)
}
