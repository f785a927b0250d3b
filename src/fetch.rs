//! Query building and page fetching.
//!
//! This module owns everything that touches the network: building a
//! search URL from a [`SiteProfile`] and a [`JobQuery`], fetching pages,
//! recognizing a site's "no results" page, and pulling description text
//! off job detail pages.
//!
//! Transport failures propagate as [`ScrapeError::Fetch`]; there are no
//! retries and no backoff, so any fault aborts the whole request.

use futures::stream::{self, StreamExt, TryStreamExt};
use scraper::Html;
use tracing::{debug, info, instrument};

use crate::dom::{DomQuery, parse_selector, text_of};
use crate::error::ScrapeError;
use crate::models::{JobQuery, JobRecord};
use crate::sites::SiteProfile;

/// Fallback description used when a detail page has no description node.
pub const NO_DESCRIPTION: &str = "No description available";

/// How many detail pages are fetched at once when descriptions are
/// requested. Result order is preserved regardless.
const DETAIL_FETCH_CONCURRENCY: usize = 4;

/// Build the full search URL for a site.
///
/// The comma-separated keyword string is split, each keyword
/// percent-encoded, and the parts joined with `+` (so `"python,django"`
/// becomes `python+django`). City and country are percent-encoded as
/// well before being substituted into the profile's query template.
pub fn search_url(profile: &SiteProfile, query: &JobQuery) -> String {
    let keywords = query
        .keywords
        .split(',')
        .map(|keyword| urlencoding::encode(keyword.trim()).into_owned())
        .collect::<Vec<_>>()
        .join("+");

    let query_string = profile
        .query_format
        .replace("{keywords}", &keywords)
        .replace("{city}", &urlencoding::encode(&query.city))
        .replace("{country}", &urlencoding::encode(&query.country));

    format!("{}{}", profile.base_url, query_string)
}

/// Fetch a page and return its body.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_text(url: &str) -> Result<String, ScrapeError> {
    let body = reqwest::get(url).await?.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}

/// Check a fetched search page for the site's "no results" marker.
pub fn no_results_marker(document: &Html, profile: &SiteProfile) -> Result<bool, ScrapeError> {
    let selector = parse_selector(profile.not_found)?;
    Ok(document.find_first(&selector).is_some())
}

/// Extract description text from a parsed detail page.
///
/// Falls back to [`NO_DESCRIPTION`] when the profile's description
/// selector matches nothing.
pub fn description_text(document: &Html, profile: &SiteProfile) -> Result<String, ScrapeError> {
    let selector = parse_selector(profile.desc_text)?;
    let description = document
        .find_first(&selector)
        .map(text_of)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());
    Ok(description)
}

/// Fetch one job's detail page and extract its description.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn job_description(url: &str, profile: &SiteProfile) -> Result<String, ScrapeError> {
    let body = fetch_text(url).await?;
    let document = Html::parse_document(&body);
    description_text(&document, profile)
}

/// Fetch descriptions for every record, preserving record order.
///
/// Detail pages are fetched a few at a time; a failed fetch aborts the
/// whole request.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub async fn attach_descriptions(
    records: Vec<JobRecord>,
    profile: &SiteProfile,
) -> Result<Vec<JobRecord>, ScrapeError> {
    let records: Vec<JobRecord> = stream::iter(records)
        .map(|mut job| async move {
            let description = job_description(&job.url, profile).await?;
            job.description = Some(description);
            Ok::<JobRecord, ScrapeError>(job)
        })
        .buffered(DETAIL_FETCH_CONCURRENCY)
        .try_collect()
        .await?;

    info!(count = records.len(), "Fetched job descriptions");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::Site;

    #[test]
    fn test_indeed_search_url() {
        let query = JobQuery::new("dublin", "ireland", "python,django");
        let url = search_url(Site::Indeed.profile(), &query);
        assert_eq!(
            url,
            "https://ie.indeed.com/jobs?q=python+django&l=dublin%2Cireland"
        );
    }

    #[test]
    fn test_monster_search_url() {
        let query = JobQuery::new("dublin", "ie", "python,django");
        let url = search_url(Site::Monster.profile(), &query);
        assert_eq!(
            url,
            "https://www.monster.ie/jobs/search/?q=python+django&where=dublin&cy=ie"
        );
    }

    #[test]
    fn test_single_keyword_is_passed_through() {
        let query = JobQuery::new("dublin", "ireland", "python");
        let url = search_url(Site::Indeed.profile(), &query);
        assert!(url.contains("q=python&"));
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let query = JobQuery::new("new york", "u&s", "c++, .net");
        let url = search_url(Site::Indeed.profile(), &query);
        assert!(url.contains("q=c%2B%2B+.net"));
        assert!(url.contains("l=new%20york%2Cu%26s"));
        assert!(!url.contains("new york"));
    }

    #[test]
    fn test_no_results_marker_present() {
        let document = Html::parse_document(
            r#"<div class="bad_query">Nothing matched your search.</div>"#,
        );
        assert!(no_results_marker(&document, Site::Indeed.profile()).unwrap());
    }

    #[test]
    fn test_no_results_marker_absent() {
        let document = Html::parse_document(r#"<div id="resultsCol"></div>"#);
        assert!(!no_results_marker(&document, Site::Indeed.profile()).unwrap());
    }

    #[test]
    fn test_description_text_extracted() {
        let document = Html::parse_document(
            r#"<div id="jobDescriptionText">Ship Python services.</div>"#,
        );
        let description = description_text(&document, Site::Indeed.profile()).unwrap();
        assert_eq!(description, "Ship Python services.");
    }

    #[test]
    fn test_description_falls_back_when_selector_misses() {
        let document = Html::parse_document("<main><p>Job gone.</p></main>");
        let description = description_text(&document, Site::Indeed.profile()).unwrap();
        assert_eq!(description, NO_DESCRIPTION);
    }

    #[test]
    fn test_monster_description_selector() {
        let document = Html::parse_document(
            r#"<div name="sanitizedHtml">You will build Django apps.</div>"#,
        );
        let description = description_text(&document, Site::Monster.profile()).unwrap();
        assert_eq!(description, "You will build Django apps.");
    }
}
