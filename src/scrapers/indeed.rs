//! Indeed (ie.indeed.com) job-card extractor.
//!
//! Indeed's search results render each listing as a
//! `.jobsearch-SerpJobCard` element. Job links are relative
//! (`/rc/clk?jk=...`), so every extracted href is joined against the site
//! base URL before it lands in a record.

use scraper::ElementRef;
use tracing::{debug, info, instrument};
use url::Url;

use crate::dom::{DomQuery, attr_of, parse_selector, text_of};
use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::sites::SiteProfile;

const TITLE: &str = ".title .jobtitle";
const COMPANY: &str = ".sjcl .company";
const LINK: &str = ".jobtitle";

/// Extract a record from every job card inside the results container.
#[instrument(level = "info", skip_all)]
pub fn collect_cards(
    results: ElementRef<'_>,
    profile: &SiteProfile,
) -> Result<Vec<JobRecord>, ScrapeError> {
    let card_selector = parse_selector(profile.cards)?;
    let title_selector = parse_selector(TITLE)?;
    let company_selector = parse_selector(COMPANY)?;
    let link_selector = parse_selector(LINK)?;
    let base = Url::parse(profile.base_url)?;

    let mut jobs = Vec::new();
    for card in results.find_all(&card_selector) {
        let title = card
            .find_first(&title_selector)
            .map(text_of)
            .ok_or(ScrapeError::MissingElement {
                field: "title",
                selector: TITLE,
            })?;
        let company = card
            .find_first(&company_selector)
            .map(text_of)
            .ok_or(ScrapeError::MissingElement {
                field: "company",
                selector: COMPANY,
            })?;
        let href = card
            .find_first(&link_selector)
            .and_then(|link| attr_of(link, "href"))
            .ok_or(ScrapeError::MissingElement {
                field: "url",
                selector: LINK,
            })?;
        let url = base.join(href)?.to_string();

        debug!(%title, %company, %url, "Extracted Indeed job card");
        jobs.push(JobRecord {
            title,
            company,
            url,
            description: None,
        });
    }

    info!(count = jobs.len(), "Collected Indeed job cards");
    Ok(jobs)
}
