//! Monster (monster.ie) job-card extractor.
//!
//! Monster renders each listing as a `.summary` element inside
//! `.card-content`. Job links are usually absolute
//! (`https://job-openings.monster.ie/...`), but anything relative is
//! joined against the site base URL all the same.

use scraper::ElementRef;
use tracing::{debug, info, instrument};
use url::Url;

use crate::dom::{DomQuery, attr_of, parse_selector, text_of};
use crate::error::ScrapeError;
use crate::models::JobRecord;
use crate::sites::SiteProfile;

const TITLE: &str = ".title a";
const COMPANY: &str = ".company .name";
const LINK: &str = ".title a";

/// Extract a record from every job card inside the results container.
#[instrument(level = "info", skip_all)]
pub fn collect_cards(
    results: ElementRef<'_>,
    profile: &SiteProfile,
) -> Result<Vec<JobRecord>, ScrapeError> {
    let card_selector = parse_selector(profile.cards)?;
    let title_selector = parse_selector(TITLE)?;
    let company_selector = parse_selector(COMPANY)?;
    let base = Url::parse(profile.base_url)?;

    let mut jobs = Vec::new();
    for card in results.find_all(&card_selector) {
        let link = card
            .find_first(&title_selector)
            .ok_or(ScrapeError::MissingElement {
                field: "title",
                selector: TITLE,
            })?;
        let title = text_of(link);
        let company = card
            .find_first(&company_selector)
            .map(text_of)
            .ok_or(ScrapeError::MissingElement {
                field: "company",
                selector: COMPANY,
            })?;
        let href = attr_of(link, "href").ok_or(ScrapeError::MissingElement {
            field: "url",
            selector: LINK,
        })?;
        let url = base.join(href)?.to_string();

        debug!(%title, %company, %url, "Extracted Monster job card");
        jobs.push(JobRecord {
            title,
            company,
            url,
            description: None,
        });
    }

    info!(count = jobs.len(), "Collected Monster job cards");
    Ok(jobs)
}
