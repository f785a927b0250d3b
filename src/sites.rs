//! The static registry of supported job sites.
//!
//! Each supported site is described by a [`SiteProfile`]: its base URL, a
//! query-string template with `{keywords}`, `{city}` and `{country}`
//! placeholders, and the four CSS selectors the extractors need. Profiles
//! are fixed at compile time and never mutated; lookup is a linear scan
//! over the registry, which is small enough that nothing faster is worth
//! having.

use std::fmt;
use std::str::FromStr;

use crate::error::ScrapeError;

/// A supported job site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// monster.ie
    Monster,
    /// ie.indeed.com
    Indeed,
}

/// How to query and parse one job site.
///
/// The four selectors locate, in order: the results container on a search
/// page, the marker element the site renders when nothing matched, the
/// individual job cards inside the results container, and the description
/// text node on a job's detail page.
#[derive(Debug)]
pub struct SiteProfile {
    /// Which site this profile describes.
    pub site: Site,
    /// Scheme + host (+ path prefix) that search queries are appended to.
    pub base_url: &'static str,
    /// Query-string template with `{keywords}`, `{city}` and `{country}`
    /// placeholders.
    pub query_format: &'static str,
    /// Selector for the search results container.
    pub results: &'static str,
    /// Selector for the "no results" marker.
    pub not_found: &'static str,
    /// Selector for one job card within the results container.
    pub cards: &'static str,
    /// Selector for the description text on a job's detail page.
    pub desc_text: &'static str,
}

static PROFILES: &[SiteProfile] = &[
    SiteProfile {
        site: Site::Monster,
        base_url: "https://www.monster.ie/jobs/search/",
        query_format: "?q={keywords}&where={city}&cy={country}",
        results: "#ResultsContainer",
        not_found: ".pivot.block",
        cards: ".card-content .summary",
        desc_text: r#"[name="sanitizedHtml"]"#,
    },
    SiteProfile {
        site: Site::Indeed,
        base_url: "https://ie.indeed.com",
        query_format: "/jobs?q={keywords}&l={city}%2C{country}",
        results: "#resultsCol",
        not_found: ".bad_query",
        cards: ".jobsearch-SerpJobCard",
        desc_text: "#jobDescriptionText",
    },
];

impl Site {
    /// Every supported site, in registry order.
    pub const ALL: [Site; 2] = [Site::Monster, Site::Indeed];

    /// The lowercase identifier this site is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Site::Monster => "monster",
            Site::Indeed => "indeed",
        }
    }

    /// Look up this site's profile in the registry.
    pub fn profile(self) -> &'static SiteProfile {
        PROFILES
            .iter()
            .find(|profile| profile.site == self)
            .expect("every Site variant has a registry entry")
    }

    /// Resolve a site identifier, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::UnsupportedSite`] for identifiers not in the
    /// registry. This check runs before any network traffic.
    pub fn from_name(name: &str) -> Result<Site, ScrapeError> {
        let lowered = name.to_lowercase();
        PROFILES
            .iter()
            .map(|profile| profile.site)
            .find(|site| site.name() == lowered)
            .ok_or(ScrapeError::UnsupportedSite {
                name: name.to_string(),
            })
    }
}

impl FromStr for Site {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Site::from_name(s)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
