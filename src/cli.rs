//! Command-line interface definitions for Jobscrape.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. Most options can be provided via command-line flags or
//! environment variables.

use clap::Parser;
use jobscrape::Site;

/// Command-line arguments for the Jobscrape application.
///
/// Defaults reproduce the classic search: Python/Django jobs in Dublin
/// across both supported sites, with the country adjusted per site
/// (Indeed expects `ireland`, Monster expects `ie`).
///
/// # Examples
///
/// ```sh
/// # Search both sites with the defaults
/// jobscrape
///
/// # One site, custom keywords, descriptions included
/// jobscrape --site indeed --keywords rust,tokio --descriptions
///
/// # Machine-readable output
/// jobscrape --json --all
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Job site to search; repeat for several (monster, indeed)
    #[arg(short, long = "site", value_name = "SITE",
          default_values_t = [Site::Indeed, Site::Monster])]
    pub sites: Vec<Site>,

    /// City to search in
    #[arg(long, env = "JOBSCRAPE_CITY", default_value = "dublin")]
    pub city: String,

    /// Country override; when absent, each site uses its own default
    #[arg(long, env = "JOBSCRAPE_COUNTRY")]
    pub country: Option<String>,

    /// Comma-separated search keywords
    #[arg(short, long, env = "JOBSCRAPE_KEYWORDS", default_value = "python,django")]
    pub keywords: String,

    /// Fetch each job's detail page for its description text
    #[arg(short, long)]
    pub descriptions: bool,

    /// Report every extracted job instead of just the first per site
    #[arg(short, long)]
    pub all: bool,

    /// Print results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["jobscrape"]);

        assert_eq!(cli.sites, vec![Site::Indeed, Site::Monster]);
        assert_eq!(cli.city, "dublin");
        assert_eq!(cli.country, None);
        assert_eq!(cli.keywords, "python,django");
        assert!(!cli.descriptions);
        assert!(!cli.all);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_site_selection() {
        let cli = Cli::parse_from(["jobscrape", "--site", "monster"]);
        assert_eq!(cli.sites, vec![Site::Monster]);
    }

    #[test]
    fn test_cli_site_is_case_insensitive() {
        let cli = Cli::parse_from(["jobscrape", "-s", "Indeed"]);
        assert_eq!(cli.sites, vec![Site::Indeed]);
    }

    #[test]
    fn test_cli_rejects_unknown_site() {
        assert!(Cli::try_parse_from(["jobscrape", "--site", "linkedin"]).is_err());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["jobscrape", "-k", "rust,tokio", "-d", "-a"]);
        assert_eq!(cli.keywords, "rust,tokio");
        assert!(cli.descriptions);
        assert!(cli.all);
    }
}
