//! Binary entry point for the job search CLI.
//!
//! Searches each requested site in turn and prints a per-site report of
//! the extracted listings, either as text or as JSON. A failed site is
//! reported and counted, never silently dropped; the process exits
//! non-zero when any site's search failed.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use jobscrape::{JobQuery, JobRecord, Site, get_jobs};

mod cli;
use cli::Cli;

/// Country each site expects when the caller does not override it.
///
/// These mirror the sites' own query conventions: Indeed's location
/// parameter takes the country name, Monster's takes the country code.
fn default_country(site: Site) -> &'static str {
    match site {
        Site::Indeed => "ireland",
        Site::Monster => "ie",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("jobscrape starting up");

    let args = Cli::parse();
    debug!(?args.sites, ?args.city, ?args.keywords, "Parsed CLI arguments");

    let mut json_report = serde_json::Map::new();
    let mut failed_sites = 0usize;

    for site in args.sites.iter().copied() {
        let country = args
            .country
            .clone()
            .unwrap_or_else(|| default_country(site).to_string());
        let query = JobQuery::new(args.city.clone(), country, args.keywords.clone());

        match get_jobs(site, &query, args.descriptions).await {
            Ok(outcome) => {
                if args.json {
                    json_report.insert(
                        site.name().to_string(),
                        serde_json::to_value(outcome.records())?,
                    );
                } else {
                    print_report(site, outcome.records(), args.all);
                }
            }
            Err(e) => {
                failed_sites += 1;
                error!(site = %site, error = %e, "Search failed");
                if !args.json {
                    println!("{site} search failed: {e}");
                    println!("------------------------------------------");
                }
            }
        }
    }

    if args.json {
        let report = serde_json::Value::Object(json_report);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, failed_sites, "Execution complete");

    if failed_sites > 0 {
        return Err(format!("{failed_sites} site search(es) failed").into());
    }
    Ok(())
}

/// Print the text report for one site's results.
fn print_report(site: Site, jobs: &[JobRecord], all: bool) {
    if jobs.is_empty() {
        println!("No {site} jobs matched the query.");
    } else if all {
        println!("All {site} jobs:");
        for (i, job) in jobs.iter().enumerate() {
            println!("--- {} ---", i + 1);
            print_job(job);
        }
    } else {
        println!("First {site} job:");
        print_job(&jobs[0]);
    }
    println!("------------------------------------------");
}

fn print_job(job: &JobRecord) {
    println!("Job Title: {}", job.title);
    println!("Company: {}", job.company);
    println!("URL: {}", job.url);
    if let Some(description) = &job.description {
        println!("Description: {description}");
    }
}
