use crate::error::{BurnrateError, Result};
use crate::report;
use crate::source::{self, Backend};
use crate::stats;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

pub const DEFAULT_REPO_URL: &str = "https://git.entrouvert.org/entrouvert/passerelle.git";
pub const DEFAULT_REPO_NAME: &str = "passerelle_repo";

static SINCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static REPO_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://[\w.\-]+/[\w.\-]+/[\w.\-]+\.git$").unwrap());
static REPO_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\-]+$").unwrap());

#[derive(Parser)]
#[command(name = "burnrate")]
#[command(about = "Rank contributors by off-hours commit activity")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Start date for commit retrieval (YYYY-MM-DD, inclusive)")]
    pub since: Option<String>,

    #[arg(long, default_value = DEFAULT_REPO_URL, help = "HTTPS git repository URL")]
    pub repo_url: String,

    #[arg(
        long,
        default_value = DEFAULT_REPO_NAME,
        help = "Local folder name for the cloned repository (letters, digits, dashes, underscores)"
    )]
    pub repo_name: String,

    #[arg(long, value_enum, default_value_t = Backend::Auto, help = "History backend")]
    pub backend: Backend,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> anyhow::Result<()> {
        // All flag validation happens before any filesystem or network
        // access; a bad value aborts with nothing cloned.
        let since = self.since.as_deref().map(validate_since).transpose()?;
        validate_repo_url(&self.repo_url)?;
        validate_repo_name(&self.repo_name)?;
        let local_path = PathBuf::from(".").join(&self.repo_name);

        let source = source::select(self.backend)?;
        let records = source::collect_records(source.as_ref(), &self.repo_url, &local_path, since)
            .context("Failed to collect commit history")?;
        let rows = stats::aggregate(&records);

        if self.json {
            report::output_json(&rows, &self.repo_url, &local_path, self.since.as_deref())?;
        } else if self.ndjson {
            report::output_ndjson(&rows)?;
        } else {
            report::output_table(&rows)?;
        }

        Ok(())
    }
}

pub fn validate_since(since: &str) -> Result<NaiveDate> {
    if !SINCE_RE.is_match(since) {
        return Err(BurnrateError::Validation(format!(
            "Invalid date format for --since: {since}. Expected YYYY-MM-DD."
        )));
    }
    NaiveDate::parse_from_str(since, "%Y-%m-%d").map_err(|_| {
        BurnrateError::Validation(format!("Invalid calendar date for --since: {since}"))
    })
}

pub fn validate_repo_url(url: &str) -> Result<()> {
    if !REPO_URL_RE.is_match(url) {
        return Err(BurnrateError::Validation(format!(
            "Invalid repository URL: {url}"
        )));
    }
    Ok(())
}

pub fn validate_repo_name(name: &str) -> Result<()> {
    if !REPO_NAME_RE.is_match(name) {
        return Err(BurnrateError::Validation(format!(
            "Unsafe repository name: {name}"
        )));
    }
    Ok(())
}
