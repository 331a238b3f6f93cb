pub mod embedded;
pub mod external;

pub use embedded::EmbeddedSource;
pub use external::ExternalGit;

use crate::error::{BurnrateError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::ValueEnum;
use std::path::Path;

/// Which history backend to use. `Auto` prefers the embedded gix
/// library, which is always compiled in; `Git` shells out to the git
/// binary and fails at selection time when it is not on PATH.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum Backend {
    #[default]
    Auto,
    Gix,
    Git,
}

/// A source of commit history: ensures a local working copy exists and
/// enumerates `(author, timestamp)` records from one branch's history.
/// Enumeration order is whatever the backend emits; aggregation is
/// order-independent.
pub trait HistorySource {
    fn name(&self) -> &'static str;

    /// Clone the repository into `path` if the directory is absent.
    /// An existing directory is reused as-is, with no fetch or pull.
    fn ensure_local(&self, url: &str, path: &Path) -> Result<()>;

    fn commits(&self, path: &Path) -> Result<Vec<CommitRecord>>;
}

/// Capability check, run once at startup. The backend is fixed for the
/// whole invocation; nothing downstream inspects it again.
pub fn select(backend: Backend) -> Result<Box<dyn HistorySource>> {
    match backend {
        Backend::Auto | Backend::Gix => Ok(Box::new(EmbeddedSource)),
        Backend::Git => {
            if external::git_available() {
                Ok(Box::new(ExternalGit))
            } else {
                Err(BurnrateError::Environment(
                    "git executable not found on PATH".to_string(),
                ))
            }
        }
    }
}

/// Clone-if-absent, enumerate, and apply the `since` filter.
///
/// `since` is an inclusive lower bound: commits timestamped at or after
/// local midnight of the given date are kept. The filter is applied
/// here, identically for both backends, rather than being pushed down
/// into the underlying tool.
pub fn collect_records(
    source: &dyn HistorySource,
    url: &str,
    path: &Path,
    since: Option<NaiveDate>,
) -> Result<Vec<CommitRecord>> {
    source.ensure_local(url, path)?;
    let mut records = source.commits(path)?;
    if let Some(date) = since {
        let cutoff = local_midnight(date)?;
        records.retain(|r| r.timestamp >= cutoff);
    }
    Ok(records)
}

fn local_midnight(date: NaiveDate) -> Result<DateTime<Local>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| BurnrateError::InvalidDate(format!("Invalid date: {date}")))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| BurnrateError::InvalidDate(format!("No local midnight on {date}")))
}
