use super::HistorySource;
use crate::error::{BurnrateError, Result};
use crate::model::CommitRecord;
use chrono::{Local, TimeZone};
use std::path::Path;
use std::process::Command;

/// History backend that shells out to the git binary: `git clone` for
/// the working copy, `git log --pretty=format:%an|%ct` for the history.
pub struct ExternalGit;

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

impl HistorySource for ExternalGit {
    fn name(&self) -> &'static str {
        "git"
    }

    fn ensure_local(&self, url: &str, path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        eprintln!("Cloning {url} into {} ...", path.display());

        let status = Command::new("git").arg("clone").arg(url).arg(path).status()?;
        if !status.success() {
            return Err(BurnrateError::Clone(format!(
                "git clone exited with {status}"
            )));
        }
        Ok(())
    }

    fn commits(&self, path: &Path) -> Result<Vec<CommitRecord>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["log", "--pretty=format:%an|%ct"])
            .output()?;
        if !output.status.success() {
            return Err(BurnrateError::Repo(format!(
                "git log exited with {}",
                output.status
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let mut records = Vec::new();
        for line in text.lines() {
            records.push(parse_log_line(line)?);
        }
        Ok(records)
    }
}

// Split on the last '|' so author names containing pipes still parse;
// the epoch field can never contain one.
fn parse_log_line(line: &str) -> Result<CommitRecord> {
    let (author, epoch) = line
        .rsplit_once('|')
        .ok_or_else(|| BurnrateError::Parse(format!("Malformed log line: {line}")))?;
    let secs: i64 = epoch
        .trim()
        .parse()
        .map_err(|_| BurnrateError::Parse(format!("Non-numeric timestamp in log line: {line}")))?;
    let timestamp = Local
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| BurnrateError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

    Ok(CommitRecord {
        author: author.to_string(),
        timestamp,
    })
}
