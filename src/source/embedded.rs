use super::HistorySource;
use crate::error::{BurnrateError, Result};
use crate::model::CommitRecord;
use chrono::{Local, TimeZone};
use gix::ObjectId;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::sync::atomic::AtomicBool;

/// History backend built on the embedded gix library. No external
/// processes are involved, for cloning or for reading the log.
pub struct EmbeddedSource;

impl HistorySource for EmbeddedSource {
    fn name(&self) -> &'static str {
        "gix"
    }

    fn ensure_local(&self, url: &str, path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        eprintln!("Cloning {url} into {} ...", path.display());

        let interrupt = AtomicBool::new(false);
        let mut prepare = gix::prepare_clone(url, path)
            .map_err(|e| BurnrateError::Clone(e.to_string()))?;
        let (mut checkout, _outcome) = prepare
            .fetch_then_checkout(gix::progress::Discard, &interrupt)
            .map_err(|e| BurnrateError::Clone(e.to_string()))?;
        checkout
            .main_worktree(gix::progress::Discard, &interrupt)
            .map_err(|e| BurnrateError::Clone(e.to_string()))?;
        Ok(())
    }

    fn commits(&self, path: &Path) -> Result<Vec<CommitRecord>> {
        let repo = gix::open(path)?;
        let mut head = repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading history...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = Local
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| BurnrateError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
            let author = commit.author()?.name.to_string();

            records.push(CommitRecord { author, timestamp });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(records)
    }
}
