use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as seen by the aggregation pipeline: who, and when in
/// local time. Everything else about the commit is irrelevant here.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub author: String,
    pub timestamp: DateTime<Local>,
}

/// Per-author totals after aggregation. `author` is the normalized key,
/// not the raw spelling. `off_hours <= total` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub author: String,
    pub total: u64,
    pub off_hours: u64,
    pub rate: f64,
    pub index: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnoutOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub local_path: String,
    pub since: Option<String>,
    pub authors: Vec<AuthorStats>,
}
