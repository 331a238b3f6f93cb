use crate::model::{AuthorStats, BurnoutOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn output_json(
    rows: &[AuthorStats],
    repo_url: &str,
    local_path: &Path,
    since: Option<&str>,
) -> Result<()> {
    let output = BurnoutOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repo_url.to_string(),
        local_path: local_path.to_string_lossy().to_string(),
        since: since.map(str::to_string),
        authors: rows.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(rows: &[AuthorStats]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_table(rows: &[AuthorStats]) -> Result<()> {
    println!(
        "{} {} {} {}",
        style("Author").bold(),
        style("Rate").bold(),
        style("Total").bold(),
        style("Index").bold()
    );
    for row in rows {
        println!("{} {} {} {}", row.author, row.rate, row.total, row.index);
    }
    Ok(())
}
