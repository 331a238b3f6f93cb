use crate::hours::is_off_hours;
use crate::ident::normalize_author;
use crate::model::{AuthorStats, CommitRecord};
use std::collections::HashMap;

struct AuthorAccum {
    total: u64,
    off_hours: u64,
}

/// Reduce a commit stream into per-author burnout statistics, ranked by
/// descending index. One pass to accumulate counts keyed by the
/// normalized author name, then a finalization pass for rate and index.
pub fn aggregate(records: &[CommitRecord]) -> Vec<AuthorStats> {
    let mut authors: HashMap<String, AuthorAccum> = HashMap::new();

    for record in records {
        let key = normalize_author(&record.author);
        let entry = authors
            .entry(key)
            .or_insert(AuthorAccum { total: 0, off_hours: 0 });
        entry.total += 1;
        if is_off_hours(&record.timestamp) {
            entry.off_hours += 1;
        }
    }

    finalize(authors)
}

fn finalize(authors: HashMap<String, AuthorAccum>) -> Vec<AuthorStats> {
    // Mean of off-hours counts across authors, unweighted by total
    // commits. The index compares each author against this mean;
    // 1.0 means average. A zero mean (nobody commits off-hours)
    // yields index 0 for everyone instead of a division by zero.
    let mean = if authors.is_empty() {
        0.0
    } else {
        authors.values().map(|a| a.off_hours as f64).sum::<f64>() / authors.len() as f64
    };

    let mut rows: Vec<AuthorStats> = authors
        .into_iter()
        .map(|(author, accum)| AuthorStats {
            rate: round2(accum.off_hours as f64 / accum.total as f64),
            index: if mean == 0.0 {
                0.0
            } else {
                round2(accum.off_hours as f64 / mean)
            },
            total: accum.total,
            off_hours: accum.off_hours,
            author,
        })
        .collect();

    rows.sort_by(|a, b| b.index.partial_cmp(&a.index).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
