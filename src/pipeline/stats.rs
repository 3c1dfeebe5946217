//! Pre-aggregated statistics over the selected items

use std::collections::BTreeMap;

use serde::Serialize;

use crate::pipeline::enrich::{AnimeItem, EpisodeRange};

/// Parallel label/score/count columns, one entry per group. This is the
/// exact shape the dashboard's chart library consumes.
#[derive(Debug, Clone, Serialize)]
pub struct StatsTable {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
    pub counts: Vec<u64>,
}

impl StatsTable {
    /// Number of groups in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Round to 2 decimal places, half away from zero.
///
/// The rounding mode is pinned deliberately: group means must not depend on
/// the platform or language default (banker's rounding would turn 0.125
/// into 0.12; this gives 0.13).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean score and item count per primary genre, over the selected items.
///
/// Groups are ordered by descending mean score; ties break by descending
/// count, then alphabetically by label.
pub fn genre_stats(items: &[AnimeItem]) -> StatsTable {
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for item in items {
        let entry = groups.entry(&item.primary_genre).or_insert((0.0, 0));
        entry.0 += item.score;
        entry.1 += 1;
    }

    let mut rows: Vec<(String, f64, u64)> = groups
        .into_iter()
        .map(|(label, (sum, count))| (label.to_string(), round2(sum / count as f64), count))
        .collect();

    // Compare rounded means as integer cents for a total order
    rows.sort_by(|a, b| {
        let a_cents = (a.1 * 100.0).round() as i64;
        let b_cents = (b.1 * 100.0).round() as i64;
        b_cents
            .cmp(&a_cents)
            .then(b.2.cmp(&a.2))
            .then(a.0.cmp(&b.0))
    });

    StatsTable {
        labels: rows.iter().map(|r| r.0.clone()).collect(),
        scores: rows.iter().map(|r| r.1).collect(),
        counts: rows.iter().map(|r| r.2).collect(),
    }
}

/// Mean score and item count per episode range, over the selected items.
///
/// Groups follow the canonical range order; ranges with no selected items
/// are omitted, so the counts always sum to the selected total.
pub fn episode_stats(items: &[AnimeItem]) -> StatsTable {
    let mut table = StatsTable {
        labels: Vec::new(),
        scores: Vec::new(),
        counts: Vec::new(),
    };

    for range in EpisodeRange::CANONICAL {
        let mut sum = 0.0;
        let mut count = 0u64;
        for item in items.iter().filter(|i| i.range == range) {
            sum += item.score;
            count += 1;
        }
        if count > 0 {
            table.labels.push(range.label().to_string());
            table.scores.push(round2(sum / count as f64));
            table.counts.push(count);
        }
    }

    table
}
