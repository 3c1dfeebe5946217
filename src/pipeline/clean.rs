//! Row cleaning: drop unusable rows, default the optional numeric fields
//!
//! This stage is a filter, not a validator. A row that fails the rules is
//! dropped silently; only the aggregate counts in [`CleanStats`] are
//! surfaced to the operator.

use crate::pipeline::loader::RawRecord;

/// A row that survived cleaning. Score is guaranteed finite and positive,
/// genres non-empty; episodes and members default to 0.
#[derive(Debug, Clone)]
pub struct CleanRecord {
    pub name: String,
    pub genres: String,
    pub score: f64,
    pub episodes: u32,
    pub members: u64,
}

/// Aggregate outcome of the cleaning pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanStats {
    /// Rows fed into the cleaner
    pub input_rows: usize,
    /// Rows dropped for a missing or non-positive score
    pub dropped_score: usize,
    /// Rows dropped for an absent or empty genre list
    pub dropped_genres: usize,
}

impl CleanStats {
    /// Total rows removed by this stage.
    pub fn dropped(&self) -> usize {
        self.dropped_score + self.dropped_genres
    }
}

/// Keep rows with a parseable positive score and a non-empty genre list;
/// default `episodes` and `members` to 0 when absent or non-numeric.
pub fn clean_records(raw: Vec<RawRecord>) -> (Vec<CleanRecord>, CleanStats) {
    let mut stats = CleanStats {
        input_rows: raw.len(),
        ..Default::default()
    };

    let mut cleaned = Vec::with_capacity(raw.len());
    for record in raw {
        let score = match parse_score(record.score.as_deref()) {
            Some(s) => s,
            None => {
                stats.dropped_score += 1;
                continue;
            }
        };

        let genres = match record.genres {
            Some(g) if !g.trim().is_empty() => g,
            _ => {
                stats.dropped_genres += 1;
                continue;
            }
        };

        cleaned.push(CleanRecord {
            name: record.name.unwrap_or_default(),
            genres,
            score,
            episodes: parse_count(record.episodes.as_deref()).min(u64::from(u32::MAX)) as u32,
            members: parse_count(record.members.as_deref()),
        });
    }

    (cleaned, stats)
}

fn parse_score(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse an integer-like count field, accepting decimal forms such as
/// `"12.0"`. Absent, negative, or unparseable values become 0.
fn parse_count(raw: Option<&str>) -> u64 {
    let Some(text) = raw else { return 0 };
    let text = text.trim();
    if let Ok(n) = text.parse::<u64>() {
        return n;
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        _ => 0,
    }
}
