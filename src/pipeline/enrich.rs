//! Row enrichment: primary genre extraction and episode range bucketing

use crate::pipeline::clean::CleanRecord;
use crate::pipeline::stats::round2;

/// Named episode count range. The six ranges are closed on both ends and
/// partition the positive integers; an episode count of 0 means the count
/// is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeRange {
    OneTo12,
    ThirteenTo26,
    TwentySevenTo52,
    FiftyThreeTo100,
    HundredOneTo200,
    Over200,
    Unknown,
}

impl EpisodeRange {
    /// Canonical display order for the range labels.
    pub const CANONICAL: [EpisodeRange; 7] = [
        EpisodeRange::OneTo12,
        EpisodeRange::ThirteenTo26,
        EpisodeRange::TwentySevenTo52,
        EpisodeRange::FiftyThreeTo100,
        EpisodeRange::HundredOneTo200,
        EpisodeRange::Over200,
        EpisodeRange::Unknown,
    ];

    /// Map an episode count to its range. 0 maps to `Unknown`; every
    /// positive count maps to exactly one of the six ranges.
    pub fn from_episodes(episodes: u32) -> Self {
        match episodes {
            0 => EpisodeRange::Unknown,
            1..=12 => EpisodeRange::OneTo12,
            13..=26 => EpisodeRange::ThirteenTo26,
            27..=52 => EpisodeRange::TwentySevenTo52,
            53..=100 => EpisodeRange::FiftyThreeTo100,
            101..=200 => EpisodeRange::HundredOneTo200,
            _ => EpisodeRange::Over200,
        }
    }

    /// Wire label as it appears in the output bundle.
    pub fn label(&self) -> &'static str {
        match self {
            EpisodeRange::OneTo12 => "1-12",
            EpisodeRange::ThirteenTo26 => "13-26",
            EpisodeRange::TwentySevenTo52 => "27-52",
            EpisodeRange::FiftyThreeTo100 => "53-100",
            EpisodeRange::HundredOneTo200 => "101-200",
            EpisodeRange::Over200 => "200+",
            EpisodeRange::Unknown => "Unknown",
        }
    }
}

/// A fully enriched catalog entry, immutable once created.
#[derive(Debug, Clone)]
pub struct AnimeItem {
    pub name: String,
    /// First genre of the comma-separated list, trimmed, never empty
    pub primary_genre: String,
    /// Positive score, rounded to 2 decimal places
    pub score: f64,
    pub episodes: u32,
    pub members: u64,
    pub range: EpisodeRange,
}

/// Derive the primary genre and episode range for each record.
///
/// Rows whose first genre token is empty after trimming (e.g. a genre list
/// of `" , Drama"`) are dropped here; the second return value counts them.
pub fn enrich_records(records: Vec<CleanRecord>) -> (Vec<AnimeItem>, usize) {
    let mut items = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let primary_genre = record
            .genres
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        if primary_genre.is_empty() {
            dropped += 1;
            continue;
        }

        items.push(AnimeItem {
            name: record.name,
            primary_genre,
            score: round2(record.score),
            episodes: record.episodes,
            members: record.members,
            range: EpisodeRange::from_episodes(record.episodes),
        });
    }

    (items, dropped)
}
