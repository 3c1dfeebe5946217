//! Final bundle assembly
//!
//! Pure data assembly: selected items reduced to short-keyed entries, the
//! two pre-aggregated tables, and run metadata. The short field names are
//! the wire contract with the dashboard client, not an internal choice.

use chrono::Local;
use serde::Serialize;

use crate::pipeline::select::Selection;
use crate::pipeline::stats::StatsTable;

/// Textual format of the `generatedAt` metadata field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One selected anime in short-key wire form.
#[derive(Debug, Clone, Serialize)]
pub struct AnimeEntry {
    /// name
    pub n: String,
    /// primary genre
    pub g: String,
    /// score, 2 decimal places
    pub s: f64,
    /// episode count
    pub e: u32,
    /// member count
    pub m: u64,
    /// episode range label
    pub r: &'static str,
}

/// Run metadata embedded in the bundle.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    #[serde(rename = "totalAnime")]
    pub total_anime: usize,
    #[serde(rename = "totalGenres")]
    pub total_genres: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    #[serde(rename = "sourceDataset")]
    pub source_dataset: String,
}

/// The complete output artifact, written once per run.
#[derive(Debug, Clone, Serialize)]
pub struct DataBundle {
    pub anime: Vec<AnimeEntry>,
    #[serde(rename = "genreStats")]
    pub genre_stats: StatsTable,
    #[serde(rename = "episodeStats")]
    pub episode_stats: StatsTable,
    pub metadata: Metadata,
}

/// Assemble the bundle from the selection and its aggregate tables.
pub fn package(
    selection: &Selection,
    genre_stats: StatsTable,
    episode_stats: StatsTable,
    source_label: &str,
) -> DataBundle {
    let anime: Vec<AnimeEntry> = selection
        .items
        .iter()
        .map(|item| AnimeEntry {
            n: item.name.clone(),
            g: item.primary_genre.clone(),
            s: item.score,
            e: item.episodes,
            m: item.members,
            r: item.range.label(),
        })
        .collect();

    let metadata = Metadata {
        total_anime: anime.len(),
        total_genres: genre_stats.len(),
        generated_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        source_dataset: source_label.to_string(),
    };

    DataBundle {
        anime,
        genre_stats,
        episode_stats,
        metadata,
    }
}
