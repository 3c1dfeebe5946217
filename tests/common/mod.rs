//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use animepack::pipeline::{AnimeItem, CleanRecord, EpisodeRange};
use tempfile::TempDir;

/// Write a CSV file with the given header and data lines into a fresh
/// temp directory. The directory must outlive the returned path.
pub fn write_csv(header: &str, lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", header).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    drop(file);
    (dir, path)
}

/// Write a catalog CSV with the standard five-column header.
pub fn write_catalog_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    write_csv("name,genres,score,episodes,members", lines)
}

/// Build a cleaned record for enrichment tests.
pub fn clean_record(name: &str, genres: &str, score: f64, episodes: u32) -> CleanRecord {
    CleanRecord {
        name: name.to_string(),
        genres: genres.to_string(),
        score,
        episodes,
        members: 1000,
    }
}

/// Build an enriched item for selection/aggregation tests.
pub fn item(name: &str, genre: &str, score: f64, episodes: u32) -> AnimeItem {
    AnimeItem {
        name: name.to_string(),
        primary_genre: genre.to_string(),
        score,
        episodes,
        members: 1000,
        range: EpisodeRange::from_episodes(episodes),
    }
}
