//! Animepack: Anime Catalog Bundling CLI
//!
//! A command-line tool that turns a flat anime catalog CSV into a compact,
//! self-contained JSON bundle with pre-aggregated chart statistics.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::collections::HashMap;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use pipeline::{
    clean_records, enrich_records, episode_stats, genre_stats, load_records, select_top_rated,
};
use report::{package, write_bundle, RunSummary};
use utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
    print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let run_start = Instant::now();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.output, cli.top, &cli.source_label);

    // Step 1: Load raw rows
    print_step_header(1, "Load Catalog");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading catalog CSV...");
    let loaded = load_records(&cli.input)?;
    if loaded.skipped > 0 {
        finish_with_warning(
            &spinner,
            &format!(
                "Loaded {} rows ({} unreadable record(s) skipped)",
                loaded.records.len(),
                loaded.skipped
            ),
        );
    } else {
        finish_with_success(&spinner, &format!("Loaded {} rows", loaded.records.len()));
    }
    print_step_time(step_start.elapsed());

    let input_rows = loaded.records.len();
    let skipped_rows = loaded.skipped;

    // Step 2: Clean rows
    print_step_header(2, "Clean Rows");

    let step_start = Instant::now();
    let (cleaned, clean_stats) = clean_records(loaded.records);
    if clean_stats.dropped() == 0 {
        print_info("No rows dropped during cleaning");
    } else {
        print_count(
            "row(s) dropped",
            clean_stats.dropped(),
            Some(&format!(
                "({} missing/invalid score, {} empty genres)",
                clean_stats.dropped_score, clean_stats.dropped_genres
            )),
        );
    }
    print_success(&format!(
        "{} of {} rows have a valid score and genres",
        cleaned.len(),
        clean_stats.input_rows
    ));
    print_step_time(step_start.elapsed());

    // Step 3: Enrich rows
    print_step_header(3, "Derive Genres & Episode Ranges");

    let step_start = Instant::now();
    let (items, dropped_enrich) = enrich_records(cleaned);
    if dropped_enrich > 0 {
        print_count("row(s) dropped for an empty primary genre", dropped_enrich, None);
    }

    let mut genre_counts: HashMap<&str, usize> = HashMap::new();
    for item in &items {
        *genre_counts.entry(item.primary_genre.as_str()).or_default() += 1;
    }
    print_success(&format!("Found {} unique primary genres", genre_counts.len()));

    let mut distribution: Vec<(&str, usize)> = genre_counts.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (genre, count) in distribution.iter().take(5) {
        println!("      • {}: {} anime", genre, count);
    }
    print_step_time(step_start.elapsed());

    // Step 4: Select top rated
    print_step_header(4, "Select Top Rated");

    let step_start = Instant::now();
    let selection = select_top_rated(items, cli.top);
    if selection.shortfall() > 0 {
        print_warning(&format!(
            "Only {} of the requested {} rows survived cleaning; bundling all of them",
            selection.available, selection.requested
        ));
    } else {
        print_success(&format!("Selected top {} anime by score", selection.items.len()));
    }
    if let (Some(first), Some(last)) = (selection.items.first(), selection.items.last()) {
        print_info(&format!("Score range: {:.2} - {:.2}", last.score, first.score));
    }
    print_step_time(step_start.elapsed());

    // Step 5: Aggregate statistics
    print_step_header(5, "Pre-calculate Statistics");

    let step_start = Instant::now();
    let genres = genre_stats(&selection.items);
    let episodes = episode_stats(&selection.items);
    print_success(&format!(
        "Calculated stats for {} genres and {} episode ranges",
        genres.len(),
        episodes.len()
    ));
    if let (Some(label), Some(score)) = (genres.labels.first(), genres.scores.first()) {
        print_info(&format!("Top genre by score: {} ({:.2})", label, score));
    }
    print_step_time(step_start.elapsed());

    // Step 6: Package and write
    print_step_header(6, "Write Bundle");

    let step_start = Instant::now();
    let spinner = create_spinner("Serializing compact JSON...");
    let summary_counts = (genres.len(), episodes.len());
    let bundle = package(&selection, genres, episodes, &cli.source_label);
    let bytes = write_bundle(&bundle, &cli.output)?;
    finish_with_success(
        &spinner,
        &format!("Saved {:.1} KB to {}", bytes as f64 / 1024.0, cli.output.display()),
    );
    print_step_time(step_start.elapsed());

    // Display summary
    let summary = RunSummary {
        input_rows,
        skipped_rows,
        dropped_rows: clean_stats.dropped() + dropped_enrich,
        selected: selection.items.len(),
        requested: selection.requested,
        genre_count: summary_counts.0,
        range_count: summary_counts.1,
        output_bytes: bytes,
        elapsed: run_start.elapsed(),
    };
    summary.display();

    print_completion(&cli.output);

    Ok(())
}
