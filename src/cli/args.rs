//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Animepack - pack an anime catalog CSV into a compact dashboard-ready JSON bundle
#[derive(Parser, Debug)]
#[command(name = "animepack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with one row per anime.
    /// Required columns: name, genres, score. Optional: episodes, members.
    #[arg(short, long, default_value = "top_15000_anime.csv")]
    pub input: PathBuf,

    /// Output path for the compact JSON bundle
    #[arg(short, long, default_value = "anime_data_optimized.json")]
    pub output: PathBuf,

    /// Number of top-rated entries to keep in the bundle.
    /// When fewer rows survive cleaning, all survivors are kept and a
    /// warning is printed.
    #[arg(short = 'n', long, default_value = "2000")]
    pub top: usize,

    /// Source attribution string recorded in the bundle metadata
    #[arg(long, default_value = "Kaggle - Top 15,000 Ranked Anime Dataset")]
    pub source_label: String,
}
