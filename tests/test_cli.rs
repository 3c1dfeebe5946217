//! Tests for CLI argument parsing and the installed binary

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use std::path::PathBuf;

use animepack::cli::Cli;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["animepack"]);

    assert_eq!(cli.input, PathBuf::from("top_15000_anime.csv"));
    assert_eq!(cli.output, PathBuf::from("anime_data_optimized.json"));
    assert_eq!(cli.top, 2000, "Default selection size should be 2000");
    assert_eq!(cli.source_label, "Kaggle - Top 15,000 Ranked Anime Dataset");
}

#[test]
fn test_cli_custom_values() {
    let cli = Cli::parse_from([
        "animepack",
        "-i",
        "catalog.csv",
        "-o",
        "bundle.json",
        "-n",
        "500",
        "--source-label",
        "My Export",
    ]);

    assert_eq!(cli.input, PathBuf::from("catalog.csv"));
    assert_eq!(cli.output, PathBuf::from("bundle.json"));
    assert_eq!(cli.top, 500);
    assert_eq!(cli.source_label, "My Export");
}

#[test]
fn test_binary_produces_bundle() {
    let (_dir, input) = common::write_catalog_csv(&[
        "Cowboy Bebop,\"Action, Sci-Fi\",8.75,26,1800000",
        "Monster,\"Drama, Mystery\",8.88,74,1100000",
        "Bad Row,,1.0,1,1",
    ]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("bundle.json");

    Command::cargo_bin("animepack")
        .unwrap()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-n")
        .arg("10")
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["anime"].as_array().unwrap().len(), 2);
    assert_eq!(value["metadata"]["totalAnime"], 2);
}

#[test]
fn test_binary_fails_on_missing_input() {
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("bundle.json");

    Command::cargo_bin("animepack")
        .unwrap()
        .arg("-i")
        .arg("/nonexistent/catalog.csv")
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not readable"));

    assert!(!output.exists(), "no partial output on fatal error");
}

#[test]
fn test_binary_fails_on_missing_column() {
    let (_dir, input) = common::write_csv("name,score", &["A,9.0"]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("bundle.json");

    Command::cargo_bin("animepack")
        .unwrap()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("genres"));

    assert!(!output.exists());
}
