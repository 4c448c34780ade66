//! Validates command-line parsing against the documented defaults

use clap::Parser;
use sheetsplit::io::cli::Cli;
use sheetsplit::io::configuration::{
    DEFAULT_COLS, DEFAULT_DEDUPE_DISTANCE, DEFAULT_GAP, DEFAULT_MARGIN, DEFAULT_OUTPUT_DIR,
    DEFAULT_ROWS,
};
use sheetsplit::naming::preset::PresetChoice;
use std::path::PathBuf;

// Tests CLI parsing with only the required sheet argument
#[test]
fn test_cli_parse_minimal_args() {
    let args = vec!["sheetsplit", "sheet.png"];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.input, PathBuf::from("sheet.png"));
    assert_eq!(cli.out_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    assert_eq!(cli.rows, DEFAULT_ROWS);
    assert_eq!(cli.cols, DEFAULT_COLS);
    assert_eq!(cli.margin, DEFAULT_MARGIN);
    assert_eq!(cli.gap, DEFAULT_GAP);
    assert_eq!(cli.prefix, "portrait");
    assert_eq!(cli.dedupe_hamming, DEFAULT_DEDUPE_DISTANCE);
    assert_eq!(cli.preset, PresetChoice::None);
    assert!(cli.dedupe_enabled());
    assert!(cli.should_show_progress());
}

// Tests CLI parsing with every option supplied
#[test]
fn test_cli_parse_all_args() {
    let args = vec![
        "sheetsplit",
        "sheet.png",
        "--out-dir",
        "tiles",
        "--rows",
        "3",
        "--cols",
        "5",
        "--margin",
        "0",
        "--gap",
        "2",
        "--prefix",
        "card",
        "--empty-threshold",
        "1.5",
        "--no-dedupe",
        "--dedupe-hamming",
        "9",
        "--preset",
        "officers-4x6",
        "--quiet",
    ];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.out_dir, PathBuf::from("tiles"));
    assert_eq!(cli.rows, 3);
    assert_eq!(cli.cols, 5);
    assert_eq!(cli.margin, 0);
    assert_eq!(cli.gap, 2);
    assert_eq!(cli.prefix, "card");
    assert!((cli.empty_threshold - 1.5).abs() < f64::EPSILON);
    assert_eq!(cli.dedupe_hamming, 9);
    assert_eq!(cli.preset, PresetChoice::Officers4x6);
    assert!(!cli.dedupe_enabled());
    assert!(!cli.should_show_progress());
}

// Tests the underscore alias kept for older invocation scripts
#[test]
fn test_preset_value_alias() {
    let args = vec!["sheetsplit", "sheet.png", "--preset", "officers_4x6"];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.preset, PresetChoice::Officers4x6);
}
